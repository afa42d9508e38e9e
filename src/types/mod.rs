pub mod cancel;
pub mod contact;
pub mod document;
pub mod errors;
pub mod import;
