pub mod importer;
pub mod merger;
pub mod names;
pub mod normalizer;
pub mod query;
pub mod rebook;
pub mod resolver;
pub mod scorer;
