//! Bulk course-member import engine.
//!
//! Resolves free-text participant names against a remote contact directory
//! (fuzzy, precision-over-recall), drives a strictly sequential import of the
//! resolved contacts into a stateful member form, and upgrades single-term
//! directory search into multi-term name-aware search.
//!
//! Transport, DOM handling and spreadsheet parsing stay outside this crate;
//! they plug in through the collaborator traits in [`services`].

pub mod services;
pub mod types;
