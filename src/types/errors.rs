//! Error contracts shared across the services.

use thiserror::Error;

/// Failure of a directory search or of a resolution built on top of it.
///
/// `Cancelled` is deliberately its own variant: the import loop must stop on
/// it, while every other failure degrades to a not-found report entry.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search cancelled")]
    Cancelled,
    #[error("directory search failed: {0}")]
    Provider(#[from] anyhow::Error),
    #[error("malformed directory response: {0}")]
    MalformedResponse(String),
}

impl SearchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SearchError::Cancelled)
    }
}

/// Failure while validating or submitting a rebook document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document has no lines")]
    NoLines,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("document submission failed: {0}")]
    Transport(#[from] anyhow::Error),
}

pub type SearchResult<T> = Result<T, SearchError>;
