//! Contact directory contracts: search options, parsed names and the
//! three-way resolution outcome.

use serde::{Deserialize, Serialize};

/// A free-text name split into given name(s) and surname.
///
/// The last whitespace-delimited token is the surname; everything before it
/// is the given name. A single-token input has an empty `first_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedName {
    pub first_name: String,
    pub last_name: String,
}

/// One candidate entry returned by the contact directory.
///
/// `value` is the directory's opaque contact id; `label` is a display string
/// such as `"Jansen, Piet (Pietje) (Lid)"`. Labels may arrive HTML-escaped
/// and must be decoded before any comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryOption {
    pub value: String,
    pub label: String,
}

impl DirectoryOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A directory option ranked by edit distance to a query. Lower is better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredOption {
    #[serde(flatten)]
    pub option: DirectoryOption,
    pub distance: usize,
}

/// Outcome of resolving one full name against the directory.
///
/// Ambiguity is a first-class result, not an error: more than one candidate
/// at the same confidence tier is never auto-resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum ContactSearchResult {
    Found {
        data: DirectoryOption,
    },
    NotFound {
        reason: String,
    },
    #[serde(rename_all = "camelCase")]
    Ambiguous {
        reason: String,
        /// Display labels of the competing candidates, not ids.
        candidates: Vec<String>,
    },
}
