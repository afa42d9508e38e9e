//! Batch import contracts: the per-run report, progress events and the
//! separators accepted for pasted name lists.

use serde::{Deserialize, Serialize};

/// A name that resolved to a unique contact and was added to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSuccess {
    pub name: String,
    pub contact_id: String,
    pub label: String,
}

/// A name with no acceptable directory match, or one whose lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportNotFound {
    pub name: String,
    pub reason: String,
}

/// A name with several competing candidates at the same confidence tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportAmbiguous {
    pub name: String,
    pub reason: String,
    pub candidates: Vec<String>,
}

/// Append-only account of one import run.
///
/// Every processed name lands in exactly one bucket. When the run is
/// cancelled mid-batch, `aborted` is set and the in-flight item is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub successes: Vec<ImportSuccess>,
    pub not_found: Vec<ImportNotFound>,
    pub ambiguous: Vec<ImportAmbiguous>,
    pub aborted: bool,
}

impl ImportReport {
    /// Total entries recorded across all three buckets.
    pub fn recorded_len(&self) -> usize {
        self.successes.len() + self.not_found.len() + self.ambiguous.len()
    }
}

/// How a single batch item ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemOutcome {
    Found,
    NotFound,
    Ambiguous,
    Error,
}

/// Streaming event contract for batch import progress.
///
/// One `Started` and (unless the run is cancelled first) one matching
/// `Completed` per name, strictly in input order; `completed` is
/// monotonically non-decreasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "event", content = "data")]
pub enum ProgressUpdate {
    /// Emitted when an item's resolution begins.
    #[serde(rename_all = "camelCase")]
    Started {
        index: usize,
        total: usize,
        completed: usize,
        name: String,
    },
    /// Emitted after an item has been recorded into the report.
    #[serde(rename_all = "camelCase")]
    Completed {
        index: usize,
        total: usize,
        completed: usize,
        name: String,
        outcome: ItemOutcome,
    },
    /// Emitted once when cancellation stops the run; the named item is not
    /// recorded in the report.
    #[serde(rename_all = "camelCase")]
    Cancelled {
        index: usize,
        total: usize,
        completed: usize,
        name: String,
    },
}

/// Separator used to split a pasted block of names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Separator {
    /// Pick whichever of the other separators occurs most often.
    Auto,
    Tab,
    Comma,
    Newline,
}
