//! Accounting document contracts for the rebook feature.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One booking line of a rebook document.
///
/// Amounts are integer cents so that line totals stay exact; formatting for
/// the host's locale happens only at the submission boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLine {
    pub account_code: String,
    pub amount_cents: i64,
    pub description: String,
}

/// An accounting document to be submitted through the host's form protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebookDocument {
    pub doc_type_code: String,
    pub document_date: NaiveDate,
    pub currency_code: String,
    pub description: String,
    pub lines: Vec<DocumentLine>,
}

impl RebookDocument {
    /// Sum of all line amounts, in cents.
    pub fn total_cents(&self) -> i64 {
        self.lines.iter().map(|line| line.amount_cents).sum()
    }
}

/// Host-side result of a document submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum SubmitOutcome {
    /// The host stored the document and reported its id.
    #[serde(rename_all = "camelCase")]
    Saved { document_id: String },
    /// The host rejected the document (validation message from the response).
    Rejected { error: String },
}
