//! Rebook transactions: validate an accounting document and hand it to the
//! host's submission collaborator.
//!
//! The host expects its own locale on the wire: dates as `DD-MM-YYYY` and
//! amounts with a comma decimal separator. Those formatting rules live here
//! so submitter implementations stay dumb pipes.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::types::document::{RebookDocument, SubmitOutcome};
use crate::types::errors::DocumentError;

/// Host-side document submission, abstracted away from the form transport.
#[async_trait]
pub trait DocumentSubmitter: Send + Sync {
    async fn submit(&self, doc: &RebookDocument) -> anyhow::Result<SubmitOutcome>;
}

/// Validate `doc` and submit it through `submitter`.
pub async fn submit_rebook(
    submitter: &dyn DocumentSubmitter,
    doc: &RebookDocument,
) -> Result<SubmitOutcome, DocumentError> {
    validate(doc)?;

    let outcome = submitter.submit(doc).await?;
    if let SubmitOutcome::Rejected { error } = &outcome {
        log::warn!("rebook document rejected by host: {error}");
    }
    Ok(outcome)
}

/// Reject documents the host would bounce anyway: no lines, or missing
/// header/line codes.
pub fn validate(doc: &RebookDocument) -> Result<(), DocumentError> {
    if doc.doc_type_code.trim().is_empty() {
        return Err(DocumentError::MissingField("doc_type_code"));
    }
    if doc.currency_code.trim().is_empty() {
        return Err(DocumentError::MissingField("currency_code"));
    }
    if doc.lines.is_empty() {
        return Err(DocumentError::NoLines);
    }
    if doc
        .lines
        .iter()
        .any(|line| line.account_code.trim().is_empty())
    {
        return Err(DocumentError::MissingField("account_code"));
    }
    Ok(())
}

/// Format a date the way the host's forms want it: `DD-MM-YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Format an amount in cents with two decimals and a comma separator.
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{},{:02}", abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::document::DocumentLine;

    fn doc() -> RebookDocument {
        RebookDocument {
            doc_type_code: "MEM".into(),
            document_date: NaiveDate::from_ymd_opt(2025, 10, 22).unwrap(),
            currency_code: "EUR".into(),
            description: "contributie herboeking".into(),
            lines: vec![DocumentLine {
                account_code: "8000".into(),
                amount_cents: 2500,
                description: "cursusgeld".into(),
            }],
        }
    }

    #[test]
    fn test_validate_accepts_complete_document() {
        assert!(validate(&doc()).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_lines() {
        let mut d = doc();
        d.lines.clear();
        assert!(matches!(validate(&d), Err(DocumentError::NoLines)));
    }

    #[test]
    fn test_validate_rejects_blank_account_code() {
        let mut d = doc();
        d.lines[0].account_code = "  ".into();
        assert!(matches!(
            validate(&d),
            Err(DocumentError::MissingField("account_code"))
        ));
    }

    #[test]
    fn test_format_date_day_first() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 22).unwrap();
        assert_eq!(format_date(date), "22-10-2025");
    }

    #[test]
    fn test_format_amount_comma_separator() {
        assert_eq!(format_amount(1250), "12,50");
        assert_eq!(format_amount(-1250), "-12,50");
        assert_eq!(format_amount(5), "0,05");
        assert_eq!(format_amount(0), "0,00");
    }
}
