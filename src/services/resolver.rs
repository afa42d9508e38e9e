//! Contact resolution: one free-text name in, one classified outcome out.
//!
//! Resolution queries the directory by surname first, falls back to the
//! first given-name token, and only accepts a candidate the matching policy
//! considers unique. Everything else is reported as not-found or ambiguous
//! rather than guessed.

use async_trait::async_trait;

use crate::services::names::{extract_label_last, includes_first, parse_name, pick_best_option};
use crate::services::normalizer::{nfc, normalize};
use crate::types::cancel::CancelFlag;
use crate::types::contact::{ContactSearchResult, DirectoryOption, ParsedName};
use crate::types::errors::{SearchError, SearchResult};

/// Remote contact directory, abstracted away from the host transport.
///
/// Implementations return an empty vector when nothing matches; they only
/// error on transport failure or when `cancel` fires mid-call.
#[async_trait]
pub trait DirectorySearch: Send + Sync {
    async fn search(
        &self,
        term: &str,
        cancel: &CancelFlag,
    ) -> SearchResult<Vec<DirectoryOption>>;
}

/// Resolve a full name to a unique directory contact.
///
/// Cancellation is checked before each directory call and surfaces as
/// [`SearchError::Cancelled`], never as a not-found or ambiguous result.
pub async fn find_contact(
    directory: &dyn DirectorySearch,
    full_name: &str,
    cancel: &CancelFlag,
) -> SearchResult<ContactSearchResult> {
    let parsed = parse_name(full_name);

    if parsed.last_name.is_empty() {
        return Ok(ContactSearchResult::NotFound {
            reason: "No last name parsed".to_string(),
        });
    }

    if cancel.is_cancelled() {
        return Err(SearchError::Cancelled);
    }
    let last_name_options = directory.search(&parsed.last_name, cancel).await?;

    if last_name_options.is_empty() {
        return Ok(ContactSearchResult::NotFound {
            reason: "No matches for last name".to_string(),
        });
    }

    if let Some(picked) = pick_best_option(&last_name_options, &parsed) {
        return Ok(ContactSearchResult::Found {
            data: picked.clone(),
        });
    }

    // Some directories index by given name; retry with its first token.
    let first_name_options = match parsed.first_name.split_whitespace().next() {
        Some(first_token) => {
            if cancel.is_cancelled() {
                return Err(SearchError::Cancelled);
            }
            directory.search(first_token, cancel).await?
        }
        None => Vec::new(),
    };

    let merged = dedup_by_value(
        last_name_options
            .into_iter()
            .chain(first_name_options.into_iter()),
    );

    if let Some(picked) = pick_best_option(&merged, &parsed) {
        return Ok(ContactSearchResult::Found {
            data: picked.clone(),
        });
    }

    Ok(classify_ambiguity(&merged, &parsed))
}

/// Deduplicate options by the NFC form of their value, first occurrence
/// wins. Unicode composition differences must not produce separate entries.
pub fn dedup_by_value(options: impl Iterator<Item = DirectoryOption>) -> Vec<DirectoryOption> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for option in options {
        if seen.insert(nfc(&option.value)) {
            out.push(option);
        }
    }
    out
}

/// Build the diagnostic candidate list for an unresolved name.
///
/// The first+last pool is reported when it holds the competing candidates;
/// the broader same-surname pool only when the first pool has at most one
/// entry.
fn classify_ambiguity(options: &[DirectoryOption], parsed: &ParsedName) -> ContactSearchResult {
    let target_last = normalize(&parsed.last_name);

    let both: Vec<&DirectoryOption> = options
        .iter()
        .filter(|o| {
            extract_label_last(&o.label) == target_last
                && includes_first(&o.label, &parsed.first_name)
        })
        .collect();

    if both.len() > 1 {
        return ContactSearchResult::Ambiguous {
            reason: "Multiple candidates match first and last name".to_string(),
            candidates: both.iter().map(|o| o.label.clone()).collect(),
        };
    }

    let same_last: Vec<String> = options
        .iter()
        .filter(|o| extract_label_last(&o.label) == target_last)
        .map(|o| o.label.clone())
        .collect();

    ContactSearchResult::Ambiguous {
        reason: "No unique match found; candidates with same last name".to_string(),
        candidates: same_last,
    }
}
