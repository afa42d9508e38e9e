//! Multi-term directory search: fan out one search per word, merge and rank.
//!
//! The host's own search matches a single term. For a query like
//! "Jan de Vries" each word is searched concurrently, the results are merged
//! in term order (never completion order, so dedup stays deterministic) and
//! ranked by edit distance to the full query.

use futures_util::future::join_all;

use crate::services::resolver::{dedup_by_value, DirectorySearch};
use crate::services::scorer::score_and_sort;
use crate::types::cancel::CancelFlag;
use crate::types::contact::ScoredOption;
use crate::types::errors::{SearchError, SearchResult};

/// Search the directory once per whitespace-separated term of `query` and
/// return the merged candidates ranked by distance to the whole query.
///
/// A single-term query is one plain directory call. A failing term degrades
/// to zero results for that term; cancellation propagates.
pub async fn expanded_search(
    directory: &dyn DirectorySearch,
    query: &str,
    cancel: &CancelFlag,
) -> SearchResult<Vec<ScoredOption>> {
    let terms: Vec<&str> = query.split_whitespace().collect();

    if terms.len() < 2 {
        let options = directory.search(query.trim(), cancel).await?;
        return Ok(score_and_sort(&options, query));
    }

    // Per-term searches are read-only and independent; await them jointly.
    let searches = terms.iter().map(|term| directory.search(term, cancel));
    let results = join_all(searches).await;

    let mut collected = Vec::new();
    for (term, result) in terms.iter().zip(results) {
        match result {
            Ok(options) => collected.extend(options),
            Err(SearchError::Cancelled) => return Err(SearchError::Cancelled),
            Err(err) => {
                log::warn!("term \"{term}\" search failed, skipping: {err}");
            }
        }
    }

    let unique = dedup_by_value(collected.into_iter());
    Ok(score_and_sort(&unique, query))
}

/// Whether a query would benefit from term fan-out at all.
pub fn is_multi_term(query: &str) -> bool {
    query.split_whitespace().nth(1).is_some()
}
