//! Edit-distance scoring of directory candidates against a query.

use crate::services::names::strip_label_metadata;
use crate::services::normalizer::{decode_html, normalize};
use crate::types::contact::{DirectoryOption, ScoredOption};

/// Levenshtein edit distance between two already-normalized strings.
pub fn distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Score each option by edit distance between the normalized query and its
/// normalized, metadata-stripped label, then stable-sort ascending.
///
/// Ties keep discovery order, so an equally-distant earlier result stays
/// ahead of a later one.
pub fn score_and_sort(options: &[DirectoryOption], query: &str) -> Vec<ScoredOption> {
    let target = normalize(query);

    let mut scored: Vec<ScoredOption> = options
        .iter()
        .map(|option| {
            let clean_label = normalize(&strip_label_metadata(&decode_html(&option.label)));
            ScoredOption {
                distance: distance(&target, &clean_label),
                option: option.clone(),
            }
        })
        .collect();

    scored.sort_by_key(|s| s.distance);
    scored
}
