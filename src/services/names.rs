//! Name parsing and directory-label handling.
//!
//! Directory labels conventionally read `"Last, First (nickname) (role)"`,
//! with parenthesized or bracketed metadata and sometimes a ` - ` suffix.
//! These helpers isolate the clean name portion and implement the matching
//! policy used to accept a candidate.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::services::normalizer::{decode_html, normalize};
use crate::types::contact::{DirectoryOption, ParsedName};
use crate::types::import::Separator;

/// Parenthesized metadata groups: `(Pietje)`, `(Lid)`.
static RE_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("invalid regex"));

/// Bracketed metadata groups: `[archief]`.
static RE_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("invalid regex"));

/// Everything from the first ` - ` onward.
static RE_DASH_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+-\s+.*$").expect("invalid regex"));

/// Runs of characters that are not Unicode letters or digits, used to
/// tokenize labels so accented letters stay inside their word.
static RE_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("invalid regex"));

/// Label text in canonical comparison form (entity-decoded, then normalized).
fn normalize_label(s: &str) -> String {
    normalize(&decode_html(s))
}

/// Split a free-text full name into given name(s) and surname.
///
/// The last whitespace token is the surname; fewer than two tokens leave the
/// given name empty.
pub fn parse_name(full: &str) -> ParsedName {
    let mut parts: Vec<&str> = full.split_whitespace().collect();

    if parts.len() < 2 {
        return ParsedName {
            first_name: String::new(),
            last_name: parts.first().copied().unwrap_or_default().to_string(),
        };
    }

    let last_name = parts.pop().unwrap_or_default().to_string();
    ParsedName {
        first_name: parts.join(" "),
        last_name,
    }
}

/// Remove parenthesized/bracketed groups and any ` - ` suffix from a label.
pub fn strip_label_metadata(label: &str) -> String {
    let no_parens = RE_PARENS.replace_all(label, " ");
    let no_brackets = RE_BRACKETS.replace_all(&no_parens, " ");
    RE_DASH_SUFFIX.replace(&no_brackets, " ").into_owned()
}

/// Extract the normalized surname from a directory label.
///
/// `"Last, First"` form takes the text before the first comma; otherwise the
/// metadata-stripped label is parsed like user input and its surname taken.
pub fn extract_label_last(label: &str) -> String {
    let normalized = normalize_label(label);
    if normalized.is_empty() {
        return String::new();
    }

    if let Some((before_comma, _)) = normalized.split_once(',') {
        return before_comma.trim().to_string();
    }

    let cleaned = normalize_label(&strip_label_metadata(label));
    if cleaned.is_empty() {
        return String::new();
    }

    normalize(&parse_name(&cleaned).last_name)
}

/// Whether every part of `first_name` occurs as an exact token of `label`.
///
/// Tokenization is Unicode-aware so accented letters remain part of their
/// word. Vacuously true for an empty first name.
pub fn includes_first(label: &str, first_name: &str) -> bool {
    let name_parts: Vec<String> = normalize_label(first_name)
        .split_whitespace()
        .map(str::to_string)
        .collect();

    if name_parts.is_empty() {
        return true;
    }

    let normalized_label = normalize_label(label);
    let label_tokens: HashSet<&str> = RE_NON_WORD
        .split(&normalized_label)
        .filter(|t| !t.is_empty())
        .collect();

    name_parts
        .iter()
        .all(|part| label_tokens.contains(part.as_str()))
}

/// Pick the single acceptable candidate for a parsed name, if any.
///
/// Tier (a): surname equal and every first-name part present — accepted only
/// when exactly one option qualifies. Tier (b): surname equal alone, again
/// only when unique. More than one match at either tier is never
/// auto-resolved; importing the wrong person is worse than asking.
pub fn pick_best_option<'a>(
    options: &'a [DirectoryOption],
    parsed: &ParsedName,
) -> Option<&'a DirectoryOption> {
    let target_last = normalize(&parsed.last_name);

    let perfect: Vec<&DirectoryOption> = options
        .iter()
        .filter(|o| {
            extract_label_last(&o.label) == target_last
                && includes_first(&o.label, &parsed.first_name)
        })
        .collect();
    if let [only] = perfect.as_slice() {
        return Some(only);
    }

    let last_only: Vec<&DirectoryOption> = options
        .iter()
        .filter(|o| extract_label_last(&o.label) == target_last)
        .collect();
    if let [only] = last_only.as_slice() {
        return Some(only);
    }

    None
}

/// Split a pasted block of text into individual names.
///
/// `Separator::Auto` picks whichever of newline, tab or comma occurs most
/// often (newline wins ties, then tab). Entries are trimmed, entity-decoded
/// and deduplicated by normalized form, keeping the first occurrence with
/// its original casing.
pub fn split_names(text: &str, sep: Separator) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let sep = match sep {
        Separator::Auto => detect_separator(trimmed),
        other => other,
    };

    let parts: Vec<&str> = match sep {
        Separator::Tab => trimmed.split('\t').collect(),
        Separator::Comma => trimmed.split(',').collect(),
        _ => trimmed.split(['\r', '\n']).collect(),
    };

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for part in parts {
        let entry = part.trim();
        if entry.is_empty() {
            continue;
        }
        let decoded = decode_html(entry);
        let key = normalize(&decoded);
        if seen.insert(key) {
            out.push(decoded);
        }
    }
    out
}

fn detect_separator(text: &str) -> Separator {
    let newlines = text.matches('\n').count();
    let tabs = text.matches('\t').count();
    let commas = text.matches(',').count();

    // First-listed wins ties, so newline is the default for plain lists.
    let mut best = (Separator::Newline, newlines);
    for candidate in [(Separator::Tab, tabs), (Separator::Comma, commas)] {
        if candidate.1 > best.1 {
            best = candidate;
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(value: &str, label: &str) -> DirectoryOption {
        DirectoryOption::new(value, label)
    }

    #[test]
    fn test_parse_name_splits_on_last_token() {
        assert_eq!(
            parse_name("Jan de Vries"),
            ParsedName {
                first_name: "Jan de".into(),
                last_name: "Vries".into(),
            }
        );
    }

    #[test]
    fn test_parse_name_single_token_is_surname() {
        assert_eq!(
            parse_name("Madonna"),
            ParsedName {
                first_name: String::new(),
                last_name: "Madonna".into(),
            }
        );
    }

    #[test]
    fn test_parse_name_empty_input() {
        assert_eq!(
            parse_name(""),
            ParsedName {
                first_name: String::new(),
                last_name: String::new(),
            }
        );
        assert_eq!(parse_name("   ").last_name, "");
    }

    #[test]
    fn test_strip_label_metadata() {
        assert_eq!(
            strip_label_metadata("Jansen, Piet (Pietje) (Lid)").trim_end(),
            "Jansen, Piet"
        );
        assert_eq!(
            strip_label_metadata("De Boer [archief] - oud lid").trim_end(),
            "De Boer"
        );
    }

    #[test]
    fn test_extract_label_last_comma_form() {
        assert_eq!(extract_label_last("Jansen, Piet (Lid)"), "jansen");
    }

    #[test]
    fn test_extract_label_last_plain_form() {
        assert_eq!(extract_label_last("Piet Jansen (Lid)"), "jansen");
        assert_eq!(extract_label_last(""), "");
        assert_eq!(extract_label_last("(Lid)"), "");
    }

    #[test]
    fn test_extract_label_last_decodes_entities() {
        assert_eq!(extract_label_last("G&#246;mez, Ana"), "g\u{f6}mez");
    }

    #[test]
    fn test_includes_first_exact_tokens_only() {
        assert!(includes_first("Jansen, Piet (Lid)", "Piet"));
        assert!(!includes_first("Jansen, Pieter (Lid)", "Piet"));
        assert!(includes_first("Jansen, Piet", ""));
    }

    #[test]
    fn test_includes_first_accented_tokens() {
        assert!(includes_first("Vries, Andr\u{e9} de", "Andr\u{e9}"));
        // Decomposed input must match the composed label token.
        assert!(includes_first("Vries, Andr\u{e9} de", "Andre\u{301}"));
    }

    #[test]
    fn test_includes_first_multi_part() {
        assert!(includes_first("Vries, Jan de (Lid)", "Jan de"));
        assert!(!includes_first("Vries, Jan (Lid)", "Jan de"));
    }

    #[test]
    fn test_pick_best_prefers_unique_full_match() {
        let options = [
            opt("1", "Jansen, Piet (Lid)"),
            opt("2", "Jansen, Klaas (Lid)"),
        ];
        let parsed = parse_name("Piet Jansen");
        let picked = pick_best_option(&options, &parsed).unwrap();
        assert_eq!(picked.value, "1");
    }

    #[test]
    fn test_pick_best_falls_back_to_unique_last_name() {
        let options = [opt("1", "Jansen, Piet"), opt("2", "Bakker, Piet")];
        let parsed = parse_name("Jansen");
        let picked = pick_best_option(&options, &parsed).unwrap();
        assert_eq!(picked.value, "1");
    }

    #[test]
    fn test_pick_best_never_guesses_between_equals() {
        let options = [opt("1", "Jansen, Piet"), opt("2", "Jansen, Piet (Lid)")];
        let parsed = parse_name("Piet Jansen");
        assert!(pick_best_option(&options, &parsed).is_none());
    }

    #[test]
    fn test_split_names_auto_detects_newlines() {
        let names = split_names("Piet Jansen\nKlaas de Boer\n\nAnna Smit\n", Separator::Auto);
        assert_eq!(names, vec!["Piet Jansen", "Klaas de Boer", "Anna Smit"]);
    }

    #[test]
    fn test_split_names_auto_prefers_most_frequent_separator() {
        let names = split_names("Piet Jansen, Klaas de Boer, Anna Smit", Separator::Auto);
        assert_eq!(names.len(), 3);
        assert_eq!(names[1], "Klaas de Boer");
    }

    #[test]
    fn test_split_names_dedups_case_and_composition_variants() {
        let names = split_names("Andr\u{e9} Smit\nANDRE\u{301} SMIT\nPiet Jansen", Separator::Newline);
        assert_eq!(names.len(), 2);
        assert_eq!(names[0], "Andr\u{e9} Smit");
    }

    #[test]
    fn test_split_names_empty_input() {
        assert!(split_names("  \n ", Separator::Auto).is_empty());
    }
}
