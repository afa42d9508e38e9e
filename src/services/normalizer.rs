//! Text normalization applied before every string comparison.
//!
//! Directory labels and user input mix composed and decomposed Unicode forms
//! ("café" can arrive either way), stray casing and irregular whitespace.
//! Comparing anything without going through [`normalize`] first is the most
//! likely way to break matching.

use unicode_normalization::UnicodeNormalization;

/// Canonical comparison form: NFC compose, lowercase, collapse whitespace
/// runs to a single space, trim. Idempotent.
pub fn normalize(s: &str) -> String {
    let composed: String = s.nfc().collect();
    composed
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// NFC composition only, without case or whitespace folding.
///
/// Used as the identity key when deduplicating directory options by value.
pub fn nfc(s: &str) -> String {
    s.nfc().collect()
}

/// Decode HTML character entities.
///
/// Directory responses arrive HTML-escaped; labels must be decoded before
/// metadata stripping or normalization. Handles the common named entities
/// plus decimal (`&#233;`) and hex (`&#xE9;`) numeric forms. Anything
/// unrecognized is passed through untouched.
pub fn decode_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        match tail.find(';') {
            // Entities are short; an unterminated or oversized run is text.
            Some(end) if end <= 10 => {
                let entity = &tail[1..end];
                match decode_entity(entity) {
                    Some(decoded) => {
                        out.push_str(&decoded);
                        rest = &tail[end + 1..];
                    }
                    None => {
                        out.push('&');
                        rest = &tail[1..];
                    }
                }
            }
            _ => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<String> {
    let named = match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    };
    if let Some(c) = named {
        return Some(c.to_string());
    }

    let digits = entity.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };
    char::from_u32(code).map(|c| c.to_string())
}
