//! Inbound search-request adapter.
//!
//! Intercepted host search requests arrive in several body encodings
//! (urlencoded form strings, JSON objects). This adapter normalizes any of
//! them into a plain [`SearchQuery`] before the resolver or merger sees
//! them, so shape-sniffing never leaks into the core.

use serde::{Deserialize, Serialize};

/// Form key carrying the search term in the host's find requests.
const TERM_KEY: &str = "find-value";

/// A normalized inbound search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub term: String,
}

/// A search-request body as it arrived on the wire.
#[derive(Debug, Clone)]
pub enum InboundBody<'a> {
    /// `application/x-www-form-urlencoded` payload.
    Form(&'a str),
    /// Already-parsed JSON object payload.
    Json(&'a serde_json::Value),
}

/// Extract the search term from an inbound body, in whatever encoding it
/// arrived. Returns `None` when the body carries no term.
pub fn extract_query(body: &InboundBody<'_>) -> Option<SearchQuery> {
    let term = match body {
        InboundBody::Form(raw) => term_from_form(raw),
        InboundBody::Json(value) => term_from_json(value),
    }?;

    if term.trim().is_empty() {
        return None;
    }
    Some(SearchQuery { term })
}

fn term_from_form(raw: &str) -> Option<String> {
    raw.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if form_decode(key)? != TERM_KEY {
            return None;
        }
        form_decode(value)
    })
}

fn form_decode(s: &str) -> Option<String> {
    // Form encoding spells spaces as '+'; percent-decode the rest.
    let unplussed = s.replace('+', " ");
    match urlencoding::decode(&unplussed) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(err) => {
            log::debug!("undecodable form component {s:?}: {err}");
            None
        }
    }
}

fn term_from_json(value: &serde_json::Value) -> Option<String> {
    match value.get(TERM_KEY)? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
