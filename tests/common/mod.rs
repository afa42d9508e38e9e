//! Shared stubs for the integration suites: an in-memory contact directory
//! and a recording member sink.

#![allow(dead_code)]

use std::sync::{Mutex, Once};

use async_trait::async_trait;

use member_import::services::importer::MemberSink;
use member_import::services::normalizer::normalize;
use member_import::services::resolver::DirectorySearch;
use member_import::types::cancel::CancelFlag;
use member_import::types::contact::DirectoryOption;
use member_import::types::errors::{SearchError, SearchResult};

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

pub fn opt(value: &str, label: &str) -> DirectoryOption {
    DirectoryOption::new(value, label)
}

/// Directory stub with a fixed term-to-results mapping.
///
/// Terms are matched on their normalized form; unmapped terms yield empty
/// results, terms registered via [`failing_on`](Self::failing_on) yield a
/// provider error. Every call is recorded.
pub struct StubDirectory {
    by_term: Vec<(String, Vec<DirectoryOption>)>,
    fail_terms: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl StubDirectory {
    pub fn empty() -> Self {
        Self::mapped(vec![])
    }

    pub fn mapped(entries: Vec<(&str, Vec<DirectoryOption>)>) -> Self {
        Self {
            by_term: entries
                .into_iter()
                .map(|(term, options)| (normalize(term), options))
                .collect(),
            fail_terms: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, term: &str) -> Self {
        self.fail_terms.push(normalize(term));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DirectorySearch for StubDirectory {
    async fn search(
        &self,
        term: &str,
        cancel: &CancelFlag,
    ) -> SearchResult<Vec<DirectoryOption>> {
        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }
        self.calls.lock().unwrap().push(term.to_string());

        let key = normalize(term);
        if self.fail_terms.contains(&key) {
            return Err(SearchError::Provider(anyhow::anyhow!(
                "stub directory offline"
            )));
        }

        Ok(self
            .by_term
            .iter()
            .find(|(mapped, _)| *mapped == key)
            .map(|(_, options)| options.clone())
            .unwrap_or_default())
    }
}

/// Member-form sink that records what it was asked to add.
#[derive(Default)]
pub struct RecordingSink {
    pub added: Vec<(DirectoryOption, Option<String>)>,
    /// Fail `add_member` for this contact id, emulating a broken form.
    pub fail_for_value: Option<String>,
}

#[async_trait]
impl MemberSink for RecordingSink {
    async fn add_member(
        &mut self,
        contact: &DirectoryOption,
        supplemental: Option<&str>,
    ) -> anyhow::Result<()> {
        if self.fail_for_value.as_deref() == Some(contact.value.as_str()) {
            anyhow::bail!("no empty member row available");
        }
        self.added
            .push((contact.clone(), supplemental.map(str::to_string)));
        Ok(())
    }
}
