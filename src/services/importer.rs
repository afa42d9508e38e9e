//! Sequential batch import of resolved contacts into the member form.
//!
//! The destination form is a single shared document ("add a row, fill the
//! newest empty row"), so items run strictly one at a time: a concurrent
//! batch would race on which row receives which contact. One lookup failing
//! degrades that item to not-found; only cancellation stops the run.

use async_trait::async_trait;

use crate::services::resolver::{find_contact, DirectorySearch};
use crate::types::cancel::CancelFlag;
use crate::types::contact::{ContactSearchResult, DirectoryOption};
use crate::types::errors::SearchError;
use crate::types::import::{
    ImportAmbiguous, ImportNotFound, ImportReport, ImportSuccess, ItemOutcome, ProgressUpdate,
};

/// The stateful member form a resolved contact is written into.
///
/// `add_member` must leave the form with one extra filled row, or error.
#[async_trait]
pub trait MemberSink: Send {
    async fn add_member(
        &mut self,
        contact: &DirectoryOption,
        supplemental: Option<&str>,
    ) -> anyhow::Result<()>;
}

/// Row context handed to a [`SupplementalResolver`].
#[derive(Debug)]
pub struct SupplementalContext<'a> {
    pub index: usize,
    pub name: &'a str,
    pub contact: &'a DirectoryOption,
}

/// Optional per-row secondary code (e.g. a price code) chosen by the caller.
pub type SupplementalResolver<'a> = dyn Fn(&SupplementalContext<'_>) -> Option<String> + 'a;

/// Caller-supplied hooks for one import run.
#[derive(Default)]
pub struct ImportOptions<'a> {
    /// Synchronous progress sink, invoked from within the loop.
    pub on_progress: Option<Box<dyn FnMut(ProgressUpdate) + 'a>>,
    pub cancel: CancelFlag,
    pub supplemental: Option<Box<SupplementalResolver<'a>>>,
}

/// Import `names` one at a time, resolving each against `directory` and
/// writing found contacts into `sink`.
///
/// Every processed name is recorded in exactly one report bucket, in input
/// order. Cancellation returns the partial report with `aborted` set; the
/// item being processed at that moment is not recorded.
pub async fn import_members(
    directory: &dyn DirectorySearch,
    sink: &mut dyn MemberSink,
    names: &[String],
    mut options: ImportOptions<'_>,
) -> ImportReport {
    let total = names.len();
    let mut report = ImportReport::default();
    let mut completed = 0usize;

    for (index, name) in names.iter().enumerate() {
        if options.cancel.is_cancelled() {
            emit(
                &mut options.on_progress,
                ProgressUpdate::Cancelled {
                    index,
                    total,
                    completed,
                    name: name.clone(),
                },
            );
            report.aborted = true;
            return report;
        }

        emit(
            &mut options.on_progress,
            ProgressUpdate::Started {
                index,
                total,
                completed,
                name: name.clone(),
            },
        );

        let outcome = match find_contact(directory, name, &options.cancel).await {
            // The lookup finished, but cancellation makes its result stale.
            Ok(_) if options.cancel.is_cancelled() => {
                emit(
                    &mut options.on_progress,
                    ProgressUpdate::Cancelled {
                        index,
                        total,
                        completed,
                        name: name.clone(),
                    },
                );
                report.aborted = true;
                return report;
            }
            Ok(ContactSearchResult::Found { data }) => {
                apply_found(sink, &mut report, &mut options, index, name, data).await
            }
            Ok(ContactSearchResult::NotFound { reason }) => {
                report.not_found.push(ImportNotFound {
                    name: name.clone(),
                    reason,
                });
                ItemOutcome::NotFound
            }
            Ok(ContactSearchResult::Ambiguous { reason, candidates }) => {
                report.ambiguous.push(ImportAmbiguous {
                    name: name.clone(),
                    reason,
                    candidates,
                });
                ItemOutcome::Ambiguous
            }
            Err(SearchError::Cancelled) => {
                emit(
                    &mut options.on_progress,
                    ProgressUpdate::Cancelled {
                        index,
                        total,
                        completed,
                        name: name.clone(),
                    },
                );
                report.aborted = true;
                return report;
            }
            Err(err) => {
                // A bad lookup must not sink the rest of the batch.
                log::warn!("lookup for \"{name}\" failed: {err}");
                report.not_found.push(ImportNotFound {
                    name: name.clone(),
                    reason: err.to_string(),
                });
                ItemOutcome::Error
            }
        };

        completed += 1;
        emit(
            &mut options.on_progress,
            ProgressUpdate::Completed {
                index,
                total,
                completed,
                name: name.clone(),
                outcome,
            },
        );
    }

    report
}

async fn apply_found(
    sink: &mut dyn MemberSink,
    report: &mut ImportReport,
    options: &mut ImportOptions<'_>,
    index: usize,
    name: &str,
    contact: DirectoryOption,
) -> ItemOutcome {
    let supplemental = options.supplemental.as_ref().and_then(|resolve| {
        resolve(&SupplementalContext {
            index,
            name,
            contact: &contact,
        })
    });

    match sink.add_member(&contact, supplemental.as_deref()).await {
        Ok(()) => {
            report.successes.push(ImportSuccess {
                name: name.to_string(),
                contact_id: contact.value.clone(),
                label: contact.label.clone(),
            });
            ItemOutcome::Found
        }
        Err(err) => {
            log::warn!("could not add \"{name}\" to the member form: {err}");
            report.not_found.push(ImportNotFound {
                name: name.to_string(),
                reason: err.to_string(),
            });
            ItemOutcome::Error
        }
    }
}

fn emit(on_progress: &mut Option<Box<dyn FnMut(ProgressUpdate) + '_>>, update: ProgressUpdate) {
    if let Some(callback) = on_progress {
        callback(update);
    }
}
