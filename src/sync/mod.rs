//! Reconciliation of upstream source records into the project store.
use serde::Serialize;

use crate::db::models::project::{Manager, Project};
use crate::source::SourceRecord;

/// Aggregate outcome of one sync run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SyncSummary {
    /// Records that had no stored counterpart and were inserted.
    pub created: u64,
    /// Records whose name was already present in the store.
    pub skipped: u64,
    /// Records whose lookup or insert failed.
    pub failed: u64,
}

/// Merge the fetched source records into the project store.
///
/// Records are processed in source order. A record whose name is already
/// stored is a no-op. A record with no stored counterpart is mapped into a
/// [`Project`] and inserted. A lookup or insert failure is counted and
/// logged, and processing continues with the next record; the batch never
/// fails atomically.
#[tracing::instrument(skip(store, records), fields(records = records.len()))]
pub async fn reconcile<S>(store: &S, records: &[SourceRecord]) -> SyncSummary
where
    S: Manager + Sync,
{
    let mut summary = SyncSummary::default();
    for record in records {
        match store.find_by_name(&record.name).await {
            Ok(Some(existing)) => {
                tracing::debug!(name = %existing.name, "Project already tracked");
                summary.skipped += 1;
            }
            Ok(None) => {
                let project = Project::from_source(record);
                match store.create(&project).await {
                    Ok(_) => {
                        tracing::info!(name = %project.name, "Tracked new project");
                        summary.created += 1;
                    }
                    Err(err) => {
                        tracing::error!(name = %project.name, "Failed to insert project: {err}");
                        summary.failed += 1;
                    }
                }
            }
            Err(err) => {
                tracing::error!(name = %record.name, "Failed to query project: {err}");
                summary.failed += 1;
            }
        }
    }
    summary
}
