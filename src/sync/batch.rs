//! Runs an engine once per entity type and collects the results.

use std::path::Path;

use serde::Serialize;
use tracing::{error, info, instrument};

use super::error::SyncError;
use super::export::ExportOptions;
use super::registry::EntityKind;
use super::stats::{BatchReport, ExportStats, ImportStats, KindFailure};
use crate::db::SqliteDatabase;

/// What to do when an entity type fails outright (database or wiki root
/// unusable). Item-level failures are always counted and never stop a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchPolicy {
    /// Return the first failure; later types are not run.
    #[default]
    Abort,
    /// Record the failure in the report and move on to the next type.
    Continue,
}

#[instrument(skip_all, fields(kinds = kinds.len()))]
pub async fn export_all(
    db: &SqliteDatabase,
    kinds: &[EntityKind],
    options: &ExportOptions,
    policy: BatchPolicy,
) -> Result<BatchReport<ExportStats>, SyncError> {
    let mut report = BatchReport::default();

    for kind in kinds {
        match kind.export(db, options).await {
            Ok(stats) => report.push(kind.plural(), stats),
            Err(e) => handle_failure(&mut report, *kind, e, policy)?,
        }
    }

    info!(
        created = report.total().entries_created,
        updated = report.total().entries_updated,
        errors = report.total().errors,
        failed = report.failures.len(),
        "Export finished"
    );
    Ok(report)
}

#[instrument(skip_all, fields(kinds = kinds.len()))]
pub async fn import_all(
    db: &SqliteDatabase,
    kinds: &[EntityKind],
    wiki_dir: &Path,
    policy: BatchPolicy,
) -> Result<BatchReport<ImportStats>, SyncError> {
    let mut report = BatchReport::default();

    for kind in kinds {
        match kind.import(db, wiki_dir).await {
            Ok(stats) => report.push(kind.plural(), stats),
            Err(e) => handle_failure(&mut report, *kind, e, policy)?,
        }
    }

    info!(
        updated = report.total().records_updated,
        errors = report.total().errors,
        failed = report.failures.len(),
        "Import finished"
    );
    Ok(report)
}

fn handle_failure<S>(
    report: &mut BatchReport<S>,
    kind: EntityKind,
    err: SyncError,
    policy: BatchPolicy,
) -> Result<(), SyncError> {
    error!(entity_type = kind.plural(), error = %err, "Entity type failed");
    match policy {
        BatchPolicy::Abort => Err(err),
        BatchPolicy::Continue => {
            report.failures.push(KindFailure {
                entity_type: kind.plural(),
                message: err.to_string(),
            });
            Ok(())
        }
    }
}
