//! Database → wiki export engine.

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use tracing::{debug, info, instrument, warn};

use super::error::SyncError;
use super::stats::ExportStats;
use crate::db::{DbResult, Session, SqliteDatabase};
use crate::wiki::{FromDatabase, WikiEntity, WikiError, WriteStatus, write_if_changed};

/// Loads every row of one entity type inside a session.
pub type QueryFn<R> = for<'a> fn(&'a mut Session) -> BoxFuture<'a, DbResult<Vec<R>>>;

/// Converts a row into its page under the given directory.
pub type ConvertFn<R, E> = fn(&R, &Path) -> Result<E, WikiError>;

/// Everything the export engine needs to know about one entity type.
pub struct ExportDescriptor<R: 'static, E: 'static> {
    pub singular: &'static str,
    pub plural: &'static str,
    pub query: QueryFn<R>,
    /// Display name for log lines.
    pub name: fn(&R) -> Option<String>,
    /// Directory under the wiki root; defaults to `plural`.
    pub subdir: Option<&'static str>,
    /// Overrides [`FromDatabase::from_database`].
    pub convert: Option<ConvertFn<R, E>>,
}

impl<R: 'static, E: 'static> Clone for ExportDescriptor<R, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static, E: 'static> Copy for ExportDescriptor<R, E> {}

impl<R: 'static, E: 'static> ExportDescriptor<R, E> {
    pub fn output_dir(&self, wiki_dir: &Path) -> PathBuf {
        wiki_dir.join(self.subdir.unwrap_or(self.plural))
    }
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub wiki_dir: PathBuf,
    /// Rewrite pages even when their content is unchanged.
    pub force: bool,
}

impl ExportOptions {
    pub fn new(wiki_dir: impl Into<PathBuf>) -> Self {
        Self {
            wiki_dir: wiki_dir.into(),
            force: false,
        }
    }
}

/// Export every row of one entity type to the wiki.
///
/// Database failures are returned. A row that fails to convert or write is
/// logged, counted in `errors`, and the run moves on to the next row.
#[instrument(skip_all, fields(entity_type = descriptor.plural))]
pub async fn export_entities<R: 'static, E: 'static>(
    db: &SqliteDatabase,
    descriptor: &ExportDescriptor<R, E>,
    options: &ExportOptions,
) -> Result<ExportStats, SyncError>
where
    E: FromDatabase<R>,
{
    let rows = {
        let mut session = db.session_scope().await?;
        let rows = (descriptor.query)(&mut session).await?;
        session.commit().await?;
        rows
    };

    let mut stats = ExportStats::default();
    if rows.is_empty() {
        warn!("No {} found in database", descriptor.plural);
        return Ok(stats);
    }

    let dir = descriptor.output_dir(&options.wiki_dir);
    for row in &rows {
        stats.files_processed += 1;
        let name = (descriptor.name)(row).unwrap_or_else(|| "unknown".to_string());

        match export_row(descriptor, row, &dir, options.force) {
            Ok(status) => {
                debug!(entity = %name, %status, "Exported {}", descriptor.singular);
                stats.record(status);
            }
            Err(e) => {
                warn!(entity = %name, error = %e, "Failed to export {}", descriptor.singular);
                stats.errors += 1;
            }
        }
    }

    info!(
        processed = stats.files_processed,
        created = stats.entries_created,
        updated = stats.entries_updated,
        skipped = stats.entries_skipped,
        errors = stats.errors,
        "Exported {}",
        descriptor.plural
    );

    Ok(stats)
}

fn export_row<R: 'static, E: 'static>(
    descriptor: &ExportDescriptor<R, E>,
    row: &R,
    dir: &Path,
    force: bool,
) -> Result<WriteStatus, WikiError>
where
    E: FromDatabase<R>,
{
    let entity = match descriptor.convert {
        Some(convert) => convert(row, dir)?,
        None => E::from_database(row, dir)?,
    };
    write_if_changed(entity.path(), &entity.render(), force)
}
