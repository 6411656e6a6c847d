//! Wiki → database import engine.

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use tracing::{debug, info, instrument, warn};

use super::error::SyncError;
use super::stats::{ImportStats, UpdateStatus};
use crate::db::SqliteDatabase;
use crate::wiki::WikiEntity;

/// Applies a parsed page's editable fields to the database.
pub type UpdateFn<E> =
    for<'a> fn(&'a E, &'a Path, &'a SqliteDatabase) -> BoxFuture<'a, Result<UpdateStatus, SyncError>>;

/// Everything the import engine needs to know about one entity type.
pub struct ImportDescriptor<E: 'static> {
    pub singular: &'static str,
    pub plural: &'static str,
    /// Directory under the wiki root; defaults to `plural`.
    pub subdir: Option<&'static str>,
    /// Glob matched against file names, e.g. `*.md`.
    pub pattern: &'static str,
    /// Also match files in nested directories.
    pub recursive: bool,
    /// `None` makes the type import-inert: pages are parsed, nothing is written.
    pub updater: Option<UpdateFn<E>>,
}

impl<E: 'static> Clone for ImportDescriptor<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: 'static> Copy for ImportDescriptor<E> {}

impl<E: 'static> ImportDescriptor<E> {
    pub fn input_dir(&self, wiki_dir: &Path) -> PathBuf {
        wiki_dir.join(self.subdir.unwrap_or(self.plural))
    }

    /// Pages of this type under the wiki root, sorted by path.
    ///
    /// A missing directory yields no pages.
    pub fn discover(&self, wiki_dir: &Path) -> Result<Vec<PathBuf>, SyncError> {
        let dir = self.input_dir(wiki_dir);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        find_documents(&dir, self.pattern, self.recursive)
    }
}

fn find_documents(dir: &Path, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>, SyncError> {
    let base = glob::Pattern::escape(&dir.to_string_lossy());
    let full = if recursive {
        format!("{}/**/{}", base, pattern)
    } else {
        format!("{}/{}", base, pattern)
    };

    let matches = glob::glob(&full).map_err(|e| SyncError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in matches {
        let path = entry.map_err(|e| SyncError::Io {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Import every page of one entity type into the database.
///
/// A missing directory is not an error. A page that fails to parse or update
/// is logged and counted in `errors`; the run continues with the next page.
#[instrument(skip_all, fields(entity_type = descriptor.plural))]
pub async fn import_entities<E: WikiEntity + 'static>(
    db: &SqliteDatabase,
    descriptor: &ImportDescriptor<E>,
    wiki_dir: &Path,
) -> Result<ImportStats, SyncError> {
    let mut stats = ImportStats::default();

    let dir = descriptor.input_dir(wiki_dir);
    if !dir.is_dir() {
        warn!(path = %dir.display(), "No {} directory in wiki", descriptor.plural);
        return Ok(stats);
    }

    let files = find_documents(&dir, descriptor.pattern, descriptor.recursive)?;
    stats.files_processed = files.len();

    for path in &files {
        let status = match import_file(descriptor, path, db).await {
            Ok(status) => status,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to import {}", descriptor.singular);
                UpdateStatus::Error
            }
        };
        debug!(path = %path.display(), %status, "Imported {}", descriptor.singular);
        stats.record(status);
    }

    info!(
        processed = stats.files_processed,
        updated = stats.records_updated,
        skipped = stats.records_skipped,
        errors = stats.errors,
        "Imported {}",
        descriptor.plural
    );

    Ok(stats)
}

async fn import_file<E: WikiEntity + 'static>(
    descriptor: &ImportDescriptor<E>,
    path: &Path,
    db: &SqliteDatabase,
) -> Result<UpdateStatus, SyncError> {
    let Some(entity) = E::read_file(path)? else {
        return Ok(UpdateStatus::Skipped);
    };

    match descriptor.updater {
        Some(update) => update(&entity, path, db).await,
        None => Ok(UpdateStatus::Skipped),
    }
}
