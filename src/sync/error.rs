//! Batch-fatal sync errors.
//!
//! Per-document and per-row failures never surface here; they are logged and
//! counted in the run's statistics instead.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;
use crate::wiki::WikiError;

#[derive(Error, Diagnostic, Debug)]
pub enum SyncError {
    #[error("Database error: {0}")]
    #[diagnostic(code(jwiki::sync::database))]
    Database(#[from] DbError),

    #[error("Wiki error: {0}")]
    #[diagnostic(code(jwiki::sync::wiki))]
    Wiki(#[from] WikiError),

    #[error("Invalid document pattern '{pattern}': {message}")]
    #[diagnostic(code(jwiki::sync::invalid_pattern))]
    InvalidPattern { pattern: String, message: String },

    #[error("Cannot read wiki directory {}: {source}", path.display())]
    #[diagnostic(
        code(jwiki::sync::io),
        help("Check that the wiki directory exists and is readable")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
