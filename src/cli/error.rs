use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;
use crate::db::DbError;
use crate::sync::SyncError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DbError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Sync(#[from] SyncError),

    #[error("Cannot create {}: {source}", path.display())]
    #[diagnostic(code(jwiki::cli::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(jwiki::cli::output))]
    Output { message: String },

    #[error("{errors} item(s) failed and {failed} entity type(s) aborted")]
    #[diagnostic(
        code(jwiki::cli::incomplete),
        help("Run with RUST_LOG=journal_wiki=debug to see which documents failed")
    )]
    Incomplete { errors: usize, failed: usize },
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
