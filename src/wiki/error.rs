//! Wiki document error types.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while reading, converting or writing wiki documents.
#[derive(Error, Diagnostic, Debug)]
pub enum WikiError {
    #[error("IO error at {}: {source}", path.display())]
    #[diagnostic(code(jwiki::wiki::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Document {} has no entity name", path.display())]
    #[diagnostic(
        code(jwiki::wiki::missing_name),
        help("Every wiki page needs a '## <name>' heading below its title")
    )]
    MissingName { path: PathBuf },

    #[error("Invalid {field} in {}: {message}", path.display())]
    #[diagnostic(code(jwiki::wiki::invalid_field))]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl WikiError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        WikiError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
