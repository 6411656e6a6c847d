//! Database error types.
//!
//! Uses miette for diagnostic output and thiserror for the derive macros.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} '{key}'")]
    #[diagnostic(code(jwiki::db::not_found))]
    NotFound { entity_type: String, key: String },

    #[error("Invalid data: {message}")]
    #[diagnostic(code(jwiki::db::invalid_data))]
    InvalidData { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(jwiki::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(jwiki::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(jwiki::db::connection_error),
        help("Check the database path, or pass --db / set JWIKI_DB")
    )]
    Connection { message: String },
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
