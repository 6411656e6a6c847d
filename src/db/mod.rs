//! Database layer for the journal metadata.
//!
//! # Architecture
//!
//! - `error`: Storage error types
//! - `models`: Records consumed by the sync engines
//! - `sqlite`: SQLx-backed connection, session guard and per-entity queries

mod error;
mod models;
pub mod sqlite;

#[cfg(test)]
mod error_test;
#[cfg(test)]
mod models_test;

pub use error::{DbError, DbResult};
pub use models::*;
pub use sqlite::{CountedTable, EditableField, Session, SqliteDatabase};
