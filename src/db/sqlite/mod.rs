//! SQLite implementation of the journal database.
//!
//! Queries live next to the entity they load; every one of them is an
//! inherent method on [`Session`], so all reads of one export run share a
//! single transaction.

mod connection;
mod editable;
mod entry;
mod event;
mod helpers;
mod person;
mod place;
mod session;
mod theme;


pub use connection::SqliteDatabase;
pub use editable::EditableField;
pub use session::{CountedTable, Session};
