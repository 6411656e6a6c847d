//! Scoped database session.

use sqlx::{Sqlite, SqliteConnection, Transaction};

use super::helpers::db_err;
use crate::db::DbResult;

/// One unit of work against the journal database.
///
/// Entity queries and writes are inherent methods implemented next to each
/// entity's SQL (see the sibling modules). Dropping a session without calling
/// [`Session::commit`] rolls its transaction back.
pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    pub(crate) fn new(tx: Transaction<'static, Sqlite>) -> Self {
        Self { tx }
    }

    pub(crate) fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }

    /// Commit the session's transaction.
    pub async fn commit(self) -> DbResult<()> {
        self.tx.commit().await.map_err(db_err)
    }

    /// Count the rows of one of the journal's entity tables.
    pub async fn count_rows(&mut self, table: CountedTable) -> DbResult<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", table.as_str());
        let count: i64 = sqlx::query_scalar(&sql)
            .fetch_one(self.conn())
            .await
            .map_err(db_err)?;
        Ok(count as usize)
    }
}

/// Tables whose rows can be counted through [`Session::count_rows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountedTable {
    City,
    Location,
    Person,
    Event,
    Theme,
    Tag,
    Entry,
}

impl CountedTable {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountedTable::City => "city",
            CountedTable::Location => "location",
            CountedTable::Person => "person",
            CountedTable::Event => "event",
            CountedTable::Theme => "theme",
            CountedTable::Tag => "tag",
            CountedTable::Entry => "entry",
        }
    }
}
