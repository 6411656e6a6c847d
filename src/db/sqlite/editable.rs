//! Reads and writes of hand-editable text columns.
//!
//! Import only ever touches these columns; everything else in the schema is
//! authoritative in the database.

use sqlx::Row;

use super::helpers::db_err;
use super::session::Session;
use crate::db::{DbError, DbResult};

/// A hand-editable text column, addressed by its entity's natural key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    CityNotes,
    LocationNotes,
    PersonNotes,
    EventNotes,
    ThemeDescription,
    EntryNotes,
}

impl EditableField {
    /// `(table, key column, text column)`.
    fn columns(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            EditableField::CityNotes => ("city", "name", "notes"),
            EditableField::LocationNotes => ("location", "name", "notes"),
            EditableField::PersonNotes => ("person", "name", "notes"),
            EditableField::EventNotes => ("event", "name", "notes"),
            EditableField::ThemeDescription => ("theme", "name", "description"),
            EditableField::EntryNotes => ("entry", "date", "notes"),
        }
    }

    /// Name of the owning entity type, for error messages.
    pub fn entity_type(&self) -> &'static str {
        self.columns().0
    }
}

impl Session {
    /// Current value of an editable column.
    ///
    /// Returns `Ok(None)` when no row has the given key, `Ok(Some(None))` when
    /// the row exists but the column is empty.
    pub async fn editable_text(
        &mut self,
        field: EditableField,
        key: &str,
    ) -> DbResult<Option<Option<String>>> {
        let (table, key_column, column) = field.columns();
        let sql = format!(
            "SELECT {} AS value FROM {} WHERE {} = ?",
            column, table, key_column
        );

        let row = sqlx::query(&sql)
            .bind(key)
            .fetch_optional(self.conn())
            .await
            .map_err(db_err)?;

        match row {
            Some(row) => {
                let value: Option<String> = row.try_get("value").map_err(db_err)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Overwrite an editable column.
    pub async fn set_editable_text(
        &mut self,
        field: EditableField,
        key: &str,
        value: Option<&str>,
    ) -> DbResult<()> {
        let (table, key_column, column) = field.columns();
        let sql = format!("UPDATE {} SET {} = ? WHERE {} = ?", table, column, key_column);

        let result = sqlx::query(&sql)
            .bind(value)
            .bind(key)
            .execute(self.conn())
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: field.entity_type().to_string(),
                key: key.to_string(),
            });
        }

        Ok(())
    }
}
