//! Theme and tag queries.

use sqlx::Row;

use super::helpers::{db_err, take_group};
use super::session::Session;
use crate::db::{DbResult, Id, TagRecord, ThemeRecord};

impl Session {
    /// All themes with the dates of the entries carrying them.
    pub async fn themes(&mut self) -> DbResult<Vec<ThemeRecord>> {
        let rows = sqlx::query("SELECT id, name, description FROM theme ORDER BY name")
            .fetch_all(self.conn())
            .await
            .map_err(db_err)?;

        let mut entries = self.entry_dates_by("entry_theme", "theme_id").await?;

        rows.into_iter()
            .map(|row| -> DbResult<ThemeRecord> {
                let id: Id = row.try_get("id").map_err(db_err)?;
                Ok(ThemeRecord {
                    id,
                    name: row.try_get("name").map_err(db_err)?,
                    description: row.try_get("description").map_err(db_err)?,
                    entries: take_group(&mut entries, id),
                })
            })
            .collect()
    }

    /// All tags with the dates of the entries carrying them.
    pub async fn tags(&mut self) -> DbResult<Vec<TagRecord>> {
        let rows = sqlx::query("SELECT id, name FROM tag ORDER BY name")
            .fetch_all(self.conn())
            .await
            .map_err(db_err)?;

        let mut entries = self.entry_dates_by("entry_tag", "tag_id").await?;

        rows.into_iter()
            .map(|row| -> DbResult<TagRecord> {
                let id: Id = row.try_get("id").map_err(db_err)?;
                Ok(TagRecord {
                    id,
                    name: row.try_get("name").map_err(db_err)?,
                    entries: take_group(&mut entries, id),
                })
            })
            .collect()
    }

    /// Insert a theme, returning its id.
    pub async fn create_theme(&mut self, name: &str, description: Option<&str>) -> DbResult<Id> {
        let result = sqlx::query("INSERT INTO theme (name, description) VALUES (?, ?)")
            .bind(name)
            .bind(description)
            .execute(self.conn())
            .await
            .map_err(db_err)?;
        Ok(result.last_insert_rowid())
    }

    /// Insert a tag, returning its id.
    pub async fn create_tag(&mut self, name: &str) -> DbResult<Id> {
        let result = sqlx::query("INSERT INTO tag (name) VALUES (?)")
            .bind(name)
            .execute(self.conn())
            .await
            .map_err(db_err)?;
        Ok(result.last_insert_rowid())
    }

    /// Attach a theme to an entry.
    pub async fn link_theme(&mut self, entry_id: Id, theme_id: Id) -> DbResult<()> {
        sqlx::query("INSERT OR IGNORE INTO entry_theme (entry_id, theme_id) VALUES (?, ?)")
            .bind(entry_id)
            .bind(theme_id)
            .execute(self.conn())
            .await
            .map_err(db_err)?;
        Ok(())
    }

    /// Attach a tag to an entry.
    pub async fn link_tag(&mut self, entry_id: Id, tag_id: Id) -> DbResult<()> {
        sqlx::query("INSERT OR IGNORE INTO entry_tag (entry_id, tag_id) VALUES (?, ?)")
            .bind(entry_id)
            .bind(tag_id)
            .execute(self.conn())
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
