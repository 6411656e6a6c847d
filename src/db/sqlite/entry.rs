//! Entry queries.

use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::Row;

use super::helpers::{db_err, group_by_owner, take_group};
use super::session::Session;
use crate::db::{
    DbError, DbResult, EntryRecord, Id, ManuscriptEntry, ManuscriptStatus, NewEntry,
};

impl Session {
    /// All entries in date order, with every relation resolved.
    pub async fn entries(&mut self) -> DbResult<Vec<EntryRecord>> {
        let rows = sqlx::query(
            "SELECT e.id, e.date, e.word_count, e.notes, me.status, me.edited
             FROM entry e
             LEFT JOIN manuscript_entry me ON me.entry_id = e.id
             ORDER BY e.date",
        )
        .fetch_all(self.conn())
        .await
        .map_err(db_err)?;

        let mut people = self
            .entry_names(
                "SELECT ep.entry_id, p.name FROM entry_person ep
                 JOIN person p ON p.id = ep.person_id ORDER BY p.name",
            )
            .await?;
        let mut locations = self
            .entry_names(
                "SELECT el.entry_id, l.name FROM entry_location el
                 JOIN location l ON l.id = el.location_id ORDER BY l.name",
            )
            .await?;
        let mut events = self
            .entry_names(
                "SELECT ee.entry_id, ev.name FROM entry_event ee
                 JOIN event ev ON ev.id = ee.event_id ORDER BY ev.name",
            )
            .await?;
        let mut tags = self
            .entry_names(
                "SELECT et.entry_id, t.name FROM entry_tag et
                 JOIN tag t ON t.id = et.tag_id ORDER BY t.name",
            )
            .await?;
        let mut themes = self
            .entry_names(
                "SELECT et.entry_id, th.name FROM entry_theme et
                 JOIN theme th ON th.id = et.theme_id ORDER BY th.name",
            )
            .await?;

        rows.into_iter()
            .map(|row| -> DbResult<EntryRecord> {
                let id: Id = row.try_get("id").map_err(db_err)?;
                let status: Option<String> = row.try_get("status").map_err(db_err)?;
                let edited: Option<bool> = row.try_get("edited").map_err(db_err)?;

                let manuscript = match status {
                    Some(status) => Some(ManuscriptEntry {
                        status: ManuscriptStatus::from_str(&status)
                            .map_err(|message| DbError::InvalidData { message })?,
                        edited: edited.unwrap_or(false),
                    }),
                    None => None,
                };

                Ok(EntryRecord {
                    id,
                    date: row.try_get("date").map_err(db_err)?,
                    word_count: row.try_get("word_count").map_err(db_err)?,
                    notes: row.try_get("notes").map_err(db_err)?,
                    people: take_group(&mut people, id),
                    locations: take_group(&mut locations, id),
                    events: take_group(&mut events, id),
                    tags: take_group(&mut tags, id),
                    themes: take_group(&mut themes, id),
                    manuscript,
                })
            })
            .collect()
    }

    async fn entry_names(
        &mut self,
        sql: &'static str,
    ) -> DbResult<std::collections::HashMap<Id, Vec<String>>> {
        let rows: Vec<(Id, String)> = sqlx::query_as(sql)
            .fetch_all(self.conn())
            .await
            .map_err(db_err)?;
        Ok(group_by_owner(rows))
    }

    /// Dates of the entries linked through `link_table.link_column`, grouped by owner id.
    ///
    /// Both names come from the static query tables of the sibling modules.
    pub(crate) async fn entry_dates_by(
        &mut self,
        link_table: &'static str,
        link_column: &'static str,
    ) -> DbResult<std::collections::HashMap<Id, Vec<NaiveDate>>> {
        let sql = format!(
            "SELECT l.{col}, e.date FROM {table} l
             JOIN entry e ON e.id = l.entry_id
             ORDER BY e.date",
            col = link_column,
            table = link_table
        );
        let rows: Vec<(Id, NaiveDate)> = sqlx::query_as(&sql)
            .fetch_all(self.conn())
            .await
            .map_err(db_err)?;
        Ok(group_by_owner(rows))
    }

    /// Insert an entry, returning its id.
    pub async fn create_entry(&mut self, entry: &NewEntry) -> DbResult<Id> {
        let result = sqlx::query("INSERT INTO entry (date, word_count, notes) VALUES (?, ?, ?)")
            .bind(entry.date)
            .bind(entry.word_count)
            .bind(&entry.notes)
            .execute(self.conn())
            .await
            .map_err(db_err)?;

        Ok(result.last_insert_rowid())
    }

    /// Set an entry's manuscript adaptation, replacing any previous one.
    pub async fn set_manuscript_entry(
        &mut self,
        entry_id: Id,
        manuscript: &ManuscriptEntry,
    ) -> DbResult<()> {
        sqlx::query(
            "INSERT INTO manuscript_entry (entry_id, status, edited)
             VALUES (?, ?, ?)
             ON CONFLICT(entry_id) DO UPDATE SET
               status = excluded.status,
               edited = excluded.edited",
        )
        .bind(entry_id)
        .bind(manuscript.status.to_string())
        .bind(manuscript.edited)
        .execute(self.conn())
        .await
        .map_err(db_err)?;
        Ok(())
    }
}
