//! Event queries.

use sqlx::Row;

use super::helpers::{db_err, group_by_owner, take_group};
use super::session::Session;
use crate::db::{DbResult, EventRecord, Id};

impl Session {
    /// All events with their entry dates and the people mentioned in them.
    pub async fn events(&mut self) -> DbResult<Vec<EventRecord>> {
        let rows = sqlx::query("SELECT id, name, notes FROM event ORDER BY name")
            .fetch_all(self.conn())
            .await
            .map_err(db_err)?;

        let mut entries = self.entry_dates_by("entry_event", "event_id").await?;

        let people: Vec<(Id, String)> = sqlx::query_as(
            "SELECT DISTINCT ee.event_id, p.name
             FROM entry_event ee
             JOIN entry_person ep ON ep.entry_id = ee.entry_id
             JOIN person p ON p.id = ep.person_id
             ORDER BY p.name",
        )
        .fetch_all(self.conn())
        .await
        .map_err(db_err)?;
        let mut people = group_by_owner(people);

        rows.into_iter()
            .map(|row| -> DbResult<EventRecord> {
                let id: Id = row.try_get("id").map_err(db_err)?;
                Ok(EventRecord {
                    id,
                    name: row.try_get("name").map_err(db_err)?,
                    notes: row.try_get("notes").map_err(db_err)?,
                    entries: take_group(&mut entries, id),
                    people: take_group(&mut people, id),
                })
            })
            .collect()
    }

    /// Insert an event, returning its id.
    pub async fn create_event(&mut self, name: &str, notes: Option<&str>) -> DbResult<Id> {
        let result = sqlx::query("INSERT INTO event (name, notes) VALUES (?, ?)")
            .bind(name)
            .bind(notes)
            .execute(self.conn())
            .await
            .map_err(db_err)?;
        Ok(result.last_insert_rowid())
    }

    /// Attach an event to an entry.
    pub async fn link_event(&mut self, entry_id: Id, event_id: Id) -> DbResult<()> {
        sqlx::query("INSERT OR IGNORE INTO entry_event (entry_id, event_id) VALUES (?, ?)")
            .bind(entry_id)
            .bind(event_id)
            .execute(self.conn())
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
