//! People queries.

use chrono::NaiveDate;
use sqlx::Row;

use super::helpers::{db_err, group_by_owner, take_group};
use super::session::Session;
use crate::db::{DbResult, Id, ManuscriptCharacter, Mention, NewPerson, PersonRecord};

impl Session {
    /// All people with their appearances, events and manuscript mapping.
    pub async fn people(&mut self) -> DbResult<Vec<PersonRecord>> {
        let rows = sqlx::query(
            "SELECT p.id, p.name, p.full_name, p.relation_type, p.notes,
                    mc.character_name, mc.role
             FROM person p
             LEFT JOIN manuscript_character mc ON mc.person_id = p.id
             ORDER BY p.name",
        )
        .fetch_all(self.conn())
        .await
        .map_err(db_err)?;

        let mentions: Vec<(Id, NaiveDate, Option<String>)> = sqlx::query_as(
            "SELECT ep.person_id, e.date, ep.context
             FROM entry_person ep
             JOIN entry e ON e.id = ep.entry_id
             ORDER BY e.date",
        )
        .fetch_all(self.conn())
        .await
        .map_err(db_err)?;
        let mut appearances = group_by_owner(
            mentions
                .into_iter()
                .map(|(person_id, date, context)| (person_id, Mention { date, context })),
        );

        let events: Vec<(Id, String)> = sqlx::query_as(
            "SELECT DISTINCT ep.person_id, ev.name
             FROM entry_person ep
             JOIN entry_event ee ON ee.entry_id = ep.entry_id
             JOIN event ev ON ev.id = ee.event_id
             ORDER BY ev.name",
        )
        .fetch_all(self.conn())
        .await
        .map_err(db_err)?;
        let mut events = group_by_owner(events);

        rows.into_iter()
            .map(|row| -> DbResult<PersonRecord> {
                let id: Id = row.try_get("id").map_err(db_err)?;
                let character: Option<String> = row.try_get("character_name").map_err(db_err)?;
                let role: Option<String> = row.try_get("role").map_err(db_err)?;

                Ok(PersonRecord {
                    id,
                    name: row.try_get("name").map_err(db_err)?,
                    full_name: row.try_get("full_name").map_err(db_err)?,
                    relation_type: row.try_get("relation_type").map_err(db_err)?,
                    notes: row.try_get("notes").map_err(db_err)?,
                    appearances: take_group(&mut appearances, id),
                    events: take_group(&mut events, id),
                    manuscript: character.map(|character| ManuscriptCharacter { character, role }),
                })
            })
            .collect()
    }

    /// Insert a person, returning its id.
    pub async fn create_person(&mut self, person: &NewPerson) -> DbResult<Id> {
        let result = sqlx::query(
            "INSERT INTO person (name, full_name, relation_type, notes) VALUES (?, ?, ?, ?)",
        )
        .bind(&person.name)
        .bind(&person.full_name)
        .bind(&person.relation_type)
        .bind(&person.notes)
        .execute(self.conn())
        .await
        .map_err(db_err)?;

        Ok(result.last_insert_rowid())
    }

    /// Record that a person is mentioned in an entry.
    pub async fn add_mention(
        &mut self,
        entry_id: Id,
        person_id: Id,
        context: Option<&str>,
    ) -> DbResult<()> {
        sqlx::query("INSERT INTO entry_person (entry_id, person_id, context) VALUES (?, ?, ?)")
            .bind(entry_id)
            .bind(person_id)
            .bind(context)
            .execute(self.conn())
            .await
            .map_err(db_err)?;
        Ok(())
    }

    /// Map a person onto a manuscript character, replacing any previous mapping.
    pub async fn set_manuscript_character(
        &mut self,
        person_id: Id,
        character: &ManuscriptCharacter,
    ) -> DbResult<()> {
        sqlx::query(
            "INSERT INTO manuscript_character (person_id, character_name, role)
             VALUES (?, ?, ?)
             ON CONFLICT(person_id) DO UPDATE SET
               character_name = excluded.character_name,
               role = excluded.role",
        )
        .bind(person_id)
        .bind(&character.character)
        .bind(&character.role)
        .execute(self.conn())
        .await
        .map_err(db_err)?;
        Ok(())
    }
}
