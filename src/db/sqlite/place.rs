//! City and location queries.

use chrono::NaiveDate;
use sqlx::Row;

use super::helpers::{db_err, group_by_owner, take_group};
use super::session::Session;
use crate::db::{CityRecord, DbResult, Id, LocationRecord};

impl Session {
    /// All cities with their locations and visit dates.
    pub async fn cities(&mut self) -> DbResult<Vec<CityRecord>> {
        let rows = sqlx::query("SELECT id, name, country, notes FROM city ORDER BY name")
            .fetch_all(self.conn())
            .await
            .map_err(db_err)?;

        let locations: Vec<(Id, String)> = sqlx::query_as(
            "SELECT city_id, name FROM location WHERE city_id IS NOT NULL ORDER BY name",
        )
        .fetch_all(self.conn())
        .await
        .map_err(db_err)?;
        let mut locations = group_by_owner(locations);

        let entries: Vec<(Id, NaiveDate)> = sqlx::query_as(
            "SELECT DISTINCT l.city_id, e.date
             FROM entry_location el
             JOIN location l ON l.id = el.location_id
             JOIN entry e ON e.id = el.entry_id
             WHERE l.city_id IS NOT NULL
             ORDER BY e.date",
        )
        .fetch_all(self.conn())
        .await
        .map_err(db_err)?;
        let mut entries = group_by_owner(entries);

        rows.into_iter()
            .map(|row| -> DbResult<CityRecord> {
                let id: Id = row.try_get("id").map_err(db_err)?;
                Ok(CityRecord {
                    id,
                    name: row.try_get("name").map_err(db_err)?,
                    country: row.try_get("country").map_err(db_err)?,
                    notes: row.try_get("notes").map_err(db_err)?,
                    locations: take_group(&mut locations, id),
                    entries: take_group(&mut entries, id),
                })
            })
            .collect()
    }

    /// All locations with their city and visit dates.
    pub async fn locations(&mut self) -> DbResult<Vec<LocationRecord>> {
        let rows = sqlx::query(
            "SELECT l.id, l.name, l.notes, c.name AS city
             FROM location l
             LEFT JOIN city c ON c.id = l.city_id
             ORDER BY l.name",
        )
        .fetch_all(self.conn())
        .await
        .map_err(db_err)?;

        let mut visits = self.entry_dates_by("entry_location", "location_id").await?;

        rows.into_iter()
            .map(|row| -> DbResult<LocationRecord> {
                let id: Id = row.try_get("id").map_err(db_err)?;
                Ok(LocationRecord {
                    id,
                    name: row.try_get("name").map_err(db_err)?,
                    city: row.try_get("city").map_err(db_err)?,
                    notes: row.try_get("notes").map_err(db_err)?,
                    visits: take_group(&mut visits, id),
                })
            })
            .collect()
    }

    /// Insert a city, returning its id.
    pub async fn create_city(&mut self, name: &str, country: Option<&str>) -> DbResult<Id> {
        let result = sqlx::query("INSERT INTO city (name, country) VALUES (?, ?)")
            .bind(name)
            .bind(country)
            .execute(self.conn())
            .await
            .map_err(db_err)?;
        Ok(result.last_insert_rowid())
    }

    /// Insert a location, optionally inside a city, returning its id.
    pub async fn create_location(&mut self, name: &str, city_id: Option<Id>) -> DbResult<Id> {
        let result = sqlx::query("INSERT INTO location (name, city_id) VALUES (?, ?)")
            .bind(name)
            .bind(city_id)
            .execute(self.conn())
            .await
            .map_err(db_err)?;
        Ok(result.last_insert_rowid())
    }

    /// Record a visit to a location in an entry.
    pub async fn link_location(&mut self, entry_id: Id, location_id: Id) -> DbResult<()> {
        sqlx::query("INSERT OR IGNORE INTO entry_location (entry_id, location_id) VALUES (?, ?)")
            .bind(entry_id)
            .bind(location_id)
            .execute(self.conn())
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
