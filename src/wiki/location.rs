//! Location pages, grouped on disk by city.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::document::{WikiBuilder, WikiDocument, date_list, slugify, wikilink};
use super::entity::{FromDatabase, WikiEntity, overlay, require_name};
use super::error::WikiError;
use crate::db::LocationRecord;

const TITLE: &str = "Locations";
const CITY: &str = "City";
const VISITS: &str = "Visits";
const NOTES: &str = "Notes";

const UNASSIGNED_DIR: &str = "_unassigned";

/// A location's page.
///
/// Locations are grouped on disk by city slug; locations without a city go
/// under `_unassigned`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WikiLocation {
    pub path: PathBuf,
    pub name: String,
    pub city: Option<String>,
    pub visits: Vec<NaiveDate>,
    /// Editable.
    pub notes: Option<String>,
}

impl WikiEntity for WikiLocation {
    const KIND: &'static str = "location";
    const SECTIONS: &'static [&'static str] = &[CITY, VISITS, NOTES];

    fn path(&self) -> &Path {
        &self.path
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn from_document(path: &Path, document: &WikiDocument) -> Result<Self, WikiError> {
        Ok(Self {
            path: path.to_path_buf(),
            name: require_name(path, document)?,
            notes: document.text(NOTES),
            ..Default::default()
        })
    }

    fn to_wiki(&self) -> Vec<String> {
        let city = self
            .city
            .iter()
            .map(|c| format!("- {}", wikilink(c)))
            .collect();

        WikiBuilder::new(TITLE, &self.name)
            .section_if_any(CITY, city)
            .section_if_any(VISITS, date_list(&self.visits))
            .text_section(NOTES, self.notes.as_deref())
            .build()
    }
}

impl FromDatabase<LocationRecord> for WikiLocation {
    fn from_database(record: &LocationRecord, dir: &Path) -> Result<Self, WikiError> {
        let group = record
            .city
            .as_deref()
            .map(slugify)
            .unwrap_or_else(|| UNASSIGNED_DIR.to_string());
        let path = dir
            .join(group)
            .join(format!("{}.md", slugify(&record.name)));
        let existing = Self::from_file(&path).and_then(|l| l.notes);

        Ok(Self {
            name: record.name.clone(),
            city: record.city.clone(),
            visits: record.visits.clone(),
            notes: overlay(existing, record.notes.as_deref()),
            path,
        })
    }
}
