//! City pages.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::document::{WikiBuilder, WikiDocument, date_list, name_list, slugify};
use super::entity::{FromDatabase, WikiEntity, overlay, require_name};
use super::error::WikiError;
use crate::db::CityRecord;

const TITLE: &str = "Cities";
const COUNTRY: &str = "Country";
const LOCATIONS: &str = "Locations";
const ENTRIES: &str = "Entries";
const NOTES: &str = "Notes";

/// A city's page, listing its locations and the entries that visited them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WikiCity {
    pub path: PathBuf,
    pub name: String,
    pub country: Option<String>,
    pub locations: Vec<String>,
    pub entries: Vec<NaiveDate>,
    /// Editable.
    pub notes: Option<String>,
}

impl WikiEntity for WikiCity {
    const KIND: &'static str = "city";
    const SECTIONS: &'static [&'static str] = &[COUNTRY, LOCATIONS, ENTRIES, NOTES];

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
        let country = self
            .country
            .iter()
            .map(|c| format!("- {}", c))
            .collect();

        WikiBuilder::new(TITLE, &self.name)
            .section_if_any(COUNTRY, country)
            .section_if_any(LOCATIONS, name_list(&self.locations))
            .section_if_any(ENTRIES, date_list(&self.entries))
            .text_section(NOTES, self.notes.as_deref())
            .build()
    }
}

impl FromDatabase<CityRecord> for WikiCity {
    fn from_database(record: &CityRecord, dir: &Path) -> Result<Self, WikiError> {
        let path = dir.join(format!("{}.md", slugify(&record.name)));
        let existing = Self::from_file(&path).and_then(|c| c.notes);

        Ok(Self {
            name: record.name.clone(),
            country: record.country.clone(),
            locations: record.locations.clone(),
            entries: record.entries.clone(),
            notes: overlay(existing, record.notes.as_deref()),
            path,
        })
    }
}
