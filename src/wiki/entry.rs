//! Journal entry pages, nested by year.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};

use super::document::{WikiBuilder, WikiDocument, name_list};
use super::entity::{FromDatabase, WikiEntity, overlay, require_name};
use super::error::WikiError;
use crate::db::{EntryRecord, ManuscriptEntry};

const TITLE: &str = "Entries";
const METADATA: &str = "Metadata";
const PEOPLE: &str = "People";
const LOCATIONS: &str = "Locations";
const EVENTS: &str = "Events";
const TAGS: &str = "Tags";
const THEMES: &str = "Themes";
const MANUSCRIPT: &str = "Manuscript";
const NOTES: &str = "Notes";

/// An entry's page at `entries/<yyyy>/<yyyy-mm-dd>.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiEntry {
    pub path: PathBuf,
    pub date: NaiveDate,
    pub word_count: Option<i64>,
    pub people: Vec<String>,
    pub locations: Vec<String>,
    pub events: Vec<String>,
    pub tags: Vec<String>,
    pub themes: Vec<String>,
    pub manuscript: Option<ManuscriptEntry>,
    /// Editable.
    pub notes: Option<String>,
}

impl WikiEntry {
    /// Page location for an entry date under the entries directory.
    pub fn path_for(dir: &Path, date: &NaiveDate) -> PathBuf {
        dir.join(date.year().to_string())
            .join(format!("{}.md", date.format("%Y-%m-%d")))
    }

    fn bare(path: &Path, date: NaiveDate) -> Self {
        Self {
            path: path.to_path_buf(),
            date,
            word_count: None,
            people: Vec::new(),
            locations: Vec::new(),
            events: Vec::new(),
            tags: Vec::new(),
            themes: Vec::new(),
            manuscript: None,
            notes: None,
        }
    }
}

impl WikiEntity for WikiEntry {
    const KIND: &'static str = "entry";
    const SECTIONS: &'static [&'static str] = &[
        METADATA, PEOPLE, LOCATIONS, EVENTS, TAGS, THEMES, MANUSCRIPT, NOTES,
    ];

    fn path(&self) -> &Path {
        &self.path
    }

    fn name(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    fn from_document(path: &Path, document: &WikiDocument) -> Result<Self, WikiError> {
        let name = require_name(path, document)?;
        let date = NaiveDate::parse_from_str(&name, "%Y-%m-%d").map_err(|e| {
            WikiError::InvalidField {
                path: path.to_path_buf(),
                field: "date",
                message: format!("'{}': {}", name, e),
            }
        })?;

        let mut entry = Self::bare(path, date);
        entry.notes = document.text(NOTES);
        Ok(entry)
    }

    fn to_wiki(&self) -> Vec<String> {
        let mut metadata = Vec::new();
        if let Some(words) = self.word_count {
            metadata.push(format!("- Words: {}", words));
        }

        let manuscript = self
            .manuscript
            .as_ref()
            .map(|m| {
                vec![
                    format!("- Status: {}", m.status),
                    format!("- Edited: {}", if m.edited { "yes" } else { "no" }),
                ]
            })
            .unwrap_or_default();

        WikiBuilder::new(TITLE, &self.name())
            .section_if_any(METADATA, metadata)
            .section_if_any(PEOPLE, name_list(&self.people))
            .section_if_any(LOCATIONS, name_list(&self.locations))
            .section_if_any(EVENTS, name_list(&self.events))
            .section_if_any(TAGS, name_list(&self.tags))
            .section_if_any(THEMES, name_list(&self.themes))
            .section_if_any(MANUSCRIPT, manuscript)
            .text_section(NOTES, self.notes.as_deref())
            .build()
    }
}

impl FromDatabase<EntryRecord> for WikiEntry {
    fn from_database(record: &EntryRecord, dir: &Path) -> Result<Self, WikiError> {
        let path = Self::path_for(dir, &record.date);
        let existing = Self::from_file(&path).and_then(|e| e.notes);

        Ok(Self {
            date: record.date,
            word_count: Some(record.word_count),
            people: record.people.clone(),
            locations: record.locations.clone(),
            events: record.events.clone(),
            tags: record.tags.clone(),
            themes: record.themes.clone(),
            manuscript: record.manuscript.clone(),
            notes: overlay(existing, record.notes.as_deref()),
            path,
        })
    }
}
