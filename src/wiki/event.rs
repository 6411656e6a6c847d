//! Event pages.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::document::{WikiBuilder, WikiDocument, date_list, name_list, slugify};
use super::entity::{FromDatabase, WikiEntity, overlay, require_name};
use super::error::WikiError;
use crate::db::EventRecord;

const TITLE: &str = "Events";
const ENTRIES: &str = "Entries";
const PEOPLE: &str = "People";
const NOTES: &str = "Notes";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WikiEvent {
    pub path: PathBuf,
    pub name: String,
    pub entries: Vec<NaiveDate>,
    pub people: Vec<String>,
    /// Editable.
    pub notes: Option<String>,
}

impl WikiEntity for WikiEvent {
    const KIND: &'static str = "event";
    const SECTIONS: &'static [&'static str] = &[ENTRIES, PEOPLE, NOTES];

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
        WikiBuilder::new(TITLE, &self.name)
            .section_if_any(ENTRIES, date_list(&self.entries))
            .section_if_any(PEOPLE, name_list(&self.people))
            .text_section(NOTES, self.notes.as_deref())
            .build()
    }
}

impl FromDatabase<EventRecord> for WikiEvent {
    fn from_database(record: &EventRecord, dir: &Path) -> Result<Self, WikiError> {
        let path = dir.join(format!("{}.md", slugify(&record.name)));
        let existing = Self::from_file(&path).and_then(|e| e.notes);

        Ok(Self {
            name: record.name.clone(),
            entries: record.entries.clone(),
            people: record.people.clone(),
            notes: overlay(existing, record.notes.as_deref()),
            path,
        })
    }
}
