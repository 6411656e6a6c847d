//! Tag pages.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::document::{WikiBuilder, WikiDocument, date_list, slugify};
use super::entity::{FromDatabase, WikiEntity, require_name};
use super::error::WikiError;
use crate::db::TagRecord;

const TITLE: &str = "Tags";
const ENTRIES: &str = "Entries";

/// A tag's page. Tags have no editable fields; the page is fully derived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WikiTag {
    pub path: PathBuf,
    pub name: String,
    pub entries: Vec<NaiveDate>,
}

impl WikiEntity for WikiTag {
    const KIND: &'static str = "tag";
    const SECTIONS: &'static [&'static str] = &[ENTRIES];

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
            entries: Vec::new(),
        })
    }

    fn to_wiki(&self) -> Vec<String> {
        WikiBuilder::new(TITLE, &self.name)
            .section(ENTRIES, date_list(&self.entries))
            .build()
    }
}

impl FromDatabase<TagRecord> for WikiTag {
    fn from_database(record: &TagRecord, dir: &Path) -> Result<Self, WikiError> {
        Ok(Self {
            path: dir.join(format!("{}.md", slugify(&record.name))),
            name: record.name.clone(),
            entries: record.entries.clone(),
        })
    }
}
