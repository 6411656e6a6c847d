//! Theme pages. The description is written by hand and leads the page.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::document::{WikiBuilder, WikiDocument, date_list, slugify};
use super::entity::{FromDatabase, WikiEntity, overlay, require_name};
use super::error::WikiError;
use crate::db::ThemeRecord;

const TITLE: &str = "Themes";
const DESCRIPTION: &str = "Description";
const ENTRIES: &str = "Entries";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WikiTheme {
    pub path: PathBuf,
    pub name: String,
    pub entries: Vec<NaiveDate>,
    /// Editable.
    pub description: Option<String>,
}

impl WikiEntity for WikiTheme {
    const KIND: &'static str = "theme";
    const SECTIONS: &'static [&'static str] = &[DESCRIPTION, ENTRIES];

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
            description: document.text(DESCRIPTION),
            ..Default::default()
        })
    }

    fn to_wiki(&self) -> Vec<String> {
        WikiBuilder::new(TITLE, &self.name)
            .text_section(DESCRIPTION, self.description.as_deref())
            .section_if_any(ENTRIES, date_list(&self.entries))
            .build()
    }
}

impl FromDatabase<ThemeRecord> for WikiTheme {
    fn from_database(record: &ThemeRecord, dir: &Path) -> Result<Self, WikiError> {
        let path = dir.join(format!("{}.md", slugify(&record.name)));
        let existing = Self::from_file(&path).and_then(|t| t.description);

        Ok(Self {
            name: record.name.clone(),
            entries: record.entries.clone(),
            description: overlay(existing, record.description.as_deref()),
            path,
        })
    }
}
