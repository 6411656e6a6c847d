//! People pages.

use std::path::{Path, PathBuf};

use super::document::{WikiBuilder, WikiDocument, date_link, name_list, slugify};
use super::entity::{FromDatabase, WikiEntity, overlay, require_name};
use super::error::WikiError;
use crate::db::{ManuscriptCharacter, Mention, PersonRecord};

const TITLE: &str = "People";
const DETAILS: &str = "Details";
const APPEARANCES: &str = "Appearances";
const EVENTS: &str = "Events";
const MANUSCRIPT: &str = "Manuscript";
const NOTES: &str = "Notes";

/// A person's page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WikiPerson {
    pub path: PathBuf,
    pub name: String,
    pub full_name: Option<String>,
    pub category: Option<String>,
    pub appearances: Vec<Mention>,
    pub events: Vec<String>,
    pub manuscript: Option<ManuscriptCharacter>,
    /// Editable.
    pub notes: Option<String>,
}

impl WikiEntity for WikiPerson {
    const KIND: &'static str = "person";
    const SECTIONS: &'static [&'static str] = &[DETAILS, APPEARANCES, EVENTS, MANUSCRIPT, NOTES];

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
        let mut details = Vec::new();
        if let Some(full_name) = &self.full_name {
            details.push(format!("- Full name: {}", full_name));
        }
        if let Some(category) = &self.category {
            details.push(format!("- Category: {}", category));
        }

        let appearances = self
            .appearances
            .iter()
            .map(|m| match &m.context {
                Some(context) => format!("- {}: {}", date_link(&m.date), context),
                None => format!("- {}", date_link(&m.date)),
            })
            .collect();

        let manuscript = self
            .manuscript
            .as_ref()
            .map(|m| {
                let mut lines = vec![format!("- Character: {}", m.character)];
                if let Some(role) = &m.role {
                    lines.push(format!("- Role: {}", role));
                }
                lines
            })
            .unwrap_or_default();

        WikiBuilder::new(TITLE, &self.name)
            .section_if_any(DETAILS, details)
            .section_if_any(APPEARANCES, appearances)
            .section_if_any(EVENTS, name_list(&self.events))
            .section_if_any(MANUSCRIPT, manuscript)
            .text_section(NOTES, self.notes.as_deref())
            .build()
    }
}

impl FromDatabase<PersonRecord> for WikiPerson {
    fn from_database(record: &PersonRecord, dir: &Path) -> Result<Self, WikiError> {
        let path = dir.join(format!("{}.md", slugify(&record.name)));
        let existing = Self::from_file(&path).and_then(|p| p.notes);

        Ok(Self {
            name: record.name.clone(),
            full_name: record.full_name.clone(),
            category: record.relation_type.clone(),
            appearances: record.appearances.clone(),
            events: record.events.clone(),
            manuscript: record.manuscript.clone(),
            notes: overlay(existing, record.notes.as_deref()),
            path,
        })
    }
}
