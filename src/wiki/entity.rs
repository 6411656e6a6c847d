//! The contract every synchronizable entity type implements.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{error, warn};

use super::document::WikiDocument;
use super::error::WikiError;

/// One wiki page type: parse from a document, render to lines, persist.
///
/// An entity built from the database carries every field; one parsed from a
/// document carries only its name and editable fields. Never rely on a parsed
/// entity's computed fields.
pub trait WikiEntity: Sized {
    /// Singular type name used in log fields.
    const KIND: &'static str;

    /// Every `### ` header [`WikiEntity::to_wiki`] can emit. Only these split
    /// a page into sections when it is read back.
    const SECTIONS: &'static [&'static str];

    /// Where this page lives.
    fn path(&self) -> &Path;

    /// Display name (the page's `## ` heading).
    fn name(&self) -> String;

    /// Extract the name and editable fields from a parsed document.
    fn from_document(path: &Path, document: &WikiDocument) -> Result<Self, WikiError>;

    /// Render the full page. Must be deterministic for a given entity state.
    fn to_wiki(&self) -> Vec<String>;

    /// Parse the document at `path`.
    ///
    /// `Ok(None)` when the file does not exist or is blank.
    fn read_file(path: &Path) -> Result<Option<Self>, WikiError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(WikiError::io(path, e)),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let document = WikiDocument::parse(&content, Self::SECTIONS);
        Self::from_document(path, &document).map(Some)
    }

    /// Parse the document at `path`, logging and discarding any failure.
    fn from_file(path: &Path) -> Option<Self> {
        match Self::read_file(path) {
            Ok(entity) => entity,
            Err(e) => {
                warn!(
                    entity_type = Self::KIND,
                    path = %path.display(),
                    error = %e,
                    "Unreadable wiki document treated as absent"
                );
                None
            }
        }
    }

    /// The page content as written to disk.
    fn render(&self) -> String {
        let mut content = self.to_wiki().join("\n");
        content.push('\n');
        content
    }

    /// Write the rendered page to [`WikiEntity::path`], creating parent directories.
    fn write_to_file(&self) -> Result<(), WikiError> {
        let path = self.path();
        let result = match path.parent() {
            Some(parent) => fs::create_dir_all(parent),
            None => Ok(()),
        }
        .and_then(|_| fs::write(path, self.render()));

        result.map_err(|e| {
            error!(
                entity_type = Self::KIND,
                path = %path.display(),
                error = %e,
                "Failed to write wiki document"
            );
            WikiError::io(path, e)
        })
    }
}

/// Conversion from a database record into a page.
///
/// Implementations re-read any existing page at the target path to seed
/// editable fields, then overlay the record's fields.
pub trait FromDatabase<R>: WikiEntity {
    fn from_database(record: &R, dir: &Path) -> Result<Self, WikiError>;
}

/// Editable-field merge: a non-blank database value wins, otherwise the
/// value already on disk is kept.
pub(crate) fn overlay(existing: Option<String>, database: Option<&str>) -> Option<String> {
    match database.map(str::trim) {
        Some(value) if !value.is_empty() => Some(value.to_string()),
        _ => existing,
    }
}

/// The document's `## ` name, or [`WikiError::MissingName`].
pub(crate) fn require_name(path: &Path, document: &WikiDocument) -> Result<String, WikiError> {
    document
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| WikiError::MissingName {
            path: path.to_path_buf(),
        })
}
