//! The synchronizable entity types and their engine descriptors.

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use serde::Serialize;
use tracing::warn;

use super::error::SyncError;
use super::export::{ExportDescriptor, ExportOptions, export_entities};
use super::import::{ImportDescriptor, import_entities};
use super::stats::{ExportStats, ImportStats, UpdateStatus};
use crate::db::{
    CityRecord, CountedTable, DbResult, EditableField, EntryRecord, EventRecord, LocationRecord,
    PersonRecord, Session, SqliteDatabase, TagRecord, ThemeRecord,
};
use crate::wiki::{
    WikiCity, WikiEntity, WikiEntry, WikiEvent, WikiLocation, WikiPerson, WikiTag, WikiTheme,
};

/// One synchronizable entity type.
///
/// Variants are declared in batch order: places first, entries last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Cities,
    Locations,
    People,
    Events,
    Themes,
    Tags,
    Entries,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Cities,
        EntityKind::Locations,
        EntityKind::People,
        EntityKind::Events,
        EntityKind::Themes,
        EntityKind::Tags,
        EntityKind::Entries,
    ];

    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::Cities => "cities",
            EntityKind::Locations => "locations",
            EntityKind::People => "people",
            EntityKind::Events => "events",
            EntityKind::Themes => "themes",
            EntityKind::Tags => "tags",
            EntityKind::Entries => "entries",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            EntityKind::Cities => "city",
            EntityKind::Locations => "location",
            EntityKind::People => "person",
            EntityKind::Events => "event",
            EntityKind::Themes => "theme",
            EntityKind::Tags => "tag",
            EntityKind::Entries => "entry",
        }
    }

    pub fn table(&self) -> CountedTable {
        match self {
            EntityKind::Cities => CountedTable::City,
            EntityKind::Locations => CountedTable::Location,
            EntityKind::People => CountedTable::Person,
            EntityKind::Events => CountedTable::Event,
            EntityKind::Themes => CountedTable::Theme,
            EntityKind::Tags => CountedTable::Tag,
            EntityKind::Entries => CountedTable::Entry,
        }
    }

    /// Export this type's rows to the wiki.
    pub async fn export(
        &self,
        db: &SqliteDatabase,
        options: &ExportOptions,
    ) -> Result<ExportStats, SyncError> {
        match self {
            EntityKind::Cities => export_entities(db, &CITIES_EXPORT, options).await,
            EntityKind::Locations => export_entities(db, &LOCATIONS_EXPORT, options).await,
            EntityKind::People => export_entities(db, &PEOPLE_EXPORT, options).await,
            EntityKind::Events => export_entities(db, &EVENTS_EXPORT, options).await,
            EntityKind::Themes => export_entities(db, &THEMES_EXPORT, options).await,
            EntityKind::Tags => export_entities(db, &TAGS_EXPORT, options).await,
            EntityKind::Entries => export_entities(db, &ENTRIES_EXPORT, options).await,
        }
    }

    /// Import this type's pages from the wiki.
    pub async fn import(
        &self,
        db: &SqliteDatabase,
        wiki_dir: &Path,
    ) -> Result<ImportStats, SyncError> {
        match self {
            EntityKind::Cities => import_entities(db, &CITIES_IMPORT, wiki_dir).await,
            EntityKind::Locations => import_entities(db, &LOCATIONS_IMPORT, wiki_dir).await,
            EntityKind::People => import_entities(db, &PEOPLE_IMPORT, wiki_dir).await,
            EntityKind::Events => import_entities(db, &EVENTS_IMPORT, wiki_dir).await,
            EntityKind::Themes => import_entities(db, &THEMES_IMPORT, wiki_dir).await,
            EntityKind::Tags => import_entities(db, &TAGS_IMPORT, wiki_dir).await,
            EntityKind::Entries => import_entities(db, &ENTRIES_IMPORT, wiki_dir).await,
        }
    }

    /// Pages of this type currently in the wiki.
    pub fn documents(&self, wiki_dir: &Path) -> Result<Vec<PathBuf>, SyncError> {
        match self {
            EntityKind::Cities => CITIES_IMPORT.discover(wiki_dir),
            EntityKind::Locations => LOCATIONS_IMPORT.discover(wiki_dir),
            EntityKind::People => PEOPLE_IMPORT.discover(wiki_dir),
            EntityKind::Events => EVENTS_IMPORT.discover(wiki_dir),
            EntityKind::Themes => THEMES_IMPORT.discover(wiki_dir),
            EntityKind::Tags => TAGS_IMPORT.discover(wiki_dir),
            EntityKind::Entries => ENTRIES_IMPORT.discover(wiki_dir),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.plural())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    /// Accepts plural or singular names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        EntityKind::ALL
            .into_iter()
            .find(|k| k.plural() == s || k.singular() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = EntityKind::ALL.iter().map(|k| k.plural()).collect();
                format!("Invalid entity type: {} (expected one of {})", s, names.join(", "))
            })
    }
}

// =============================================================================
// Export descriptors
// =============================================================================

fn query_cities(session: &mut Session) -> BoxFuture<'_, DbResult<Vec<CityRecord>>> {
    Box::pin(session.cities())
}

fn query_locations(session: &mut Session) -> BoxFuture<'_, DbResult<Vec<LocationRecord>>> {
    Box::pin(session.locations())
}

fn query_people(session: &mut Session) -> BoxFuture<'_, DbResult<Vec<PersonRecord>>> {
    Box::pin(session.people())
}

fn query_events(session: &mut Session) -> BoxFuture<'_, DbResult<Vec<EventRecord>>> {
    Box::pin(session.events())
}

fn query_themes(session: &mut Session) -> BoxFuture<'_, DbResult<Vec<ThemeRecord>>> {
    Box::pin(session.themes())
}

fn query_tags(session: &mut Session) -> BoxFuture<'_, DbResult<Vec<TagRecord>>> {
    Box::pin(session.tags())
}

fn query_entries(session: &mut Session) -> BoxFuture<'_, DbResult<Vec<EntryRecord>>> {
    Box::pin(session.entries())
}

pub const CITIES_EXPORT: ExportDescriptor<CityRecord, WikiCity> = ExportDescriptor {
    singular: "city",
    plural: "cities",
    query: query_cities,
    name: |r| Some(r.name.clone()),
    subdir: None,
    convert: None,
};

pub const LOCATIONS_EXPORT: ExportDescriptor<LocationRecord, WikiLocation> = ExportDescriptor {
    singular: "location",
    plural: "locations",
    query: query_locations,
    name: |r| Some(r.name.clone()),
    subdir: None,
    convert: None,
};

pub const PEOPLE_EXPORT: ExportDescriptor<PersonRecord, WikiPerson> = ExportDescriptor {
    singular: "person",
    plural: "people",
    query: query_people,
    name: |r| Some(r.name.clone()),
    subdir: None,
    convert: None,
};

pub const EVENTS_EXPORT: ExportDescriptor<EventRecord, WikiEvent> = ExportDescriptor {
    singular: "event",
    plural: "events",
    query: query_events,
    name: |r| Some(r.name.clone()),
    subdir: None,
    convert: None,
};

pub const THEMES_EXPORT: ExportDescriptor<ThemeRecord, WikiTheme> = ExportDescriptor {
    singular: "theme",
    plural: "themes",
    query: query_themes,
    name: |r| Some(r.name.clone()),
    subdir: None,
    convert: None,
};

pub const TAGS_EXPORT: ExportDescriptor<TagRecord, WikiTag> = ExportDescriptor {
    singular: "tag",
    plural: "tags",
    query: query_tags,
    name: |r| Some(r.name.clone()),
    subdir: None,
    convert: None,
};

pub const ENTRIES_EXPORT: ExportDescriptor<EntryRecord, WikiEntry> = ExportDescriptor {
    singular: "entry",
    plural: "entries",
    query: query_entries,
    name: |r| Some(r.date.format("%Y-%m-%d").to_string()),
    subdir: None,
    convert: None,
};

// =============================================================================
// Import descriptors
// =============================================================================

pub const CITIES_IMPORT: ImportDescriptor<WikiCity> = ImportDescriptor {
    singular: "city",
    plural: "cities",
    subdir: None,
    pattern: "*.md",
    recursive: false,
    updater: Some(update_city),
};

/// Locations are nested one level by city.
pub const LOCATIONS_IMPORT: ImportDescriptor<WikiLocation> = ImportDescriptor {
    singular: "location",
    plural: "locations",
    subdir: None,
    pattern: "*.md",
    recursive: true,
    updater: Some(update_location),
};

pub const PEOPLE_IMPORT: ImportDescriptor<WikiPerson> = ImportDescriptor {
    singular: "person",
    plural: "people",
    subdir: None,
    pattern: "*.md",
    recursive: false,
    updater: Some(update_person),
};

pub const EVENTS_IMPORT: ImportDescriptor<WikiEvent> = ImportDescriptor {
    singular: "event",
    plural: "events",
    subdir: None,
    pattern: "*.md",
    recursive: false,
    updater: Some(update_event),
};

pub const THEMES_IMPORT: ImportDescriptor<WikiTheme> = ImportDescriptor {
    singular: "theme",
    plural: "themes",
    subdir: None,
    pattern: "*.md",
    recursive: false,
    updater: Some(update_theme),
};

/// Tag pages are fully derived; import only validates them.
pub const TAGS_IMPORT: ImportDescriptor<WikiTag> = ImportDescriptor {
    singular: "tag",
    plural: "tags",
    subdir: None,
    pattern: "*.md",
    recursive: false,
    updater: None,
};

pub const ENTRIES_IMPORT: ImportDescriptor<WikiEntry> = ImportDescriptor {
    singular: "entry",
    plural: "entries",
    subdir: None,
    pattern: "*.md",
    recursive: true,
    updater: Some(update_entry),
};

// =============================================================================
// Updaters
// =============================================================================

fn update_city<'a>(
    city: &'a WikiCity,
    path: &'a Path,
    db: &'a SqliteDatabase,
) -> BoxFuture<'a, Result<UpdateStatus, SyncError>> {
    Box::pin(apply_editable(
        db,
        EditableField::CityNotes,
        &city.name,
        city.notes.as_deref(),
        path,
    ))
}

fn update_location<'a>(
    location: &'a WikiLocation,
    path: &'a Path,
    db: &'a SqliteDatabase,
) -> BoxFuture<'a, Result<UpdateStatus, SyncError>> {
    Box::pin(apply_editable(
        db,
        EditableField::LocationNotes,
        &location.name,
        location.notes.as_deref(),
        path,
    ))
}

fn update_person<'a>(
    person: &'a WikiPerson,
    path: &'a Path,
    db: &'a SqliteDatabase,
) -> BoxFuture<'a, Result<UpdateStatus, SyncError>> {
    Box::pin(apply_editable(
        db,
        EditableField::PersonNotes,
        &person.name,
        person.notes.as_deref(),
        path,
    ))
}

fn update_event<'a>(
    event: &'a WikiEvent,
    path: &'a Path,
    db: &'a SqliteDatabase,
) -> BoxFuture<'a, Result<UpdateStatus, SyncError>> {
    Box::pin(apply_editable(
        db,
        EditableField::EventNotes,
        &event.name,
        event.notes.as_deref(),
        path,
    ))
}

fn update_theme<'a>(
    theme: &'a WikiTheme,
    path: &'a Path,
    db: &'a SqliteDatabase,
) -> BoxFuture<'a, Result<UpdateStatus, SyncError>> {
    Box::pin(apply_editable(
        db,
        EditableField::ThemeDescription,
        &theme.name,
        theme.description.as_deref(),
        path,
    ))
}

fn update_entry<'a>(
    entry: &'a WikiEntry,
    path: &'a Path,
    db: &'a SqliteDatabase,
) -> BoxFuture<'a, Result<UpdateStatus, SyncError>> {
    Box::pin(async move {
        let key = entry.name();
        apply_editable(db, EditableField::EntryNotes, &key, entry.notes.as_deref(), path).await
    })
}

/// Write a parsed editable value back in its own session.
///
/// Blank values never clear the database. An unknown key is reported as
/// [`UpdateStatus::Error`] rather than failing the run.
async fn apply_editable(
    db: &SqliteDatabase,
    field: EditableField,
    key: &str,
    value: Option<&str>,
    path: &Path,
) -> Result<UpdateStatus, SyncError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(UpdateStatus::Skipped);
    };

    let mut session = db.session_scope().await?;
    match session.editable_text(field, key).await? {
        None => {
            warn!(
                entity = key,
                path = %path.display(),
                "No {} named '{}' in database",
                field.entity_type(),
                key
            );
            Ok(UpdateStatus::Error)
        }
        Some(current) if current.as_deref().map(str::trim) == Some(value) => {
            Ok(UpdateStatus::Skipped)
        }
        Some(_) => {
            session.set_editable_text(field, key, Some(value)).await?;
            session.commit().await?;
            Ok(UpdateStatus::Updated)
        }
    }
}
