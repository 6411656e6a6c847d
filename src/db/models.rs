//! Domain records for the journal database.
//!
//! These are the shapes the export engine consumes. Relation lists are
//! resolved at the data-access boundary, so a record is self-contained once
//! it has been loaded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Integer primary key used by every table.
pub type Id = i64;

/// A mention of a person in a journal entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    pub date: NaiveDate,
    pub context: Option<String>,
}

/// How a person is adapted into the manuscript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManuscriptCharacter {
    pub character: String,
    pub role: Option<String>,
}

/// How an entry is adapted into the manuscript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManuscriptEntry {
    pub status: ManuscriptStatus,
    pub edited: bool,
}

/// Adaptation status of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ManuscriptStatus {
    #[default]
    Source,
    Included,
    Fragment,
    Excluded,
}

impl std::fmt::Display for ManuscriptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ManuscriptStatus::Source => "source",
            ManuscriptStatus::Included => "included",
            ManuscriptStatus::Fragment => "fragment",
            ManuscriptStatus::Excluded => "excluded",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for ManuscriptStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "source" => Ok(ManuscriptStatus::Source),
            "included" => Ok(ManuscriptStatus::Included),
            "fragment" => Ok(ManuscriptStatus::Fragment),
            "excluded" => Ok(ManuscriptStatus::Excluded),
            _ => Err(format!("Invalid manuscript status: {}", s)),
        }
    }
}

/// A city, grouping locations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CityRecord {
    pub id: Id,
    pub name: String,
    pub country: Option<String>,
    pub notes: Option<String>,
    /// Location names in this city, alphabetical.
    pub locations: Vec<String>,
    /// Dates of entries visiting any location in this city.
    pub entries: Vec<NaiveDate>,
}

/// A named place visited in entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocationRecord {
    pub id: Id,
    pub name: String,
    pub city: Option<String>,
    pub notes: Option<String>,
    pub visits: Vec<NaiveDate>,
}

/// A person mentioned in the journal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonRecord {
    pub id: Id,
    pub name: String,
    pub full_name: Option<String>,
    pub relation_type: Option<String>,
    pub notes: Option<String>,
    /// Mentions ordered by entry date.
    pub appearances: Vec<Mention>,
    /// Events of the entries the person appears in.
    pub events: Vec<String>,
    pub manuscript: Option<ManuscriptCharacter>,
}

/// A named event spanning one or more entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventRecord {
    pub id: Id,
    pub name: String,
    pub notes: Option<String>,
    pub entries: Vec<NaiveDate>,
    /// People mentioned in the event's entries.
    pub people: Vec<String>,
}

/// A recurring theme.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThemeRecord {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub entries: Vec<NaiveDate>,
}

/// A free-form tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagRecord {
    pub id: Id,
    pub name: String,
    pub entries: Vec<NaiveDate>,
}

/// A dated journal entry with all of its relations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub id: Id,
    pub date: NaiveDate,
    pub word_count: i64,
    pub notes: Option<String>,
    pub people: Vec<String>,
    pub locations: Vec<String>,
    pub events: Vec<String>,
    pub tags: Vec<String>,
    pub themes: Vec<String>,
    pub manuscript: Option<ManuscriptEntry>,
}

// =============================================================================
// Insert payloads
// =============================================================================

/// Fields for inserting a person.
#[derive(Debug, Clone, Default)]
pub struct NewPerson {
    pub name: String,
    pub full_name: Option<String>,
    pub relation_type: Option<String>,
    pub notes: Option<String>,
}

impl NewPerson {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

/// Fields for inserting an entry.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub word_count: i64,
    pub notes: Option<String>,
}

impl NewEntry {
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date,
            word_count: 0,
            notes: None,
        }
    }
}
