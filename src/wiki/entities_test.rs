use super::*;
use crate::db::{
    CityRecord, EntryRecord, EventRecord, LocationRecord, ManuscriptCharacter, ManuscriptEntry,
    ManuscriptStatus, Mention, PersonRecord, TagRecord, ThemeRecord,
};
use crate::test_support::date;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn alice() -> PersonRecord {
    PersonRecord {
        id: 1,
        name: "Alice Smith".to_string(),
        full_name: Some("Alice Jane Smith".to_string()),
        relation_type: Some("friend".to_string()),
        notes: None,
        appearances: vec![Mention {
            date: date("2024-01-15"),
            context: Some("Coffee downtown".to_string()),
        }],
        events: vec!["Winter Trip".to_string()],
        manuscript: Some(ManuscriptCharacter {
            character: "Alicia".to_string(),
            role: Some("protagonist".to_string()),
        }),
    }
}

fn entry() -> EntryRecord {
    EntryRecord {
        id: 1,
        date: date("2024-01-15"),
        word_count: 850,
        notes: Some("Good day.".to_string()),
        people: vec!["Alice Smith".to_string()],
        locations: vec!["Cafe Olimpico".to_string()],
        events: vec![],
        tags: vec!["coffee".to_string()],
        themes: vec!["Friendship".to_string()],
        manuscript: Some(ManuscriptEntry {
            status: ManuscriptStatus::Included,
            edited: true,
        }),
    }
}

// =============================================================================
// Missing-file contract
// =============================================================================

fn assert_missing<E: WikiEntity + std::fmt::Debug>(dir: &Path) {
    let path = dir.join("nope.md");
    assert!(E::from_file(&path).is_none());
    assert!(E::read_file(&path).unwrap().is_none());
}

#[test]
fn missing_file_yields_none_for_every_type() {
    let temp = TempDir::new().unwrap();

    assert_missing::<WikiCity>(temp.path());
    assert_missing::<WikiLocation>(temp.path());
    assert_missing::<WikiPerson>(temp.path());
    assert_missing::<WikiEvent>(temp.path());
    assert_missing::<WikiTheme>(temp.path());
    assert_missing::<WikiTag>(temp.path());
    assert_missing::<WikiEntry>(temp.path());
}

#[test]
fn blank_file_is_treated_as_absent() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("blank.md");
    fs::write(&path, "  \n\n").unwrap();

    assert!(WikiPerson::read_file(&path).unwrap().is_none());
}

#[test]
fn document_without_name_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.md");
    fs::write(&path, "# People\n\nno heading\n").unwrap();

    let err = WikiPerson::read_file(&path).unwrap_err();
    assert!(matches!(err, WikiError::MissingName { .. }));
    assert!(WikiPerson::from_file(&path).is_none());
}

#[test]
fn entry_with_bad_date_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("2024-13-01.md");
    fs::write(&path, "# Entries\n\n## 2024-13-01\n").unwrap();

    let err = WikiEntry::read_file(&path).unwrap_err();
    assert!(matches!(err, WikiError::InvalidField { field: "date", .. }));
}

// =============================================================================
// Conversion and rendering
// =============================================================================

#[test]
fn person_renders_all_sections() {
    let temp = TempDir::new().unwrap();
    let person = WikiPerson::from_database(&alice(), temp.path()).unwrap();

    assert_eq!(person.path, temp.path().join("alice_smith.md"));
    let content = person.render();
    assert!(content.starts_with("# People\n\n## Alice Smith\n"));
    assert!(content.contains("- Full name: Alice Jane Smith"));
    assert!(content.contains("- Category: friend"));
    assert!(content.contains("- [[2024-01-15]]: Coffee downtown"));
    assert!(content.contains("- [[winter_trip|Winter Trip]]"));
    assert!(content.contains("- Character: Alicia"));
    assert!(content.contains("### Notes"));
    assert!(content.ends_with('\n'));
}

#[test]
fn render_is_deterministic() {
    let temp = TempDir::new().unwrap();
    let a = WikiPerson::from_database(&alice(), temp.path()).unwrap();
    let b = WikiPerson::from_database(&alice(), temp.path()).unwrap();

    assert_eq!(a.render(), b.render());
}

#[test]
fn parsed_page_carries_only_name_and_notes() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("alice_smith.md");
    fs::write(
        &path,
        "# People\n\n## Alice Smith\n\n\
         ### Details\n- Full name: Alice Jane Smith\n- Category: friend\n\n\
         ### Appearances\n- [[2024-01-15]]: Coffee downtown\n\n\
         ### Events\n- [[winter_trip|Winter Trip]]\n\n\
         ### Manuscript\n- Character: Alicia\n- Role: protagonist\n\n\
         ### Notes\nMet in 2010.\n\n### Music\nLoves jazz.\n",
    )
    .unwrap();

    let parsed = WikiPerson::from_file(&path).unwrap();

    assert_eq!(parsed.name, "Alice Smith");
    assert_eq!(
        parsed.notes.as_deref(),
        Some("Met in 2010.\n\n### Music\nLoves jazz.")
    );
    assert_eq!(parsed.full_name, None);
    assert_eq!(parsed.category, None);
    assert!(parsed.appearances.is_empty());
    assert!(parsed.events.is_empty());
    assert_eq!(parsed.manuscript, None);
}

#[test]
fn editable_field_round_trips() {
    let temp = TempDir::new().unwrap();
    let mut record = alice();
    record.notes = Some("Met in 2010.\nLoves jazz.".to_string());

    let person = WikiPerson::from_database(&record, temp.path()).unwrap();
    person.write_to_file().unwrap();

    let parsed = WikiPerson::from_file(&person.path).unwrap();
    assert_eq!(parsed.name, "Alice Smith");
    assert_eq!(parsed.notes.as_deref(), Some("Met in 2010.\nLoves jazz."));
    // Computed fields are not parsed back.
    assert!(parsed.appearances.is_empty());
}

#[test]
fn existing_notes_survive_when_database_is_empty() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("alice_smith.md");
    fs::write(
        &path,
        "# People\n\n## Alice Smith\n\n### Notes\nWritten by hand.\n",
    )
    .unwrap();

    let person = WikiPerson::from_database(&alice(), temp.path()).unwrap();

    assert_eq!(person.notes.as_deref(), Some("Written by hand."));
    assert_eq!(person.appearances.len(), 1);
}

#[test]
fn database_notes_win_over_existing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("alice_smith.md");
    fs::write(&path, "# People\n\n## Alice Smith\n\n### Notes\nOld.\n").unwrap();

    let mut record = alice();
    record.notes = Some("New.".to_string());
    let person = WikiPerson::from_database(&record, temp.path()).unwrap();

    assert_eq!(person.notes.as_deref(), Some("New."));
}

#[test]
fn entry_path_is_nested_by_year() {
    let temp = TempDir::new().unwrap();
    let wiki_entry = WikiEntry::from_database(&entry(), temp.path()).unwrap();

    assert_eq!(
        wiki_entry.path,
        temp.path().join("2024").join("2024-01-15.md")
    );
    let content = wiki_entry.render();
    assert!(content.contains("## 2024-01-15"));
    assert!(content.contains("- Words: 850"));
    assert!(content.contains("- Status: included"));
    assert!(content.contains("- Edited: yes"));
    assert!(!content.contains("### Events"));
}

#[test]
fn entry_round_trips_date_and_notes() {
    let temp = TempDir::new().unwrap();
    let wiki_entry = WikiEntry::from_database(&entry(), temp.path()).unwrap();
    wiki_entry.write_to_file().unwrap();

    let parsed = WikiEntry::from_file(&wiki_entry.path).unwrap();
    assert_eq!(parsed.date, date("2024-01-15"));
    assert_eq!(parsed.notes.as_deref(), Some("Good day."));
}

#[test]
fn location_groups_by_city() {
    let temp = TempDir::new().unwrap();
    let cafe = LocationRecord {
        id: 1,
        name: "Cafe Olimpico".to_string(),
        city: Some("Montreal".to_string()),
        notes: None,
        visits: vec![date("2024-01-15")],
    };
    let home = LocationRecord {
        id: 2,
        name: "Home".to_string(),
        ..Default::default()
    };

    let cafe = WikiLocation::from_database(&cafe, temp.path()).unwrap();
    let home = WikiLocation::from_database(&home, temp.path()).unwrap();

    assert_eq!(
        cafe.path,
        temp.path().join("montreal").join("cafe_olimpico.md")
    );
    assert_eq!(home.path, temp.path().join("_unassigned").join("home.md"));
    assert!(cafe.render().contains("- [[montreal|Montreal]]"));
}

#[test]
fn city_event_theme_and_tag_pages() {
    let temp = TempDir::new().unwrap();

    let city = WikiCity::from_database(
        &CityRecord {
            id: 1,
            name: "Montreal".to_string(),
            country: Some("Canada".to_string()),
            locations: vec!["Cafe Olimpico".to_string()],
            entries: vec![date("2024-01-15")],
            ..Default::default()
        },
        temp.path(),
    )
    .unwrap();
    assert!(city.render().contains("### Country\n- Canada"));

    let event = WikiEvent::from_database(
        &EventRecord {
            id: 1,
            name: "Winter Trip".to_string(),
            notes: Some("Snow.".to_string()),
            entries: vec![date("2024-01-15")],
            people: vec!["Alice Smith".to_string()],
        },
        temp.path(),
    )
    .unwrap();
    assert_eq!(event.path, temp.path().join("winter_trip.md"));
    assert!(event.render().contains("### Notes\nSnow."));

    let theme = WikiTheme::from_database(
        &ThemeRecord {
            id: 1,
            name: "Friendship".to_string(),
            description: Some("People who stay.".to_string()),
            entries: vec![],
        },
        temp.path(),
    )
    .unwrap();
    assert!(theme.render().contains("### Description\nPeople who stay."));

    let tag = WikiTag::from_database(
        &TagRecord {
            id: 1,
            name: "coffee".to_string(),
            entries: vec![date("2024-01-15")],
        },
        temp.path(),
    )
    .unwrap();
    assert!(tag.render().contains("### Entries\n- [[2024-01-15]]"));
}

#[test]
fn write_to_file_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("deep").join("people");

    let person = WikiPerson::from_database(&alice(), &dir).unwrap();
    person.write_to_file().unwrap();

    assert!(dir.join("alice_smith.md").exists());
}
