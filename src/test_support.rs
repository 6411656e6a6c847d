//! Shared fixtures for tests that need a populated journal.

use chrono::NaiveDate;

use crate::db::{
    Id, ManuscriptCharacter, ManuscriptEntry, ManuscriptStatus, NewEntry, NewPerson,
    SqliteDatabase,
};

pub(crate) fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub(crate) async fn setup_test_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    db
}

/// Ids of the rows created by [`seed_journal`].
pub(crate) struct SeededJournal {
    pub alice: Id,
    pub bob: Id,
    pub first_entry: Id,
    pub second_entry: Id,
}

/// A small journal: two entries, two people, one city with a location, one
/// event, a theme and a tag, and manuscript mappings for Alice and the first entry.
pub(crate) async fn seed_journal(db: &SqliteDatabase) -> SeededJournal {
    let mut session = db.session_scope().await.unwrap();

    let montreal = session
        .create_city("Montreal", Some("Canada"))
        .await
        .unwrap();
    let cafe = session
        .create_location("Cafe Olimpico", Some(montreal))
        .await
        .unwrap();
    let home = session.create_location("Home", None).await.unwrap();

    let alice = session
        .create_person(&NewPerson {
            name: "Alice Smith".to_string(),
            relation_type: Some("friend".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let bob = session.create_person(&NewPerson::named("Bob")).await.unwrap();

    let first_entry = session
        .create_entry(&NewEntry {
            date: date("2024-01-15"),
            word_count: 850,
            notes: None,
        })
        .await
        .unwrap();
    let second_entry = session
        .create_entry(&NewEntry::on(date("2024-02-03")))
        .await
        .unwrap();

    session
        .add_mention(first_entry, alice, Some("Coffee downtown"))
        .await
        .unwrap();
    session.add_mention(second_entry, alice, None).await.unwrap();
    session.add_mention(second_entry, bob, None).await.unwrap();

    session.link_location(first_entry, cafe).await.unwrap();
    session.link_location(second_entry, home).await.unwrap();

    let trip = session.create_event("Winter Trip", None).await.unwrap();
    session.link_event(first_entry, trip).await.unwrap();

    let friendship = session.create_theme("Friendship", None).await.unwrap();
    session.link_theme(first_entry, friendship).await.unwrap();
    session.link_theme(second_entry, friendship).await.unwrap();

    let coffee = session.create_tag("coffee").await.unwrap();
    session.link_tag(first_entry, coffee).await.unwrap();

    session
        .set_manuscript_character(
            alice,
            &ManuscriptCharacter {
                character: "Alicia".to_string(),
                role: Some("protagonist".to_string()),
            },
        )
        .await
        .unwrap();
    session
        .set_manuscript_entry(
            first_entry,
            &ManuscriptEntry {
                status: ManuscriptStatus::Included,
                edited: true,
            },
        )
        .await
        .unwrap();

    session.commit().await.unwrap();

    SeededJournal {
        alice,
        bob,
        first_entry,
        second_entry,
    }
}
