use crate::sync::*;
use crate::test_support::{seed_journal, setup_test_db};
use std::fs;
use tempfile::TempDir;

#[tokio::test(flavor = "multi_thread")]
async fn test_export_all_reports_every_kind_in_order() {
    let db = setup_test_db().await;
    seed_journal(&db).await;
    let temp = TempDir::new().unwrap();

    let report = export_all(
        &db,
        &EntityKind::ALL,
        &ExportOptions::new(temp.path()),
        BatchPolicy::default(),
    )
    .await
    .unwrap();

    let names: Vec<&str> = report.results.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        vec!["cities", "locations", "people", "events", "themes", "tags", "entries"]
    );
    assert_eq!(report.get("locations").unwrap().entries_created, 2);
    assert_eq!(report.get("entries").unwrap().entries_created, 2);
    assert_eq!(report.total().files_processed, 10);
    assert!(!report.has_errors());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_round_trip_without_edits_changes_nothing() {
    let db = setup_test_db().await;
    seed_journal(&db).await;
    let temp = TempDir::new().unwrap();
    let options = ExportOptions::new(temp.path());

    export_all(&db, &EntityKind::ALL, &options, BatchPolicy::Abort)
        .await
        .unwrap();
    let imported = import_all(&db, &EntityKind::ALL, temp.path(), BatchPolicy::Abort)
        .await
        .unwrap();
    let exported = export_all(&db, &EntityKind::ALL, &options, BatchPolicy::Abort)
        .await
        .unwrap();

    assert_eq!(imported.total().records_updated, 0);
    assert_eq!(imported.total().errors, 0);
    assert_eq!(exported.total().entries_skipped, 10);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_abort_policy_stops_at_failing_kind() {
    let db = setup_test_db().await;
    seed_journal(&db).await;
    let temp = TempDir::new().unwrap();
    sqlx::query("DROP TABLE entry_tag")
        .execute(db.pool())
        .await
        .unwrap();

    let kinds = [EntityKind::People, EntityKind::Tags, EntityKind::Themes];
    let result = export_all(
        &db,
        &kinds,
        &ExportOptions::new(temp.path()),
        BatchPolicy::Abort,
    )
    .await;

    assert!(matches!(result, Err(SyncError::Database(_))));
    assert!(temp.path().join("people").is_dir());
    assert!(!temp.path().join("themes").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_continue_policy_records_failure_and_proceeds() {
    let db = setup_test_db().await;
    seed_journal(&db).await;
    let temp = TempDir::new().unwrap();
    sqlx::query("DROP TABLE entry_tag")
        .execute(db.pool())
        .await
        .unwrap();

    let kinds = [EntityKind::People, EntityKind::Tags, EntityKind::Themes];
    let report = export_all(
        &db,
        &kinds,
        &ExportOptions::new(temp.path()),
        BatchPolicy::Continue,
    )
    .await
    .unwrap();

    assert!(report.get("people").is_some());
    assert!(report.get("tags").is_none());
    assert_eq!(report.get("themes").unwrap().entries_created, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].entity_type, "tags");
    assert!(report.has_errors());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_status_compares_rows_and_documents() {
    let db = setup_test_db().await;
    seed_journal(&db).await;
    let temp = TempDir::new().unwrap();

    let before = status(&db, temp.path(), &EntityKind::ALL).await.unwrap();
    let people = before.iter().find(|s| s.entity_type == "people").unwrap();
    assert_eq!(people.db_rows, 2);
    assert_eq!(people.documents, 0);
    assert!(!people.in_sync());

    export_all(
        &db,
        &EntityKind::ALL,
        &ExportOptions::new(temp.path()),
        BatchPolicy::Abort,
    )
    .await
    .unwrap();
    fs::write(temp.path().join("tags/stray.md"), "# Tags\n\n## stray\n").unwrap();

    let after = status(&db, temp.path(), &EntityKind::ALL).await.unwrap();
    for kind in &after {
        if kind.entity_type == "tags" {
            assert_eq!(kind.db_rows, 1);
            assert_eq!(kind.documents, 2);
        } else {
            assert!(kind.in_sync(), "{} out of sync", kind.entity_type);
        }
    }
}

#[test]
fn test_entity_kind_parses_plural_and_singular() {
    assert_eq!("people".parse::<EntityKind>().unwrap(), EntityKind::People);
    assert_eq!("Person".parse::<EntityKind>().unwrap(), EntityKind::People);
    assert_eq!("entries".parse::<EntityKind>().unwrap(), EntityKind::Entries);
    assert!("poems".parse::<EntityKind>().is_err());
    assert_eq!(EntityKind::Cities.to_string(), "cities");
}
