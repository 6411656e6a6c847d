use super::writer::{WriteStatus, write_if_changed};
use std::fs;
use tempfile::TempDir;

#[test]
fn creates_missing_file_and_parents() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("people").join("alice.md");

    let status = write_if_changed(&path, "hello\n", false).unwrap();

    assert_eq!(status, WriteStatus::Created);
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
}

#[test]
fn skips_identical_content_without_touching_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("alice.md");
    fs::write(&path, "hello\n").unwrap();
    let before = fs::metadata(&path).unwrap().modified().unwrap();

    std::thread::sleep(std::time::Duration::from_millis(20));
    let status = write_if_changed(&path, "hello\n", false).unwrap();

    assert_eq!(status, WriteStatus::Skipped);
    let after = fs::metadata(&path).unwrap().modified().unwrap();
    assert_eq!(before, after);
}

#[test]
fn updates_changed_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("alice.md");
    fs::write(&path, "old\n").unwrap();

    let status = write_if_changed(&path, "new\n", false).unwrap();

    assert_eq!(status, WriteStatus::Updated);
    assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
}

#[test]
fn force_rewrites_identical_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("alice.md");
    fs::write(&path, "same\n").unwrap();

    let status = write_if_changed(&path, "same\n", true).unwrap();

    assert_eq!(status, WriteStatus::Updated);
}

#[test]
fn io_failure_is_returned() {
    let temp = TempDir::new().unwrap();
    // A directory where the file should be.
    let path = temp.path().join("taken.md");
    fs::create_dir(&path).unwrap();

    let result = write_if_changed(&path, "content\n", false);

    assert!(result.is_err());
}
