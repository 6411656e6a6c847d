//! Tests for database error types.

use crate::db::{DbError, DbResult};

#[test]
fn not_found_error_displays_correctly() {
    let err = DbError::NotFound {
        entity_type: "person".to_string(),
        key: "Alice Smith".to_string(),
    };
    assert_eq!(err.to_string(), "Entity not found: person 'Alice Smith'");
}

#[test]
fn invalid_data_error_displays_correctly() {
    let err = DbError::InvalidData {
        message: "bad manuscript status".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid data: bad manuscript status");
}

#[test]
fn connection_error_displays_correctly() {
    let err = DbError::Connection {
        message: "unable to open database file".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Connection error: unable to open database file"
    );
}

#[test]
fn db_result_carries_errors() {
    fn fails() -> DbResult<()> {
        Err(DbError::Database {
            message: "boom".to_string(),
        })
    }

    let err = fails().unwrap_err();
    assert!(matches!(err, DbError::Database { .. }));
}
