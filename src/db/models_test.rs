//! Tests for domain models.

use crate::db::ManuscriptStatus;
use std::str::FromStr;

#[test]
fn manuscript_status_round_trips_through_strings() {
    for status in [
        ManuscriptStatus::Source,
        ManuscriptStatus::Included,
        ManuscriptStatus::Fragment,
        ManuscriptStatus::Excluded,
    ] {
        let parsed = ManuscriptStatus::from_str(&status.to_string()).unwrap();
        assert_eq!(parsed, status);
    }
}

#[test]
fn manuscript_status_rejects_unknown_values() {
    let err = ManuscriptStatus::from_str("published").unwrap_err();
    assert_eq!(err, "Invalid manuscript status: published");
}
