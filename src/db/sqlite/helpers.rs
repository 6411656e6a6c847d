//! Shared helper functions for the SQLite queries.

use std::collections::HashMap;

use crate::db::{DbError, Id};

/// Map a driver error into the storage-agnostic error type.
pub(crate) fn db_err(e: sqlx::Error) -> DbError {
    DbError::Database {
        message: e.to_string(),
    }
}

/// Group `(owner_id, value)` rows by owner, keeping the row order within each group.
pub(crate) fn group_by_owner<T>(rows: impl IntoIterator<Item = (Id, T)>) -> HashMap<Id, Vec<T>> {
    let mut grouped: HashMap<Id, Vec<T>> = HashMap::new();
    for (owner, value) in rows {
        grouped.entry(owner).or_default().push(value);
    }
    grouped
}

/// Take the group for `owner`, or an empty list when it has none.
pub(crate) fn take_group<T>(grouped: &mut HashMap<Id, Vec<T>>, owner: Id) -> Vec<T> {
    grouped.remove(&owner).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_by_owner_preserves_row_order() {
        let rows = vec![(1, "b"), (2, "x"), (1, "a"), (1, "c")];
        let mut grouped = group_by_owner(rows);

        assert_eq!(take_group(&mut grouped, 1), vec!["b", "a", "c"]);
        assert_eq!(take_group(&mut grouped, 2), vec!["x"]);
        assert!(take_group(&mut grouped, 3).is_empty());
    }
}
