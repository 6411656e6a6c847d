//! Database vs wiki counts per entity type.

use std::path::Path;

use serde::Serialize;

use super::error::SyncError;
use super::registry::EntityKind;
use crate::db::SqliteDatabase;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindStatus {
    pub entity_type: &'static str,
    pub db_rows: usize,
    pub documents: usize,
}

impl KindStatus {
    pub fn in_sync(&self) -> bool {
        self.db_rows == self.documents
    }
}

pub async fn status(
    db: &SqliteDatabase,
    wiki_dir: &Path,
    kinds: &[EntityKind],
) -> Result<Vec<KindStatus>, SyncError> {
    let mut session = db.session_scope().await?;
    let mut statuses = Vec::with_capacity(kinds.len());

    for kind in kinds {
        statuses.push(KindStatus {
            entity_type: kind.plural(),
            db_rows: session.count_rows(kind.table()).await?,
            documents: kind.documents(wiki_dir)?.len(),
        });
    }

    session.commit().await?;
    Ok(statuses)
}
