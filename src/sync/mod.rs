//! Bidirectional sync between the journal database and the markdown wiki.
//!
//! Export renders every row of an entity type into a wiki page, touching only
//! pages whose content changed. Import reads pages back and applies their
//! hand-editable fields to the database. Both engines are driven by per-type
//! descriptors (see [`EntityKind`]) and report counts instead of failing on a
//! single bad row or page.

mod batch;
mod error;
mod export;
mod import;
mod registry;
mod stats;
mod status;

#[cfg(test)]
mod batch_test;

pub use batch::{BatchPolicy, export_all, import_all};
pub use error::SyncError;
pub use export::{ConvertFn, ExportDescriptor, ExportOptions, QueryFn, export_entities};
pub use import::{ImportDescriptor, UpdateFn, import_entities};
pub use registry::{
    CITIES_EXPORT, CITIES_IMPORT, ENTRIES_EXPORT, ENTRIES_IMPORT, EVENTS_EXPORT, EVENTS_IMPORT,
    EntityKind, LOCATIONS_EXPORT, LOCATIONS_IMPORT, PEOPLE_EXPORT, PEOPLE_IMPORT, TAGS_EXPORT,
    TAGS_IMPORT, THEMES_EXPORT, THEMES_IMPORT,
};
pub use stats::{
    BatchReport, ExportStats, ImportStats, KindFailure, RunStats, UpdateStatus,
};
pub use status::{KindStatus, status};
