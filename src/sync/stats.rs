//! Per-run statistics and the aggregate batch report.

use serde::Serialize;

use crate::wiki::WriteStatus;

/// Counts for one export run over one entity type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExportStats {
    pub files_processed: usize,
    pub entries_created: usize,
    pub entries_updated: usize,
    pub entries_skipped: usize,
    pub errors: usize,
}

impl ExportStats {
    pub fn record(&mut self, status: WriteStatus) {
        match status {
            WriteStatus::Created => self.entries_created += 1,
            WriteStatus::Updated => self.entries_updated += 1,
            WriteStatus::Skipped => self.entries_skipped += 1,
        }
    }
}

/// Outcome reported by an import updater for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateStatus {
    Updated,
    Skipped,
    Error,
}

impl std::fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UpdateStatus::Updated => "updated",
            UpdateStatus::Skipped => "skipped",
            UpdateStatus::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// Counts for one import run over one entity type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    pub files_processed: usize,
    pub records_updated: usize,
    pub records_skipped: usize,
    pub errors: usize,
}

impl ImportStats {
    pub fn record(&mut self, status: UpdateStatus) {
        match status {
            UpdateStatus::Updated => self.records_updated += 1,
            UpdateStatus::Skipped => self.records_skipped += 1,
            UpdateStatus::Error => self.errors += 1,
        }
    }
}

/// Anything that can be summed across entity types and inspected for errors.
pub trait RunStats: Copy + Default + Serialize {
    fn merge(&mut self, other: &Self);
    fn errors(&self) -> usize;
}

impl RunStats for ExportStats {
    fn merge(&mut self, other: &Self) {
        self.files_processed += other.files_processed;
        self.entries_created += other.entries_created;
        self.entries_updated += other.entries_updated;
        self.entries_skipped += other.entries_skipped;
        self.errors += other.errors;
    }

    fn errors(&self) -> usize {
        self.errors
    }
}

impl RunStats for ImportStats {
    fn merge(&mut self, other: &Self) {
        self.files_processed += other.files_processed;
        self.records_updated += other.records_updated;
        self.records_skipped += other.records_skipped;
        self.errors += other.errors;
    }

    fn errors(&self) -> usize {
        self.errors
    }
}

/// An entity type whose run failed with a batch-fatal error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindFailure {
    pub entity_type: &'static str,
    pub message: String,
}

/// Statistics of a batch run, in the order the entity types were processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport<S> {
    pub results: Vec<(&'static str, S)>,
    pub failures: Vec<KindFailure>,
}

impl<S> Default for BatchReport<S> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<S: RunStats> BatchReport<S> {
    pub fn push(&mut self, entity_type: &'static str, stats: S) {
        self.results.push((entity_type, stats));
    }

    /// Statistics for one entity type, by plural name.
    pub fn get(&self, entity_type: &str) -> Option<&S> {
        self.results
            .iter()
            .find(|(name, _)| *name == entity_type)
            .map(|(_, stats)| stats)
    }

    pub fn total(&self) -> S {
        let mut total = S::default();
        for (_, stats) in &self.results {
            total.merge(stats);
        }
        total
    }

    /// True when any item error was counted or any entity type failed outright.
    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty() || self.results.iter().any(|(_, s)| s.errors() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_stats_record_write_statuses() {
        let mut stats = ExportStats::default();
        stats.record(WriteStatus::Created);
        stats.record(WriteStatus::Skipped);
        stats.record(WriteStatus::Skipped);

        assert_eq!(stats.entries_created, 1);
        assert_eq!(stats.entries_skipped, 2);
        assert_eq!(stats.entries_updated, 0);
    }

    #[test]
    fn import_error_status_counts_as_error() {
        let mut stats = ImportStats::default();
        stats.record(UpdateStatus::Error);
        stats.record(UpdateStatus::Updated);

        assert_eq!(stats.errors, 1);
        assert_eq!(stats.records_updated, 1);
    }

    #[test]
    fn report_totals_and_lookup() {
        let mut report = BatchReport::default();
        report.push(
            "people",
            ImportStats {
                files_processed: 2,
                records_updated: 1,
                records_skipped: 1,
                errors: 0,
            },
        );
        report.push(
            "tags",
            ImportStats {
                files_processed: 3,
                records_skipped: 3,
                ..Default::default()
            },
        );

        assert_eq!(report.get("tags").unwrap().files_processed, 3);
        assert!(report.get("events").is_none());
        assert_eq!(report.total().files_processed, 5);
        assert_eq!(report.total().records_skipped, 4);
        assert!(!report.has_errors());
    }

    #[test]
    fn failure_marks_report_as_errored() {
        let mut report: BatchReport<ExportStats> = BatchReport::default();
        report.failures.push(KindFailure {
            entity_type: "people",
            message: "boom".to_string(),
        });

        assert!(report.has_errors());
    }
}
