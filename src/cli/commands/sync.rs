//! Sync command implementations.

use std::fs;

use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::error::{CliError, CliResult};
use crate::config::{SyncConfig, ensure_parent};
use crate::db::SqliteDatabase;
use crate::sync::{
    BatchReport, EntityKind, ExportStats, ImportStats, KindFailure, KindStatus, RunStats,
};

/// Open the configured database and apply migrations.
pub async fn open_database(config: &SyncConfig) -> CliResult<SqliteDatabase> {
    ensure_parent(&config.db_path)?;
    let db = SqliteDatabase::open(&config.db_path).await?;
    db.migrate().await?;
    Ok(db)
}

/// Create the database and an empty wiki tree.
pub async fn init(config: &SyncConfig) -> CliResult<String> {
    let db = open_database(config).await?;
    db.close().await;

    for kind in EntityKind::ALL {
        let dir = config.wiki_dir.join(kind.plural());
        fs::create_dir_all(&dir).map_err(|source| CliError::Io { path: dir, source })?;
    }

    Ok(format!(
        "✓ Initialized journal wiki\n\nDatabase: {}\nWiki:     {}\n",
        config.db_path.display(),
        config.wiki_dir.display()
    ))
}

/// Error when any item failed or any entity type aborted.
pub fn check_report<S: RunStats>(report: &BatchReport<S>) -> CliResult<()> {
    if report.has_errors() {
        return Err(CliError::Incomplete {
            errors: report.total().errors(),
            failed: report.failures.len(),
        });
    }
    Ok(())
}

#[derive(Serialize)]
struct KindJson<'a, S> {
    entity_type: &'a str,
    #[serde(flatten)]
    stats: &'a S,
}

#[derive(Serialize)]
struct ReportJson<'a, S> {
    results: Vec<KindJson<'a, S>>,
    total: S,
    failures: &'a [KindFailure],
}

fn report_json<S: RunStats>(report: &BatchReport<S>) -> CliResult<String> {
    let json = ReportJson {
        results: report
            .results
            .iter()
            .map(|(entity_type, stats)| KindJson {
                entity_type: *entity_type,
                stats,
            })
            .collect(),
        total: report.total(),
        failures: &report.failures,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

fn push_failures(output: &mut String, failures: &[KindFailure]) {
    if failures.is_empty() {
        return;
    }
    output.push('\n');
    for failure in failures {
        output.push_str(&format!("✗ {}: {}\n", failure.entity_type, failure.message));
    }
}

#[derive(Tabled)]
struct ExportRow {
    #[tabled(rename = "Entity Type")]
    entity_type: String,
    #[tabled(rename = "Processed")]
    processed: usize,
    #[tabled(rename = "Created")]
    created: usize,
    #[tabled(rename = "Updated")]
    updated: usize,
    #[tabled(rename = "Skipped")]
    skipped: usize,
    #[tabled(rename = "Errors")]
    errors: usize,
}

impl ExportRow {
    fn new(entity_type: &str, stats: &ExportStats) -> Self {
        Self {
            entity_type: entity_type.to_string(),
            processed: stats.files_processed,
            created: stats.entries_created,
            updated: stats.entries_updated,
            skipped: stats.entries_skipped,
            errors: stats.errors,
        }
    }
}

pub fn format_export_report(report: &BatchReport<ExportStats>, format: &str) -> CliResult<String> {
    if format == "json" {
        return report_json(report);
    }

    let mut rows: Vec<ExportRow> = report
        .results
        .iter()
        .map(|(entity_type, stats)| ExportRow::new(entity_type, stats))
        .collect();
    rows.push(ExportRow::new("Total", &report.total()));

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let mut output = format!("{}\n", table);
    push_failures(&mut output, &report.failures);
    Ok(output)
}

#[derive(Tabled)]
struct ImportRow {
    #[tabled(rename = "Entity Type")]
    entity_type: String,
    #[tabled(rename = "Processed")]
    processed: usize,
    #[tabled(rename = "Updated")]
    updated: usize,
    #[tabled(rename = "Skipped")]
    skipped: usize,
    #[tabled(rename = "Errors")]
    errors: usize,
}

impl ImportRow {
    fn new(entity_type: &str, stats: &ImportStats) -> Self {
        Self {
            entity_type: entity_type.to_string(),
            processed: stats.files_processed,
            updated: stats.records_updated,
            skipped: stats.records_skipped,
            errors: stats.errors,
        }
    }
}

pub fn format_import_report(report: &BatchReport<ImportStats>, format: &str) -> CliResult<String> {
    if format == "json" {
        return report_json(report);
    }

    let mut rows: Vec<ImportRow> = report
        .results
        .iter()
        .map(|(entity_type, stats)| ImportRow::new(entity_type, stats))
        .collect();
    rows.push(ImportRow::new("Total", &report.total()));

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let mut output = format!("{}\n", table);
    push_failures(&mut output, &report.failures);
    Ok(output)
}

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Entity Type")]
    entity_type: String,
    #[tabled(rename = "Database")]
    database: usize,
    #[tabled(rename = "Wiki")]
    wiki: usize,
    #[tabled(rename = "In Sync")]
    in_sync: String,
}

pub fn format_status(statuses: &[KindStatus], format: &str) -> CliResult<String> {
    if format == "json" {
        return Ok(serde_json::to_string_pretty(statuses)?);
    }

    let rows: Vec<StatusRow> = statuses
        .iter()
        .map(|s| StatusRow {
            entity_type: s.entity_type.to_string(),
            database: s.db_rows,
            wiki: s.documents,
            in_sync: if s.in_sync() { "✓" } else { "✗" }.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    Ok(format!("{}\n", table))
}
