mod commands;
pub mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ConfigOverrides, SyncConfig};
use crate::sync::{self, BatchPolicy, EntityKind, ExportOptions};
use error::CliResult;

#[derive(Parser)]
#[command(name = "jwiki")]
#[command(author, version, about = "Sync a journal database with a markdown wiki", long_about = None)]
pub struct Cli {
    /// YAML config file (default: $XDG_CONFIG_HOME/jwiki/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file (default: JWIKI_DB env or $XDG_DATA_HOME/jwiki/journal.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Wiki root directory (default: JWIKI_WIKI_DIR env or $XDG_DATA_HOME/jwiki/wiki)
    #[arg(long, global = true)]
    pub wiki_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and an empty wiki tree
    Init,
    /// Export database records to wiki pages
    Export {
        /// Entity types to export (default: all)
        #[arg(short = 't', long = "type")]
        types: Vec<EntityKind>,
        /// Rewrite pages even when unchanged
        #[arg(long)]
        force: bool,
        /// Continue with the next entity type when one fails
        #[arg(long)]
        keep_going: bool,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Import edited wiki fields into the database
    Import {
        /// Entity types to import (default: all)
        #[arg(short = 't', long = "type")]
        types: Vec<EntityKind>,
        /// Continue with the next entity type when one fails
        #[arg(long)]
        keep_going: bool,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Compare database rows with wiki pages
    Status {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

/// Initialize tracing subscriber with env filter, logging to stderr.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "journal_wiki=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn selected(types: Vec<EntityKind>) -> Vec<EntityKind> {
    if types.is_empty() {
        EntityKind::ALL.to_vec()
    } else {
        types
    }
}

fn policy(keep_going: bool) -> BatchPolicy {
    if keep_going {
        BatchPolicy::Continue
    } else {
        BatchPolicy::Abort
    }
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing();
    execute(cli).await?;
    Ok(())
}

async fn execute(cli: Cli) -> CliResult<()> {
    let config = SyncConfig::load(&ConfigOverrides {
        config_file: cli.config,
        db_path: cli.db,
        wiki_dir: cli.wiki_dir,
    })?;

    match cli.command {
        Commands::Init => {
            println!("{}", commands::sync::init(&config).await?);
        }
        Commands::Export {
            types,
            force,
            keep_going,
            format,
        } => {
            let db = commands::sync::open_database(&config).await?;
            let options = ExportOptions {
                wiki_dir: config.wiki_dir.clone(),
                force,
            };
            let report =
                sync::export_all(&db, &selected(types), &options, policy(keep_going)).await?;
            db.close().await;

            println!("{}", commands::sync::format_export_report(&report, &format)?);
            commands::sync::check_report(&report)?;
        }
        Commands::Import {
            types,
            keep_going,
            format,
        } => {
            let db = commands::sync::open_database(&config).await?;
            let report =
                sync::import_all(&db, &selected(types), &config.wiki_dir, policy(keep_going))
                    .await?;
            db.close().await;

            println!("{}", commands::sync::format_import_report(&report, &format)?);
            commands::sync::check_report(&report)?;
        }
        Commands::Status { format } => {
            let db = commands::sync::open_database(&config).await?;
            let statuses = sync::status(&db, &config.wiki_dir, &EntityKind::ALL).await?;
            db.close().await;

            println!("{}", commands::sync::format_status(&statuses, &format)?);
        }
    }

    Ok(())
}
