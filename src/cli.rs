// src/cli.rs
//
// Command-line surface
//
// ARCHITECTURE:
// - clap owns argument parsing and `--help`
// - Each subcommand opens the configured database and initializes the schema
// - Output is rendered here; the binary only prints it and picks the exit code

use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::application::{AppState, CommandRegistry};
use crate::config::AppConfig;
use crate::db::{
    create_connection_pool, get_database_stats, initialize_database, verify_database_integrity,
    ConnectionPool,
};
use crate::error::AppResult;
use crate::repositories::{
    CategoryRepository, SqliteCategoryRepository, SqliteVideoRepository, VideoRepository,
};

#[derive(Debug, Parser)]
#[command(name = "onforkhub")]
#[command(about = "Video platform core: categories and videos over SQLite")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one command and print its JSON response
    Run {
        /// Command name, e.g. categories.create
        command: String,
        /// JSON payload for the command
        payload: Option<String>,
    },
    /// List the registered command names
    Commands,
    /// Print database statistics
    Stats,
}

/// What a subcommand printed, and whether it counts as success
#[derive(Debug)]
pub struct CliOutput {
    pub text: String,
    pub success: bool,
}

impl CliOutput {
    fn ok(text: String) -> Self {
        Self { text, success: true }
    }
}

pub async fn execute(command: Commands, config: &AppConfig) -> AppResult<CliOutput> {
    let pool = open_database(config)?;

    match command {
        Commands::Stats => {
            let conn = pool.get()?;
            let stats = get_database_stats(&conn)?;
            Ok(CliOutput::ok(serde_json::to_string_pretty(&stats)?))
        }

        Commands::Commands => {
            let registry = build_registry(pool);
            Ok(CliOutput::ok(registry.names().join("\n")))
        }

        Commands::Run { command, payload } => {
            let payload = match payload {
                Some(raw) => serde_json::from_str(&raw)?,
                None => Value::Null,
            };

            let registry = build_registry(pool);
            let response = registry.dispatch(&command, payload).await;
            Ok(CliOutput {
                text: serde_json::to_string_pretty(&response)?,
                success: response.is_success(),
            })
        }
    }
}

fn open_database(config: &AppConfig) -> AppResult<Arc<ConnectionPool>> {
    let pool = Arc::new(create_connection_pool(&config.database)?);

    // Initialize schema (idempotent)
    let conn = pool.get()?;
    initialize_database(&conn)?;
    verify_database_integrity(&conn)?;
    drop(conn);

    Ok(pool)
}

fn build_registry(pool: Arc<ConnectionPool>) -> CommandRegistry {
    let categories: Arc<dyn CategoryRepository> =
        Arc::new(SqliteCategoryRepository::new(pool.clone()));
    let videos: Arc<dyn VideoRepository> = Arc::new(SqliteVideoRepository::new(pool));

    let state = Arc::new(AppState::new(categories, videos));
    CommandRegistry::with_default_commands(state)
}
