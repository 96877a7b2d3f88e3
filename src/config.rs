// src/config.rs
//
// Runtime configuration
//
// Everything has a default; the environment only overrides.

use std::path::PathBuf;

use crate::error::{AppError, AppResult};

pub const ENV_DATABASE_PATH: &str = "ONFORKHUB_DATABASE_PATH";
pub const ENV_DATABASE_MAX_CONNECTIONS: &str = "ONFORKHUB_DATABASE_MAX_CONNECTIONS";
pub const ENV_DATABASE_BUSY_TIMEOUT_MS: &str = "ONFORKHUB_DATABASE_BUSY_TIMEOUT_MS";

/// Value of `ONFORKHUB_DATABASE_PATH` selecting the in-memory store
pub const MEMORY_LOCATION: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            database: DatabaseConfig::from_env()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub location: DatabaseLocation,
    pub max_connections: u32,
    pub busy_timeout_ms: u32,
}

impl DatabaseConfig {
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 15;
    pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5000;

    /// In-memory database, used by tests and throwaway runs
    pub fn in_memory() -> Self {
        Self {
            location: DatabaseLocation::Memory,
            max_connections: 1,
            busy_timeout_ms: Self::DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: DatabaseLocation::File(path.into()),
            max_connections: Self::DEFAULT_MAX_CONNECTIONS,
            busy_timeout_ms: Self::DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let location = match lookup(ENV_DATABASE_PATH) {
            Some(path) if path == MEMORY_LOCATION => DatabaseLocation::Memory,
            Some(path) if !path.trim().is_empty() => DatabaseLocation::File(PathBuf::from(path)),
            _ => DatabaseLocation::File(default_database_path()?),
        };

        let max_connections = match &location {
            // every connection to ":memory:" is a separate database
            DatabaseLocation::Memory => 1,
            DatabaseLocation::File(_) => parse_or(
                &lookup,
                ENV_DATABASE_MAX_CONNECTIONS,
                Self::DEFAULT_MAX_CONNECTIONS,
            )?,
        };
        if max_connections == 0 {
            return Err(AppError::Config(format!(
                "{} must be at least 1",
                ENV_DATABASE_MAX_CONNECTIONS
            )));
        }

        let busy_timeout_ms = parse_or(
            &lookup,
            ENV_DATABASE_BUSY_TIMEOUT_MS,
            Self::DEFAULT_BUSY_TIMEOUT_MS,
        )?;

        Ok(Self {
            location,
            max_connections,
            busy_timeout_ms,
        })
    }
}

/// Default database file location
///
/// Path structure: {APP_DATA}/onforkhub/onforkhub.db
pub fn default_database_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Config("Could not determine app data directory".to_string()))?;

    Ok(app_data_dir.join("onforkhub").join("onforkhub.db"))
}

fn parse_or<F>(lookup: &F, key: &str, default: u32) -> AppResult<u32>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|e| AppError::Config(format!("{} = {:?}: {}", key, raw, e))),
    }
}
