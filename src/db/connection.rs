// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation
// - Thread-safe access

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::config::{DatabaseConfig, DatabaseLocation};
use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Create a connection pool
///
/// Every connection gets:
/// - Foreign keys enabled
/// - WAL journal (file databases only)
/// - The configured busy timeout
///
/// An in-memory location always yields a single-connection pool so that
/// every caller sees the same database.
pub fn create_connection_pool(config: &DatabaseConfig) -> AppResult<ConnectionPool> {
    let busy_timeout_ms = config.busy_timeout_ms;

    let (manager, max_size, keep_alive) = match &config.location {
        DatabaseLocation::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            log::info!("Opening database at {}", path.display());

            let manager = SqliteConnectionManager::file(path).with_init(move |conn| {
                conn.execute_batch(&format!(
                    "PRAGMA foreign_keys = ON;
                     PRAGMA journal_mode = WAL;
                     PRAGMA synchronous = NORMAL;
                     PRAGMA busy_timeout = {};",
                    busy_timeout_ms
                ))
            });
            (manager, config.max_connections, false)
        }
        DatabaseLocation::Memory => {
            log::info!("Opening in-memory database");

            let manager = SqliteConnectionManager::memory().with_init(move |conn| {
                conn.execute_batch(&format!(
                    "PRAGMA foreign_keys = ON;
                     PRAGMA busy_timeout = {};",
                    busy_timeout_ms
                ))
            });
            (manager, 1, true)
        }
    };

    let mut builder = Pool::builder().max_size(max_size);
    if keep_alive {
        // recycling the only connection would drop the database with it
        builder = builder.idle_timeout(None).max_lifetime(None);
    }

    let pool = builder
        .build(manager)
        .map_err(|e| AppError::Pool(format!("Failed to create connection pool: {}", e)))?;

    Ok(pool)
}

/// Get a connection from the pool
///
/// This is a convenience wrapper that provides better error messages.
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}

/// Create a standalone in-memory connection (for testing)
pub fn create_test_connection() -> AppResult<Connection> {
    let conn = Connection::open_in_memory().map_err(AppError::Database)?;

    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(AppError::Database)?;

    Ok(conn)
}
