// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business rules beyond what the schema enforces
// - Every outcome is a RequestResult; driver errors never escape
// - Explicit SQL only

pub mod category_repository;
pub mod video_repository;

pub use category_repository::{CategoryRepository, SqliteCategoryRepository};
pub use video_repository::{SqliteVideoRepository, VideoRepository};

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use video_repository::MockVideoRepository;

use std::sync::Arc;

use rusqlite::{Connection, ErrorCode};

use crate::db::{get_connection, ConnectionPool};
use crate::domain::{RequestResult, ValidationResult};
use crate::error::{AppError, AppResult};

/// Run `work` on a pooled connection off the async runtime.
///
/// `work` decides the domain outcome itself (not found, conflict...);
/// anything it propagates with `?` becomes a generic `Error`.
pub(crate) async fn run_blocking<T, F>(
    pool: &Arc<ConnectionPool>,
    operation: &'static str,
    work: F,
) -> RequestResult<T>
where
    T: Send + 'static,
    F: FnOnce(&Connection) -> AppResult<RequestResult<T>> + Send + 'static,
{
    let pool = Arc::clone(pool);
    let outcome = tokio::task::spawn_blocking(move || {
        let conn = get_connection(&pool)?;
        work(&conn)
    })
    .await
    .map_err(AppError::from);

    match outcome {
        Ok(Ok(result)) => result,
        Ok(Err(err)) | Err(err) => {
            log::error!("{} failed: {}", operation, err);
            RequestResult::error(format!("{} failed: {}", operation, err))
        }
    }
}

/// Whether the statement was rejected by a UNIQUE/PRIMARY KEY constraint
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

/// 1-based page number and page size, checked before touching the store
pub(crate) fn check_paging(page: u32, size: u32) -> ValidationResult {
    let mut result = ValidationResult::new();
    result
        .ensure(page >= 1, "Page", "Page must be at least 1")
        .ensure(size >= 1, "Size", "Size must be at least 1");
    result
}

/// Row offset of the first item of `page`
pub(crate) fn page_offset(page: u32, size: u32) -> i64 {
    (i64::from(page) - 1) * i64::from(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset_is_one_based() {
        assert_eq!(page_offset(1, 10), 0);
        assert_eq!(page_offset(3, 10), 20);
    }

    #[test]
    fn test_check_paging_reports_both_fields() {
        let result = check_paging(0, 0);
        let fields: Vec<&str> = result.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["Page", "Size"]);
        assert!(check_paging(1, 1).is_valid());
    }
}
