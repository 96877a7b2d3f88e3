// src/repositories/category_repository.rs
//
// Category persistence

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{check_paging, is_unique_violation, page_offset, run_blocking};
use crate::db::ConnectionPool;
use crate::domain::{Category, RequestResult};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Store a new category; the result carries the assigned id
    async fn create(&self, category: Category) -> RequestResult<Category>;
    async fn update(&self, category: Category) -> RequestResult<Category>;
    /// Remove a category, returning what was removed
    async fn delete(&self, id: i64) -> RequestResult<Category>;
    async fn get_by_id(&self, id: i64) -> RequestResult<Category>;
    /// 1-based `page` of `size` categories, ordered by id
    async fn get(&self, page: u32, size: u32) -> RequestResult<Vec<Category>>;
}

pub struct SqliteCategoryRepository {
    pool: Arc<ConnectionPool>,
}

const SELECT_COLUMNS: &str = "SELECT id, name, description, created_at, updated_at FROM categories";

impl SqliteCategoryRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Category - returns rusqlite::Error for query_map compatibility
    fn row_to_category(row: &Row) -> Result<Category, rusqlite::Error> {
        let id: i64 = row.get("id")?;
        let name: String = row.get("name")?;
        let description: String = row.get("description")?;
        let created_at = parse_timestamp(row.get("created_at")?, 3)?;
        let updated_at = parse_timestamp(row.get("updated_at")?, 4)?;

        match Category::from_persistence(id, &name, &description, created_at, updated_at) {
            RequestResult::Success(category) => Ok(category),
            rejected => Err(rusqlite::Error::FromSqlConversionFailure(
                1,
                Type::Text,
                format!(
                    "stored category {} is invalid: {}",
                    id,
                    rejected.message().unwrap_or_default()
                )
                .into(),
            )),
        }
    }

    fn find(conn: &Connection, id: i64) -> AppResult<Option<Category>> {
        let category = conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id],
                Self::row_to_category,
            )
            .optional()?;
        Ok(category)
    }
}

pub(crate) fn parse_timestamp(raw: String, column: usize) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

fn not_found<T>(id: i64) -> RequestResult<T> {
    RequestResult::not_found(format!("Category {} not found", id))
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn create(&self, category: Category) -> RequestResult<Category> {
        log::debug!("Inserting category {:?}", category.name().value());

        run_blocking(&self.pool, "Create category", move |conn| {
            let inserted = conn.execute(
                "INSERT INTO categories (name, description, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    category.name().value(),
                    category.description().value(),
                    category.created_at().to_rfc3339(),
                    category.updated_at().to_rfc3339(),
                ],
            );

            match inserted {
                Ok(_) => {
                    let id = conn.last_insert_rowid();
                    Ok(RequestResult::Success(category.with_id(id)))
                }
                Err(e) if is_unique_violation(&e) => Ok(RequestResult::already_exists(format!(
                    "Category '{}' already exists",
                    category.name()
                ))),
                Err(e) => Err(e.into()),
            }
        })
        .await
    }

    async fn update(&self, category: Category) -> RequestResult<Category> {
        log::debug!("Updating category {}", category.id());

        run_blocking(&self.pool, "Update category", move |conn| {
            let updated = conn.execute(
                "UPDATE categories SET name = ?1, description = ?2, updated_at = ?3
                 WHERE id = ?4",
                params![
                    category.name().value(),
                    category.description().value(),
                    Utc::now().to_rfc3339(),
                    category.id(),
                ],
            );

            match updated {
                Ok(0) => Ok(not_found(category.id())),
                Ok(_) => Ok(Self::find(conn, category.id())?
                    .map(RequestResult::Success)
                    .unwrap_or_else(|| not_found(category.id()))),
                Err(e) if is_unique_violation(&e) => Ok(RequestResult::already_exists(format!(
                    "Category '{}' already exists",
                    category.name()
                ))),
                Err(e) => Err(e.into()),
            }
        })
        .await
    }

    async fn delete(&self, id: i64) -> RequestResult<Category> {
        log::debug!("Deleting category {}", id);

        run_blocking(&self.pool, "Delete category", move |conn| {
            let Some(category) = Self::find(conn, id)? else {
                return Ok(not_found(id));
            };

            conn.execute("DELETE FROM categories WHERE id = ?1", params![id])?;
            Ok(RequestResult::Success(category))
        })
        .await
    }

    async fn get_by_id(&self, id: i64) -> RequestResult<Category> {
        log::debug!("Loading category {}", id);

        run_blocking(&self.pool, "Get category", move |conn| {
            Ok(Self::find(conn, id)?
                .map(RequestResult::Success)
                .unwrap_or_else(|| not_found(id)))
        })
        .await
    }

    async fn get(&self, page: u32, size: u32) -> RequestResult<Vec<Category>> {
        let paging = check_paging(page, size);
        if paging.has_error() {
            return paging.into();
        }
        log::debug!("Listing categories page {} size {}", page, size);

        run_blocking(&self.pool, "List categories", move |conn| {
            let mut stmt = conn.prepare(&format!(
                "{} ORDER BY id LIMIT ?1 OFFSET ?2",
                SELECT_COLUMNS
            ))?;

            let categories = stmt
                .query_map(
                    params![i64::from(size), page_offset(page, size)],
                    Self::row_to_category,
                )?
                .collect::<Result<Vec<_>, _>>()?;

            Ok(RequestResult::Success(categories))
        })
        .await
    }
}
