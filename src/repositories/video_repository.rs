// src/repositories/video_repository.rs
//
// Video persistence

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

use super::category_repository::parse_timestamp;
use super::{check_paging, is_unique_violation, page_offset, run_blocking};
use crate::db::ConnectionPool;
use crate::domain::{RequestResult, Video};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Store a new video; an id is generated when the video has none
    async fn create(&self, video: Video) -> RequestResult<Video>;
    async fn update(&self, video: Video) -> RequestResult<Video>;
    async fn delete(&self, id: Uuid) -> RequestResult<Video>;
    async fn get_by_id(&self, id: Uuid) -> RequestResult<Video>;
    /// 1-based `page` of `size` videos, oldest first
    async fn get(&self, page: u32, size: u32) -> RequestResult<Vec<Video>>;
}

pub struct SqliteVideoRepository {
    pool: Arc<ConnectionPool>,
}

const SELECT_COLUMNS: &str =
    "SELECT id, title, description, url, user_id, created_at, updated_at FROM videos";

impl SqliteVideoRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_video(row: &Row) -> Result<Video, rusqlite::Error> {
        let id_str: String = row.get("id")?;
        let id = Uuid::parse_str(&id_str)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;

        let title: String = row.get("title")?;
        let description: String = row.get("description")?;
        let url: String = row.get("url")?;
        let user_id: String = row.get("user_id")?;
        let created_at = parse_timestamp(row.get("created_at")?, 5)?;
        let updated_at = parse_timestamp(row.get("updated_at")?, 6)?;

        match Video::from_persistence(id, &title, &description, &url, &user_id, created_at, updated_at)
        {
            RequestResult::Success(video) => Ok(video),
            rejected => Err(rusqlite::Error::FromSqlConversionFailure(
                0,
                Type::Text,
                format!(
                    "stored video {} is invalid: {}",
                    id,
                    rejected.message().unwrap_or_default()
                )
                .into(),
            )),
        }
    }

    fn find(conn: &Connection, id: Uuid) -> AppResult<Option<Video>> {
        let video = conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id.to_string()],
                Self::row_to_video,
            )
            .optional()?;
        Ok(video)
    }
}

fn not_found<T>(id: Uuid) -> RequestResult<T> {
    RequestResult::not_found(format!("Video {} not found", id))
}

#[async_trait]
impl VideoRepository for SqliteVideoRepository {
    async fn create(&self, video: Video) -> RequestResult<Video> {
        let id = video.id().unwrap_or_else(Uuid::new_v4);
        let video = video.with_id(id);
        log::debug!("Inserting video {}", id);

        run_blocking(&self.pool, "Create video", move |conn| {
            let inserted = conn.execute(
                "INSERT INTO videos (id, title, description, url, user_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    id.to_string(),
                    video.title(),
                    video.description(),
                    video.url(),
                    video.user_id(),
                    video.created_at().to_rfc3339(),
                    video.updated_at().to_rfc3339(),
                ],
            );

            match inserted {
                Ok(_) => Ok(RequestResult::Success(video)),
                Err(e) if is_unique_violation(&e) => Ok(RequestResult::already_exists(format!(
                    "Video {} already exists",
                    id
                ))),
                Err(e) => Err(e.into()),
            }
        })
        .await
    }

    async fn update(&self, video: Video) -> RequestResult<Video> {
        let Some(id) = video.id() else {
            return RequestResult::validation("Id", "Id is required");
        };
        log::debug!("Updating video {}", id);

        run_blocking(&self.pool, "Update video", move |conn| {
            let updated = conn.execute(
                "UPDATE videos SET title = ?1, description = ?2, url = ?3, user_id = ?4,
                        updated_at = ?5
                 WHERE id = ?6",
                params![
                    video.title(),
                    video.description(),
                    video.url(),
                    video.user_id(),
                    Utc::now().to_rfc3339(),
                    id.to_string(),
                ],
            )?;

            if updated == 0 {
                return Ok(not_found(id));
            }

            Ok(Self::find(conn, id)?
                .map(RequestResult::Success)
                .unwrap_or_else(|| not_found(id)))
        })
        .await
    }

    async fn delete(&self, id: Uuid) -> RequestResult<Video> {
        log::debug!("Deleting video {}", id);

        run_blocking(&self.pool, "Delete video", move |conn| {
            let Some(video) = Self::find(conn, id)? else {
                return Ok(not_found(id));
            };

            conn.execute("DELETE FROM videos WHERE id = ?1", params![id.to_string()])?;
            Ok(RequestResult::Success(video))
        })
        .await
    }

    async fn get_by_id(&self, id: Uuid) -> RequestResult<Video> {
        log::debug!("Loading video {}", id);

        run_blocking(&self.pool, "Get video", move |conn| {
            Ok(Self::find(conn, id)?
                .map(RequestResult::Success)
                .unwrap_or_else(|| not_found(id)))
        })
        .await
    }

    async fn get(&self, page: u32, size: u32) -> RequestResult<Vec<Video>> {
        let paging = check_paging(page, size);
        if paging.has_error() {
            return paging.into();
        }
        log::debug!("Listing videos page {} size {}", page, size);

        run_blocking(&self.pool, "List videos", move |conn| {
            let mut stmt = conn.prepare(&format!(
                "{} ORDER BY created_at, id LIMIT ?1 OFFSET ?2",
                SELECT_COLUMNS
            ))?;

            let videos = stmt
                .query_map(
                    params![i64::from(size), page_offset(page, size)],
                    Self::row_to_video,
                )?
                .collect::<Result<Vec<_>, _>>()?;

            Ok(RequestResult::Success(videos))
        })
        .await
    }
}
