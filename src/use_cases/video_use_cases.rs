// src/use_cases/video_use_cases.rs
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::{check, factory_failed, report, require, PageRequest, UseCase};
use crate::domain::{EntityValidator, RequestResult, Video};
use crate::error::AppResult;
use crate::repositories::VideoRepository;

#[derive(Debug, Clone)]
pub struct CreateVideoRequest {
    pub title: String,
    pub description: String,
    pub url: String,
    pub user_id: String,
}

/// `id` stays optional here so a missing one surfaces as an `Id`
/// validation error instead of a decoding failure.
#[derive(Debug, Clone)]
pub struct UpdateVideoRequest {
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub url: String,
    pub user_id: String,
}

// ============================================================================
// CREATE
// ============================================================================

pub struct CreateVideoUseCase {
    repository: Arc<dyn VideoRepository>,
    validator: Arc<dyn EntityValidator<Video>>,
}

impl CreateVideoUseCase {
    const NAME: &'static str = "CreateVideo";

    pub fn new(
        repository: Arc<dyn VideoRepository>,
        validator: Arc<dyn EntityValidator<Video>>,
    ) -> Self {
        Self {
            repository,
            validator,
        }
    }
}

#[async_trait]
impl UseCase<CreateVideoRequest, Video> for CreateVideoUseCase {
    async fn execute(&self, request: Option<CreateVideoRequest>) -> AppResult<RequestResult<Video>> {
        let request = require(Self::NAME, request)?;

        let video = match Video::create(
            &request.title,
            &request.description,
            &request.url,
            &request.user_id,
        )
        .into_result()
        {
            Ok(video) => video,
            Err(rejected) => return Ok(factory_failed(Self::NAME, rejected)),
        };

        if let Some(rejected) = check(Self::NAME, self.validator.validate(Some(&video))) {
            return Ok(rejected);
        }

        Ok(report(Self::NAME, self.repository.create(video).await))
    }
}

// ============================================================================
// UPDATE
// ============================================================================

pub struct UpdateVideoUseCase {
    repository: Arc<dyn VideoRepository>,
    validator: Arc<dyn EntityValidator<Video>>,
}

impl UpdateVideoUseCase {
    const NAME: &'static str = "UpdateVideo";

    pub fn new(
        repository: Arc<dyn VideoRepository>,
        validator: Arc<dyn EntityValidator<Video>>,
    ) -> Self {
        Self {
            repository,
            validator,
        }
    }
}

#[async_trait]
impl UseCase<UpdateVideoRequest, Video> for UpdateVideoUseCase {
    async fn execute(&self, request: Option<UpdateVideoRequest>) -> AppResult<RequestResult<Video>> {
        let request = require(Self::NAME, request)?;

        let video = match Video::create(
            &request.title,
            &request.description,
            &request.url,
            &request.user_id,
        )
        .into_result()
        {
            Ok(video) => match request.id {
                Some(id) => video.with_id(id),
                None => video,
            },
            Err(rejected) => return Ok(factory_failed(Self::NAME, rejected)),
        };

        if let Some(rejected) = check(Self::NAME, self.validator.validate_update(Some(&video))) {
            return Ok(rejected);
        }

        Ok(report(Self::NAME, self.repository.update(video).await))
    }
}

// ============================================================================
// DELETE
// ============================================================================

pub struct DeleteVideoUseCase {
    repository: Arc<dyn VideoRepository>,
}

impl DeleteVideoUseCase {
    const NAME: &'static str = "DeleteVideo";

    pub fn new(repository: Arc<dyn VideoRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<Uuid, Video> for DeleteVideoUseCase {
    async fn execute(&self, request: Option<Uuid>) -> AppResult<RequestResult<Video>> {
        let id = require(Self::NAME, request)?;
        Ok(report(Self::NAME, self.repository.delete(id).await))
    }
}

// ============================================================================
// QUERIES
// ============================================================================

pub struct GetVideoByIdUseCase {
    repository: Arc<dyn VideoRepository>,
}

impl GetVideoByIdUseCase {
    const NAME: &'static str = "GetVideoById";

    pub fn new(repository: Arc<dyn VideoRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<Uuid, Video> for GetVideoByIdUseCase {
    async fn execute(&self, request: Option<Uuid>) -> AppResult<RequestResult<Video>> {
        let id = require(Self::NAME, request)?;
        Ok(report(Self::NAME, self.repository.get_by_id(id).await))
    }
}

pub struct GetVideosUseCase {
    repository: Arc<dyn VideoRepository>,
}

impl GetVideosUseCase {
    const NAME: &'static str = "GetVideos";

    pub fn new(repository: Arc<dyn VideoRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<PageRequest, Vec<Video>> for GetVideosUseCase {
    async fn execute(&self, request: Option<PageRequest>) -> AppResult<RequestResult<Vec<Video>>> {
        let paging = require(Self::NAME, request)?;

        if let Some(rejected) = check(Self::NAME, paging.check()) {
            return Ok(rejected);
        }

        Ok(report(
            Self::NAME,
            self.repository.get(paging.page, paging.size).await,
        ))
    }
}
