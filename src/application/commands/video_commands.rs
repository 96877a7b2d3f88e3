// src/application/commands/video_commands.rs
//
// Video Command Handlers

use std::sync::Arc;

use serde_json::Value;

use super::{decode, decode_or_default, screen, CommandRegistryBuilder};
use crate::application::dto::{
    PageRequestDto, PagedResponseDto, UpdateVideoRequestDto, VideoIdDto, VideoRequestDto,
    VideoResponseDto,
};
use crate::application::error_handling::{CommandResponse, STATUS_CREATED, STATUS_OK};
use crate::application::state::AppState;
use crate::use_cases::{PageRequest, UseCase};

pub const CREATE_VIDEO: &str = "videos.create";
pub const UPDATE_VIDEO: &str = "videos.update";
pub const DELETE_VIDEO: &str = "videos.delete";
pub const GET_VIDEO_BY_ID: &str = "videos.get_by_id";
pub const LIST_VIDEOS: &str = "videos.list";

pub fn register(builder: CommandRegistryBuilder) -> CommandRegistryBuilder {
    builder
        .register(CREATE_VIDEO, create_video)
        .register(UPDATE_VIDEO, update_video)
        .register(DELETE_VIDEO, delete_video)
        .register(GET_VIDEO_BY_ID, get_video_by_id)
        .register(LIST_VIDEOS, list_videos)
}

pub async fn create_video(state: Arc<AppState>, payload: Value) -> CommandResponse {
    let dto: VideoRequestDto = match decode(payload) {
        Ok(dto) => dto,
        Err(response) => return response,
    };
    if let Err(response) = screen(dto.check()) {
        return response;
    }

    let outcome = state.create_video.execute(Some(dto.into())).await;
    CommandResponse::from_outcome(outcome, STATUS_CREATED, VideoResponseDto::from)
}

/// A missing `id` is left for the use case to report
pub async fn update_video(state: Arc<AppState>, payload: Value) -> CommandResponse {
    let dto: UpdateVideoRequestDto = match decode(payload) {
        Ok(dto) => dto,
        Err(response) => return response,
    };
    if let Err(response) = screen(dto.check()) {
        return response;
    }

    let outcome = state.update_video.execute(Some(dto.into())).await;
    CommandResponse::from_outcome(outcome, STATUS_OK, VideoResponseDto::from)
}

pub async fn delete_video(state: Arc<AppState>, payload: Value) -> CommandResponse {
    let dto: VideoIdDto = match decode(payload) {
        Ok(dto) => dto,
        Err(response) => return response,
    };

    let outcome = state.delete_video.execute(Some(dto.id)).await;
    CommandResponse::from_outcome(outcome, STATUS_OK, VideoResponseDto::from)
}

pub async fn get_video_by_id(state: Arc<AppState>, payload: Value) -> CommandResponse {
    let dto: VideoIdDto = match decode(payload) {
        Ok(dto) => dto,
        Err(response) => return response,
    };

    let outcome = state.get_video_by_id.execute(Some(dto.id)).await;
    CommandResponse::from_outcome(outcome, STATUS_OK, VideoResponseDto::from)
}

pub async fn list_videos(state: Arc<AppState>, payload: Value) -> CommandResponse {
    let dto: PageRequestDto = match decode_or_default(payload) {
        Ok(dto) => dto,
        Err(response) => return response,
    };
    let paging = PageRequest::from(dto);

    let outcome = state.get_videos.execute(Some(paging)).await;
    CommandResponse::from_outcome(outcome, STATUS_OK, |videos| {
        PagedResponseDto::<VideoResponseDto>::new(paging, videos)
    })
}
