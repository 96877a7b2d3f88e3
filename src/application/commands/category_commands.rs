// src/application/commands/category_commands.rs
//
// Category Command Handlers
//
// RULES:
// - Decode the payload into a DTO
// - Run the coarse boundary check
// - Call exactly one use case
// - Never contain business logic

use std::sync::Arc;

use serde_json::Value;

use super::{decode, decode_or_default, screen, CommandRegistryBuilder};
use crate::application::dto::{
    CategoryIdDto, CategoryRequestDto, CategoryResponseDto, PageRequestDto, PagedResponseDto,
    UpdateCategoryRequestDto,
};
use crate::application::error_handling::{CommandResponse, STATUS_CREATED, STATUS_OK};
use crate::application::state::AppState;
use crate::use_cases::{PageRequest, UseCase};

pub const CREATE_CATEGORY: &str = "categories.create";
pub const UPDATE_CATEGORY: &str = "categories.update";
pub const DELETE_CATEGORY: &str = "categories.delete";
pub const GET_CATEGORY_BY_ID: &str = "categories.get_by_id";
pub const LIST_CATEGORIES: &str = "categories.list";

pub fn register(builder: CommandRegistryBuilder) -> CommandRegistryBuilder {
    builder
        .register(CREATE_CATEGORY, create_category)
        .register(UPDATE_CATEGORY, update_category)
        .register(DELETE_CATEGORY, delete_category)
        .register(GET_CATEGORY_BY_ID, get_category_by_id)
        .register(LIST_CATEGORIES, list_categories)
}

/// Create a new category
pub async fn create_category(state: Arc<AppState>, payload: Value) -> CommandResponse {
    let dto: CategoryRequestDto = match decode(payload) {
        Ok(dto) => dto,
        Err(response) => return response,
    };
    if let Err(response) = screen(dto.check()) {
        return response;
    }

    let outcome = state.create_category.execute(Some(dto.into())).await;
    CommandResponse::from_outcome(outcome, STATUS_CREATED, CategoryResponseDto::from)
}

/// Replace name and description of a stored category
pub async fn update_category(state: Arc<AppState>, payload: Value) -> CommandResponse {
    let dto: UpdateCategoryRequestDto = match decode(payload) {
        Ok(dto) => dto,
        Err(response) => return response,
    };
    if let Err(response) = screen(dto.check()) {
        return response;
    }

    let outcome = state.update_category.execute(Some(dto.into())).await;
    CommandResponse::from_outcome(outcome, STATUS_OK, CategoryResponseDto::from)
}

/// Delete a category; the response carries what was removed
pub async fn delete_category(state: Arc<AppState>, payload: Value) -> CommandResponse {
    let dto: CategoryIdDto = match decode(payload) {
        Ok(dto) => dto,
        Err(response) => return response,
    };

    let outcome = state.delete_category.execute(Some(dto.id)).await;
    CommandResponse::from_outcome(outcome, STATUS_OK, CategoryResponseDto::from)
}

pub async fn get_category_by_id(state: Arc<AppState>, payload: Value) -> CommandResponse {
    let dto: CategoryIdDto = match decode(payload) {
        Ok(dto) => dto,
        Err(response) => return response,
    };

    let outcome = state.get_category_by_id.execute(Some(dto.id)).await;
    CommandResponse::from_outcome(outcome, STATUS_OK, CategoryResponseDto::from)
}

/// List one page of categories; no payload means the first page
pub async fn list_categories(state: Arc<AppState>, payload: Value) -> CommandResponse {
    let dto: PageRequestDto = match decode_or_default(payload) {
        Ok(dto) => dto,
        Err(response) => return response,
    };
    let paging = PageRequest::from(dto);

    let outcome = state.get_categories.execute(Some(paging)).await;
    CommandResponse::from_outcome(outcome, STATUS_OK, |categories| {
        PagedResponseDto::<CategoryResponseDto>::new(paging, categories)
    })
}
