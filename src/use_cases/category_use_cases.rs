// src/use_cases/category_use_cases.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::{check, factory_failed, report, require, PageRequest, UseCase};
use crate::domain::{Category, EntityValidator, RequestResult, ValidationResult};
use crate::error::AppResult;
use crate::repositories::CategoryRepository;

#[derive(Debug, Clone)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct UpdateCategoryRequest {
    pub id: i64,
    pub name: String,
    pub description: String,
}

fn check_id(id: i64) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.ensure(id > Category::UNSAVED_ID, "Id", "Id must be a positive number");
    result
}

// ============================================================================
// CREATE
// ============================================================================

pub struct CreateCategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
    validator: Arc<dyn EntityValidator<Category>>,
}

impl CreateCategoryUseCase {
    const NAME: &'static str = "CreateCategory";

    pub fn new(
        repository: Arc<dyn CategoryRepository>,
        validator: Arc<dyn EntityValidator<Category>>,
    ) -> Self {
        Self {
            repository,
            validator,
        }
    }
}

#[async_trait]
impl UseCase<CreateCategoryRequest, Category> for CreateCategoryUseCase {
    async fn execute(
        &self,
        request: Option<CreateCategoryRequest>,
    ) -> AppResult<RequestResult<Category>> {
        let request = require(Self::NAME, request)?;

        let category = match Category::create(&request.name, &request.description).into_result() {
            Ok(category) => category,
            Err(rejected) => return Ok(factory_failed(Self::NAME, rejected)),
        };

        if let Some(rejected) = check(Self::NAME, self.validator.validate(Some(&category))) {
            return Ok(rejected);
        }

        Ok(report(Self::NAME, self.repository.create(category).await))
    }
}

// ============================================================================
// UPDATE
// ============================================================================

pub struct UpdateCategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
    validator: Arc<dyn EntityValidator<Category>>,
}

impl UpdateCategoryUseCase {
    const NAME: &'static str = "UpdateCategory";

    pub fn new(
        repository: Arc<dyn CategoryRepository>,
        validator: Arc<dyn EntityValidator<Category>>,
    ) -> Self {
        Self {
            repository,
            validator,
        }
    }
}

#[async_trait]
impl UseCase<UpdateCategoryRequest, Category> for UpdateCategoryUseCase {
    async fn execute(
        &self,
        request: Option<UpdateCategoryRequest>,
    ) -> AppResult<RequestResult<Category>> {
        let request = require(Self::NAME, request)?;

        let category = match Category::create(&request.name, &request.description).into_result() {
            Ok(category) => category.with_id(request.id),
            Err(rejected) => return Ok(factory_failed(Self::NAME, rejected)),
        };

        if let Some(rejected) = check(Self::NAME, self.validator.validate_update(Some(&category))) {
            return Ok(rejected);
        }

        Ok(report(Self::NAME, self.repository.update(category).await))
    }
}

// ============================================================================
// DELETE
// ============================================================================

pub struct DeleteCategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl DeleteCategoryUseCase {
    const NAME: &'static str = "DeleteCategory";

    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<i64, Category> for DeleteCategoryUseCase {
    async fn execute(&self, request: Option<i64>) -> AppResult<RequestResult<Category>> {
        let id = require(Self::NAME, request)?;

        if let Some(rejected) = check(Self::NAME, check_id(id)) {
            return Ok(rejected);
        }

        Ok(report(Self::NAME, self.repository.delete(id).await))
    }
}

// ============================================================================
// QUERIES
// ============================================================================

pub struct GetCategoryByIdUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl GetCategoryByIdUseCase {
    const NAME: &'static str = "GetCategoryById";

    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<i64, Category> for GetCategoryByIdUseCase {
    async fn execute(&self, request: Option<i64>) -> AppResult<RequestResult<Category>> {
        let id = require(Self::NAME, request)?;

        if let Some(rejected) = check(Self::NAME, check_id(id)) {
            return Ok(rejected);
        }

        Ok(report(Self::NAME, self.repository.get_by_id(id).await))
    }
}

pub struct GetCategoriesUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl GetCategoriesUseCase {
    const NAME: &'static str = "GetCategories";

    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<PageRequest, Vec<Category>> for GetCategoriesUseCase {
    async fn execute(&self, request: Option<PageRequest>) -> AppResult<RequestResult<Vec<Category>>> {
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
