// src/use_cases/mod.rs
//
// Use Cases - Orchestration Layer
//
// Every use case runs the same fixed sequence and stops at the first
// terminal state:
//
//   1. null request         -> Err(AppError::ArgumentNull)   (caller bug)
//   2. factory rejects      -> Error, carrying every field    (no I/O)
//   3. validator rejects    -> Validations                    (no I/O)
//   4. one repository call  -> repository's RequestResult
//
// Use cases hold no per-request state and may run concurrently.

pub mod category_use_cases;
pub mod video_use_cases;

#[cfg(test)]
mod use_case_tests;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{RequestResult, RequestStatus, ValidationResult};
use crate::error::{AppError, AppResult};

pub use category_use_cases::{
    CreateCategoryRequest, CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoriesUseCase,
    GetCategoryByIdUseCase, UpdateCategoryRequest, UpdateCategoryUseCase,
};

pub use video_use_cases::{
    CreateVideoRequest, CreateVideoUseCase, DeleteVideoUseCase, GetVideoByIdUseCase,
    GetVideosUseCase, UpdateVideoRequest, UpdateVideoUseCase,
};

/// A single orchestration step: validation plus one persistence call.
///
/// `Err` is reserved for contract violations by the caller. Every
/// expected failure comes back as a `RequestResult`.
#[async_trait]
pub trait UseCase<TRequest, TResponse>: Send + Sync {
    async fn execute(&self, request: Option<TRequest>) -> AppResult<RequestResult<TResponse>>;
}

/// 1-based page selection for listing use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub const MAX_SIZE: u32 = 100;

    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    pub fn check(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result
            .ensure(self.page >= 1, "Page", "Page must be at least 1")
            .ensure(
                (1..=Self::MAX_SIZE).contains(&self.size),
                "Size",
                format!("Size must be between 1 and {}", Self::MAX_SIZE),
            );
        result
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

/// Step 1: a missing request is a programming error
pub(crate) fn require<T>(use_case: &'static str, request: Option<T>) -> AppResult<T> {
    request.ok_or_else(|| {
        log::error!("{}: called without a request", use_case);
        AppError::ArgumentNull("request")
    })
}

/// Step 2: the factory refused to build the entity.
///
/// Whatever the factory reported becomes an `Error`; its message keeps
/// the full field list.
pub(crate) fn factory_failed<T>(use_case: &'static str, rejected: RequestResult<T>) -> RequestResult<T> {
    let message = rejected.message().unwrap_or_default();
    log::warn!("{}: entity could not be built: {}", use_case, message);
    RequestResult::error(message)
}

/// Step 3: `Some(Validations)` when the validator found anything
pub(crate) fn check<T>(use_case: &'static str, validation: ValidationResult) -> Option<RequestResult<T>> {
    if validation.is_valid() {
        return None;
    }
    log::warn!(
        "{}: rejected before persistence: {}",
        use_case,
        validation.message()
    );
    Some(validation.into())
}

/// Step 4: log the repository outcome and hand it back unchanged
pub(crate) fn report<T>(use_case: &'static str, result: RequestResult<T>) -> RequestResult<T> {
    match result.status() {
        RequestStatus::Success => log::info!("{}: success", use_case),
        RequestStatus::Error => log::error!(
            "{}: persistence failed: {}",
            use_case,
            result.message().unwrap_or_default()
        ),
        _ => log::warn!(
            "{}: {:?}: {}",
            use_case,
            result.status(),
            result.message().unwrap_or_default()
        ),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_bounds() {
        assert!(PageRequest::new(1, 1).check().is_valid());
        assert!(PageRequest::new(7, PageRequest::MAX_SIZE).check().is_valid());

        let result = PageRequest::new(0, PageRequest::MAX_SIZE + 1).check();
        let fields: Vec<&str> = result.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["Page", "Size"]);
    }

    #[test]
    fn test_factory_failure_becomes_error_with_every_field() {
        let rejected: RequestResult<u8> = RequestResult::Validations(vec![
            crate::domain::ValidationError::new("Name", "Name is required"),
            crate::domain::ValidationError::new("Description", "Description is required"),
        ]);

        let result = factory_failed("Sample", rejected);

        assert_eq!(result.status(), RequestStatus::Error);
        assert_eq!(
            result.message().as_deref(),
            Some("Name: Name is required; Description: Description is required")
        );
    }

    #[test]
    fn test_require_reports_argument_null() {
        let err = require::<u8>("Sample", None).unwrap_err();
        assert!(matches!(err, AppError::ArgumentNull("request")));
        assert_eq!(require("Sample", Some(3)).unwrap(), 3);
    }
}
