// src/domain/request_result.rs
//
// Outcome of every domain operation.
//
// A RequestResult is exactly one of its variants, so a payload and an
// error can never travel together.

use serde::{Deserialize, Serialize};

use crate::domain::validation::{ValidationError, ValidationResult};
use crate::domain::DomainError;

/// Discriminant of a RequestResult, used by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Success,
    Error,
    Validations,
    EntityNotFound,
    EntityAlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "payload", rename_all = "snake_case")]
pub enum RequestResult<T> {
    /// Operation completed and produced `T`
    Success(T),

    /// Operation failed (usually persistence) with a message
    Error(String),

    /// Input rejected; one entry per offending field
    Validations(Vec<ValidationError>),

    /// The addressed entity does not exist
    EntityNotFound(String),

    /// A uniqueness rule in the store rejected the entity
    EntityAlreadyExists(String),
}

impl<T> RequestResult<T> {
    pub fn success(data: T) -> Self {
        RequestResult::Success(data)
    }

    pub fn error(message: impl Into<String>) -> Self {
        RequestResult::Error(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        RequestResult::EntityNotFound(message.into())
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        RequestResult::EntityAlreadyExists(message.into())
    }

    /// Single-field validation failure
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        RequestResult::Validations(vec![ValidationError::new(field, message)])
    }

    pub fn status(&self) -> RequestStatus {
        match self {
            RequestResult::Success(_) => RequestStatus::Success,
            RequestResult::Error(_) => RequestStatus::Error,
            RequestResult::Validations(_) => RequestStatus::Validations,
            RequestResult::EntityNotFound(_) => RequestStatus::EntityNotFound,
            RequestResult::EntityAlreadyExists(_) => RequestStatus::EntityAlreadyExists,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RequestResult::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RequestResult::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            RequestResult::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Failure message. Validation failures render their field list.
    pub fn message(&self) -> Option<String> {
        match self {
            RequestResult::Success(_) => None,
            RequestResult::Error(message)
            | RequestResult::EntityNotFound(message)
            | RequestResult::EntityAlreadyExists(message) => Some(message.clone()),
            RequestResult::Validations(errors) => Some(
                errors
                    .iter()
                    .map(ValidationError::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
        }
    }

    pub fn validations(&self) -> &[ValidationError] {
        match self {
            RequestResult::Validations(errors) => errors,
            _ => &[],
        }
    }

    /// Splits off the payload. A failure is re-typed so it can be
    /// returned from an operation producing a different `U`.
    pub fn into_result<U>(self) -> Result<T, RequestResult<U>> {
        match self {
            RequestResult::Success(data) => Ok(data),
            RequestResult::Error(message) => Err(RequestResult::Error(message)),
            RequestResult::Validations(errors) => Err(RequestResult::Validations(errors)),
            RequestResult::EntityNotFound(message) => Err(RequestResult::EntityNotFound(message)),
            RequestResult::EntityAlreadyExists(message) => {
                Err(RequestResult::EntityAlreadyExists(message))
            }
        }
    }
}

impl<T> From<ValidationResult> for RequestResult<T> {
    /// Meant for invalid results; a valid one still becomes an empty
    /// `Validations` rather than inventing a payload.
    fn from(result: ValidationResult) -> Self {
        RequestResult::Validations(result.into_errors())
    }
}

impl<T> From<DomainError> for RequestResult<T> {
    fn from(err: DomainError) -> Self {
        RequestResult::Validations(vec![err.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_carries_data_only() {
        let result = RequestResult::success(7);
        assert_eq!(result.status(), RequestStatus::Success);
        assert_eq!(result.data(), Some(&7));
        assert_eq!(result.message(), None);
        assert!(result.validations().is_empty());
    }

    #[test]
    fn test_error_carries_no_data() {
        let result: RequestResult<i32> = RequestResult::error("disk full");
        assert_eq!(result.status(), RequestStatus::Error);
        assert_eq!(result.data(), None);
        assert_eq!(result.message().as_deref(), Some("disk full"));
    }

    #[test]
    fn test_validation_result_converts_to_validations() {
        let mut validation = ValidationResult::new();
        validation.add_error("Title", "Title is required");
        validation.add_error("Url", "Url is required");

        let result: RequestResult<()> = validation.into();

        assert_eq!(result.status(), RequestStatus::Validations);
        assert_eq!(result.validations().len(), 2);
        assert_eq!(
            result.message().as_deref(),
            Some("Title: Title is required; Url: Url is required")
        );
    }

    #[test]
    fn test_into_result_retypes_failure() {
        let result: RequestResult<i32> = RequestResult::already_exists("duplicate");
        let split: Result<i32, RequestResult<String>> = result.into_result();
        assert_eq!(split, Err(RequestResult::EntityAlreadyExists("duplicate".to_string())));
    }

    #[test]
    fn test_serialized_shape_is_tagged() {
        let result: RequestResult<i32> = RequestResult::validation("Id", "Id is required");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "validations");
        assert_eq!(json["payload"][0]["field"], "Id");
    }
}
