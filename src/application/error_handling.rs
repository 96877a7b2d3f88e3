// src/application/error_handling.rs
//
// Outcome → Response Mapping
//
// ARCHITECTURE:
// - Every command ends here, success or not
// - RequestStatus decides the status code, nothing else does
// - Programming errors (AppError) are logged and reported as internal
// - Validation failures keep their field list

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{RequestResult, RequestStatus, ValidationError};
use crate::error::{AppError, AppResult};

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;

/// Standard error body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Input rejected (400)
    Validation,

    /// Addressed entity or command does not exist (404)
    NotFound,

    /// Uniqueness conflict in the store (409)
    Conflict,

    /// Persistence failure or programming error (500)
    Internal,
}

impl ErrorType {
    pub fn status_code(self) -> u16 {
        match self {
            ErrorType::Validation => 400,
            ErrorType::NotFound => 404,
            ErrorType::Conflict => 409,
            ErrorType::Internal => 500,
        }
    }

    /// `None` for `Success`, which is not an error
    pub fn from_status(status: RequestStatus) -> Option<Self> {
        match status {
            RequestStatus::Success => None,
            RequestStatus::Validations => Some(ErrorType::Validation),
            RequestStatus::EntityNotFound => Some(ErrorType::NotFound),
            RequestStatus::EntityAlreadyExists => Some(ErrorType::Conflict),
            RequestStatus::Error => Some(ErrorType::Internal),
        }
    }
}

impl ErrorResponse {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Domain(domain_error) => {
                Self::validation(vec![ValidationError::from(domain_error)])
            }

            AppError::ArgumentNull(argument) => {
                log::error!("Command reached a use case without {}", argument);
                Self::internal(format!("Missing {}", argument))
            }

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self::internal("Database operation failed")
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);
                Self::internal("Database connection failed")
            }

            other => {
                log::error!("Command failed: {}", other);
                Self::internal(other.to_string())
            }
        }
    }

    pub fn validation(errors: Vec<ValidationError>) -> Self {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Self {
            errors,
            ..Self::new(ErrorType::Validation, message)
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorType::NotFound, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorType::Internal, message)
    }
}

/// What a command hands back to its caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub status: u16,
    pub body: Value,
}

impl CommandResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn from_error(error: ErrorResponse) -> Self {
        let status = error.error_type.status_code();
        match serde_json::to_value(&error) {
            Ok(body) => Self { status, body },
            Err(e) => {
                log::error!("Failed to serialize error response: {}", e);
                Self {
                    status,
                    body: Value::String(error.message),
                }
            }
        }
    }

    /// Serialize a successful payload under `status`
    pub fn with_body<D: Serialize>(status: u16, body: &D) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self { status, body },
            Err(e) => Self::from_error(ErrorResponse::from_app_error(AppError::Serialization(e))),
        }
    }

    /// Map a use case outcome, converting the payload with `convert`
    pub fn from_outcome<T, D, F>(outcome: AppResult<RequestResult<T>>, success_status: u16, convert: F) -> Self
    where
        D: Serialize,
        F: FnOnce(T) -> D,
    {
        match outcome {
            Ok(result) => Self::from_result(result, success_status, convert),
            Err(error) => Self::from_error(ErrorResponse::from_app_error(error)),
        }
    }

    pub fn from_result<T, D, F>(result: RequestResult<T>, success_status: u16, convert: F) -> Self
    where
        D: Serialize,
        F: FnOnce(T) -> D,
    {
        let Some(error_type) = ErrorType::from_status(result.status()) else {
            return match result.into_data() {
                Some(data) => Self::with_body(success_status, &convert(data)),
                None => Self::from_error(ErrorResponse::internal("Success without data")),
            };
        };

        match result {
            RequestResult::Validations(errors) => Self::from_error(ErrorResponse::validation(errors)),
            other => Self::from_error(ErrorResponse::new(
                error_type,
                other.message().unwrap_or_default(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    fn status_of<T: Serialize>(result: RequestResult<T>) -> u16 {
        CommandResponse::from_result(result, STATUS_OK, |data| data).status
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_of(RequestResult::success(1)), 200);
        assert_eq!(status_of(RequestResult::<u8>::validation("Name", "Name is required")), 400);
        assert_eq!(status_of(RequestResult::<u8>::not_found("gone")), 404);
        assert_eq!(status_of(RequestResult::<u8>::already_exists("dup")), 409);
        assert_eq!(status_of(RequestResult::<u8>::error("boom")), 500);
    }

    #[test]
    fn test_every_failure_status_has_an_error_type() {
        assert_eq!(ErrorType::from_status(RequestStatus::Success), None);
        for status in [
            RequestStatus::Error,
            RequestStatus::Validations,
            RequestStatus::EntityNotFound,
            RequestStatus::EntityAlreadyExists,
        ] {
            assert!(ErrorType::from_status(status).is_some());
        }
    }

    #[test]
    fn test_created_status_is_kept() {
        let response = CommandResponse::from_result(RequestResult::success("x"), STATUS_CREATED, |d| d);
        assert_eq!(response.status, 201);
        assert!(response.is_success());
        assert_eq!(response.body, Value::String("x".to_string()));
    }

    #[test]
    fn test_validation_body_lists_fields() {
        let response = CommandResponse::from_result(
            RequestResult::<u8>::validation("Description", "Description is required"),
            STATUS_OK,
            |d| d,
        );
        assert_eq!(response.body["error_type"], "validation");
        assert_eq!(response.body["errors"][0]["field"], "Description");
        assert!(!response.is_success());
    }

    #[test]
    fn test_argument_null_is_internal() {
        let response = CommandResponse::from_outcome::<u8, u8, _>(
            Err(AppError::ArgumentNull("request")),
            STATUS_OK,
            |d| d,
        );
        assert_eq!(response.status, 500);
    }

    #[test]
    fn test_domain_error_becomes_validation() {
        let error = ErrorResponse::from_app_error(AppError::Domain(DomainError::Validation {
            field: "Name",
            message: "Name is required".to_string(),
        }));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.errors[0].field, "Name");
    }

    #[test]
    fn test_serialization() {
        let error = ErrorResponse::not_found("Category 4 not found");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("not_found"));
        assert!(json.contains("Category 4 not found"));
        assert!(!json.contains("errors"));
    }
}
