// src/domain/validation.rs
//
// Field-level validation outcome shared by value objects, entity
// validators and the transport boundary.
//
// Validation collects EVERY violation. Nothing here is fail-fast except
// the null-entity check, which has nothing left to inspect.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<DomainError> for ValidationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { field, message } => Self::new(field, message),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered collection of field errors. Valid when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// A result holding exactly one error
    pub fn with_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut result = Self::new();
        result.add_error(field, message);
        result
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.errors.push(ValidationError::new(field, message));
        self
    }

    /// Records an error unless `condition` holds
    pub fn ensure(
        &mut self,
        condition: bool,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        if !condition {
            self.add_error(field, message);
        }
        self
    }

    /// Unwraps a value-object construction, recording its failure instead
    /// of stopping. Lets a factory build every field before deciding.
    pub fn capture<T>(&mut self, result: DomainResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.errors.push(err.into());
                None
            }
        }
    }

    /// Appends the errors of `other`, keeping order
    pub fn merge(&mut self, other: ValidationResult) -> &mut Self {
        self.errors.extend(other.errors);
        self
    }

    /// Union of all errors; valid only if every input is valid
    pub fn combine<I>(results: I) -> Self
    where
        I: IntoIterator<Item = ValidationResult>,
    {
        results
            .into_iter()
            .fold(Self::new(), |mut acc, result| {
                acc.merge(result);
                acc
            })
    }

    /// Errors rendered as `Field: message` joined with `; `
    pub fn message(&self) -> String {
        self.errors
            .iter()
            .map(ValidationError::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl From<DomainError> for ValidationResult {
    fn from(err: DomainError) -> Self {
        Self {
            errors: vec![err.into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_is_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid());
        assert!(!result.has_error());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_errors_keep_insertion_order() {
        let mut result = ValidationResult::new();
        result.add_error("Title", "Title is required");
        result.add_error("Url", "Url is required");

        let fields: Vec<&str> = result.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["Title", "Url"]);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_combine_invalid_with_valid_keeps_only_invalid_errors() {
        let v1 = ValidationResult::with_error("Name", "Name is required");
        let v2 = ValidationResult::new();

        let combined = ValidationResult::combine([v1.clone(), v2]);

        assert!(combined.has_error());
        assert_eq!(combined.errors(), v1.errors());
    }

    #[test]
    fn test_combine_all_valid_is_valid() {
        let combined = ValidationResult::combine([ValidationResult::new(), ValidationResult::new()]);
        assert!(combined.is_valid());
    }

    #[test]
    fn test_combine_unions_every_error() {
        let v1 = ValidationResult::with_error("Title", "a");
        let v2 = ValidationResult::with_error("Url", "b");
        let combined = ValidationResult::combine(vec![v1, v2]);
        assert_eq!(combined.errors().len(), 2);
        assert_eq!(combined.message(), "Title: a; Url: b");
    }

    #[test]
    fn test_ensure_only_records_on_false() {
        let mut result = ValidationResult::new();
        result.ensure(true, "Id", "never");
        result.ensure(false, "Id", "Id is required");
        assert_eq!(result.errors(), &[ValidationError::new("Id", "Id is required")]);
    }

    #[test]
    fn test_capture_collects_domain_errors() {
        let mut result = ValidationResult::new();
        let ok: Option<u8> = result.capture(Ok(1));
        let failed: Option<u8> = result.capture(Err(DomainError::Validation {
            field: "Name",
            message: "Name is required".to_string(),
        }));

        assert_eq!(ok, Some(1));
        assert_eq!(failed, None);
        assert_eq!(result.errors()[0].field, "Name");
    }
}
