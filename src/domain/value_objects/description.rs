// src/domain/value_objects/description.rs

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Free-text description of a category. Not blank, at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    pub const FIELD: &'static str = "Description";
    pub const MAX_LENGTH: usize = 200;

    pub fn create(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(DomainError::Validation {
                field: Self::FIELD,
                message: "Description is required".to_string(),
            });
        }

        if value.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::Validation {
                field: Self::FIELD,
                message: format!(
                    "Description must be at most {} characters",
                    Self::MAX_LENGTH
                ),
            });
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Description {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(value)
    }
}

impl From<Description> for String {
    fn from(description: Description) -> Self {
        description.0
    }
}

impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
