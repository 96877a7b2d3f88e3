// src/domain/value_objects/name.rs

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Display name of a category. 3 to 50 characters, not blank.
///
/// The raw input is stored untouched; surrounding whitespace is only
/// ignored when deciding whether the value is blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const FIELD: &'static str = "Name";
    pub const MIN_LENGTH: usize = 3;
    pub const MAX_LENGTH: usize = 50;

    pub fn create(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(DomainError::Validation {
                field: Self::FIELD,
                message: "Name is required".to_string(),
            });
        }

        let length = value.chars().count();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            return Err(DomainError::Validation {
                field: Self::FIELD,
                message: format!(
                    "Name must be between {} and {} characters",
                    Self::MIN_LENGTH,
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

impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        let name = Name::create("Tutorials").unwrap();
        assert_eq!(name.value(), "Tutorials");
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Name::create("abc").is_ok());
        assert!(Name::create("a".repeat(50)).is_ok());
    }

    #[test]
    fn test_out_of_range_lengths_fail() {
        let too_long = "a".repeat(51);
        for raw in ["", "ab", too_long.as_str()] {
            match Name::create(raw) {
                Err(DomainError::Validation { field, .. }) => assert_eq!(field, "Name"),
                Ok(name) => panic!("{:?} should be rejected", name),
            }
        }
    }

    #[test]
    fn test_blank_name_fails() {
        assert!(Name::create("     ").is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 3 characters, 6 bytes
        assert!(Name::create("ção").is_ok());
    }

    #[test]
    fn test_equality_is_by_value() {
        assert_eq!(Name::create("Music").unwrap(), Name::create("Music").unwrap());
        assert_ne!(Name::create("Music").unwrap(), Name::create("Games").unwrap());
    }

    #[test]
    fn test_deserialize_goes_through_validation() {
        let ok: Name = serde_json::from_str("\"Science\"").unwrap();
        assert_eq!(ok.value(), "Science");
        assert!(serde_json::from_str::<Name>("\"x\"").is_err());
    }
}
