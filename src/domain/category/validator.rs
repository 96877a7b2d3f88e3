use super::entity::Category;
use crate::domain::validation::ValidationResult;
use crate::domain::validator::EntityValidator;
use crate::domain::value_objects::{Description, Name};

/// Category rules:
///
/// 1. Name is 3 to 50 characters
/// 2. Description is present and at most 200 characters
/// 3. Updates address a stored category (Id > 0)
///
/// Rules 1 and 2 already hold for any constructed `Category`; they are
/// re-checked so the validator stands on its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct CategoryValidator;

impl EntityValidator<Category> for CategoryValidator {
    fn validate_fields(&self, category: &Category) -> ValidationResult {
        let mut result = ValidationResult::new();

        let name_length = category.name().value().chars().count();
        result.ensure(
            (Name::MIN_LENGTH..=Name::MAX_LENGTH).contains(&name_length),
            Name::FIELD,
            format!(
                "Name must be between {} and {} characters",
                Name::MIN_LENGTH,
                Name::MAX_LENGTH
            ),
        );

        let description = category.description().value();
        result.ensure(
            !description.trim().is_empty(),
            Description::FIELD,
            "Description is required",
        );
        result.ensure(
            description.chars().count() <= Description::MAX_LENGTH,
            Description::FIELD,
            format!(
                "Description must be at most {} characters",
                Description::MAX_LENGTH
            ),
        );

        result
    }
}
