// src/domain/validator.rs
//
// Per-entity validation, dispatched through one trait so use cases can
// hold any validator behind `Arc<dyn EntityValidator<E>>`.

use crate::domain::validation::ValidationResult;

/// Identity-bearing domain object
pub trait Entity {
    /// Name used in error messages and as the field of a null-entity error
    const NAME: &'static str;

    /// Whether the persistence layer has assigned an identifier
    fn has_identity(&self) -> bool;
}

pub trait EntityValidator<E: Entity>: Send + Sync {
    /// Field checks for a fully built entity. Every violation is reported.
    fn validate_fields(&self, entity: &E) -> ValidationResult;

    /// A missing entity yields a single error and nothing else is checked
    fn validate(&self, entity: Option<&E>) -> ValidationResult {
        match entity {
            None => ValidationResult::with_error(E::NAME, format!("{} cannot be null", E::NAME)),
            Some(entity) => self.validate_fields(entity),
        }
    }

    /// `validate`, plus the identifier an update needs
    fn validate_update(&self, entity: Option<&E>) -> ValidationResult {
        let mut result = self.validate(entity);
        if let Some(entity) = entity {
            result.ensure(entity.has_identity(), "Id", "Id is required");
        }
        result
    }
}
