// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod category;
pub mod request_result;
pub mod validation;
pub mod validator;
pub mod value_objects;
pub mod video;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Outcome types
pub use request_result::{RequestResult, RequestStatus};
pub use validation::{ValidationError, ValidationResult};

// Validation seam
pub use validator::{Entity, EntityValidator};

// Value Objects
pub use value_objects::{Description, Name};

// Category Domain
pub use category::{Category, CategoryValidator};

// Video Domain
pub use video::{Video, VideoValidator};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// Raised by value objects when raw input cannot become a valid value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
