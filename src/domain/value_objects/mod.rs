// src/domain/value_objects/mod.rs
//
// Self-validating field wrappers. A value object that exists is valid.

pub mod description;
pub mod name;

pub use description::Description;
pub use name::Name;
