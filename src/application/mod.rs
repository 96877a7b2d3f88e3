// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the use cases
// - It is the boundary between callers (CLI, transports) and the domain
// - It translates between DTOs and use case requests
// - It owns the outcome → status code mapping

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::{CommandRegistry, CommandRegistryBuilder};
pub use dto::*;
pub use error_handling::{CommandResponse, ErrorResponse, ErrorType};
pub use state::AppState;
