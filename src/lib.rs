// src/lib.rs
// OnForkHub - video platform core
//
// Architecture:
// - Domain-centric: value objects, entities and validators own every rule
// - Result-driven: expected failures are RequestResult values, never errors
// - Explicit: no implicit behavior, no magic, no auto-registration
// - Use cases: validate first, then exactly one repository call
// - Application Layer: DTOs, status mapping and command dispatch

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod use_cases;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod cli;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    Category,
    CategoryValidator,
    Description,
    DomainError,
    Entity,
    EntityValidator,
    Name,
    RequestResult,
    RequestStatus,
    ValidationError,
    ValidationResult,
    Video,
    VideoValidator,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    CategoryRepository, SqliteCategoryRepository, SqliteVideoRepository, VideoRepository,
};

// ============================================================================
// PUBLIC API - Use Cases
// ============================================================================

pub use use_cases::{PageRequest, UseCase};

// ============================================================================
// PUBLIC API - Application
// ============================================================================

pub use application::{AppState, CommandRegistry, CommandResponse};
