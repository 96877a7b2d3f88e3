// src/application/commands/mod.rs
//
// Command Dispatch
//
// ARCHITECTURE:
// - Commands are thin adapters between callers and use cases
// - Commands accept JSON payloads, return CommandResponse
// - The name → handler table is built once, explicitly, at startup
// - Commands NEVER contain business logic

pub mod category_commands;
pub mod video_commands;

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::application::error_handling::{CommandResponse, ErrorResponse};
use crate::application::state::AppState;
use crate::domain::{ValidationError, ValidationResult};

pub type CommandFuture = Pin<Box<dyn Future<Output = CommandResponse> + Send + 'static>>;
pub type CommandHandler = Arc<dyn Fn(Arc<AppState>, Value) -> CommandFuture + Send + Sync>;

#[derive(Default)]
pub struct CommandRegistryBuilder {
    handlers: HashMap<&'static str, CommandHandler>,
}

impl CommandRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `handler` under `name`; a later registration replaces an earlier one
    pub fn register<F, Fut>(mut self, name: &'static str, handler: F) -> Self
    where
        F: Fn(Arc<AppState>, Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CommandResponse> + Send + 'static,
    {
        let handler: CommandHandler =
            Arc::new(move |state: Arc<AppState>, payload: Value| -> CommandFuture {
                Box::pin(handler(state, payload))
            });
        if self.handlers.insert(name, handler).is_some() {
            log::warn!("Command '{}' registered twice, keeping the last handler", name);
        }
        self
    }

    pub fn build(self, state: Arc<AppState>) -> CommandRegistry {
        log::debug!("Command registry built with {} commands", self.handlers.len());
        CommandRegistry {
            state,
            handlers: self.handlers,
        }
    }
}

pub struct CommandRegistry {
    state: Arc<AppState>,
    handlers: HashMap<&'static str, CommandHandler>,
}

impl CommandRegistry {
    pub fn builder() -> CommandRegistryBuilder {
        CommandRegistryBuilder::new()
    }

    /// Registry with every category and video command
    pub fn with_default_commands(state: Arc<AppState>) -> Self {
        let builder = category_commands::register(Self::builder());
        video_commands::register(builder).build(state)
    }

    /// Registered command names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub async fn dispatch(&self, name: &str, payload: Value) -> CommandResponse {
        let Some(handler) = self.handlers.get(name) else {
            log::warn!("Unknown command '{}'", name);
            return CommandResponse::from_error(ErrorResponse::not_found(format!(
                "Unknown command '{}'",
                name
            )));
        };

        log::debug!("Dispatching '{}'", name);
        let response = handler(Arc::clone(&self.state), payload).await;
        log::info!("Command '{}' finished with status {}", name, response.status);
        response
    }
}

/// Decode a payload, or the 400 response describing why it could not be
pub(crate) fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, CommandResponse> {
    serde_json::from_value(payload).map_err(|e| {
        CommandResponse::from_error(ErrorResponse::validation(vec![ValidationError::new(
            "Payload",
            format!("Invalid payload: {}", e),
        )]))
    })
}

/// Like `decode`, but an absent payload means `T::default()`
pub(crate) fn decode_or_default<T: DeserializeOwned + Default>(
    payload: Value,
) -> Result<T, CommandResponse> {
    if payload.is_null() {
        Ok(T::default())
    } else {
        decode(payload)
    }
}

/// The transport-boundary check, as a 400 response when it fails
pub(crate) fn screen(check: ValidationResult) -> Result<(), CommandResponse> {
    if check.is_valid() {
        Ok(())
    } else {
        log::debug!("Payload rejected at the boundary: {}", check.message());
        Err(CommandResponse::from_error(ErrorResponse::validation(
            check.into_errors(),
        )))
    }
}
