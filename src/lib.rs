//! User Registry API
//!
//! An HTTP CRUD service for user accounts backed by an in-memory registry:
//! - Registry-assigned, never-reused integer ids
//! - Username and email uniqueness enforced atomically
//! - Field validation with per-rule error messages

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::user::{InMemoryUserRepository, UserService};
use tracing::info;

/// Create the application state with a fresh, empty user registry
pub fn create_app_state(config: &AppConfig) -> AppState {
    info!(environment = ?config.environment, "Initializing in-memory user registry");

    let repository = Arc::new(InMemoryUserRepository::new());
    let user_service = Arc::new(UserService::new(repository));

    AppState::new(user_service, config.environment)
}
