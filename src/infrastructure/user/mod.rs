//! User infrastructure module
//!
//! This module provides the in-memory user registry and the user service
//! that validates input before it reaches the registry.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::UserService;
