//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId, UserInput};
use crate::domain::DomainError;

/// Storage for users that owns id assignment and uniqueness of username/email
///
/// Implementations apply each mutation as one unit: a failed call leaves
/// every index untouched. Input validation happens before the repository.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their ID
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Insert a new user under the next free ID
    async fn create(&self, input: UserInput) -> Result<User, DomainError>;

    /// Replace the username and email of an existing user
    async fn update(&self, id: UserId, input: UserInput) -> Result<User, DomainError>;

    /// Delete a user, returning whether it existed
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;

    /// List all users in insertion order
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Count stored users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if a user ID exists
    async fn exists(&self, id: UserId) -> Result<bool, DomainError> {
        Ok(self.get(id).await?.is_some())
    }
}
