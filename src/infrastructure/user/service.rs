//! User service: validation and logging around the user repository

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{validate_user_input, User, UserId, UserInput, UserRepository};
use crate::domain::DomainError;

/// User service for account management
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new user
    pub async fn create(&self, input: UserInput) -> Result<User, DomainError> {
        debug!(username = %input.username, "Creating user");

        validate(&input)?;

        let user = self.repository.create(input).await.inspect_err(|e| {
            debug!(error = %e, "User creation rejected");
        })?;

        info!(user_id = %user.id(), username = %user.username(), "User created");
        Ok(user)
    }

    /// Get a user by ID
    pub async fn get(&self, id: UserId) -> Result<User, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List all users in creation order
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }

    /// Count users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    /// Update a user's username and email
    ///
    /// A missing user is reported before any validation error.
    pub async fn update(&self, id: UserId, input: UserInput) -> Result<User, DomainError> {
        debug!(user_id = %id, "Updating user");

        if !self.repository.exists(id).await? {
            return Err(not_found(id));
        }

        validate(&input)?;

        let user = self.repository.update(id, input).await.inspect_err(|e| {
            debug!(user_id = %id, error = %e, "User update rejected");
        })?;

        info!(user_id = %user.id(), username = %user.username(), "User updated");
        Ok(user)
    }

    /// Delete a user
    pub async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        debug!(user_id = %id, "Deleting user");

        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        info!(user_id = %id, "User deleted");
        Ok(())
    }
}

fn validate(input: &UserInput) -> Result<(), DomainError> {
    validate_user_input(input).map_err(|errors| {
        debug!(count = errors.len(), "User input failed validation");
        DomainError::validation(errors.iter().map(ToString::to_string))
    })
}

fn not_found(id: UserId) -> DomainError {
    DomainError::not_found(format!("User '{}' not found", id))
}
