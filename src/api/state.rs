//! Application state for shared services

use std::sync::Arc;

use crate::config::Environment;
use crate::domain::{DomainError, User, UserId, UserInput, UserRepository};
use crate::infrastructure::user::UserService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub environment: Environment,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserServiceTrait>, environment: Environment) -> Self {
        Self {
            user_service,
            environment,
        }
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, input: UserInput) -> Result<User, DomainError>;
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn get(&self, id: UserId) -> Result<User, DomainError>;
    async fn update(&self, id: UserId, input: UserInput) -> Result<User, DomainError>;
    async fn delete(&self, id: UserId) -> Result<(), DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static> UserServiceTrait for UserService<R> {
    async fn create(&self, input: UserInput) -> Result<User, DomainError> {
        UserService::create(self, input).await
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        UserService::list(self).await
    }

    async fn get(&self, id: UserId) -> Result<User, DomainError> {
        UserService::get(self, id).await
    }

    async fn update(&self, id: UserId, input: UserInput) -> Result<User, DomainError> {
        UserService::update(self, id, input).await
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        UserService::delete(self, id).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        UserService::count(self).await
    }
}
