//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{UniqueField, User, UserId, UserInput, UserRepository};
use crate::domain::DomainError;

/// Primary collection plus its lookup indexes, always mutated together
#[derive(Debug)]
struct Registry {
    /// Insertion order of stored ids
    order: Vec<UserId>,
    users: HashMap<UserId, User>,
    usernames: HashSet<String>,
    emails: HashSet<String>,
    next_id: UserId,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            users: HashMap::new(),
            usernames: HashSet::new(),
            emails: HashSet::new(),
            next_id: UserId::FIRST,
        }
    }
}

impl Registry {
    fn insert(&mut self, input: UserInput) -> Result<User, DomainError> {
        if self.usernames.contains(&input.username) {
            return Err(DomainError::conflict(UniqueField::Username));
        }

        if self.emails.contains(&input.email) {
            return Err(DomainError::conflict(UniqueField::Email));
        }

        let id = self.next_id;
        self.next_id = id.next();

        let user = User::new(id, input);
        self.usernames.insert(user.username().to_string());
        self.emails.insert(user.email().to_string());
        self.order.push(id);
        self.users.insert(id, user.clone());

        Ok(user)
    }

    fn replace(&mut self, id: UserId, input: UserInput) -> Result<User, DomainError> {
        let current = self
            .users
            .get(&id)
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        let username_changed = current.username() != input.username;
        let email_changed = current.email() != input.email;

        // A value equal to the user's own current one is never a conflict
        if username_changed && self.usernames.contains(&input.username) {
            return Err(DomainError::conflict(UniqueField::Username));
        }

        if email_changed && self.emails.contains(&input.email) {
            return Err(DomainError::conflict(UniqueField::Email));
        }

        if username_changed {
            self.usernames.remove(current.username());
            self.usernames.insert(input.username.clone());
        }

        if email_changed {
            self.emails.remove(current.email());
            self.emails.insert(input.email.clone());
        }

        let user = self
            .users
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;
        user.apply(input);

        Ok(user.clone())
    }

    fn remove(&mut self, id: UserId) -> bool {
        let Some(user) = self.users.remove(&id) else {
            return false;
        };

        self.usernames.remove(user.username());
        self.emails.remove(user.email());
        self.order.retain(|existing| *existing != id);

        true
    }

    fn ordered(&self) -> Vec<User> {
        self.order
            .iter()
            .filter_map(|id| self.users.get(id))
            .cloned()
            .collect()
    }

    /// Verify that every index mirrors the primary collection exactly
    #[cfg(test)]
    fn assert_consistent(&self) {
        assert_eq!(self.order.len(), self.users.len());
        assert_eq!(self.usernames.len(), self.users.len());
        assert_eq!(self.emails.len(), self.users.len());

        for id in &self.order {
            let user = self.users.get(id).expect("ordered id missing from id map");
            assert_eq!(user.id(), *id);
            assert!(self.usernames.contains(user.username()));
            assert!(self.emails.contains(user.email()));
            assert!(*id < self.next_id);
        }

        assert!(self.order.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

/// In-memory implementation of UserRepository
///
/// All state sits behind a single lock so check-then-insert is atomic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    registry: Arc<RwLock<Registry>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with initial users, in order
    pub fn with_users(inputs: Vec<UserInput>) -> Result<Self, DomainError> {
        let mut registry = Registry::default();

        for input in inputs {
            registry.insert(input)?;
        }

        Ok(Self {
            registry: Arc::new(RwLock::new(registry)),
        })
    }

    #[cfg(test)]
    async fn assert_consistent(&self) {
        self.registry.read().await.assert_consistent();
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let registry = self.registry.read().await;
        Ok(registry.users.get(&id).cloned())
    }

    async fn create(&self, input: UserInput) -> Result<User, DomainError> {
        let mut registry = self.registry.write().await;
        registry.insert(input)
    }

    async fn update(&self, id: UserId, input: UserInput) -> Result<User, DomainError> {
        let mut registry = self.registry.write().await;
        registry.replace(id, input)
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let mut registry = self.registry.write().await;
        Ok(registry.remove(id))
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let registry = self.registry.read().await;
        Ok(registry.ordered())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let registry = self.registry.read().await;
        Ok(registry.users.len())
    }
}
