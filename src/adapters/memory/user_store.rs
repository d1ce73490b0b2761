//! In-memory user store.
//!
//! Enforces username uniqueness through a secondary index, standing in
//! for the unique constraint the external identity store would carry.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::User;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::UserRepository;

/// In-memory storage for users.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    by_username: Arc<RwLock<HashMap<String, UserId>>>,
}

impl InMemoryUserStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        let mut by_username = self.by_username.write().await;

        if let Some(holder) = by_username.get(user.username()) {
            if holder != user.id() {
                return Err(DomainError::new(
                    ErrorCode::UsernameTaken,
                    format!("Username already taken: {}", user.username()),
                ));
            }
        }

        by_username.insert(user.username().to_string(), user.id().clone());
        users.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        let by_username = self.by_username.read().await;
        Ok(by_username.get(username).and_then(|id| users.get(id).cloned()))
    }

    async fn exists(&self, id: &UserId) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.contains_key(id))
    }
}
