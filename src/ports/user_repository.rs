//! User repository port.
//!
//! Users belong to an external identity collaborator; this port is
//! the read/write surface the auction domain needs from it.

use crate::domain::catalog::User;
use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

/// Repository port for User persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a new user.
    ///
    /// # Errors
    ///
    /// - `UsernameTaken` if another user already holds the username
    /// - `StorageError` on persistence failure
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    /// Find a user by id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by username.
    ///
    /// Returns `None` if not found.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Check if a user exists.
    async fn exists(&self, id: &UserId) -> Result<bool, DomainError>;
}
