//! User reference entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UserId, ValidationError};

/// A user known to the auction domain.
///
/// Users are owned by an external identity collaborator; auctions and
/// bids reference them by id only. Username uniqueness is enforced by
/// the user store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
}

impl User {
    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the username is empty or whitespace
    pub fn new(id: UserId, username: impl Into<String>) -> Result<Self, ValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        Ok(Self { id, username })
    }

    /// Returns the user id.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }
}
