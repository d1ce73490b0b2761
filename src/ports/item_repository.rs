//! Item repository port.

use crate::domain::catalog::Item;
use crate::domain::foundation::{DomainError, ItemId};
use async_trait::async_trait;

/// Repository port for Item persistence.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Save a new item.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, item: &Item) -> Result<(), DomainError>;

    /// Find an item by id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError>;

    /// Check if an item exists.
    async fn exists(&self, id: &ItemId) -> Result<bool, DomainError>;
}
