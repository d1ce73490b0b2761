//! In-memory item store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::Item;
use crate::domain::foundation::{DomainError, ItemId};
use crate::ports::ItemRepository;

/// In-memory storage for items.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemStore {
    items: Arc<RwLock<HashMap<ItemId, Item>>>,
}

impl InMemoryItemStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemStore {
    async fn save(&self, item: &Item) -> Result<(), DomainError> {
        let mut items = self.items.write().await;
        items.insert(*item.id(), item.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError> {
        let items = self.items.read().await;
        Ok(items.get(id).cloned())
    }

    async fn exists(&self, id: &ItemId) -> Result<bool, DomainError> {
        let items = self.items.read().await;
        Ok(items.contains_key(id))
    }
}
