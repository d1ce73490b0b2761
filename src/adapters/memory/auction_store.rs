//! In-memory auction store.
//!
//! Implements both the write-side repository and the read-side
//! classification queries over the same map. Useful for testing and
//! development; the classification queries delegate to the pure
//! partition functions in the domain layer.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::auction::{self, Auction};
use crate::domain::foundation::{AuctionId, DomainError, ErrorCode, Timestamp};
use crate::ports::{AuctionReader, AuctionRepository};

/// In-memory storage for auctions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuctionStore {
    auctions: Arc<RwLock<HashMap<AuctionId, Auction>>>,
}

impl InMemoryAuctionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored auctions (useful for tests).
    pub async fn clear(&self) {
        self.auctions.write().await.clear();
    }

    /// Number of stored auctions.
    pub async fn count(&self) -> usize {
        self.auctions.read().await.len()
    }
}

#[async_trait]
impl AuctionRepository for InMemoryAuctionStore {
    async fn save(&self, auction: &Auction) -> Result<(), DomainError> {
        let mut auctions = self.auctions.write().await;
        auctions.insert(*auction.id(), auction.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &AuctionId) -> Result<Option<Auction>, DomainError> {
        let auctions = self.auctions.read().await;
        Ok(auctions.get(id).cloned())
    }

    async fn exists(&self, id: &AuctionId) -> Result<bool, DomainError> {
        let auctions = self.auctions.read().await;
        Ok(auctions.contains_key(id))
    }

    async fn list_all(&self) -> Result<Vec<Auction>, DomainError> {
        let auctions = self.auctions.read().await;
        Ok(auctions.values().cloned().collect())
    }

    async fn delete(&self, id: &AuctionId) -> Result<(), DomainError> {
        let mut auctions = self.auctions.write().await;
        auctions.remove(id).ok_or_else(|| {
            DomainError::new(ErrorCode::AuctionNotFound, format!("Auction not found: {}", id))
        })?;
        Ok(())
    }
}

#[async_trait]
impl AuctionReader for InMemoryAuctionStore {
    async fn completed(&self, now: Timestamp) -> Result<Vec<Auction>, DomainError> {
        let auctions = self.auctions.read().await;
        let snapshot: Vec<Auction> = auctions.values().cloned().collect();
        Ok(auction::completed(&snapshot, now).into_iter().cloned().collect())
    }

    async fn live(&self, now: Timestamp) -> Result<Vec<Auction>, DomainError> {
        let auctions = self.auctions.read().await;
        let snapshot: Vec<Auction> = auctions.values().cloned().collect();
        Ok(auction::live(&snapshot, now).into_iter().cloned().collect())
    }

    async fn scheduled(&self, now: Timestamp) -> Result<Vec<Auction>, DomainError> {
        let auctions = self.auctions.read().await;
        let snapshot: Vec<Auction> = auctions.values().cloned().collect();
        Ok(auction::scheduled(&snapshot, now).into_iter().cloned().collect())
    }
}
