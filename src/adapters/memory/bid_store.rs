//! In-memory bid store.
//!
//! Keeps a reverse index from auction id to bid ids so that
//! `find_by_auction` stays an indexed lookup rather than a scan.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::bidding::Bid;
use crate::domain::foundation::{AuctionId, BidId, DomainError};
use crate::ports::BidRepository;

/// In-memory storage for bids.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBidStore {
    bids: Arc<RwLock<HashMap<BidId, Bid>>>,
    by_auction: Arc<RwLock<HashMap<AuctionId, Vec<BidId>>>>,
}

impl InMemoryBidStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored bids (useful for tests).
    pub async fn clear(&self) {
        self.bids.write().await.clear();
        self.by_auction.write().await.clear();
    }
}

#[async_trait]
impl BidRepository for InMemoryBidStore {
    async fn save(&self, bid: &Bid) -> Result<(), DomainError> {
        let mut bids = self.bids.write().await;
        let mut by_auction = self.by_auction.write().await;

        if bids.insert(*bid.id(), bid.clone()).is_none() {
            by_auction
                .entry(*bid.auction_id())
                .or_default()
                .push(*bid.id());
        }
        Ok(())
    }

    async fn find_by_auction(&self, auction_id: &AuctionId) -> Result<Vec<Bid>, DomainError> {
        let bids = self.bids.read().await;
        let by_auction = self.by_auction.read().await;

        let ids = by_auction.get(auction_id).map(Vec::as_slice).unwrap_or(&[]);
        Ok(ids.iter().filter_map(|id| bids.get(id).cloned()).collect())
    }

    async fn count_by_auction(&self, auction_id: &AuctionId) -> Result<u64, DomainError> {
        let by_auction = self.by_auction.read().await;
        Ok(by_auction.get(auction_id).map(|ids| ids.len() as u64).unwrap_or(0))
    }
}
