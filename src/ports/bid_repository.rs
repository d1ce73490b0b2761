//! Bid repository port.
//!
//! Bids are looked up by the auction they target; implementations
//! keep a reverse index (auction id -> bid ids) so the association
//! traversal stays a read-only indexed lookup.

use crate::domain::bidding::Bid;
use crate::domain::foundation::{AuctionId, DomainError};
use async_trait::async_trait;

/// Repository port for Bid persistence.
#[async_trait]
pub trait BidRepository: Send + Sync {
    /// Save a new bid.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, bid: &Bid) -> Result<(), DomainError>;

    /// All bids placed on an auction. Order is unspecified.
    async fn find_by_auction(&self, auction_id: &AuctionId) -> Result<Vec<Bid>, DomainError>;

    /// Number of bids placed on an auction.
    async fn count_by_auction(&self, auction_id: &AuctionId) -> Result<u64, DomainError>;
}
