//! Auction reader port (read side / CQRS queries).
//!
//! Classification queries over the auction collection, evaluated
//! against a caller-supplied `now`. Results compare as sets: order is
//! unspecified, and at any fixed `now` the three queries partition the
//! collection (pairwise disjoint, union is everything).

use crate::domain::auction::Auction;
use crate::domain::foundation::{DomainError, Timestamp};
use async_trait::async_trait;

/// Reader port for auction classification queries.
#[async_trait]
pub trait AuctionReader: Send + Sync {
    /// All auctions that have ended (`ends_at <= now`).
    async fn completed(&self, now: Timestamp) -> Result<Vec<Auction>, DomainError>;

    /// All auctions currently running (`starts_at <= now < ends_at`).
    async fn live(&self, now: Timestamp) -> Result<Vec<Auction>, DomainError>;

    /// All auctions that have yet to begin (`starts_at > now`).
    async fn scheduled(&self, now: Timestamp) -> Result<Vec<Auction>, DomainError>;
}
