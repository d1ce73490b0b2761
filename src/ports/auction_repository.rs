//! Auction repository port (write side).
//!
//! Defines the contract for persisting and retrieving Auction
//! aggregates. The actual store is an external collaborator providing
//! read-committed or stronger isolation; nothing in the domain layer
//! assumes more than that.

use crate::domain::auction::Auction;
use crate::domain::foundation::{AuctionId, DomainError};
use async_trait::async_trait;

/// Repository port for Auction aggregate persistence.
#[async_trait]
pub trait AuctionRepository: Send + Sync {
    /// Save a new auction.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, auction: &Auction) -> Result<(), DomainError>;

    /// Find an auction by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &AuctionId) -> Result<Option<Auction>, DomainError>;

    /// Check if an auction exists.
    async fn exists(&self, id: &AuctionId) -> Result<bool, DomainError>;

    /// Return a snapshot of every auction. Order is unspecified.
    async fn list_all(&self) -> Result<Vec<Auction>, DomainError>;

    /// Delete an auction (primarily for testing).
    ///
    /// # Errors
    ///
    /// - `AuctionNotFound` if the auction doesn't exist
    async fn delete(&self, id: &AuctionId) -> Result<(), DomainError>;
}
