//! ListAuctionsHandler - Query handler for phase-based listings.

use std::sync::Arc;

use crate::domain::auction::{Auction, AuctionPhase};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::AuctionReader;

/// Handler listing auctions by temporal phase.
pub struct ListAuctionsHandler {
    reader: Arc<dyn AuctionReader>,
}

impl ListAuctionsHandler {
    pub fn new(reader: Arc<dyn AuctionReader>) -> Self {
        Self { reader }
    }

    /// Lists all auctions in `phase` as of now. Order is unspecified.
    pub async fn handle(&self, phase: AuctionPhase) -> Result<Vec<Auction>, DomainError> {
        self.handle_at(phase, Timestamp::now()).await
    }

    /// Lists all auctions in `phase` at an explicit instant.
    pub async fn handle_at(
        &self,
        phase: AuctionPhase,
        now: Timestamp,
    ) -> Result<Vec<Auction>, DomainError> {
        match phase {
            AuctionPhase::Completed => self.reader.completed(now).await,
            AuctionPhase::Live => self.reader.live(now).await,
            AuctionPhase::Scheduled => self.reader.scheduled(now).await,
        }
    }
}
