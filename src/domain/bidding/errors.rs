//! Bidding-specific error types.

use crate::domain::auction::AuctionPhase;
use crate::domain::foundation::{AuctionId, DomainError, ErrorCode, UserId};

/// Bidding-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BidError {
    /// Targeted auction was not found.
    AuctionNotFound(AuctionId),
    /// Bidder does not exist.
    BidderNotFound(UserId),
    /// Auction is not accepting bids at this time.
    AuctionNotLive {
        auction_id: AuctionId,
        phase: AuctionPhase,
    },
    /// Infrastructure error.
    Infrastructure(String),
}

impl BidError {
    pub fn auction_not_found(id: AuctionId) -> Self {
        BidError::AuctionNotFound(id)
    }

    pub fn bidder_not_found(id: UserId) -> Self {
        BidError::BidderNotFound(id)
    }

    pub fn not_live(auction_id: AuctionId, phase: AuctionPhase) -> Self {
        BidError::AuctionNotLive { auction_id, phase }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            BidError::AuctionNotFound(_) => ErrorCode::AuctionNotFound,
            BidError::BidderNotFound(_) => ErrorCode::UserNotFound,
            BidError::AuctionNotLive { .. } => ErrorCode::AuctionNotLive,
            BidError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            BidError::AuctionNotFound(id) => format!("Auction not found: {}", id),
            BidError::BidderNotFound(id) => format!("Bidder not found: {}", id),
            BidError::AuctionNotLive { auction_id, phase } => {
                format!("Auction {} is not live (currently {})", auction_id, phase)
            }
            BidError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for BidError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for BidError {}

impl From<DomainError> for BidError {
    fn from(err: DomainError) -> Self {
        BidError::Infrastructure(err.to_string())
    }
}
