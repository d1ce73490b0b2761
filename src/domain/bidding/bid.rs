//! Bid entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Amount, AuctionId, BidId, Timestamp, UserId};

/// A monetary offer by a user against an auction.
///
/// Bids are owned by the auction they target; the amount is strictly
/// positive by construction of [`Amount`]. `placed_at` is the ordering
/// key the tie-break policy uses when two bids share the maximum
/// amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    id: BidId,
    auction_id: AuctionId,
    bidder_id: UserId,
    amount: Amount,
    placed_at: Timestamp,
}

impl Bid {
    /// Creates a new bid.
    pub fn new(
        id: BidId,
        auction_id: AuctionId,
        bidder_id: UserId,
        amount: Amount,
        placed_at: Timestamp,
    ) -> Self {
        Self {
            id,
            auction_id,
            bidder_id,
            amount,
            placed_at,
        }
    }

    /// Returns the bid id.
    pub fn id(&self) -> &BidId {
        &self.id
    }

    /// Returns the targeted auction's id.
    pub fn auction_id(&self) -> &AuctionId {
        &self.auction_id
    }

    /// Returns the bidder's user id.
    pub fn bidder_id(&self) -> &UserId {
        &self.bidder_id
    }

    /// Returns the offered amount.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Returns when the bid was placed.
    pub fn placed_at(&self) -> Timestamp {
        self.placed_at
    }
}
