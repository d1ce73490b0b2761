//! PlaceBidHandler - Command handler for placing bids.

use std::sync::Arc;

use tracing::debug;

use crate::domain::bidding::{Bid, BidError};
use crate::domain::foundation::{Amount, AuctionId, BidId, Timestamp, UserId};
use crate::ports::{AuctionRepository, BidRepository, UserRepository};

/// Command to place a bid on an auction.
#[derive(Debug, Clone)]
pub struct PlaceBidCommand {
    pub auction_id: AuctionId,
    pub bidder_id: UserId,
    pub amount: Amount,
}

/// Result of a successfully placed bid.
#[derive(Debug, Clone)]
pub struct PlaceBidResult {
    pub bid: Bid,
}

/// Handler for placing bids.
///
/// The auction must be live when the bid arrives; the phase is
/// recomputed from the auction's timestamps, never read from a stored
/// status.
pub struct PlaceBidHandler {
    auctions: Arc<dyn AuctionRepository>,
    bids: Arc<dyn BidRepository>,
    users: Arc<dyn UserRepository>,
}

impl PlaceBidHandler {
    pub fn new(
        auctions: Arc<dyn AuctionRepository>,
        bids: Arc<dyn BidRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            auctions,
            bids,
            users,
        }
    }

    pub async fn handle(&self, cmd: PlaceBidCommand) -> Result<PlaceBidResult, BidError> {
        let auction = self
            .auctions
            .find_by_id(&cmd.auction_id)
            .await?
            .ok_or(BidError::AuctionNotFound(cmd.auction_id))?;

        if !self.users.exists(&cmd.bidder_id).await? {
            return Err(BidError::BidderNotFound(cmd.bidder_id));
        }

        let now = Timestamp::now();
        if !auction.is_live(now) {
            return Err(BidError::not_live(*auction.id(), auction.phase(now)));
        }

        let bid = Bid::new(
            BidId::new(),
            cmd.auction_id,
            cmd.bidder_id,
            cmd.amount,
            now,
        );
        self.bids.save(&bid).await?;
        debug!(bid_id = %bid.id(), auction_id = %bid.auction_id(), amount = %bid.amount(), "bid placed");

        Ok(PlaceBidResult { bid })
    }
}
