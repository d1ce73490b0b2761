//! GetAuctionSummaryHandler - Query handler for one auction's full view.
//!
//! Resolves the association accessors in a single read: item, lister,
//! bids, distinct bidders, and the highest bid/bidder under the
//! configured tie-break policy.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::auction::{Auction, AuctionError, AuctionPhase};
use crate::domain::bidding::{self, Bid, TieBreakPolicy};
use crate::domain::catalog::{Item, User};
use crate::domain::foundation::{AuctionId, Timestamp, UserId};
use crate::ports::{AuctionRepository, BidRepository, ItemRepository, UserRepository};

/// Full read-side view of one auction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuctionSummary {
    /// The auction itself.
    pub auction: Auction,

    /// The listed item.
    pub item: Item,

    /// The user who listed the auction.
    pub lister: User,

    /// All bids placed, order unspecified.
    pub bids: Vec<Bid>,

    /// Distinct users who placed a bid.
    pub bidders: Vec<UserId>,

    /// The winning bid so far, if any.
    pub highest_bid: Option<Bid>,

    /// The bidder of `highest_bid`, if any.
    pub highest_bidder: Option<UserId>,

    /// Phase at the time the summary was taken.
    pub phase: AuctionPhase,
}

/// Handler producing [`AuctionSummary`] views.
pub struct GetAuctionSummaryHandler {
    auctions: Arc<dyn AuctionRepository>,
    bids: Arc<dyn BidRepository>,
    users: Arc<dyn UserRepository>,
    items: Arc<dyn ItemRepository>,
    tie_break: TieBreakPolicy,
}

impl GetAuctionSummaryHandler {
    pub fn new(
        auctions: Arc<dyn AuctionRepository>,
        bids: Arc<dyn BidRepository>,
        users: Arc<dyn UserRepository>,
        items: Arc<dyn ItemRepository>,
        tie_break: TieBreakPolicy,
    ) -> Self {
        Self {
            auctions,
            bids,
            users,
            items,
            tie_break,
        }
    }

    pub async fn handle(&self, auction_id: &AuctionId) -> Result<AuctionSummary, AuctionError> {
        let auction = self
            .auctions
            .find_by_id(auction_id)
            .await?
            .ok_or(AuctionError::NotFound(*auction_id))?;

        let item = self
            .items
            .find_by_id(auction.item_id())
            .await?
            .ok_or_else(|| AuctionError::ItemNotFound(*auction.item_id()))?;

        let lister = self
            .users
            .find_by_id(auction.lister_id())
            .await?
            .ok_or_else(|| AuctionError::ListerNotFound(auction.lister_id().clone()))?;

        let bids = self.bids.find_by_auction(auction_id).await?;
        let bidders = bidding::bidders(&bids);
        let highest_bid = bidding::highest_bid(&bids, self.tie_break).cloned();
        let highest_bidder = highest_bid.as_ref().map(|b| b.bidder_id().clone());
        let phase = auction.phase(Timestamp::now());

        Ok(AuctionSummary {
            auction,
            item,
            lister,
            bids,
            bidders,
            highest_bid,
            highest_bidder,
            phase,
        })
    }
}
