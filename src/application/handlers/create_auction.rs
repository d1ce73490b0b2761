//! CreateAuctionHandler - Command handler for listing new auctions.

use std::sync::Arc;

use tracing::debug;

use crate::domain::auction::{Auction, AuctionDraft, AuctionError};
use crate::domain::foundation::{ItemId, Timestamp, UserId};
use crate::ports::{AuctionRepository, ItemRepository, UserRepository};

/// Command to list a new auction.
///
/// Fields are optional so that an incomplete submission reaches the
/// draft validation and reports every missing field at once.
#[derive(Debug, Clone, Default)]
pub struct CreateAuctionCommand {
    pub lister_id: Option<UserId>,
    pub item_id: Option<ItemId>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
}

/// Result of successful auction creation.
#[derive(Debug, Clone)]
pub struct CreateAuctionResult {
    pub auction: Auction,
}

/// Handler for creating auctions.
pub struct CreateAuctionHandler {
    auctions: Arc<dyn AuctionRepository>,
    users: Arc<dyn UserRepository>,
    items: Arc<dyn ItemRepository>,
}

impl CreateAuctionHandler {
    pub fn new(
        auctions: Arc<dyn AuctionRepository>,
        users: Arc<dyn UserRepository>,
        items: Arc<dyn ItemRepository>,
    ) -> Self {
        Self {
            auctions,
            users,
            items,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateAuctionCommand,
    ) -> Result<CreateAuctionResult, AuctionError> {
        // 1. Validate the draft; this collects every field failure.
        let mut draft = AuctionDraft::new();
        if let Some(item_id) = cmd.item_id {
            draft = draft.item(item_id);
        }
        if let Some(lister_id) = cmd.lister_id.clone() {
            draft = draft.lister(lister_id);
        }
        if let Some(starts_at) = cmd.starts_at {
            draft = draft.starts_at(starts_at);
        }
        if let Some(ends_at) = cmd.ends_at {
            draft = draft.ends_at(ends_at);
        }
        let auction = draft.build().map_err(AuctionError::validation)?;

        // 2. The referenced lister and item must exist.
        if !self.users.exists(auction.lister_id()).await? {
            return Err(AuctionError::ListerNotFound(auction.lister_id().clone()));
        }
        if !self.items.exists(auction.item_id()).await? {
            return Err(AuctionError::ItemNotFound(*auction.item_id()));
        }

        // 3. Persist.
        self.auctions.save(&auction).await?;
        debug!(auction_id = %auction.id(), lister = %auction.lister_id(), "auction created");

        Ok(CreateAuctionResult { auction })
    }
}
