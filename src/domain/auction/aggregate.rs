//! Auction aggregate entity.
//!
//! An auction is a time-bounded listing of one item by one lister.
//! Bids are managed by the bidding module and reference the auction
//! by id.
//!
//! # Ownership
//!
//! Auctions reference their item and lister by id but do NOT own them.
//!
//! # State
//!
//! There is no stored status field. An auction's phase (scheduled,
//! live, completed) is always recomputed from its timestamps against
//! a caller-supplied "now".

use serde::{Deserialize, Serialize};

use super::AuctionPhase;
use crate::domain::foundation::{AuctionId, ItemId, Timestamp, UserId};

/// Auction aggregate - a time-bounded listing accepting bids.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `ends_at` is strictly later than `starts_at`
///
/// Construct through [`AuctionDraft::build`](super::AuctionDraft::build),
/// which enforces the invariants and reports every violation at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    /// Unique identifier for this auction.
    id: AuctionId,

    /// Item being listed (not owned).
    item_id: ItemId,

    /// User who listed the auction (not owned).
    lister_id: UserId,

    /// When bidding opens.
    starts_at: Timestamp,

    /// When bidding closes.
    ends_at: Timestamp,
}

impl Auction {
    /// Assembles an auction from already-validated parts.
    ///
    /// Only the draft builder calls this; it never sees an invalid
    /// time window.
    pub(super) fn from_parts(
        id: AuctionId,
        item_id: ItemId,
        lister_id: UserId,
        starts_at: Timestamp,
        ends_at: Timestamp,
    ) -> Self {
        Self {
            id,
            item_id,
            lister_id,
            starts_at,
            ends_at,
        }
    }

    /// Reconstitute an auction from persistence (no validation).
    pub fn reconstitute(
        id: AuctionId,
        item_id: ItemId,
        lister_id: UserId,
        starts_at: Timestamp,
        ends_at: Timestamp,
    ) -> Self {
        Self {
            id,
            item_id,
            lister_id,
            starts_at,
            ends_at,
        }
    }

    /// Returns the auction id.
    pub fn id(&self) -> &AuctionId {
        &self.id
    }

    /// Returns the listed item's id.
    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    /// Returns the lister's user id.
    pub fn lister_id(&self) -> &UserId {
        &self.lister_id
    }

    /// Returns when bidding opens.
    pub fn starts_at(&self) -> Timestamp {
        self.starts_at
    }

    /// Returns when bidding closes.
    pub fn ends_at(&self) -> Timestamp {
        self.ends_at
    }

    /// Classifies this auction relative to `now`.
    ///
    /// Exactly one phase applies at any instant:
    /// - `Completed` when `ends_at <= now`
    /// - `Live` when `starts_at <= now < ends_at`
    /// - `Scheduled` when `starts_at > now`
    pub fn phase(&self, now: Timestamp) -> AuctionPhase {
        if self.ends_at <= now {
            AuctionPhase::Completed
        } else if self.starts_at <= now {
            AuctionPhase::Live
        } else {
            AuctionPhase::Scheduled
        }
    }

    /// Checks whether bidding is open at `now`.
    pub fn is_live(&self, now: Timestamp) -> bool {
        self.phase(now) == AuctionPhase::Live
    }
}
