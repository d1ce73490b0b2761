//! Bid resolution - pure domain services over a bid collection.
//!
//! All functions are stateless and take the bid snapshot as an
//! explicit parameter. An auction with no bids resolves to `None`
//! rather than failing.

use serde::{Deserialize, Serialize};

use super::Bid;
use crate::domain::foundation::UserId;

/// Policy for resolving two bids that share the maximum amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreakPolicy {
    /// The bid placed first wins.
    #[default]
    EarliestWins,
    /// The bid placed last wins.
    LatestWins,
}

impl TieBreakPolicy {
    /// Whether `candidate` beats the `incumbent` highest bid.
    fn prefers(self, candidate: &Bid, incumbent: &Bid) -> bool {
        if candidate.amount() != incumbent.amount() {
            return candidate.amount() > incumbent.amount();
        }
        match self {
            TieBreakPolicy::EarliestWins => candidate.placed_at() < incumbent.placed_at(),
            TieBreakPolicy::LatestWins => candidate.placed_at() > incumbent.placed_at(),
        }
    }
}

/// Returns the bid with the maximum amount, or `None` when empty.
///
/// Ties on amount are resolved by `policy`.
pub fn highest_bid(bids: &[Bid], policy: TieBreakPolicy) -> Option<&Bid> {
    let mut best: Option<&Bid> = None;
    for bid in bids {
        match best {
            Some(incumbent) if !policy.prefers(bid, incumbent) => {}
            _ => best = Some(bid),
        }
    }
    best
}

/// Returns the bidder of the highest bid, or `None` when empty.
pub fn highest_bidder(bids: &[Bid], policy: TieBreakPolicy) -> Option<&UserId> {
    highest_bid(bids, policy).map(Bid::bidder_id)
}

/// Returns the distinct users who placed a bid, in first-appearance order.
pub fn bidders(bids: &[Bid]) -> Vec<UserId> {
    let mut seen = Vec::new();
    for bid in bids {
        if !seen.contains(bid.bidder_id()) {
            seen.push(bid.bidder_id().clone());
        }
    }
    seen
}
