//! Auction phase classification.
//!
//! Pure, stateless partition functions over a snapshot of auctions.
//! They take the collection and `now` as explicit parameters; there
//! is no implicit query scope and no stored status to keep in sync.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Auction;
use crate::domain::foundation::Timestamp;

/// Temporal classification of an auction relative to some instant.
///
/// The three phases are mutually exclusive and collectively
/// exhaustive: every auction is in exactly one of them at any `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuctionPhase {
    /// Bidding has not yet opened (`starts_at > now`).
    Scheduled,
    /// Bidding is open (`starts_at <= now < ends_at`).
    Live,
    /// Bidding has closed (`ends_at <= now`).
    Completed,
}

impl fmt::Display for AuctionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AuctionPhase::Scheduled => "SCHEDULED",
            AuctionPhase::Live => "LIVE",
            AuctionPhase::Completed => "COMPLETED",
        };
        write!(f, "{}", s)
    }
}

/// Returns all auctions that have ended (`ends_at <= now`).
pub fn completed(auctions: &[Auction], now: Timestamp) -> Vec<&Auction> {
    auctions
        .iter()
        .filter(|a| a.phase(now) == AuctionPhase::Completed)
        .collect()
}

/// Returns all auctions currently running (`starts_at <= now < ends_at`).
pub fn live(auctions: &[Auction], now: Timestamp) -> Vec<&Auction> {
    auctions
        .iter()
        .filter(|a| a.phase(now) == AuctionPhase::Live)
        .collect()
}

/// Returns all auctions that have yet to begin (`starts_at > now`).
pub fn scheduled(auctions: &[Auction], now: Timestamp) -> Vec<&Auction> {
    auctions
        .iter()
        .filter(|a| a.phase(now) == AuctionPhase::Scheduled)
        .collect()
}
