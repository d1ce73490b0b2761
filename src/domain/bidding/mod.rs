//! Bidding module - bids and pure bid-resolution services.

mod bid;
mod errors;
mod resolution;

pub use bid::Bid;
pub use errors::BidError;
pub use resolution::{bidders, highest_bid, highest_bidder, TieBreakPolicy};
