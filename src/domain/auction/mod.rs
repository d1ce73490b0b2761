//! Auction module - the Auction aggregate and its lifecycle queries.

mod aggregate;
mod draft;
mod errors;
mod phase;

pub use aggregate::Auction;
pub use draft::{AuctionDraft, AuctionValidationError};
pub use errors::AuctionError;
pub use phase::{completed, live, scheduled, AuctionPhase};
