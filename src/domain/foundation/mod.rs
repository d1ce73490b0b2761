//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the auction domain.

mod errors;
mod ids;
mod money;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AuctionId, BidId, ItemId, UserId};
pub use money::Amount;
pub use timestamp::Timestamp;
