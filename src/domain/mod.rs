//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `catalog` - Externally-owned reference entities (users, items)
//! - `auction` - Auction aggregate, validation, and phase classification
//! - `bidding` - Bid entity and pure bid-resolution services

pub mod auction;
pub mod bidding;
pub mod catalog;
pub mod foundation;
