//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory stores (testing and development)

pub mod memory;

pub use memory::{InMemoryAuctionStore, InMemoryBidStore, InMemoryItemStore, InMemoryUserStore};
