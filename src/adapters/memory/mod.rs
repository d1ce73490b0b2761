//! In-memory adapters.
//!
//! These stand in for the external persistence collaborator. Handy for
//! testing and development; every port gets an implementation over
//! `Arc<RwLock<HashMap>>`.

mod auction_store;
mod bid_store;
mod item_store;
mod user_store;

pub use auction_store::InMemoryAuctionStore;
pub use bid_store::InMemoryBidStore;
pub use item_store::InMemoryItemStore;
pub use user_store::InMemoryUserStore;
