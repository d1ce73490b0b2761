//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AuctionRepository` - Auction aggregate persistence (write side)
//! - `AuctionReader` - Classification queries (read side)
//! - `BidRepository` - Bid persistence with lookup by auction
//! - `UserRepository` / `ItemRepository` - Externally-owned references

mod auction_reader;
mod auction_repository;
mod bid_repository;
mod item_repository;
mod user_repository;

pub use auction_reader::AuctionReader;
pub use auction_repository::AuctionRepository;
pub use bid_repository::BidRepository;
pub use item_repository::ItemRepository;
pub use user_repository::UserRepository;
