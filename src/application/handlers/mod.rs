//! Command and query handlers.

mod auction_summary;
mod create_auction;
mod list_auctions;
mod place_bid;

pub use auction_summary::{AuctionSummary, GetAuctionSummaryHandler};
pub use create_auction::{CreateAuctionCommand, CreateAuctionHandler, CreateAuctionResult};
pub use list_auctions::ListAuctionsHandler;
pub use place_bid::{PlaceBidCommand, PlaceBidHandler, PlaceBidResult};
