//! Integration tests for the auction lifecycle.
//!
//! Drives the behavioral scenarios end-to-end through the command and
//! query handlers wired to the in-memory adapters:
//! 1. Associations: an auction resolves its item, lister, bids, bidders
//! 2. Classification: completed / live / scheduled partition the board
//! 3. Resolution: highest bid and highest bidder
//! 4. Validation: every field invariant, reported together

use std::sync::Arc;

use gavel::adapters::memory::{
    InMemoryAuctionStore, InMemoryBidStore, InMemoryItemStore, InMemoryUserStore,
};
use gavel::application::{
    CreateAuctionCommand, CreateAuctionHandler, GetAuctionSummaryHandler, ListAuctionsHandler,
    PlaceBidCommand, PlaceBidHandler,
};
use gavel::domain::auction::{Auction, AuctionError, AuctionPhase, AuctionValidationError};
use gavel::domain::bidding::TieBreakPolicy;
use gavel::domain::catalog::{Item, User};
use gavel::domain::foundation::{Amount, ItemId, Timestamp, UserId};
use gavel::ports::{ItemRepository, UserRepository};

struct App {
    auctions: Arc<InMemoryAuctionStore>,
    users: Arc<InMemoryUserStore>,
    items: Arc<InMemoryItemStore>,
    create_auction: CreateAuctionHandler,
    place_bid: PlaceBidHandler,
    summary: GetAuctionSummaryHandler,
    list: ListAuctionsHandler,
}

fn app() -> App {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();

    let auctions = Arc::new(InMemoryAuctionStore::new());
    let bids = Arc::new(InMemoryBidStore::new());
    let users = Arc::new(InMemoryUserStore::new());
    let items = Arc::new(InMemoryItemStore::new());

    App {
        auctions: auctions.clone(),
        users: users.clone(),
        items: items.clone(),
        create_auction: CreateAuctionHandler::new(auctions.clone(), users.clone(), items.clone()),
        place_bid: PlaceBidHandler::new(auctions.clone(), bids.clone(), users.clone()),
        summary: GetAuctionSummaryHandler::new(
            auctions.clone(),
            bids,
            users,
            items,
            TieBreakPolicy::default(),
        ),
        list: ListAuctionsHandler::new(auctions),
    }
}

async fn seed_user(app: &App, username: &str) -> UserId {
    let id = UserId::new(format!("u-{}", username)).unwrap();
    app.users
        .save(&User::new(id.clone(), username).unwrap())
        .await
        .unwrap();
    id
}

async fn seed_item(app: &App, title: &str) -> ItemId {
    let item = Item::new(ItemId::new(), title).unwrap();
    app.items.save(&item).await.unwrap();
    *item.id()
}

/// Creates a live auction through the command handler.
async fn seed_live_auction(app: &App, lister_id: &UserId, item_id: ItemId) -> Auction {
    let now = Timestamp::now();
    app.create_auction
        .handle(CreateAuctionCommand {
            lister_id: Some(lister_id.clone()),
            item_id: Some(item_id),
            starts_at: Some(now.minus_days(1)),
            ends_at: Some(now.plus_days(1)),
        })
        .await
        .unwrap()
        .auction
}

#[tokio::test]
async fn auction_resolves_its_associations() {
    let app = app();
    let tom = seed_user(&app, "tom").await;
    let jodie = seed_user(&app, "jodie").await;
    let lamp = seed_item(&app, "lamp").await;

    let auction = seed_live_auction(&app, &tom, lamp).await;
    let bid = app
        .place_bid
        .handle(PlaceBidCommand {
            auction_id: *auction.id(),
            bidder_id: jodie.clone(),
            amount: Amount::from_major(25).unwrap(),
        })
        .await
        .unwrap()
        .bid;

    let summary = app.summary.handle(auction.id()).await.unwrap();

    assert_eq!(summary.item.title(), "lamp");
    assert_eq!(summary.lister.username(), "tom");
    assert_eq!(summary.bids, vec![bid]);
    assert_eq!(summary.bidders, vec![jodie]);
}

#[tokio::test]
async fn board_partitions_into_completed_live_and_scheduled() {
    let app = app();
    let lister = seed_user(&app, "tom").await;
    let now = Timestamp::now();

    let windows = [
        (now.minus_days(3), now.minus_days(1)), // past
        (now.minus_days(1), now.plus_days(1)),  // live
        (now.plus_days(1), now.plus_days(3)),   // future
    ];
    let mut seeded = Vec::new();
    for (starts_at, ends_at) in windows {
        let item_id = seed_item(&app, "item").await;
        let auction = app
            .create_auction
            .handle(CreateAuctionCommand {
                lister_id: Some(lister.clone()),
                item_id: Some(item_id),
                starts_at: Some(starts_at),
                ends_at: Some(ends_at),
            })
            .await
            .unwrap()
            .auction;
        seeded.push(auction);
    }

    let completed = app.list.handle(AuctionPhase::Completed).await.unwrap();
    let live = app.list.handle(AuctionPhase::Live).await.unwrap();
    let scheduled = app.list.handle(AuctionPhase::Scheduled).await.unwrap();

    assert_eq!(completed, vec![seeded[0].clone()]);
    assert_eq!(live, vec![seeded[1].clone()]);
    assert_eq!(scheduled, vec![seeded[2].clone()]);
    assert_eq!(app.auctions.count().await, 3);
}

#[tokio::test]
async fn highest_bid_and_bidder_resolve_to_the_largest_amount() {
    let app = app();
    let tom = seed_user(&app, "tom").await;
    let juan = seed_user(&app, "juan").await;
    let sally = seed_user(&app, "sally").await;
    let item = seed_item(&app, "lamp").await;
    let auction = seed_live_auction(&app, &tom, item).await;

    let high_bid = app
        .place_bid
        .handle(PlaceBidCommand {
            auction_id: *auction.id(),
            bidder_id: juan.clone(),
            amount: Amount::from_cents(5000).unwrap(), // 50.00
        })
        .await
        .unwrap()
        .bid;
    app.place_bid
        .handle(PlaceBidCommand {
            auction_id: *auction.id(),
            bidder_id: sally.clone(),
            amount: Amount::from_cents(1000).unwrap(), // 10.00
        })
        .await
        .unwrap();

    let summary = app.summary.handle(auction.id()).await.unwrap();

    assert_eq!(summary.highest_bid, Some(high_bid));
    assert_eq!(summary.highest_bidder, Some(juan));
    assert_eq!(summary.bidders.len(), 2);
}

#[tokio::test]
async fn auction_without_required_fields_is_rejected() {
    let app = app();
    let tom = seed_user(&app, "tom").await;
    let lamp = seed_item(&app, "lamp").await;
    let now = Timestamp::now();

    let complete = CreateAuctionCommand {
        lister_id: Some(tom),
        item_id: Some(lamp),
        starts_at: Some(now),
        ends_at: Some(now.plus_days(3)),
    };

    let cases: Vec<(CreateAuctionCommand, AuctionValidationError)> = vec![
        (
            CreateAuctionCommand {
                item_id: None,
                ..complete.clone()
            },
            AuctionValidationError::MissingItem,
        ),
        (
            CreateAuctionCommand {
                lister_id: None,
                ..complete.clone()
            },
            AuctionValidationError::MissingLister,
        ),
        (
            CreateAuctionCommand {
                starts_at: None,
                ..complete.clone()
            },
            AuctionValidationError::MissingStartTime,
        ),
        (
            CreateAuctionCommand {
                ends_at: None,
                ..complete.clone()
            },
            AuctionValidationError::MissingEndTime,
        ),
        (
            CreateAuctionCommand {
                ends_at: Some(now.minus_days(5)),
                ..complete.clone()
            },
            AuctionValidationError::InvalidTimeWindow,
        ),
    ];

    for (cmd, expected) in cases {
        let result = app.create_auction.handle(cmd).await;
        match result {
            Err(AuctionError::Validation(failures)) => {
                assert!(failures.contains(&expected), "missing {:?}", expected)
            }
            other => panic!("Expected validation failure, got {:?}", other),
        }
    }
    assert_eq!(app.auctions.count().await, 0);
}

#[tokio::test]
async fn bids_are_only_accepted_while_live() {
    let app = app();
    let tom = seed_user(&app, "tom").await;
    let jodie = seed_user(&app, "jodie").await;
    let now = Timestamp::now();

    let item_id = seed_item(&app, "clock").await;
    let future = app
        .create_auction
        .handle(CreateAuctionCommand {
            lister_id: Some(tom.clone()),
            item_id: Some(item_id),
            starts_at: Some(now.plus_days(1)),
            ends_at: Some(now.plus_days(2)),
        })
        .await
        .unwrap()
        .auction;

    let result = app
        .place_bid
        .handle(PlaceBidCommand {
            auction_id: *future.id(),
            bidder_id: jodie,
            amount: Amount::from_major(5).unwrap(),
        })
        .await;

    assert!(result.is_err());
    let summary = app.summary.handle(future.id()).await.unwrap();
    assert!(summary.bids.is_empty());
    assert_eq!(summary.phase, AuctionPhase::Scheduled);
}
