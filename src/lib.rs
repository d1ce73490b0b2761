//! Gavel - Auction Domain Model
//!
//! Time-bounded listings, bids, highest-bid resolution, and
//! phase classification (scheduled / live / completed) recomputed
//! from timestamps rather than stored state.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
