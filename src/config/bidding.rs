//! Bidding configuration.

use serde::Deserialize;

use crate::domain::bidding::TieBreakPolicy;

/// Tunables for bid resolution.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BiddingConfig {
    /// How to resolve two bids sharing the maximum amount.
    #[serde(default)]
    pub tie_break: TieBreakPolicy,
}
