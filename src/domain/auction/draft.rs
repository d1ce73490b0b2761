//! Auction draft - validating builder for the Auction aggregate.
//!
//! A draft holds optional fields so that missing values are
//! representable; `build` evaluates every check and reports all
//! failures together. The presentation layer decides how many of
//! them to surface.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Auction;
use crate::domain::foundation::{AuctionId, ItemId, Timestamp, UserId};

/// A single auction validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AuctionValidationError {
    #[error("auction must reference an item")]
    MissingItem,

    #[error("auction must reference a lister")]
    MissingLister,

    #[error("auction must have a start date and time")]
    MissingStartTime,

    #[error("auction must have an end date and time")]
    MissingEndTime,

    #[error("end date and time must be later than start date and time")]
    InvalidTimeWindow,
}

/// Unvalidated auction fields, accumulated before building.
#[derive(Debug, Clone, Default)]
pub struct AuctionDraft {
    item_id: Option<ItemId>,
    lister_id: Option<UserId>,
    starts_at: Option<Timestamp>,
    ends_at: Option<Timestamp>,
}

impl AuctionDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the listed item.
    pub fn item(mut self, item_id: ItemId) -> Self {
        self.item_id = Some(item_id);
        self
    }

    /// Sets the lister.
    pub fn lister(mut self, lister_id: UserId) -> Self {
        self.lister_id = Some(lister_id);
        self
    }

    /// Sets when bidding opens.
    pub fn starts_at(mut self, starts_at: Timestamp) -> Self {
        self.starts_at = Some(starts_at);
        self
    }

    /// Sets when bidding closes.
    pub fn ends_at(mut self, ends_at: Timestamp) -> Self {
        self.ends_at = Some(ends_at);
        self
    }

    /// Validates the draft and builds the auction.
    ///
    /// # Errors
    ///
    /// Returns every applicable failure:
    /// - `MissingItem` / `MissingLister` / `MissingStartTime` /
    ///   `MissingEndTime` for absent fields
    /// - `InvalidTimeWindow` when both timestamps are present and
    ///   `ends_at <= starts_at`
    pub fn build(self) -> Result<Auction, Vec<AuctionValidationError>> {
        let mut failures = Vec::new();

        if self.item_id.is_none() {
            failures.push(AuctionValidationError::MissingItem);
        }
        if self.lister_id.is_none() {
            failures.push(AuctionValidationError::MissingLister);
        }
        if self.starts_at.is_none() {
            failures.push(AuctionValidationError::MissingStartTime);
        }
        if self.ends_at.is_none() {
            failures.push(AuctionValidationError::MissingEndTime);
        }
        if let (Some(starts_at), Some(ends_at)) = (self.starts_at, self.ends_at) {
            if ends_at <= starts_at {
                failures.push(AuctionValidationError::InvalidTimeWindow);
            }
        }

        match (self.item_id, self.lister_id, self.starts_at, self.ends_at) {
            (Some(item_id), Some(lister_id), Some(starts_at), Some(ends_at))
                if failures.is_empty() =>
            {
                Ok(Auction::from_parts(
                    AuctionId::new(),
                    item_id,
                    lister_id,
                    starts_at,
                    ends_at,
                ))
            }
            _ => Err(failures),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lister() -> UserId {
        UserId::new("lister-1").unwrap()
    }

    fn complete_draft() -> AuctionDraft {
        AuctionDraft::new()
            .item(ItemId::new())
            .lister(lister())
            .starts_at(Timestamp::from_unix_secs(1000))
            .ends_at(Timestamp::from_unix_secs(2000))
    }

    #[test]
    fn complete_draft_builds() {
        let auction = complete_draft().build().unwrap();
        assert_eq!(auction.starts_at(), Timestamp::from_unix_secs(1000));
        assert_eq!(auction.ends_at(), Timestamp::from_unix_secs(2000));
    }

    #[test]
    fn draft_without_item_is_invalid() {
        let result = AuctionDraft::new()
            .lister(lister())
            .starts_at(Timestamp::from_unix_secs(1000))
            .ends_at(Timestamp::from_unix_secs(2000))
            .build();
        assert_eq!(result.unwrap_err(), vec![AuctionValidationError::MissingItem]);
    }

    #[test]
    fn draft_without_lister_is_invalid() {
        let result = AuctionDraft::new()
            .item(ItemId::new())
            .starts_at(Timestamp::from_unix_secs(1000))
            .ends_at(Timestamp::from_unix_secs(2000))
            .build();
        assert_eq!(result.unwrap_err(), vec![AuctionValidationError::MissingLister]);
    }

    #[test]
    fn draft_without_start_time_is_invalid() {
        let result = AuctionDraft::new()
            .item(ItemId::new())
            .lister(lister())
            .ends_at(Timestamp::from_unix_secs(2000))
            .build();
        assert_eq!(
            result.unwrap_err(),
            vec![AuctionValidationError::MissingStartTime]
        );
    }

    #[test]
    fn draft_without_end_time_is_invalid() {
        let result = AuctionDraft::new()
            .item(ItemId::new())
            .lister(lister())
            .starts_at(Timestamp::from_unix_secs(1000))
            .build();
        assert_eq!(
            result.unwrap_err(),
            vec![AuctionValidationError::MissingEndTime]
        );
    }

    #[test]
    fn draft_ending_before_start_is_invalid() {
        let now = Timestamp::now();
        let result = AuctionDraft::new()
            .item(ItemId::new())
            .lister(lister())
            .starts_at(now)
            .ends_at(now.minus_days(5))
            .build();
        assert_eq!(
            result.unwrap_err(),
            vec![AuctionValidationError::InvalidTimeWindow]
        );
    }

    #[test]
    fn draft_ending_exactly_at_start_is_invalid() {
        let now = Timestamp::now();
        let result = AuctionDraft::new()
            .item(ItemId::new())
            .lister(lister())
            .starts_at(now)
            .ends_at(now)
            .build();
        assert_eq!(
            result.unwrap_err(),
            vec![AuctionValidationError::InvalidTimeWindow]
        );
    }

    #[test]
    fn empty_draft_reports_every_missing_field() {
        let failures = AuctionDraft::new().build().unwrap_err();
        assert_eq!(
            failures,
            vec![
                AuctionValidationError::MissingItem,
                AuctionValidationError::MissingLister,
                AuctionValidationError::MissingStartTime,
                AuctionValidationError::MissingEndTime,
            ]
        );
    }

    #[test]
    fn time_window_is_not_checked_when_a_timestamp_is_missing() {
        let failures = AuctionDraft::new()
            .item(ItemId::new())
            .lister(lister())
            .starts_at(Timestamp::from_unix_secs(1000))
            .build()
            .unwrap_err();
        assert!(!failures.contains(&AuctionValidationError::InvalidTimeWindow));
    }

    #[test]
    fn validation_error_displays_reason() {
        assert_eq!(
            format!("{}", AuctionValidationError::InvalidTimeWindow),
            "end date and time must be later than start date and time"
        );
    }
}
