//! Monetary amount value object.
//!
//! Amounts are stored as integer cents to avoid floating-point drift.
//! A bid amount must be strictly positive.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A strictly positive monetary amount, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// Creates an Amount from cents, returning error if zero.
    pub fn from_cents(cents: u64) -> Result<Self, ValidationError> {
        if cents == 0 {
            return Err(ValidationError::not_positive("amount"));
        }
        Ok(Self(cents))
    }

    /// Creates an Amount from whole currency units (e.g. dollars).
    pub fn from_major(major: u64) -> Result<Self, ValidationError> {
        Self::from_cents(major * 100)
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
