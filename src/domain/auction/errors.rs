//! Auction-specific error types.

use super::AuctionValidationError;
use crate::domain::foundation::{AuctionId, DomainError, ErrorCode, ItemId, UserId};

/// Auction-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuctionError {
    /// Auction was not found.
    NotFound(AuctionId),
    /// Referenced lister does not exist.
    ListerNotFound(UserId),
    /// Referenced item does not exist.
    ItemNotFound(ItemId),
    /// One or more field invariants were violated.
    Validation(Vec<AuctionValidationError>),
    /// Infrastructure error.
    Infrastructure(String),
}

impl AuctionError {
    pub fn not_found(id: AuctionId) -> Self {
        AuctionError::NotFound(id)
    }

    pub fn validation(failures: Vec<AuctionValidationError>) -> Self {
        AuctionError::Validation(failures)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AuctionError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AuctionError::NotFound(_) => ErrorCode::AuctionNotFound,
            AuctionError::ListerNotFound(_) => ErrorCode::UserNotFound,
            AuctionError::ItemNotFound(_) => ErrorCode::ItemNotFound,
            AuctionError::Validation(failures)
                if failures.contains(&AuctionValidationError::InvalidTimeWindow) =>
            {
                ErrorCode::InvalidTimeWindow
            }
            AuctionError::Validation(_) => ErrorCode::ValidationFailed,
            AuctionError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AuctionError::NotFound(id) => format!("Auction not found: {}", id),
            AuctionError::ListerNotFound(id) => format!("Lister not found: {}", id),
            AuctionError::ItemNotFound(id) => format!("Item not found: {}", id),
            AuctionError::Validation(failures) => {
                let reasons: Vec<String> = failures.iter().map(|f| f.to_string()).collect();
                format!("Invalid auction: {}", reasons.join("; "))
            }
            AuctionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AuctionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AuctionError {}

impl From<DomainError> for AuctionError {
    fn from(err: DomainError) -> Self {
        AuctionError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_joins_all_failures() {
        let err = AuctionError::validation(vec![
            AuctionValidationError::MissingItem,
            AuctionValidationError::MissingLister,
        ]);
        let message = err.message();
        assert!(message.contains("must reference an item"));
        assert!(message.contains("must reference a lister"));
    }

    #[test]
    fn invalid_time_window_gets_its_own_code() {
        let err = AuctionError::validation(vec![AuctionValidationError::InvalidTimeWindow]);
        assert_eq!(err.code(), ErrorCode::InvalidTimeWindow);
    }

    #[test]
    fn missing_field_maps_to_validation_failed() {
        let err = AuctionError::validation(vec![AuctionValidationError::MissingItem]);
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn domain_error_converts_to_infrastructure() {
        let err: AuctionError =
            DomainError::new(ErrorCode::StorageError, "store unavailable").into();
        assert!(matches!(err, AuctionError::Infrastructure(_)));
    }
}
