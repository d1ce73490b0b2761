//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `GAVEL` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use gavel::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! println!("Tie-break policy: {:?}", config.bidding.tie_break);
//! ```

mod bidding;
mod error;

pub use bidding::BiddingConfig;
pub use error::ConfigError;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Bid resolution tunables
    #[serde(default)]
    pub bidding: BiddingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GAVEL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `GAVEL__BIDDING__TIE_BREAK=latest_wins` -> `bidding.tie_break`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("GAVEL").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }
}
