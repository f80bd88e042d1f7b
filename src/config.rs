//! Runtime settings for the catering system.
//!
//! Values come from the built-in defaults, then an optional `catering.toml` in the working
//! directory, then `CATERING__*` environment variables (`CATERING__STORAGE__BUCKET=...`).

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Capacity of each actor's request channel.
    pub channel_buffer: usize,
    pub storage: StorageConfig,
    pub tables: TableConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Bucket that receives receipts and payment slips.
    pub bucket: String,
    pub public_base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    pub food_orders: String,
    pub catering_bookings: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PricingConfig {
    /// Share of the package price collected as a reservation deposit.
    pub deposit_rate: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            storage: StorageConfig::default(),
            tables: TableConfig::default(),
            pricing: PricingConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: "payment-proofs".to_string(),
            public_base_url: "http://localhost:54321".to_string(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            food_orders: "food_orders".to_string(),
            catering_bookings: "catering_bookings".to_string(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self { deposit_rate: 0.3 }
    }
}

impl AppConfig {
    /// Loads `catering.toml` (if present) and `CATERING__*` overrides on top of the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name("catering").required(false))
                .add_source(Environment::with_prefix("CATERING").separator("__")),
        )
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::Message("channel_buffer must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.pricing.deposit_rate) {
            return Err(ConfigError::Message(format!(
                "pricing.deposit_rate must be between 0 and 1, got {}",
                self.pricing.deposit_rate
            )));
        }
        if self.storage.bucket.trim().is_empty() {
            return Err(ConfigError::Message("storage.bucket must not be empty".into()));
        }
        Ok(())
    }
}
