//! Store configuration module.
//!
//! This module defines configuration for the phone number store: its
//! initial size and when and how much it grows.

use super::{ConfigResult, Validate};
use crate::data_structures::lanai_hash_table::{
    LanaiHashConfig, DEFAULT_BUCKET_COUNT, DEFAULT_GROWTH_FACTOR, DEFAULT_MAX_LOAD_FACTOR,
};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Phone number store configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Number of buckets the store starts with
    pub initial_bucket_count: usize,

    /// Load factor above which the store grows
    pub max_load_factor: f64,

    /// Multiplier applied to the bucket count on growth
    pub growth_factor: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_bucket_count: DEFAULT_BUCKET_COUNT,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.initial_bucket_count == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "store.initial_bucket_count".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if !(self.max_load_factor > 0.0 && self.max_load_factor <= 1.0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "store.max_load_factor".to_string(),
                message: format!(
                    "must be in (0.0, 1.0], got {}",
                    self.max_load_factor
                ),
            });
        }

        if self.growth_factor < 2 {
            return Err(ConfigError::ValueOutOfRange {
                key: "store.growth_factor".to_string(),
                message: "must be at least 2".to_string(),
            });
        }

        Ok(())
    }
}

impl From<&StoreConfig> for LanaiHashConfig {
    fn from(config: &StoreConfig) -> Self {
        LanaiHashConfig::new()
            .with_initial_bucket_count(config.initial_bucket_count)
            .with_max_load_factor(config.max_load_factor)
            .with_growth_factor(config.growth_factor)
    }
}
