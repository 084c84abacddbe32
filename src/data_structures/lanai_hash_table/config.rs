// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the Lanai Hash Table.

use super::error::{LanaiHashError, Result};

/// Default number of buckets in a fresh table.
pub const DEFAULT_BUCKET_COUNT: usize = 7;

/// Default load factor above which the table grows.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.7;

/// Default multiplier applied to the bucket count on growth.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Configuration for the Lanai Hash Table.
#[derive(Debug, Clone, PartialEq)]
pub struct LanaiHashConfig {
    /// Number of buckets the table starts with.
    pub initial_bucket_count: usize,

    /// Load factor (entries / buckets) that, once exceeded after an insert,
    /// triggers a rehash.
    pub max_load_factor: f64,

    /// Multiplier applied to the bucket count when the table grows.
    pub growth_factor: usize,
}

impl LanaiHashConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial number of buckets.
    ///
    /// # Arguments
    ///
    /// * `initial_bucket_count` - Number of buckets allocated up front.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_initial_bucket_count(mut self, initial_bucket_count: usize) -> Self {
        self.initial_bucket_count = initial_bucket_count;
        self
    }

    /// Sets the maximum load factor before triggering a rehash.
    ///
    /// # Arguments
    ///
    /// * `max_load_factor` - The maximum load factor (0.0 exclusive to 1.0 inclusive).
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_max_load_factor(mut self, max_load_factor: f64) -> Self {
        self.max_load_factor = max_load_factor;
        self
    }

    /// Sets the growth multiplier.
    pub fn with_growth_factor(mut self, growth_factor: usize) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Checks that the table can operate under this configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is usable
    /// * `Err(LanaiHashError::InvalidConfiguration)` otherwise
    pub fn validate(&self) -> Result<()> {
        if self.initial_bucket_count == 0 {
            return Err(LanaiHashError::InvalidConfiguration(
                "initial_bucket_count must be greater than 0".to_string(),
            ));
        }

        if !(self.max_load_factor > 0.0 && self.max_load_factor <= 1.0) {
            return Err(LanaiHashError::InvalidConfiguration(format!(
                "max_load_factor must be in (0.0, 1.0], got {}",
                self.max_load_factor
            )));
        }

        if self.growth_factor < 2 {
            return Err(LanaiHashError::InvalidConfiguration(
                "growth_factor must be at least 2".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for LanaiHashConfig {
    fn default() -> Self {
        Self {
            initial_bucket_count: DEFAULT_BUCKET_COUNT,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            // Doubling, not next-prime growth
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}
