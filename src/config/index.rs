//! Index configuration module.
//!
//! This module defines configuration for the name index, which also
//! decides which names are accepted at the directory boundary.

use super::{ConfigResult, Validate};
use crate::data_structures::kauai_trie::{KauaiTrieConfig, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Name index configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexConfig {
    /// Maximum accepted name length
    pub max_key_length: usize,

    /// Lower-case ASCII uppercase letters instead of rejecting them
    pub fold_case: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_key_length: DEFAULT_MAX_DEPTH,
            fold_case: false,
        }
    }
}

impl Validate for IndexConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_key_length == 0 || self.max_key_length > MAX_SUPPORTED_DEPTH {
            return Err(ConfigError::ValueOutOfRange {
                key: "index.max_key_length".to_string(),
                message: format!("must be between 1 and {MAX_SUPPORTED_DEPTH}"),
            });
        }

        Ok(())
    }
}

impl From<&IndexConfig> for KauaiTrieConfig {
    fn from(config: &IndexConfig) -> Self {
        KauaiTrieConfig {
            max_depth: config.max_key_length,
            fold_case: config.fold_case,
        }
    }
}
