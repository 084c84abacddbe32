// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lanai Hash Table.

/// Errors that can occur in Lanai Hash Table operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LanaiHashError {
    /// The table was configured with values it cannot operate under
    #[error("Invalid table configuration: {0}")]
    InvalidConfiguration(String),

    /// The bucket array for a rehash could not be allocated
    #[error("Failed to allocate {requested} buckets while growing the table")]
    AllocationFailed {
        /// Number of buckets the rehash asked for.
        requested: usize,
    },

    /// A freshly inserted key could not be found again
    #[error("Entry for '{0}' is missing after insertion")]
    MissingEntry(String),
}

/// Result type for Lanai Hash Table operations
pub type Result<T> = std::result::Result<T, LanaiHashError>;
