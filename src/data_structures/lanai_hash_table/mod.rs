// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Hash Table: value storage for the phonebook.
//!
//! A separately chained hash table with string keys and deterministic
//! bucket layout. The bucket a key lands in, the order of entries inside a
//! bucket and the moment the table grows are all fully specified, which
//! makes the diagnostic bucket dump reproducible.
//!
//! # Features
//!
//! - Base-27 polynomial rolling hash reduced by the current bucket count
//! - Insert-at-head chains; lookups see the most recent entry for a key
//! - Load-factor-triggered growth (default: above 0.7, doubling, from 7 buckets)
//! - Fetch-or-default access for associative-array style updates
//! - Zero unsafe code
//!
//! # Example
//!
//! ```
//! use mauka_phonebook_lib::data_structures::lanai_hash_table::LanaiHashTable;
//!
//! let mut table = LanaiHashTable::<i64>::new();
//!
//! table.insert("alice", 111).unwrap();
//! assert_eq!(table.search("alice"), Some(&111));
//! assert_eq!(table.search("bob"), None);
//!
//! // Associative-array style update
//! *table.get_or_insert_default("bob").unwrap() = 333;
//! assert_eq!(table.search("bob"), Some(&333));
//! ```
//!
//! # Duplicate keys
//!
//! [`LanaiHashTable::insert`] never replaces an existing entry. Calling it
//! twice with the same key keeps both entries in the chain, and lookups
//! return the newer one until the next rehash reverses their order. Use
//! [`LanaiHashTable::get_or_insert_default`] for update-in-place semantics.

// Module declarations
mod config;
mod error;
mod hash;
mod table;

// Re-exports
pub use config::{
    LanaiHashConfig, DEFAULT_BUCKET_COUNT, DEFAULT_GROWTH_FACTOR, DEFAULT_MAX_LOAD_FACTOR,
};
pub use error::{LanaiHashError, Result};
pub use hash::bucket_index;
pub use table::{Iter, LanaiHashTable};
