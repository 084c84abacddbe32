//! Data structures for the Mauka Phonebook.
//!
//! This module contains the two containers behind the directory:
//! - No unsafe code
//! - Single-owner node graphs with no shared or back references
//! - Deterministic layout and iteration order

pub mod kauai_trie;
pub mod lanai_hash_table;

// Re-export common data structures
pub use kauai_trie::{KauaiTrie, KauaiTrieError, KauaiTrieResult, PrefixMatch};
pub use lanai_hash_table::{LanaiHashError, LanaiHashTable};
