//! Mauka Phonebook Library
//!
//! This library contains the core components of the Mauka Phonebook: an
//! in-memory contact directory with prefix autocomplete. Names are indexed
//! in a trie and phone numbers are kept in a separately chained hash table.
//! The library is designed to be used by the binary crate, but can also
//! be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - [`data_structures::kauai_trie`]: structural name index, prefix walks
//! - [`data_structures::lanai_hash_table`]: phone number storage with rehashing
//! - [`directory`]: the composition exposed to callers
//! - [`shell`]: the interactive menu loop driving a directory
//! - [`config`] and [`error`]: ambient configuration and error handling
//!
//! # Example
//!
//! ```
//! use mauka_phonebook_lib::directory::{Contact, Directory};
//!
//! let mut directory = Directory::new();
//! directory.insert_contact("alice", 111).unwrap();
//! directory.insert_contact("alan", 222).unwrap();
//!
//! let lookup = directory.lookup_by_prefix("al").unwrap();
//! assert_eq!(
//!     lookup.contacts(),
//!     Some(&[Contact::new("alan", 222), Contact::new("alice", 111)][..])
//! );
//! assert!(!directory.lookup_by_prefix("z").unwrap().is_found());
//! ```

pub mod config;
pub mod data_structures;
pub mod directory;
pub mod error;
pub mod shell;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Mauka Phonebook.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
