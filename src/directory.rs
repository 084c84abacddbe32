//! The contact directory.
//!
//! Composes the name index with the phone number store. Names live in the
//! [`KauaiTrie`], which answers prefix queries; phone numbers live in the
//! [`LanaiHashTable`] and are fetched by the full names the trie returns.

use std::fmt::{self, Display, Formatter};

use tracing::debug;

use crate::config::PhonebookConfig;
use crate::data_structures::kauai_trie::{KauaiTrie, PrefixMatch};
use crate::data_structures::lanai_hash_table::LanaiHashTable;
use crate::error::{PhonebookError, PhonebookResult};

/// Phone numbers are stored as signed 64-bit integers.
pub type PhoneNumber = i64;

/// A name and its phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Contact name, lowercase `a..=z`
    pub name: String,

    /// Most recently stored phone number
    pub phone: PhoneNumber,
}

impl Contact {
    /// Creates a new contact.
    pub fn new<S: Into<String>>(name: S, phone: PhoneNumber) -> Self {
        Self {
            name: name.into(),
            phone,
        }
    }
}

/// Result of a prefix lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The prefix exists in the index.
    Found {
        /// The prefix as it was searched (after case folding)
        prefix: String,
        /// Matching contacts in lexicographic name order
        contacts: Vec<Contact>,
    },

    /// No stored name starts with the prefix.
    NotFound {
        /// The prefix as it was searched (after case folding)
        prefix: String,
        /// Length of the longest leading part of `prefix` that is a path in the index
        matched: usize,
    },
}

impl Lookup {
    /// Returns the matching contacts, or `None` if the prefix was not found.
    pub fn contacts(&self) -> Option<&[Contact]> {
        match self {
            Lookup::Found { contacts, .. } => Some(contacts),
            Lookup::NotFound { .. } => None,
        }
    }

    /// Returns whether the prefix was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found { .. })
    }
}

/// In-memory contact directory with prefix autocomplete.
///
/// All state is owned by the value; dropping it tears down both the index
/// and the store.
#[derive(Debug, Default)]
pub struct Directory {
    /// Structural index of names
    index: KauaiTrie,

    /// Phone numbers keyed by name
    phones: LanaiHashTable<PhoneNumber>,
}

impl Directory {
    /// Creates an empty directory with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty directory configured from `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - Phonebook configuration; only the `store` and `index` sections are used.
    ///
    /// # Returns
    ///
    /// * `Ok(Directory)` - An empty directory.
    /// * `Err(PhonebookError)` - If either component rejects its configuration.
    pub fn with_config(config: &PhonebookConfig) -> PhonebookResult<Self> {
        Ok(Self {
            index: KauaiTrie::with_config((&config.index).into())?,
            phones: LanaiHashTable::with_config((&config.store).into())?,
        })
    }

    /// Returns the number of distinct contacts.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns whether the directory holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Read access to the phone number store.
    pub fn phones(&self) -> &LanaiHashTable<PhoneNumber> {
        &self.phones
    }

    /// Adds a contact, or replaces the phone number of an existing one.
    ///
    /// # Arguments
    ///
    /// * `name` - Contact name; must be non-empty lowercase `a..=z`
    ///   (uppercase is accepted when case folding is configured).
    /// * `phone` - The phone number.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The contact was stored.
    /// * `Err(PhonebookError::Index)` - The name was rejected.
    /// * `Err(PhonebookError::Store)` - The store failed to grow.
    pub fn insert_contact(&mut self, name: &str, phone: PhoneNumber) -> PhonebookResult<()> {
        let name = self.index.normalize_key(name)?.into_owned();

        // Store first so a failed rehash leaves no index entry without a number
        *self.phones.get_or_insert_default(&name)? = phone;
        let is_new = self.index.insert(&name)?;

        debug!(name = %name, phone, is_new, "Contact stored");
        Ok(())
    }

    /// Lists every contact whose name starts with `prefix`.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to search for; empty lists every contact.
    ///
    /// # Returns
    ///
    /// * `Ok(Lookup)` - Matching contacts in name order, or a not-found marker.
    /// * `Err(PhonebookError::Index)` - The prefix was rejected.
    pub fn lookup_by_prefix(&self, prefix: &str) -> PhonebookResult<Lookup> {
        let prefix = self.index.normalize_prefix(prefix)?.into_owned();

        let lookup = match self.index.find_by_prefix(&prefix)? {
            PrefixMatch::Found(names) => {
                let contacts = names
                    .into_iter()
                    .map(|name| match self.phones.search(&name) {
                        Some(&phone) => Ok(Contact { name, phone }),
                        None => Err(PhonebookError::MissingValue(name)),
                    })
                    .collect::<PhonebookResult<Vec<_>>>()?;
                debug!(prefix = %prefix, matches = contacts.len(), "Prefix lookup");
                Lookup::Found { prefix, contacts }
            }
            PrefixMatch::NotFound { matched } => {
                debug!(prefix = %prefix, matched, "Prefix not found");
                Lookup::NotFound { prefix, matched }
            }
        };

        Ok(lookup)
    }

    /// Lists the stored names bucket by bucket, for diagnostics.
    ///
    /// # Returns
    ///
    /// One `(bucket_index, names)` pair per store bucket, chains head-to-tail.
    pub fn dump_all(&self) -> Vec<(usize, Vec<&str>)> {
        self.phones.buckets()
    }
}

impl Display for Directory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.phones, f)
    }
}
