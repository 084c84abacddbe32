//! Kauai Trie Implementation
//!
//! This module provides a 26-ary trie over lowercase ASCII keys used as the
//! prefix index of the phonebook. The trie only records which keys exist;
//! values belong in a separate store looked up by the keys the trie hands
//! back.

mod error;
mod node;

use std::borrow::Cow;

pub use error::KauaiTrieError;
pub use node::ALPHABET_SIZE;
use node::{letter_of, slot_of, TrieNode};

/// Result type for Kauai Trie operations
pub type KauaiTrieResult<T> = Result<T, KauaiTrieError>;

/// Default maximum key length.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Largest `max_depth` a trie accepts. Traversal and teardown recurse once
/// per key character.
pub const MAX_SUPPORTED_DEPTH: usize = 1_024;

/// Configuration options for the Kauai Trie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KauaiTrieConfig {
    /// Maximum key length accepted by the trie
    pub max_depth: usize,

    /// Whether ASCII uppercase input is folded to lowercase instead of
    /// being rejected
    pub fold_case: bool,
}

impl Default for KauaiTrieConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            fold_case: false,
        }
    }
}

/// Outcome of a prefix walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixMatch {
    /// The full prefix path exists. Holds every inserted key below it, in
    /// lexicographic order (possibly empty only for an empty trie).
    Found(Vec<String>),

    /// The walk left the trie early.
    NotFound {
        /// Number of leading prefix characters that did have a path.
        matched: usize,
    },
}

/// Kauai Trie is a 26-ary prefix tree over `a..=z` keys.
///
/// Key features:
/// * Structural only: nodes carry a terminal marker, never a value
/// * Idempotent insertion
/// * Early-exit prefix walk followed by an `a..z` depth-first enumeration,
///   so completions come back sorted
/// * Explicit validation of key characters and length
#[derive(Debug, Default)]
pub struct KauaiTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of distinct keys
    len: usize,

    /// Configuration options
    config: KauaiTrieConfig,
}

impl KauaiTrie {
    /// Creates a new empty `KauaiTrie` with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty `KauaiTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    ///
    /// # Returns
    ///
    /// * `Ok(KauaiTrie)` - A new trie.
    /// * `Err(KauaiTrieError::InvalidConfiguration)` - If `max_depth` is out of range.
    pub fn with_config(config: KauaiTrieConfig) -> KauaiTrieResult<Self> {
        if config.max_depth == 0 || config.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(KauaiTrieError::InvalidConfiguration(format!(
                "max_depth must be between 1 and {MAX_SUPPORTED_DEPTH}, got {}",
                config.max_depth
            )));
        }

        Ok(Self {
            root: TrieNode::new(),
            len: 0,
            config,
        })
    }

    /// Returns the configuration the trie was built with.
    pub fn config(&self) -> &KauaiTrieConfig {
        &self.config
    }

    /// Returns the number of distinct keys in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Validates a key and applies case folding if configured.
    ///
    /// # Arguments
    ///
    /// * `key` - The raw key.
    ///
    /// # Returns
    ///
    /// * `Ok(Cow<str>)` - The key as it is stored, borrowed when unchanged.
    /// * `Err(KauaiTrieError)` - If the key is empty, too long or has a
    ///   character outside `a..=z`.
    pub fn normalize_key<'a>(&self, key: &'a str) -> KauaiTrieResult<Cow<'a, str>> {
        if key.is_empty() {
            return Err(KauaiTrieError::EmptyKey);
        }

        let key = self.normalize_prefix(key)?;
        if key.len() > self.config.max_depth {
            return Err(KauaiTrieError::KeyTooLong {
                key: key.into_owned(),
                max_depth: self.config.max_depth,
            });
        }
        Ok(key)
    }

    /// Same as [`normalize_key`](Self::normalize_key) but accepts the empty
    /// string, which matches every key, and any length. A prefix longer than
    /// `max_depth` has no path and simply fails to match.
    pub fn normalize_prefix<'a>(&self, prefix: &'a str) -> KauaiTrieResult<Cow<'a, str>> {
        let processed = if self.config.fold_case && prefix.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(prefix.to_ascii_lowercase())
        } else {
            Cow::Borrowed(prefix)
        };

        if let Some((position, character)) = processed
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_lowercase())
        {
            return Err(KauaiTrieError::InvalidCharacter {
                key: prefix.to_string(),
                character,
                position,
            });
        }

        Ok(processed)
    }

    /// Inserts a key into the trie.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the key is new, `false` if it was already present.
    /// * `Err(KauaiTrieError)` - If the key fails validation.
    pub fn insert(&mut self, key: &str) -> KauaiTrieResult<bool> {
        let key = self.normalize_key(key)?;

        let mut node = &mut self.root;
        for byte in key.bytes() {
            node = node.child_or_insert(slot_of(byte));
        }

        let is_new = !node.is_terminal;
        node.is_terminal = true;
        if is_new {
            self.len += 1;
        }

        Ok(is_new)
    }

    /// Checks if a key was inserted into the trie.
    pub fn contains(&self, key: &str) -> KauaiTrieResult<bool> {
        let key = self.normalize_key(key)?;
        Ok(self
            .descend(&key)
            .map(|node| node.is_terminal)
            .unwrap_or(false))
    }

    /// Finds every key starting with `prefix`.
    ///
    /// The prefix is walked character by character from the root; the first
    /// missing edge ends the search. Otherwise the subtree under the prefix
    /// node is enumerated depth first, children in `a..z` order.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to search for. Empty matches every key.
    ///
    /// # Returns
    ///
    /// * `Ok(PrefixMatch)` - The completions, or how far the walk got.
    /// * `Err(KauaiTrieError)` - If the prefix fails validation.
    pub fn find_by_prefix(&self, prefix: &str) -> KauaiTrieResult<PrefixMatch> {
        let prefix = self.normalize_prefix(prefix)?;

        let mut node = &self.root;
        for (matched, byte) in prefix.bytes().enumerate() {
            match node.child(slot_of(byte)) {
                Some(next) => node = next,
                None => return Ok(PrefixMatch::NotFound { matched }),
            }
        }

        let mut keys = Vec::new();
        let mut path = prefix.into_owned();
        collect_keys(node, &mut path, &mut keys);
        Ok(PrefixMatch::Found(keys))
    }

    /// Follows `key` from the root without creating nodes.
    fn descend(&self, key: &str) -> Option<&TrieNode> {
        key.bytes()
            .try_fold(&self.root, |node, byte| node.child(slot_of(byte)))
    }
}

/// Pushes every terminal path under `node` onto `keys`, `path` being the
/// spelling of `node` itself.
fn collect_keys(node: &TrieNode, path: &mut String, keys: &mut Vec<String>) {
    if node.is_terminal {
        keys.push(path.clone());
    }

    for (slot, child) in node.children.iter().enumerate() {
        if let Some(child) = child {
            path.push(letter_of(slot));
            collect_keys(child, path, keys);
            path.pop();
        }
    }
}
