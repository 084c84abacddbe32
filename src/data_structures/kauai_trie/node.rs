//! Node implementation for the Kauai Trie.
//!
//! Each node owns up to 26 children, one per lowercase letter. Nodes never
//! hold values; the only payload is the terminal marker.

/// Number of child slots per node (`a..=z`).
pub const ALPHABET_SIZE: usize = 26;

/// A node in the Kauai Trie.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Child slots indexed by alphabet position
    pub children: [Option<Box<TrieNode>>; ALPHABET_SIZE],

    /// Whether the path from the root to this node spells an inserted key
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child in `slot`, if any.
    pub fn child(&self, slot: usize) -> Option<&TrieNode> {
        self.children[slot].as_deref()
    }

    /// Returns the child in `slot`, creating an empty one first if needed.
    pub fn child_or_insert(&mut self, slot: usize) -> &mut TrieNode {
        self.children[slot].get_or_insert_with(|| Box::new(TrieNode::new()))
    }
}

/// Maps a lowercase ASCII letter to its child slot.
pub fn slot_of(byte: u8) -> usize {
    debug_assert!(byte.is_ascii_lowercase());
    usize::from(byte - b'a')
}

/// Maps a child slot back to its letter.
pub fn letter_of(slot: usize) -> char {
    debug_assert!(slot < ALPHABET_SIZE);
    char::from(b'a' + slot as u8)
}
