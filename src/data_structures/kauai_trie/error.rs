//! Error types for the Kauai Trie.
//!
//! This module defines the error types that can occur during Kauai Trie operations.

/// Errors that can occur in Kauai Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum KauaiTrieError {
    /// Error when an empty key is provided.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// Error when a key contains a character outside `a..=z`.
    #[error("Invalid character {character:?} at position {position} in key '{key}'")]
    InvalidCharacter {
        /// The rejected key.
        key: String,
        /// The offending character.
        character: char,
        /// Character offset of the offending character.
        position: usize,
    },

    /// Error when a key exceeds the maximum depth allowed.
    #[error("Key '{key}' exceeds maximum trie depth of {max_depth}")]
    KeyTooLong {
        /// The key that was too long.
        key: String,
        /// The maximum allowed depth.
        max_depth: usize,
    },

    /// Error when the trie is configured with values it cannot operate under.
    #[error("Invalid trie configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KauaiTrieError::EmptyKey;
        assert_eq!(err.to_string(), "Empty key not allowed");

        let err = KauaiTrieError::InvalidCharacter {
            key: "bob1".to_string(),
            character: '1',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid character '1' at position 3 in key 'bob1'"
        );

        let err = KauaiTrieError::KeyTooLong {
            key: "test".to_string(),
            max_depth: 2,
        };
        assert_eq!(err.to_string(), "Key 'test' exceeds maximum trie depth of 2");
    }
}
