// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bucket hashing for the Lanai Hash Table.
//!
//! Keys are hashed with a base-27 polynomial rolling hash that is reduced
//! modulo the current bucket count at every step. The result depends on the
//! bucket count, so every entry has to be rehashed when the table grows.

/// Multiplier of the rolling hash.
const HASH_BASE: usize = 27;

/// Computes the bucket index of `key` for a table with `bucket_count` buckets.
///
/// # Arguments
///
/// * `key` - The key to hash.
/// * `bucket_count` - Current number of buckets, must be non-zero.
///
/// # Returns
///
/// An index in `0..bucket_count`.
pub fn bucket_index(key: &str, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0);

    let mut idx = 0usize;
    let mut power = 1usize;
    for &byte in key.as_bytes() {
        idx = (idx + (usize::from(byte) * power) % bucket_count) % bucket_count;
        power = (power * HASH_BASE) % bucket_count;
    }
    idx
}
