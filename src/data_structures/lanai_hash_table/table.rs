// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the Lanai Hash Table.
//!
//! Each bucket owns a singly linked chain of entries. New entries are always
//! pushed at the head of their chain, so a lookup finds the most recently
//! inserted entry for a key first. Growth rebuilds the whole table through
//! the ordinary insert path.

use std::fmt::{self, Display, Formatter};

use tracing::{debug, trace};

use crate::data_structures::lanai_hash_table::config::LanaiHashConfig;
use crate::data_structures::lanai_hash_table::error::{LanaiHashError, Result};
use crate::data_structures::lanai_hash_table::hash::bucket_index;

type Link<V> = Option<Box<Entry<V>>>;

/// A single chain entry.
#[derive(Debug)]
struct Entry<V> {
    key: String,
    value: V,
    next: Link<V>,
}

/// A separately chained hash table keyed by strings.
///
/// # Type Parameters
///
/// * `V` - The value type stored against each key.
#[derive(Debug)]
pub struct LanaiHashTable<V> {
    /// Chain heads, one per bucket
    buckets: Vec<Link<V>>,

    /// Number of chain entries, duplicates included
    len: usize,

    /// The configuration for the hash table
    config: LanaiHashConfig,
}

impl<V> LanaiHashTable<V> {
    /// Creates a new empty table with default configuration (7 buckets,
    /// 0.7 load factor, doubling growth).
    pub fn new() -> Self {
        let config = LanaiHashConfig::default();
        Self {
            buckets: empty_buckets(config.initial_bucket_count),
            len: 0,
            config,
        }
    }

    /// Creates a new empty table with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the hash table.
    ///
    /// # Returns
    ///
    /// * `Ok(LanaiHashTable)` - A new table.
    /// * `Err(LanaiHashError::InvalidConfiguration)` - If the configuration is unusable.
    pub fn with_config(config: LanaiHashConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            buckets: empty_buckets(config.initial_bucket_count),
            len: 0,
            config,
        })
    }

    /// Returns the number of chain entries in the table.
    ///
    /// Keys inserted more than once through [`insert`](Self::insert) are
    /// counted once per insertion.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Calculates the current load factor of the table.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Returns the configuration the table was built with.
    pub fn config(&self) -> &LanaiHashConfig {
        &self.config
    }

    /// Pushes a new entry at the head of the key's bucket.
    ///
    /// No duplicate check is made: inserting an existing key adds a second
    /// entry that shadows the older one for lookups. After the entry is
    /// linked in, the table grows if the load factor exceeds the configured
    /// maximum.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    /// * `value` - The value to associate with the key.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The entry was stored.
    /// * `Err(LanaiHashError::AllocationFailed)` - A required rehash could not allocate.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: V) -> Result<()> {
        let key = key.into();
        let idx = bucket_index(&key, self.buckets.len());
        trace!(key = %key, bucket = idx, "Inserting entry");

        let next = self.buckets[idx].take();
        self.buckets[idx] = Some(Box::new(Entry { key, value, next }));
        self.len += 1;

        if self.load_factor() > self.config.max_load_factor {
            self.rehash()?;
        }

        Ok(())
    }

    /// Grows the bucket array and re-inserts every entry.
    ///
    /// Old buckets are drained in index order and each chain head-to-tail,
    /// so entries that land in the same new bucket end up in reverse order.
    fn rehash(&mut self) -> Result<()> {
        let old_count = self.buckets.len();
        let new_count = old_count
            .checked_mul(self.config.growth_factor)
            .ok_or(LanaiHashError::AllocationFailed {
                requested: usize::MAX,
            })?;

        let mut fresh: Vec<Link<V>> = Vec::new();
        fresh
            .try_reserve_exact(new_count)
            .map_err(|_| LanaiHashError::AllocationFailed {
                requested: new_count,
            })?;
        fresh.resize_with(new_count, || None);

        debug!(
            old_buckets = old_count,
            new_buckets = new_count,
            entries = self.len,
            "Rehashing table"
        );

        let old = std::mem::replace(&mut self.buckets, fresh);
        self.len = 0;

        for mut link in old {
            while let Some(mut entry) = link {
                link = entry.next.take();
                let Entry { key, value, .. } = *entry;
                self.insert(key, value)?;
            }
        }

        Ok(())
    }

    /// Looks up the most recently inserted value for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to look up.
    ///
    /// # Returns
    ///
    /// `Some(&value)` if the key exists, `None` otherwise.
    pub fn search(&self, key: &str) -> Option<&V> {
        let idx = bucket_index(key, self.buckets.len());
        let mut link = self.buckets[idx].as_deref();
        while let Some(entry) = link {
            if entry.key == key {
                return Some(&entry.value);
            }
            link = entry.next.as_deref();
        }
        None
    }

    /// Mutable variant of [`search`](Self::search).
    pub fn search_mut(&mut self, key: &str) -> Option<&mut V> {
        let idx = bucket_index(key, self.buckets.len());
        let mut link = self.buckets[idx].as_deref_mut();
        while let Some(entry) = link {
            if entry.key == key {
                return Some(&mut entry.value);
            }
            link = entry.next.as_deref_mut();
        }
        None
    }

    /// Checks if the key exists in the table.
    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Returns the value for `key`, inserting `V::default()` first if the
    /// key is absent.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to fetch or create.
    ///
    /// # Returns
    ///
    /// * `Ok(&mut V)` - The existing or freshly defaulted value.
    /// * `Err(LanaiHashError::AllocationFailed)` - The insert triggered a rehash that failed.
    pub fn get_or_insert_default(&mut self, key: &str) -> Result<&mut V>
    where
        V: Default,
    {
        if !self.contains_key(key) {
            self.insert(key, V::default())?;
        }

        self.search_mut(key)
            .ok_or_else(|| LanaiHashError::MissingEntry(key.to_string()))
    }

    /// Iterates over all entries in bucket order, each chain head-to-tail.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: &self.buckets,
            bucket: 0,
            link: None,
        }
    }

    /// Lists the keys of every bucket in index order.
    ///
    /// # Returns
    ///
    /// One `(bucket_index, keys)` pair per bucket, empty buckets included.
    pub fn buckets(&self) -> Vec<(usize, Vec<&str>)> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(idx, head)| {
                let mut keys = Vec::new();
                let mut link = head.as_deref();
                while let Some(entry) = link {
                    keys.push(entry.key.as_str());
                    link = entry.next.as_deref();
                }
                (idx, keys)
            })
            .collect()
    }
}

impl<V> Default for LanaiHashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

// Chains are unlinked one entry at a time so long chains cannot overflow the stack.
impl<V> Drop for LanaiHashTable<V> {
    fn drop(&mut self) {
        for bucket in &mut self.buckets {
            let mut link = bucket.take();
            while let Some(mut entry) = link {
                link = entry.next.take();
            }
        }
    }
}

impl<V> Display for LanaiHashTable<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (idx, keys) in self.buckets() {
            write!(f, "Bucket {idx} ->")?;
            for key in keys {
                write!(f, " {key} ->")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over `(key, value)` pairs of a [`LanaiHashTable`].
#[derive(Debug)]
pub struct Iter<'a, V> {
    buckets: &'a [Link<V>],
    bucket: usize,
    link: Option<&'a Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.link {
                self.link = entry.next.as_deref();
                return Some((entry.key.as_str(), &entry.value));
            }
            let head = self.buckets.get(self.bucket)?;
            self.bucket += 1;
            self.link = head.as_deref();
        }
    }
}

fn empty_buckets<V>(count: usize) -> Vec<Link<V>> {
    let mut buckets = Vec::with_capacity(count);
    buckets.resize_with(count, || None);
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_search() {
        let mut table = LanaiHashTable::new();

        table.insert("alice", 111_i64).unwrap();
        table.insert("bob", 333_i64).unwrap();

        assert_eq!(table.search("alice"), Some(&111));
        assert_eq!(table.search("bob"), Some(&333));
        assert_eq!(table.search("carol"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_insert_does_not_deduplicate() {
        let mut table = LanaiHashTable::new();

        table.insert("alice", 1_i64).unwrap();
        table.insert("alice", 2_i64).unwrap();

        // Most recent entry shadows the older one
        assert_eq!(table.search("alice"), Some(&2));
        assert_eq!(table.len(), 2);

        let dumped: Vec<&str> = table
            .buckets()
            .into_iter()
            .flat_map(|(_, keys)| keys)
            .collect();
        assert_eq!(dumped, vec!["alice", "alice"]);
    }

    #[test]
    fn test_duplicates_flip_order_after_rehash() {
        let mut table = LanaiHashTable::new();
        table.insert("dup", 1_i64).unwrap();
        table.insert("dup", 2_i64).unwrap();
        assert_eq!(table.search("dup"), Some(&2));

        // Third through fifth entries push the load over 0.7
        table.insert("x", 0).unwrap();
        table.insert("y", 0).unwrap();
        assert_eq!(table.bucket_count(), 7);
        table.insert("z", 0).unwrap();
        assert_eq!(table.bucket_count(), 14);

        // Re-insertion reverses each old chain, so the older value wins now
        assert_eq!(table.search("dup"), Some(&1));
    }

    #[test]
    fn test_rehash_on_fifth_insert() {
        let mut table = LanaiHashTable::new();
        let keys = ["a", "b", "c", "d", "e", "f"];

        for (i, key) in keys.iter().enumerate() {
            table.insert(*key, i as i64).unwrap();
            if i < 4 {
                assert_eq!(table.bucket_count(), 7, "no growth before the 5th insert");
            } else {
                assert_eq!(table.bucket_count(), 14, "growth on the 5th insert");
            }
            assert!(table.load_factor() <= 0.7);
        }

        for (i, key) in keys.iter().enumerate() {
            assert_eq!(table.search(key), Some(&(i as i64)));
        }
    }

    #[test]
    fn test_get_or_insert_default() {
        let mut table: LanaiHashTable<i64> = LanaiHashTable::new();

        assert_eq!(*table.get_or_insert_default("alice").unwrap(), 0);
        assert_eq!(table.len(), 1);

        *table.get_or_insert_default("alice").unwrap() = 42;
        assert_eq!(table.search("alice"), Some(&42));
        assert_eq!(table.len(), 1, "existing key is updated in place");
    }

    #[test]
    fn test_get_or_insert_default_across_rehash() {
        let mut table: LanaiHashTable<i64> = LanaiHashTable::new();
        for key in ["a", "b", "c", "d"] {
            *table.get_or_insert_default(key).unwrap() = 1;
        }
        assert_eq!(table.bucket_count(), 7);

        // This insert triggers the rehash before the reference is handed out
        *table.get_or_insert_default("e").unwrap() = 5;
        assert_eq!(table.bucket_count(), 14);
        assert_eq!(table.search("e"), Some(&5));
    }

    #[test]
    fn test_with_config_rejects_zero_buckets() {
        let config = LanaiHashConfig::new().with_initial_bucket_count(0);
        let result = LanaiHashTable::<i64>::with_config(config);
        assert!(matches!(
            result,
            Err(LanaiHashError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_single_bucket_table_grows() {
        let config = LanaiHashConfig::new().with_initial_bucket_count(1);
        let mut table = LanaiHashTable::with_config(config).unwrap();

        // 1/1 > 0.7 so the very first insert grows the table
        table.insert("solo", 9_i64).unwrap();
        assert_eq!(table.bucket_count(), 2);
        assert_eq!(table.search("solo"), Some(&9));
    }

    #[test]
    fn test_display_lists_every_bucket() {
        let mut table = LanaiHashTable::new();
        table.insert("a", 1_i64).unwrap();

        let rendered = table.to_string();
        assert_eq!(rendered.lines().count(), 7);
        // "a" hashes to bucket 6 of 7
        assert!(rendered.contains("Bucket 6 -> a ->"));
        assert!(rendered.contains("Bucket 0 ->\n"));
    }

    #[test]
    fn test_iter_visits_every_entry() {
        let mut table = LanaiHashTable::new();
        for (i, key) in ["one", "two", "three", "four", "five", "six"].iter().enumerate() {
            table.insert(*key, i).unwrap();
        }

        let mut seen: Vec<&str> = table.iter().map(|(key, _)| key).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec!["five", "four", "one", "six", "three", "two"]);
    }

    #[test]
    fn test_long_chain_drops_cleanly() {
        let config = LanaiHashConfig::new().with_max_load_factor(1.0);
        let mut table = LanaiHashTable::with_config(config).unwrap();
        // One key repeated keeps every entry in the same chain
        for i in 0..100_000_u32 {
            table.insert("same", i).unwrap();
        }
        assert!(table.contains_key("same"));
        assert_eq!(table.len(), 100_000);
        drop(table);
    }
}
