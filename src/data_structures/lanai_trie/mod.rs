// Copyright (c) 2026 Lanai Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Trie Implementation
//!
//! This module provides a byte-keyed trie (prefix tree) mapping arbitrary
//! binary keys to binary values, safe for concurrent use from many threads.
//!
//! # Concurrency
//!
//! The whole node graph and the insert counter sit behind a single
//! `parking_lot::RwLock`:
//!
//! * `insert` holds the write lock for the entire walk-and-mutate, so readers
//!   never observe a half-built path.
//! * `search`, `size` and the traversals hold the read lock for their entire
//!   duration and may run alongside each other.
//!
//! `parking_lot` locks do not poison, so every operation is total.
//!
//! # Example
//!
//! ```
//! use lanai_trie_lib::data_structures::LanaiTrie;
//!
//! let trie = LanaiTrie::new();
//! trie.insert("one", vec![1, 2]);
//! trie.insert("on", vec![9]);
//!
//! assert_eq!(trie.search("one"), Some(vec![1, 2]));
//! assert_eq!(trie.search("o"), None);
//! assert_eq!(trie.size(), 3);
//! ```

mod node;

#[cfg(test)]
mod tests;

use parking_lot::RwLock;
use tracing::trace;

pub use node::TrieNode;

/// State guarded by the trie lock.
#[derive(Debug)]
struct TrieState {
    root: TrieNode,
    size: usize,
}

/// Lanai Trie is a thread-safe prefix tree keyed by byte sequences.
///
/// Key features:
/// * Arbitrary binary keys, including the empty key
/// * Explicit found/not-found signal: an empty value is still a value
/// * One trie-wide reader-writer lock; readers run in parallel
/// * Stack-safe traversal and teardown for very long keys
///
/// `size()` counts insert calls (plus one for the root), not distinct keys.
#[derive(Debug)]
pub struct LanaiTrie {
    state: RwLock<TrieState>,
}

impl LanaiTrie {
    /// Creates a new trie holding only an empty root, with a size of 1.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(TrieState {
                root: TrieNode::new(0),
                size: 1,
            }),
        }
    }

    /// Inserts a key-value pair, overwriting any value already at `key`.
    ///
    /// An empty `key` stores the value on the root. An empty `value` is a
    /// present value and is reported as found by [`search`](Self::search).
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    /// * `value` - The value to associate with the key.
    pub fn insert<K, V>(&self, key: K, value: V)
    where
        K: AsRef<[u8]>,
        V: Into<Vec<u8>>,
    {
        self.insert_optional(key, Some(value.into()));
    }

    /// Inserts a key with an optional value.
    ///
    /// Passing `None` leaves the node at `key` without a value, clearing
    /// whatever was stored there; the path is still created and the call is
    /// still counted by [`size`](Self::size).
    pub fn insert_optional<K>(&self, key: K, value: Option<Vec<u8>>)
    where
        K: AsRef<[u8]>,
    {
        let key = key.as_ref();
        let mut state = self.state.write();

        let mut created = 0usize;
        let mut node = &mut state.root;
        for &byte in key {
            let (child, is_new) = node.child_or_insert(byte);
            created += usize::from(is_new);
            node = child;
        }
        node.value = value;

        state.size += 1;

        trace!(key_len = key.len(), created_nodes = created, size = state.size, "insert");
    }

    /// Looks up the value stored at `key`.
    ///
    /// # Returns
    ///
    /// * `Some(value)` - The key was inserted with a value (possibly empty).
    /// * `None` - No edge exists for the key, or the path exists but no
    ///   value was ever assigned at its end.
    pub fn search<K>(&self, key: K) -> Option<Vec<u8>>
    where
        K: AsRef<[u8]>,
    {
        let state = self.state.read();
        state.root.descend(key.as_ref())?.value.clone()
    }

    /// Returns `true` if a value is stored at `key`.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<[u8]>,
    {
        let state = self.state.read();
        state
            .root
            .descend(key.as_ref())
            .is_some_and(|node| node.value.is_some())
    }

    /// Returns the number of insert calls made so far, plus one for the root.
    ///
    /// Re-inserting an existing key increments the count again; this is a
    /// call counter, not the number of distinct keys.
    pub fn size(&self) -> usize {
        self.state.read().size
    }

    /// Collects every stored key with a depth-first traversal.
    ///
    /// Order follows child iteration and is unspecified.
    pub fn get_all_keys(&self) -> Vec<Vec<u8>> {
        let state = self.state.read();
        let mut keys = Vec::new();
        state.root.walk_depth_first(|path, _| keys.push(path.to_vec()));
        keys
    }

    /// Collects every stored value with a breadth-first traversal.
    ///
    /// Shallower values come before deeper ones; order among siblings is
    /// unspecified.
    pub fn get_all_values(&self) -> Vec<Vec<u8>> {
        let state = self.state.read();
        let mut values = Vec::new();
        state.root.walk_breadth_first(|value| values.push(value.to_vec()));
        values
    }

    /// Collects every stored key together with its value, depth-first.
    pub fn entries(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
        let state = self.state.read();
        let mut entries = Vec::new();
        state
            .root
            .walk_depth_first(|path, value| entries.push((path.to_vec(), value.to_vec())));
        entries
    }

    /// Inserts every pair from `iter`, one insert call per pair.
    pub fn extend<I, K, V>(&self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<[u8]>,
        V: Into<Vec<u8>>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl Default for LanaiTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for LanaiTrie
where
    K: AsRef<[u8]>,
    V: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let trie = Self::new();
        trie.extend(iter);
        trie
    }
}
