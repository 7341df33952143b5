// Copyright (c) 2026 Lanai Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lanai Trie.
//!
//! A `TrieNode` owns its children by value, so the whole trie is a plain
//! owned tree hanging off the root. Traversals here use an explicit stack or
//! queue instead of recursion, and dropping a node tears its subtree down
//! iteratively, so arbitrarily long keys never exhaust the call stack.

use std::collections::VecDeque;

use fnv::{FnvHashMap, FnvHashSet};

/// A node in the Lanai Trie.
///
/// Each node represents one byte of a key path. A node holds a value only
/// when some inserted key ends exactly at it.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Byte on the edge from the parent. Unused on the root.
    pub key: u8,

    /// Map of next bytes to owned child nodes
    pub children: FnvHashMap<u8, TrieNode>,

    /// Value stored at this node; `Some(vec![])` is a present, empty value
    pub value: Option<Vec<u8>>,
}

impl TrieNode {
    /// Creates a new empty node reached through the edge `key`.
    pub fn new(key: u8) -> Self {
        Self {
            key,
            children: FnvHashMap::default(),
            value: None,
        }
    }

    /// Returns the child reached through `key`, creating it if missing.
    ///
    /// The boolean is `true` when a new node was allocated.
    pub fn child_or_insert(&mut self, key: u8) -> (&mut TrieNode, bool) {
        let mut created = false;
        let child = self.children.entry(key).or_insert_with(|| {
            created = true;
            TrieNode::new(key)
        });
        (child, created)
    }

    /// Follows `path` one edge per byte, returning the node it ends at.
    pub fn descend(&self, path: &[u8]) -> Option<&TrieNode> {
        path.iter()
            .try_fold(self, |node, byte| node.children.get(byte))
    }

    /// Depth-first walk over every valued node below (and including) `self`.
    ///
    /// `visit` receives the path from `self` (excluding `self`'s own edge
    /// byte) and the stored value. Each node is visited at most once; the
    /// guard is by node address, since values can repeat or be empty.
    pub fn walk_depth_first<F>(&self, mut visit: F)
    where
        F: FnMut(&[u8], &[u8]),
    {
        let mut visited: FnvHashSet<*const TrieNode> = FnvHashSet::default();
        let mut path: Vec<u8> = Vec::new();
        let mut stack: Vec<(&TrieNode, usize)> = vec![(self, 0)];
        visited.insert(self as *const TrieNode);

        while let Some((node, depth)) = stack.pop() {
            // Everything popped since this node was pushed shares its
            // parent's path, so truncating restores that prefix.
            if depth > 0 {
                path.truncate(depth - 1);
                path.push(node.key);
            }

            if let Some(value) = &node.value {
                visit(&path, value);
            }

            for child in node.children.values() {
                if visited.insert(child as *const TrieNode) {
                    stack.push((child, depth + 1));
                }
            }
        }
    }

    /// Breadth-first walk over every valued node, in FIFO discovery order.
    pub fn walk_breadth_first<F>(&self, mut visit: F)
    where
        F: FnMut(&[u8]),
    {
        let mut visited: FnvHashSet<*const TrieNode> = FnvHashSet::default();
        let mut queue: VecDeque<&TrieNode> = VecDeque::new();
        queue.push_back(self);
        visited.insert(self as *const TrieNode);

        while let Some(node) = queue.pop_front() {
            if let Some(value) = &node.value {
                visit(value);
            }

            for child in node.children.values() {
                if visited.insert(child as *const TrieNode) {
                    queue.push_back(child);
                }
            }
        }
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();

        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
            // `node` drops here with no children left
        }
    }
}
