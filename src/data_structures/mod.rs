//! Data structures for the Lanai Trie crate.
//!
//! This module contains the concurrent byte-keyed trie and its node type.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Total operations: lookups signal absence with `Option`, never with errors
//! - Stack-safe handling of arbitrarily long keys

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{LanaiTrie, TrieNode};
