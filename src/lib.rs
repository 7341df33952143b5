//! Lanai Trie Library
//!
//! This library contains a concurrent, byte-keyed trie together with the
//! pieces used to exercise it: configuration loading, error types and a
//! multi-threaded workload driver. The binary crate wraps these in a CLI.
//!
//! # Architecture
//!
//! - [`data_structures`]: the `LanaiTrie` and its owned node tree
//! - [`workload`]: concurrent insert/search driver producing a report
//! - [`config`]: layered file + environment configuration
//! - [`error`]: application error types

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod workload;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Lanai Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
