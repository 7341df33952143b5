//! Test modules for the Lanai Trie crate.
//!
//! Trie unit and property tests live next to the trie itself; this module
//! covers the ambient pieces:
//! - Configuration loading, layering and validation
//! - Error conversions and messages
