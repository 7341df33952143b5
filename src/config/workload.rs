//! Workload configuration module.
//!
//! Controls the concurrent insert/search workload that the `stress` command
//! runs against a shared trie.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound on worker threads, to catch obviously mistyped values.
const MAX_THREADS: usize = 1024;

/// Workload configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkloadConfig {
    /// Number of worker threads (defaults to the number of CPUs)
    pub threads: usize,

    /// Number of disjoint keys each worker inserts
    pub keys_per_thread: usize,

    /// Prefix shared by every generated key
    pub key_prefix: String,

    /// Length in bytes of each generated value (0 stores empty values)
    pub value_len: usize,

    /// Whether workers search their own keys back after inserting
    pub verify: bool,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            threads: num_cpus::get(),
            keys_per_thread: 10_000,
            key_prefix: "key".to_string(),
            value_len: 16,
            verify: true,
        }
    }
}

impl Validate for WorkloadConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.threads == 0 || self.threads > MAX_THREADS {
            return Err(ConfigError::ValueOutOfRange {
                key: "workload.threads".to_string(),
                message: format!("must be between 1 and {MAX_THREADS}"),
            });
        }

        if self.keys_per_thread == 0 {
            return Err(ConfigError::ValidationError(
                "keys_per_thread must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
