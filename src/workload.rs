//! Concurrent workload driver.
//!
//! Spawns a pool of worker threads over one shared [`LanaiTrie`]. Every
//! worker inserts its own disjoint set of keys, then (optionally) reads them
//! all back, so lost updates or torn reads show up as mismatches.

use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::WorkloadConfig;
use crate::data_structures::LanaiTrie;
use crate::error::{LanaiError, LanaiResult};

/// Outcome of one workload run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkloadReport {
    /// Worker threads used
    pub threads: usize,

    /// Insert calls made across all workers
    pub inserts: usize,

    /// Searches that returned the expected value
    pub verified: usize,

    /// Searches that returned a missing or wrong value
    pub mismatches: usize,

    /// `LanaiTrie::size` after the run (insert calls plus the root)
    pub trie_size: usize,

    /// Keys found by the depth-first traversal
    pub keys: usize,

    /// Values found by the breadth-first traversal
    pub values: usize,

    /// Wall time of the insert phase in milliseconds
    pub insert_ms: f64,

    /// Wall time of the search phase in milliseconds
    pub search_ms: f64,
}

/// Builds the key a worker inserts at `index`.
pub fn key_for(prefix: &str, worker: usize, index: usize) -> Vec<u8> {
    format!("{prefix}_{worker}_{index}").into_bytes()
}

/// Builds the deterministic value stored under [`key_for`]`(_, worker, index)`.
pub fn value_for(worker: usize, index: usize, len: usize) -> Vec<u8> {
    let seed = worker.wrapping_mul(31).wrapping_add(index);
    (0..len).map(|j| seed.wrapping_add(j) as u8).collect()
}

/// Per-worker search tallies.
#[derive(Debug, Default)]
struct SearchTally {
    verified: usize,
    mismatches: usize,
}

/// Runs the workload described by `config` against a fresh trie.
///
/// # Returns
///
/// * `Ok(WorkloadReport)` - Counters and timings for the run.
/// * `Err(LanaiError::Workload)` - A worker thread panicked.
pub fn run(config: &WorkloadConfig) -> LanaiResult<WorkloadReport> {
    let trie = Arc::new(LanaiTrie::new());
    run_on(&trie, config)
}

/// Runs the workload against an existing shared trie.
pub fn run_on(trie: &Arc<LanaiTrie>, config: &WorkloadConfig) -> LanaiResult<WorkloadReport> {
    info!(
        threads = config.threads,
        keys_per_thread = config.keys_per_thread,
        value_len = config.value_len,
        "starting workload"
    );

    let insert_elapsed = insert_phase(trie, config)?;
    debug!(elapsed_ms = millis(insert_elapsed), "insert phase complete");

    let (tally, search_elapsed) = if config.verify {
        let (tally, elapsed) = search_phase(trie, config)?;
        debug!(elapsed_ms = millis(elapsed), "search phase complete");
        (tally, elapsed)
    } else {
        (SearchTally::default(), Duration::ZERO)
    };

    if tally.mismatches > 0 {
        warn!(mismatches = tally.mismatches, "searches returned unexpected values");
    }

    Ok(WorkloadReport {
        threads: config.threads,
        inserts: config.threads * config.keys_per_thread,
        verified: tally.verified,
        mismatches: tally.mismatches,
        trie_size: trie.size(),
        keys: trie.get_all_keys().len(),
        values: trie.get_all_values().len(),
        insert_ms: millis(insert_elapsed),
        search_ms: millis(search_elapsed),
    })
}

fn insert_phase(trie: &Arc<LanaiTrie>, config: &WorkloadConfig) -> LanaiResult<Duration> {
    let barrier = Arc::new(Barrier::new(config.threads + 1));
    let mut handles = Vec::with_capacity(config.threads);

    for worker in 0..config.threads {
        let trie = Arc::clone(trie);
        let barrier = Arc::clone(&barrier);
        let config = config.clone();

        handles.push(thread::spawn(move || {
            barrier.wait();
            for index in 0..config.keys_per_thread {
                trie.insert(
                    key_for(&config.key_prefix, worker, index),
                    value_for(worker, index, config.value_len),
                );
            }
        }));
    }

    barrier.wait();
    let started = Instant::now();
    for (worker, handle) in handles.into_iter().enumerate() {
        handle
            .join()
            .map_err(|e| LanaiError::Workload(format!("insert worker {worker} panicked: {e:?}")))?;
    }
    Ok(started.elapsed())
}

fn search_phase(
    trie: &Arc<LanaiTrie>,
    config: &WorkloadConfig,
) -> LanaiResult<(SearchTally, Duration)> {
    let barrier = Arc::new(Barrier::new(config.threads + 1));
    let mut handles = Vec::with_capacity(config.threads);

    for worker in 0..config.threads {
        let trie = Arc::clone(trie);
        let barrier = Arc::clone(&barrier);
        let config = config.clone();

        handles.push(thread::spawn(move || {
            barrier.wait();
            let mut tally = SearchTally::default();
            for index in 0..config.keys_per_thread {
                let key = key_for(&config.key_prefix, worker, index);
                let expected = value_for(worker, index, config.value_len);
                if trie.search(&key).as_deref() == Some(expected.as_slice()) {
                    tally.verified += 1;
                } else {
                    tally.mismatches += 1;
                }
            }
            tally
        }));
    }

    barrier.wait();
    let started = Instant::now();
    let mut total = SearchTally::default();
    for (worker, handle) in handles.into_iter().enumerate() {
        let tally = handle
            .join()
            .map_err(|e| LanaiError::Workload(format!("search worker {worker} panicked: {e:?}")))?;
        total.verified += tally.verified;
        total.mismatches += tally.mismatches;
    }
    Ok((total, started.elapsed()))
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
