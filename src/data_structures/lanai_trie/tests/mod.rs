// Copyright (c) 2026 Lanai Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit, concurrency and property-based tests for the Lanai Trie.


use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use super::LanaiTrie;

fn sample_pairs() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("one", vec![1, 2]),
        ("two", vec![2, 3]),
        ("three", vec![3, 4]),
        ("four", vec![4, 5]),
        ("five", vec![5, 6]),
    ]
}

#[test]
fn test_new_trie() {
    let trie = LanaiTrie::new();

    assert_eq!(trie.size(), 1);
    assert_eq!(trie.search(b"x"), None);
    assert!(trie.get_all_keys().is_empty());
    assert!(trie.get_all_values().is_empty());
    assert!(trie.entries().is_empty());
}

#[test]
fn test_size_counts_insert_calls() {
    let trie = LanaiTrie::new();
    let mut expected = 1;

    for (key, value) in sample_pairs() {
        trie.insert(key, value);
        expected += 1;
        assert_eq!(trie.size(), expected);
    }

    // Overwrites are counted too
    trie.insert("one", vec![0]);
    trie.insert("one", vec![0]);
    assert_eq!(trie.size(), expected + 2);
}

#[test]
fn test_search() {
    let trie = LanaiTrie::new();
    for (key, value) in sample_pairs() {
        trie.insert(key, value);
    }

    for (key, value) in sample_pairs() {
        assert_eq!(trie.search(key), Some(value), "wrong value for key {key}");
        assert!(trie.contains(key));
    }

    assert_eq!(trie.search("invalid key"), None);
    assert!(!trie.contains("invalid key"));
}

#[test]
fn test_prefix_is_not_a_match() {
    let trie = LanaiTrie::new();
    trie.insert("one", vec![1, 2]);
    trie.insert("on", vec![9]);

    assert_eq!(trie.search("one"), Some(vec![1, 2]));
    assert_eq!(trie.search("on"), Some(vec![9]));
    assert_eq!(trie.search("o"), None);
    assert!(!trie.contains("o"));
    assert_eq!(trie.search("ones"), None);
    assert_eq!(trie.get_all_values().len(), 2);
}

#[test]
fn test_empty_key() {
    let trie = LanaiTrie::new();
    assert_eq!(trie.search(b""), None);

    trie.insert(b"", vec![7]);

    assert_eq!(trie.search(b""), Some(vec![7]));
    assert_eq!(trie.get_all_keys(), vec![Vec::<u8>::new()]);
    assert_eq!(trie.get_all_values(), vec![vec![7]]);
}

#[test]
fn test_empty_value_is_found() {
    let trie = LanaiTrie::new();
    trie.insert("k", Vec::new());

    assert_eq!(trie.search("k"), Some(Vec::new()));
    assert!(trie.contains("k"));
    assert_eq!(trie.get_all_keys(), vec![b"k".to_vec()]);
    assert_eq!(trie.get_all_values(), vec![Vec::<u8>::new()]);
}

#[test]
fn test_insert_none_clears_value() {
    let trie = LanaiTrie::new();
    trie.insert("key", vec![1]);
    trie.insert_optional("key", None);

    assert_eq!(trie.search("key"), None);
    assert!(trie.get_all_keys().is_empty());
    assert_eq!(trie.size(), 3);

    // The path survives, so a child can still hang off it
    trie.insert_optional("keys", Some(vec![2]));
    assert_eq!(trie.search("keys"), Some(vec![2]));
    assert_eq!(trie.search("key"), None);
}

#[test]
fn test_overwrite_keeps_latest_value() {
    let trie = LanaiTrie::new();
    trie.insert("dup", vec![1]);
    trie.insert("dup", vec![2]);

    assert_eq!(trie.search("dup"), Some(vec![2]));
    assert_eq!(trie.get_all_values(), vec![vec![2]]);
    assert_eq!(trie.get_all_keys().len(), 1);
    assert_eq!(trie.size(), 3);
}

#[test]
fn test_get_all_keys() {
    let trie = LanaiTrie::new();
    for (key, value) in sample_pairs() {
        trie.insert(key, value);
    }

    let keys = trie.get_all_keys();
    assert_eq!(keys.len(), 5);

    let keys: HashSet<Vec<u8>> = keys.into_iter().collect();
    let expected: HashSet<Vec<u8>> = sample_pairs()
        .into_iter()
        .map(|(k, _)| k.as_bytes().to_vec())
        .collect();
    assert_eq!(keys, expected);
}

#[test]
fn test_get_all_values() {
    let trie = LanaiTrie::new();
    for (key, value) in sample_pairs() {
        trie.insert(key, value);
    }

    let mut values = trie.get_all_values();
    values.sort();

    let mut expected: Vec<Vec<u8>> = sample_pairs().into_iter().map(|(_, v)| v).collect();
    expected.sort();
    assert_eq!(values, expected);
}

#[test]
fn test_values_are_breadth_first() {
    let trie = LanaiTrie::new();
    trie.insert("abcd", vec![4]);
    trie.insert("a", vec![1]);
    trie.insert("xyz", vec![3]);
    trie.insert("xy", vec![2]);

    assert_eq!(trie.get_all_values(), vec![vec![1], vec![2], vec![3], vec![4]]);
}

#[test]
fn test_binary_keys() {
    let trie = LanaiTrie::new();
    let full_range: Vec<u8> = (0..=255).collect();
    trie.insert(&full_range, b"all".to_vec());
    trie.insert([0u8, 0, 0], b"zeros".to_vec());

    assert_eq!(trie.search(&full_range), Some(b"all".to_vec()));
    assert_eq!(trie.search([0u8, 0, 0]), Some(b"zeros".to_vec()));
    assert_eq!(trie.search([0u8, 0]), None);
}

#[test]
fn test_entries_and_from_iterator() {
    let trie: LanaiTrie = sample_pairs().into_iter().collect();
    assert_eq!(trie.size(), 6);

    let mut entries = trie.entries();
    entries.sort();

    let mut expected: Vec<(Vec<u8>, Vec<u8>)> = sample_pairs()
        .into_iter()
        .map(|(k, v)| (k.as_bytes().to_vec(), v))
        .collect();
    expected.sort();
    assert_eq!(entries, expected);
}

#[test]
fn test_very_long_key() {
    let trie = LanaiTrie::new();
    let key = vec![b'k'; 100_000];
    trie.insert(&key, vec![1]);

    assert_eq!(trie.search(&key), Some(vec![1]));
    assert_eq!(trie.get_all_keys(), vec![key.clone()]);
    assert_eq!(trie.get_all_values(), vec![vec![1]]);

    drop(trie);
}

/// Disjoint concurrent inserts followed by concurrent searches must see
/// every value, with nothing lost or torn.
#[test]
fn test_trie_concurrency() {
    const THREAD_COUNT: usize = 8;
    const OPS_PER_THREAD: usize = 200;

    let trie = Arc::new(LanaiTrie::new());
    let start_barrier = Arc::new(Barrier::new(THREAD_COUNT));

    let mut handles = Vec::with_capacity(THREAD_COUNT);
    for thread_id in 0..THREAD_COUNT {
        let trie = Arc::clone(&trie);
        let barrier = Arc::clone(&start_barrier);

        handles.push(thread::spawn(move || {
            barrier.wait();
            for j in 0..OPS_PER_THREAD {
                let key = format!("key_{thread_id}_{j}");
                let value = format!("value_{thread_id}_{j}");
                trie.insert(key, value);
            }
        }));
    }
    for handle in handles {
        handle.join().expect("insert thread panicked");
    }

    assert_eq!(trie.size(), 1 + THREAD_COUNT * OPS_PER_THREAD);
    assert_eq!(trie.get_all_keys().len(), THREAD_COUNT * OPS_PER_THREAD);

    let mut handles = Vec::with_capacity(THREAD_COUNT);
    for thread_id in 0..THREAD_COUNT {
        let trie = Arc::clone(&trie);
        let barrier = Arc::clone(&start_barrier);

        handles.push(thread::spawn(move || -> Result<(), String> {
            barrier.wait();
            for j in 0..OPS_PER_THREAD {
                let key = format!("key_{thread_id}_{j}");
                let expected = format!("value_{thread_id}_{j}").into_bytes();
                match trie.search(&key) {
                    Some(value) if value == expected => {}
                    other => return Err(format!("key {key}: got {other:?}")),
                }
            }
            Ok(())
        }));
    }
    for (i, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => panic!("Thread {i} reported error: {e}"),
            Err(e) => panic!("Thread {i} panicked: {e:?}"),
        }
    }
}

/// Traversals running alongside writers only ever see whole entries.
#[test]
fn test_traversal_during_inserts() {
    const WRITERS: usize = 4;
    const KEYS: usize = 300;

    let trie = Arc::new(LanaiTrie::new());

    let writers: Vec<_> = (0..WRITERS)
        .map(|w| {
            let trie = Arc::clone(&trie);
            thread::spawn(move || {
                for i in 0..KEYS {
                    trie.insert(format!("w{w}/{i}"), format!("v{w}/{i}"));
                }
            })
        })
        .collect();

    let reader = {
        let trie = Arc::clone(&trie);
        thread::spawn(move || {
            for _ in 0..50 {
                for (key, value) in trie.entries() {
                    let key = String::from_utf8(key).expect("keys are utf-8");
                    let value = String::from_utf8(value).expect("values are utf-8");
                    assert_eq!(value, key.replacen('w', "v", 1));
                }
                let keys = trie.get_all_keys().len();
                assert!(keys <= WRITERS * KEYS);
            }
        })
    };

    for writer in writers {
        writer.join().expect("writer panicked");
    }
    reader.join().expect("reader panicked");

    assert_eq!(trie.get_all_values().len(), WRITERS * KEYS);
}
