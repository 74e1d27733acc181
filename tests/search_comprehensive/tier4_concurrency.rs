//! Tier 4: Concurrency
//!
//! A SharedSearchIndex keeps its invariants while readers and writers run
//! in parallel.

use crate::test_utils::*;
use quickfind::{EntryType, SharedSearchIndex};
use std::sync::{Arc, Barrier};
use std::thread;

const WRITERS: usize = 4;
const READERS: usize = 4;
const OPS: usize = 200;

#[test]
fn test_tier4_parallel_writers_and_readers() {
    let shared = SharedSearchIndex::default();
    let barrier = Arc::new(Barrier::new(WRITERS + READERS));

    let mut handles = Vec::new();

    for w in 0..WRITERS {
        let shared = shared.clone();
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for i in 0..OPS {
                let id = format!("w{}-{}", w, i % 20);
                shared.upsert(entry(&id, EntryType::Order, &[id.as_str(), "commande"]));
                if i % 3 == 0 {
                    shared.remove(&id);
                }
            }
        }));
    }

    for _ in 0..READERS {
        let shared = shared.clone();
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for _ in 0..OPS {
                let results = shared.search("commande", 15, 5);
                assert!(results.len() <= 5);
                let stats = shared.stats();
                assert_eq!(
                    stats.total_entries,
                    stats.entries_by_type.values().sum::<usize>()
                );
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_consistent(&shared.read());
}

#[test]
fn test_tier4_clear_races_with_upserts() {
    let shared = SharedSearchIndex::default();

    let writer = {
        let shared = shared.clone();
        thread::spawn(move || {
            for i in 0..500 {
                let id = format!("p{}", i);
                shared.upsert(entry(&id, EntryType::Product, &["pompe", id.as_str()]));
            }
        })
    };
    let clearer = {
        let shared = shared.clone();
        thread::spawn(move || {
            for _ in 0..50 {
                shared.clear();
                thread::yield_now();
            }
        })
    };

    writer.join().unwrap();
    clearer.join().unwrap();

    assert_consistent(&shared.read());
}
