//! Per-program download counters, stored apart from the configuration.

use std::collections::BTreeMap;

use super::storage::{load_json, save_json, KeyValueStore};

pub type DownloadCounts = BTreeMap<String, u64>;

pub fn load_counts<S: KeyValueStore>(store: &S, key: &str) -> DownloadCounts {
    load_json(store, key).unwrap_or_default()
}

pub fn count_for<S: KeyValueStore>(store: &S, key: &str, program_id: &str) -> u64 {
    load_counts(store, key).get(program_id).copied().unwrap_or(0)
}

/// Records one download and returns the new total for the program.
pub fn record_download<S: KeyValueStore>(store: &S, key: &str, program_id: &str) -> u64 {
    let mut counts = load_counts(store, key);
    let total = counts.entry(program_id.to_string()).or_insert(0);
    *total += 1;
    let total = *total;
    save_json(store, key, &counts);
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    const KEY: &str = "catalog.downloadCounts";

    #[test]
    fn test_counts_per_program() {
        let store = MemoryStore::new();
        assert_eq!(count_for(&store, KEY, "p1"), 0);
        assert_eq!(record_download(&store, KEY, "p1"), 1);
        assert_eq!(record_download(&store, KEY, "p1"), 2);
        assert_eq!(record_download(&store, KEY, "p2"), 1);
        assert_eq!(count_for(&store, KEY, "p1"), 2);
        assert_eq!(load_counts(&store, KEY).len(), 2);
    }

    #[test]
    fn test_corrupt_counts_start_over() {
        let store = MemoryStore::new();
        store.set(KEY, "[1,2,3]").unwrap();
        assert!(load_counts(&store, KEY).is_empty());
        assert_eq!(record_download(&store, KEY, "p1"), 1);
    }
}
