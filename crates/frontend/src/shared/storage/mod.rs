//! Durable key-value storage.
//!
//! The browser's `localStorage` sits behind [`KeyValueStore`] so the loader,
//! mutator and publisher can be exercised against [`MemoryStore`] in tests.
//! The JSON helpers never surface a failure to rendering code: a value that
//! does not parse is removed and reads as missing, a failed write is logged.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use web_sys::window;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,

    #[error("failed to write `{key}`: {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("failed to encode `{key}`: {reason}")]
    Encode { key: String, reason: String },
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

// ============================================================================
// Browser localStorage
// ============================================================================

/// `window.localStorage`, looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// Shared in-memory store. Clones see the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    max_value_len: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects writes whose value is longer than `max_value_len` bytes,
    /// the way a browser rejects writes over its quota.
    pub fn with_quota(max_value_len: usize) -> Self {
        Self {
            entries: Arc::default(),
            max_value_len: Some(max_value_len),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.max_value_len.is_some_and(|max| value.len() > max) {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

// ============================================================================
// JSON helpers
// ============================================================================

/// Reads and decodes `key` with `parse`. An entry that fails to decode is
/// removed and reported as missing.
pub fn load_with<S, T, E, F>(store: &S, key: &str, parse: F) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    E: std::fmt::Display,
    F: FnOnce(&str) -> Result<T, E>,
{
    let raw = store.get(key)?;
    match parse(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("discarding unreadable stored value `{}`: {}", key, e);
            store.remove(key);
            None
        }
    }
}

pub fn load_json<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    load_with(store, key, |raw: &str| serde_json::from_str::<T>(raw))
}

/// Encodes `value` with `encode` and writes it. Failures are logged and
/// leave the previous entry in place.
pub fn save_with<S, T, E, F>(store: &S, key: &str, value: &T, encode: F) -> bool
where
    S: KeyValueStore + ?Sized,
    T: ?Sized,
    E: std::fmt::Display,
    F: FnOnce(&T) -> Result<String, E>,
{
    let result = encode(value)
        .map_err(|e| StorageError::Encode {
            key: key.to_string(),
            reason: e.to_string(),
        })
        .and_then(|text| store.set(key, &text));

    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{}", e);
            false
        }
    }
}

pub fn save_json<S, T>(store: &S, key: &str, value: &T) -> bool
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    save_with(store, key, value, |v: &T| serde_json::to_string(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_memory_store_basics() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("1"));
        let shared = store.clone();
        shared.remove("a");
        assert_eq!(store.get("a"), None);
    }

    #[test]
    fn test_corrupt_json_is_cleared() {
        let store = MemoryStore::new();
        store.set("counts", "{not json").unwrap();
        let loaded: Option<BTreeMap<String, u32>> = load_json(&store, "counts");
        assert_eq!(loaded, None);
        assert_eq!(store.get("counts"), None);
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let store = MemoryStore::with_quota(8);
        assert!(save_json(&store, "k", &"short"));
        assert!(!save_json(&store, "k", &"much too long for the quota"));
        assert_eq!(store.get("k").as_deref(), Some("\"short\""));
    }

    #[test]
    fn test_json_round_trip() {
        let store = MemoryStore::new();
        let mut map = BTreeMap::new();
        map.insert("p1".to_string(), 3u32);
        assert!(save_json(&store, "counts", &map));
        assert_eq!(load_json::<_, BTreeMap<String, u32>>(&store, "counts"), Some(map));
    }
}
