use contracts::usecases::u001_publish_config::SyncCredentials;

use crate::shared::app_settings::StorageKeys;
use crate::shared::storage::{KeyValueStore, StorageError};

/// Stored remote document URL, as typed by the admin.
pub fn get_remote_document_url<S: KeyValueStore>(store: &S, keys: &StorageKeys) -> Option<String> {
    store.get(&keys.remote_document_url)
}

/// Stored access token.
pub fn get_access_token<S: KeyValueStore>(store: &S, keys: &StorageKeys) -> Option<String> {
    store.get(&keys.access_token)
}

/// Both credentials, when both are present and non-blank.
pub fn load_credentials<S: KeyValueStore>(store: &S, keys: &StorageKeys) -> Option<SyncCredentials> {
    SyncCredentials::from_parts(
        get_remote_document_url(store, keys),
        get_access_token(store, keys),
    )
}

/// Saves the credentials. A blank value removes its key.
pub fn save_credentials<S: KeyValueStore>(
    store: &S,
    keys: &StorageKeys,
    remote_document_url: &str,
    access_token: &str,
) -> Result<(), StorageError> {
    for (key, value) in [
        (&keys.remote_document_url, remote_document_url.trim()),
        (&keys.access_token, access_token.trim()),
    ] {
        if value.is_empty() {
            store.remove(key);
        } else {
            store.set(key, value)?;
        }
    }
    Ok(())
}

pub fn clear_credentials<S: KeyValueStore>(store: &S, keys: &StorageKeys) {
    store.remove(&keys.remote_document_url);
    store.remove(&keys.access_token);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::app_settings::AppSettings;
    use crate::shared::storage::MemoryStore;

    #[test]
    fn test_save_and_load_credentials() {
        let keys = AppSettings::default().storage;
        let store = MemoryStore::new();
        assert_eq!(load_credentials(&store, &keys), None);

        save_credentials(&store, &keys, " https://gist/raw/x ", "token").unwrap();
        let creds = load_credentials(&store, &keys).unwrap();
        assert_eq!(creds.remote_document_url, "https://gist/raw/x");
        assert_eq!(creds.access_token, "token");
        assert_eq!(store.get(&keys.config), None);
    }

    #[test]
    fn test_blank_value_removes_key() {
        let keys = AppSettings::default().storage;
        let store = MemoryStore::new();
        save_credentials(&store, &keys, "https://gist/raw/x", "token").unwrap();
        save_credentials(&store, &keys, "https://gist/raw/x", "  ").unwrap();
        assert_eq!(get_access_token(&store, &keys), None);
        assert_eq!(load_credentials(&store, &keys), None);

        clear_credentials(&store, &keys);
        assert!(store.is_empty());
    }
}
