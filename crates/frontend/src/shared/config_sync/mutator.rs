use contracts::domain::a001_catalog::Configuration;

use crate::shared::storage::{save_with, KeyValueStore};

/// Writes the whole document under `key`. A failed write is logged and the
/// previous cache entry stays in place.
pub fn persist_config<S>(store: &S, key: &str, config: &Configuration) -> bool
where
    S: KeyValueStore + ?Sized,
{
    save_with(store, key, config, Configuration::to_pretty_json)
}

/// Applies `edit` to the in-memory document and mirrors the result into the
/// cache before returning. The edit is kept even when the cache write fails;
/// the return value tells whether cache and memory agree.
pub fn apply_update<S, F>(store: &S, key: &str, config: &mut Configuration, edit: F) -> bool
where
    S: KeyValueStore + ?Sized,
    F: FnOnce(&mut Configuration),
{
    edit(config);
    let mirrored = persist_config(store, key, config);
    if !mirrored {
        log::warn!("configuration edit applied in memory only; cached copy is stale");
    }
    mirrored
}
