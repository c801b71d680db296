use contracts::domain::a001_catalog::Configuration;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::fetcher::HttpFetcher;
use super::generation::GenerationGuard;
use super::loader::{ConfigLoader, ConfigSource, LoadState, SystemClock};
use super::mutator::{apply_update, persist_config};
use crate::shared::app_settings::AppSettings;
use crate::shared::storage::LocalStorage;

/// The session's single configuration slot, shared through context.
#[derive(Clone, Copy)]
pub struct ConfigContext {
    pub state: RwSignal<LoadState>,
    guard: StoredValue<GenerationGuard>,
    cache_key: StoredValue<String>,
}

impl ConfigContext {
    fn new(cache_key: String) -> Self {
        Self {
            state: RwSignal::new(LoadState::Loading),
            guard: StoredValue::new(GenerationGuard::new()),
            cache_key: StoredValue::new(cache_key),
        }
    }

    /// Starts an acquisition in the background. Results from an earlier
    /// acquisition that is still in flight are dropped.
    pub fn reload(&self, bootstrap_path: String) {
        let state = self.state;
        let guard = self.guard.get_value();
        let cache_key = self.cache_key.get_value();

        spawn_local(async move {
            let loader = ConfigLoader::new(
                LocalStorage,
                HttpFetcher::new(bootstrap_path),
                SystemClock,
                cache_key,
                guard,
            );
            loader
                .run(move |next| {
                    // The owner may be gone by the time a fetch resolves.
                    let _ = state.try_set(next);
                })
                .await;
        });
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(LoadState::is_loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_owned))
    }

    pub fn source(&self) -> Option<ConfigSource> {
        self.state.with(LoadState::source)
    }

    /// Reactive read of the current document.
    pub fn with_config<R>(&self, f: impl FnOnce(&Configuration) -> R) -> Option<R> {
        self.state.with(|s| s.config().map(f))
    }

    pub fn snapshot(&self) -> Option<Configuration> {
        self.state.with_untracked(|s| s.config().cloned())
    }

    /// Applies an edit to the current document and mirrors it into the cache.
    /// Pending acquisitions can no longer overwrite the edited document.
    pub fn update(&self, edit: impl FnOnce(&mut Configuration)) -> bool {
        self.guard.with_value(GenerationGuard::invalidate);
        let cache_key = self.cache_key.get_value();
        let mut mirrored = false;
        self.state.update(|state| {
            if let LoadState::Ready { config, .. } = state {
                mirrored = apply_update(&LocalStorage, &cache_key, config, edit);
            }
        });
        mirrored
    }

    /// Replaces the whole document, e.g. after an import.
    pub fn replace(&self, config: Configuration) {
        self.guard.with_value(GenerationGuard::invalidate);
        let cache_key = self.cache_key.get_value();
        persist_config(&LocalStorage, &cache_key, &config);
        self.state.set(LoadState::Ready {
            config,
            source: ConfigSource::Cache,
        });
    }

    /// The guard shared by every writer of this slot.
    pub fn guard(&self) -> GenerationGuard {
        self.guard.get_value()
    }
}

/// Provides the configuration slot and starts loading it.
pub fn provide_config(settings: &AppSettings) -> ConfigContext {
    let ctx = ConfigContext::new(settings.storage.config.clone());
    provide_context(ctx);

    let guard = ctx.guard.get_value();
    on_cleanup(move || guard.invalidate());

    ctx.reload(settings.documents.bootstrap_path.clone());
    ctx
}

pub fn use_config() -> ConfigContext {
    use_context::<ConfigContext>().expect("ConfigContext not provided")
}
