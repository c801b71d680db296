//! Configuration acquisition.
//!
//! Sources are tried in a fixed order:
//!
//! 1. the durable cache, committed immediately so the UI can render;
//! 2. the bundled default document, which may point at a live document;
//! 3. the live document (cache-busted), which on success replaces the
//!    cached copy;
//! 4. the bundled document itself when the live one is missing or unusable.
//!
//! Only a failure of step 2 with nothing cached ends in [`LoadState::Failed`].
//! Every commit is checked against the loader's [`Generation`], so a result
//! that arrives after a newer load, an edit or a teardown is dropped.

use async_trait::async_trait;
use contracts::domain::a001_catalog::validation::{parse_cached, parse_remote};
use contracts::domain::a001_catalog::{BootstrapDocument, Configuration};

use super::generation::{Generation, GenerationGuard};
use super::mutator::persist_config;
use crate::shared::storage::{load_with, KeyValueStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Cache,
    Bootstrap,
    Remote,
}

impl ConfigSource {
    pub fn label(&self) -> &'static str {
        match self {
            ConfigSource::Cache => "local cache",
            ConfigSource::Bootstrap => "bundled default",
            ConfigSource::Remote => "remote document",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready {
        config: Configuration,
        source: ConfigSource,
    },
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn config(&self) -> Option<&Configuration> {
        match self {
            LoadState::Ready { config, .. } => Some(config),
            _ => None,
        }
    }

    pub fn source(&self) -> Option<ConfigSource> {
        match self {
            LoadState::Ready { source, .. } => Some(*source),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Network side of the loader.
#[async_trait(?Send)]
pub trait ConfigFetcher {
    /// Body of the bundled default document.
    async fn fetch_bootstrap(&self) -> Result<String, String>;

    /// Body of the live document at `url`.
    async fn fetch_remote(&self, url: &str) -> Result<String, String>;
}

#[async_trait(?Send)]
impl<F: ConfigFetcher + ?Sized> ConfigFetcher for &F {
    async fn fetch_bootstrap(&self) -> Result<String, String> {
        (**self).fetch_bootstrap().await
    }

    async fn fetch_remote(&self, url: &str) -> Result<String, String> {
        (**self).fetch_remote(url).await
    }
}

pub trait Clock {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Appends a `t=<stamp>` query parameter so intermediate caches are bypassed.
pub fn cache_busted(url: &str, stamp: i64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}t={}", url, separator, stamp)
}

pub struct ConfigLoader<S, F, C = SystemClock> {
    store: S,
    fetcher: F,
    clock: C,
    cache_key: String,
    guard: GenerationGuard,
}

impl<S, F, C> ConfigLoader<S, F, C>
where
    S: KeyValueStore,
    F: ConfigFetcher,
    C: Clock,
{
    pub fn new(store: S, fetcher: F, clock: C, cache_key: impl Into<String>, guard: GenerationGuard) -> Self {
        Self {
            store,
            fetcher,
            clock,
            cache_key: cache_key.into(),
            guard,
        }
    }

    /// Cached document, if present and structurally valid. Corrupt entries are removed.
    pub fn read_cache(&self) -> Option<Configuration> {
        load_with(&self.store, &self.cache_key, parse_cached)
    }

    fn publish<K>(&self, generation: Generation, commit: &mut K, state: LoadState) -> bool
    where
        K: FnMut(LoadState),
    {
        if self.guard.is_current(generation) {
            commit(state);
            true
        } else {
            log::debug!("discarding stale configuration result");
            false
        }
    }

    /// Runs one acquisition, handing every state it reaches to `commit`.
    pub async fn run<K>(&self, mut commit: K)
    where
        K: FnMut(LoadState),
    {
        let generation = self.guard.begin();

        // 1. Cache
        let has_cache = match self.read_cache() {
            Some(config) => {
                log::info!("rendering cached configuration");
                self.publish(
                    generation,
                    &mut commit,
                    LoadState::Ready {
                        config,
                        source: ConfigSource::Cache,
                    },
                );
                true
            }
            None => false,
        };

        // 2. Bundled default
        let bootstrap = match self.fetcher.fetch_bootstrap().await.and_then(|body| {
            BootstrapDocument::from_json(&body).map_err(|e| e.to_string())
        }) {
            Ok(doc) => doc,
            Err(e) => {
                if has_cache {
                    log::warn!("bundled configuration unavailable, keeping cached copy: {}", e);
                } else {
                    log::error!("failed to load configuration: {}", e);
                    self.publish(generation, &mut commit, LoadState::Failed(e));
                }
                return;
            }
        };

        // 3. Live document
        if let Some(pointer) = bootstrap.remote_pointer().map(str::to_owned) {
            let url = cache_busted(&pointer, self.clock.now_millis());
            let remote = self
                .fetcher
                .fetch_remote(&url)
                .await
                .and_then(|body| parse_remote(&body).map_err(|e| e.to_string()));

            match remote {
                Ok(config) => {
                    if !self.guard.is_current(generation) {
                        log::debug!("discarding stale remote configuration");
                        return;
                    }
                    persist_config(&self.store, &self.cache_key, &config);
                    log::info!("using remote configuration from {}", pointer);
                    self.publish(
                        generation,
                        &mut commit,
                        LoadState::Ready {
                            config,
                            source: ConfigSource::Remote,
                        },
                    );
                    return;
                }
                Err(e) => {
                    log::warn!("remote configuration unavailable, using bundled copy: {}", e);
                }
            }
        }

        // 4. Fallback to the bundled document
        match bootstrap.into_configuration() {
            Ok(config) => {
                log::info!("using bundled configuration");
                self.publish(
                    generation,
                    &mut commit,
                    LoadState::Ready {
                        config,
                        source: ConfigSource::Bootstrap,
                    },
                );
            }
            Err(e) if has_cache => {
                log::warn!("bundled configuration is not usable, keeping cached copy: {}", e);
            }
            Err(e) => {
                log::error!("bundled configuration is not usable: {}", e);
                self.publish(generation, &mut commit, LoadState::Failed(e.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    const KEY: &str = "catalog.config";

    fn doc(site_name: &str, pointer: Option<&str>) -> String {
        let pointer = pointer
            .map(|p| format!(r#","remoteDocumentUrl":"{}""#, p))
            .unwrap_or_default();
        format!(
            r#"{{"siteName":"{}","siteLogo":"","developer":"d","admin":{{"username":"a","password":"b"}},"categories":[],"ads":[]{}}}"#,
            site_name, pointer
        )
    }

    struct FixedClock;

    impl Clock for FixedClock {
        fn now_millis(&self) -> i64 {
            42
        }
    }

    /// Scripted fetcher that records what was requested and what had been
    /// committed at the moment of the remote request.
    struct FakeFetcher {
        bootstrap: Result<String, String>,
        remote: Result<String, String>,
        commits: Rc<RefCell<Vec<LoadState>>>,
        seen_at_remote: RefCell<Option<Vec<LoadState>>>,
        remote_urls: RefCell<Vec<String>>,
        on_remote: Option<GenerationGuard>,
    }

    impl FakeFetcher {
        fn new(bootstrap: Result<String, String>, remote: Result<String, String>) -> Self {
            Self {
                bootstrap,
                remote,
                commits: Rc::default(),
                seen_at_remote: RefCell::new(None),
                remote_urls: RefCell::default(),
                on_remote: None,
            }
        }
    }

    #[async_trait(?Send)]
    impl ConfigFetcher for FakeFetcher {
        async fn fetch_bootstrap(&self) -> Result<String, String> {
            self.bootstrap.clone()
        }

        async fn fetch_remote(&self, url: &str) -> Result<String, String> {
            self.remote_urls.borrow_mut().push(url.to_string());
            *self.seen_at_remote.borrow_mut() = Some(self.commits.borrow().clone());
            if let Some(guard) = &self.on_remote {
                // A newer attempt (or an edit) starts while this request is in flight.
                guard.invalidate();
            }
            self.remote.clone()
        }
    }

    async fn run(store: &MemoryStore, fetcher: &FakeFetcher, guard: GenerationGuard) -> Vec<LoadState> {
        let loader = ConfigLoader::new(store, fetcher, FixedClock, KEY, guard);
        let commits = fetcher.commits.clone();
        loader.run(|state| commits.borrow_mut().push(state)).await;
        let result = fetcher.commits.borrow().clone();
        result
    }

    fn site(state: &LoadState) -> (&str, ConfigSource) {
        match state {
            LoadState::Ready { config, source } => (config.site_name.as_str(), *source),
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_cache_renders_first_then_bootstrap_when_remote_fails() {
        let store = MemoryStore::new();
        store.set(KEY, &doc("Cached", None)).unwrap();
        let fetcher = FakeFetcher::new(
            Ok(doc("Bundled", Some("https://remote/config.json"))),
            Err("HTTP error: 500".into()),
        );

        let commits = run(&store, &fetcher, GenerationGuard::new()).await;

        assert_eq!(commits.len(), 2);
        assert_eq!(site(&commits[0]), ("Cached", ConfigSource::Cache));
        assert_eq!(site(&commits[1]), ("Bundled", ConfigSource::Bootstrap));

        // Renderable before the remote attempt resolved.
        let seen = fetcher.seen_at_remote.borrow().clone().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(!seen[0].is_loading());

        // Bootstrap fallback does not overwrite the cached copy.
        assert!(store.get(KEY).unwrap().contains("Cached"));
    }

    #[tokio::test]
    async fn test_cache_renders_first_then_remote_upgrades_it() {
        let store = MemoryStore::new();
        store.set(KEY, &doc("Cached", None)).unwrap();
        let fetcher = FakeFetcher::new(
            Ok(doc("Bundled", Some("https://remote/config.json"))),
            Ok(doc("Live", None)),
        );

        let commits = run(&store, &fetcher, GenerationGuard::new()).await;

        assert_eq!(commits.len(), 2);
        assert_eq!(site(&commits[0]), ("Cached", ConfigSource::Cache));
        assert_eq!(site(&commits[1]), ("Live", ConfigSource::Remote));

        let seen = fetcher.seen_at_remote.borrow().clone().unwrap();
        assert_eq!(seen.len(), 1);

        let cached = parse_cached(&store.get(KEY).unwrap()).unwrap();
        assert_eq!(cached.site_name, "Live");
        assert_eq!(Some(&cached), commits[1].config());
    }

    #[tokio::test]
    async fn test_remote_wins_and_refreshes_cache() {
        let store = MemoryStore::new();
        let fetcher = FakeFetcher::new(
            Ok(doc("Bundled", Some("https://remote/config.json"))),
            Ok(doc("Live", None)),
        );

        let commits = run(&store, &fetcher, GenerationGuard::new()).await;

        assert_eq!(commits.len(), 1);
        assert_eq!(site(&commits[0]), ("Live", ConfigSource::Remote));
        let cached = parse_cached(&store.get(KEY).unwrap()).unwrap();
        assert_eq!(Some(&cached), commits[0].config());
    }

    #[tokio::test]
    async fn test_remote_request_is_cache_busted() {
        let store = MemoryStore::new();
        let fetcher = FakeFetcher::new(
            Ok(doc("Bundled", Some("https://remote/config.json?raw=1"))),
            Ok(doc("Live", None)),
        );
        run(&store, &fetcher, GenerationGuard::new()).await;
        assert_eq!(
            fetcher.remote_urls.borrow().as_slice(),
            ["https://remote/config.json?raw=1&t=42".to_string()]
        );
    }

    #[tokio::test]
    async fn test_invalid_remote_shape_falls_back() {
        let store = MemoryStore::new();
        let fetcher = FakeFetcher::new(
            Ok(doc("Bundled", Some("https://remote/config.json"))),
            Ok(r#"[{"siteName":"Live"}]"#.to_string()),
        );
        let commits = run(&store, &fetcher, GenerationGuard::new()).await;
        assert_eq!(site(commits.last().unwrap()), ("Bundled", ConfigSource::Bootstrap));
        assert_eq!(store.get(KEY), None);
    }

    #[tokio::test]
    async fn test_no_pointer_uses_bootstrap_without_remote_call() {
        let store = MemoryStore::new();
        let fetcher = FakeFetcher::new(Ok(doc("Bundled", None)), Ok(doc("Live", None)));
        let commits = run(&store, &fetcher, GenerationGuard::new()).await;
        assert_eq!(commits.len(), 1);
        assert_eq!(site(&commits[0]), ("Bundled", ConfigSource::Bootstrap));
        assert!(fetcher.remote_urls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_failure_without_cache_is_terminal() {
        let store = MemoryStore::new();
        let fetcher = FakeFetcher::new(Err("HTTP error: 404".into()), Ok(doc("Live", None)));
        let commits = run(&store, &fetcher, GenerationGuard::new()).await;
        assert_eq!(commits, vec![LoadState::Failed("HTTP error: 404".into())]);
        assert_eq!(commits[0].error(), Some("HTTP error: 404"));
    }

    #[tokio::test]
    async fn test_bootstrap_failure_with_cache_keeps_cache() {
        let store = MemoryStore::new();
        store.set(KEY, &doc("Cached", None)).unwrap();
        let fetcher = FakeFetcher::new(Err("offline".into()), Ok(doc("Live", None)));
        let commits = run(&store, &fetcher, GenerationGuard::new()).await;
        assert_eq!(commits.len(), 1);
        assert_eq!(site(&commits[0]), ("Cached", ConfigSource::Cache));
    }

    #[tokio::test]
    async fn test_corrupt_cache_is_discarded() {
        let store = MemoryStore::new();
        store.set(KEY, r#"{"admin":{"username":"a"}}"#).unwrap();
        let fetcher = FakeFetcher::new(Ok(doc("Bundled", None)), Err("unused".into()));
        let commits = run(&store, &fetcher, GenerationGuard::new()).await;
        assert_eq!(commits.len(), 1);
        assert_eq!(site(&commits[0]), ("Bundled", ConfigSource::Bootstrap));
        assert_eq!(store.get(KEY), None);
    }

    #[tokio::test]
    async fn test_unusable_bootstrap_without_cache_fails() {
        let store = MemoryStore::new();
        let fetcher = FakeFetcher::new(Ok(r#"{"developer":"d"}"#.into()), Err("unused".into()));
        let commits = run(&store, &fetcher, GenerationGuard::new()).await;
        assert_eq!(
            commits,
            vec![LoadState::Failed(
                "document is missing required field `siteName`".into()
            )]
        );
    }

    #[tokio::test]
    async fn test_stale_remote_result_is_dropped() {
        let store = MemoryStore::new();
        store.set(KEY, &doc("Cached", None)).unwrap();
        let guard = GenerationGuard::new();
        let mut fetcher = FakeFetcher::new(
            Ok(doc("Bundled", Some("https://remote/config.json"))),
            Ok(doc("Live", None)),
        );
        fetcher.on_remote = Some(guard.clone());

        let commits = run(&store, &fetcher, guard).await;

        assert_eq!(commits.len(), 1);
        assert_eq!(site(&commits[0]), ("Cached", ConfigSource::Cache));
        assert!(store.get(KEY).unwrap().contains("Cached"));
    }

    #[test]
    fn test_cache_busted_separator() {
        assert_eq!(cache_busted("https://a/b", 7), "https://a/b?t=7");
        assert_eq!(cache_busted("https://a/b?x=1", 7), "https://a/b?x=1&t=7");
    }
}
