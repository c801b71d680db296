//! Remote publish: one authenticated partial update of the document file,
//! never retried. On success the cached copy is rewritten to match, unless
//! the document was edited while the request was in flight.

use async_trait::async_trait;
use contracts::domain::a001_catalog::Configuration;
use contracts::usecases::u001_publish_config::{
    AddressError, GistAddress, PublishRequest, StoreErrorBody,
};
use thiserror::Error;

use super::storage::load_credentials;
use crate::shared::app_settings::StorageKeys;
use crate::shared::config_sync::mutator::persist_config;
use crate::shared::config_sync::GenerationGuard;
use crate::shared::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    #[error("sync is not configured: set the remote document URL and access token")]
    NotConfigured,

    #[error("invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    #[error("failed to serialize configuration: {0}")]
    Serialize(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("publish rejected: {}", rejected_reason(.status, .message))]
    Rejected { status: u16, message: Option<String> },
}

fn rejected_reason(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("HTTP {}", status),
    }
}

/// Builds the failure for a non-2xx response, preferring the store's message.
pub fn rejection(status: u16, body: &str) -> PublishError {
    let message = serde_json::from_str::<StoreErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());
    PublishError::Rejected { status, message }
}

#[async_trait(?Send)]
pub trait DocumentStoreClient {
    async fn update_file(
        &self,
        endpoint: &str,
        access_token: &str,
        body: &PublishRequest,
    ) -> Result<(), PublishError>;
}

#[async_trait(?Send)]
impl<C: DocumentStoreClient + ?Sized> DocumentStoreClient for &C {
    async fn update_file(
        &self,
        endpoint: &str,
        access_token: &str,
        body: &PublishRequest,
    ) -> Result<(), PublishError> {
        (**self).update_file(endpoint, access_token, body).await
    }
}

pub struct Publisher<S, C> {
    store: S,
    client: C,
    api_base: String,
    keys: StorageKeys,
    guard: GenerationGuard,
}

impl<S, C> Publisher<S, C>
where
    S: KeyValueStore,
    C: DocumentStoreClient,
{
    /// `guard` is the configuration slot's guard; edits made during the
    /// request advance it and keep their cache entry.
    pub fn new(
        store: S,
        client: C,
        api_base: impl Into<String>,
        keys: StorageKeys,
        guard: GenerationGuard,
    ) -> Self {
        Self {
            store,
            client,
            api_base: api_base.into(),
            keys,
            guard,
        }
    }

    pub async fn publish(&self, config: &Configuration) -> Result<(), PublishError> {
        let credentials =
            load_credentials(&self.store, &self.keys).ok_or(PublishError::NotConfigured)?;
        let address = GistAddress::parse(&credentials.remote_document_url)?;
        let body = PublishRequest::replace_file(&address.file_name, config)
            .map_err(|e| PublishError::Serialize(e.to_string()))?;

        let endpoint = address.update_endpoint(&self.api_base);
        log::info!("publishing {} to gist {}", address.file_name, address.gist_id);
        let generation = self.guard.begin();
        self.client
            .update_file(&endpoint, &credentials.access_token, &body)
            .await
            .inspect_err(|e| log::error!("publish failed: {}", e))?;

        if self.guard.is_current(generation) {
            persist_config(&self.store, &self.keys.config, config);
        } else {
            log::info!("document edited during publish; cache keeps the newer copy");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::app_settings::AppSettings;
    use crate::shared::config_sync::mutator::apply_update;
    use crate::shared::storage::MemoryStore;
    use crate::system::sync::storage::save_credentials;
    use contracts::domain::a001_catalog::validation::parse_cached;
    use std::cell::RefCell;
    use std::rc::Rc;

    const RAW_URL: &str = "https://gist.githubusercontent.com/owner/abc123/raw/config.json";

    struct FakeClient {
        result: Result<(), PublishError>,
        calls: RefCell<Vec<(String, String, PublishRequest)>>,
        /// Runs while the request is in flight.
        during_call: Option<Box<dyn Fn()>>,
    }

    impl FakeClient {
        fn returning(result: Result<(), PublishError>) -> Self {
            Self {
                result,
                calls: RefCell::default(),
                during_call: None,
            }
        }
    }

    #[async_trait(?Send)]
    impl DocumentStoreClient for FakeClient {
        async fn update_file(
            &self,
            endpoint: &str,
            access_token: &str,
            body: &PublishRequest,
        ) -> Result<(), PublishError> {
            self.calls.borrow_mut().push((
                endpoint.to_string(),
                access_token.to_string(),
                body.clone(),
            ));
            if let Some(during_call) = &self.during_call {
                during_call();
            }
            self.result.clone()
        }
    }

    fn demo() -> Configuration {
        serde_json::from_str(
            r#"{"siteName":"Demo","admin":{"username":"a","password":"b"},
                "categories":[{"id":"c1","name":"Tools","programs":[]}],"ads":[]}"#,
        )
        .unwrap()
    }

    fn publisher<'a>(store: &'a MemoryStore, client: &'a FakeClient) -> Publisher<&'a MemoryStore, &'a FakeClient> {
        Publisher::new(
            store,
            client,
            "https://api.github.com",
            AppSettings::default().storage,
            GenerationGuard::new(),
        )
    }

    #[tokio::test]
    async fn test_not_configured() {
        let store = MemoryStore::new();
        let client = FakeClient::returning(Ok(()));
        let err = publisher(&store, &client).publish(&demo()).await.unwrap_err();
        assert_eq!(err, PublishError::NotConfigured);
        assert!(client.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_address_makes_no_call() {
        let keys = AppSettings::default().storage;
        let store = MemoryStore::new();
        save_credentials(&store, &keys, "https://example.com/config.json", "token").unwrap();
        let client = FakeClient::returning(Ok(()));

        let err = publisher(&store, &client).publish(&demo()).await.unwrap_err();

        assert!(matches!(err, PublishError::InvalidAddress(_)));
        assert!(err.to_string().starts_with("invalid address"));
        assert!(client.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_success_sends_file_and_refreshes_cache() {
        let keys = AppSettings::default().storage;
        let store = MemoryStore::new();
        save_credentials(&store, &keys, RAW_URL, "secret").unwrap();
        let client = FakeClient::returning(Ok(()));
        let config = demo();

        publisher(&store, &client).publish(&config).await.unwrap();

        let calls = client.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (endpoint, token, body) = &calls[0];
        assert_eq!(endpoint, "https://api.github.com/gists/abc123");
        assert_eq!(token, "secret");
        assert_eq!(
            body.files["config.json"].content,
            config.to_pretty_json().unwrap()
        );
        let cached = parse_cached(&store.get(&keys.config).unwrap()).unwrap();
        assert_eq!(cached, config);
    }

    #[tokio::test]
    async fn test_edit_during_publish_keeps_newer_cache() {
        let keys = AppSettings::default().storage;
        let store = Rc::new(MemoryStore::new());
        save_credentials(&*store, &keys, RAW_URL, "secret").unwrap();
        let guard = GenerationGuard::new();
        let edited = Rc::new(RefCell::new(demo()));

        let mut client = FakeClient::returning(Ok(()));
        {
            let store = Rc::clone(&store);
            let guard = guard.clone();
            let edited = Rc::clone(&edited);
            let cache_key = keys.config.clone();
            client.during_call = Some(Box::new(move || {
                guard.invalidate();
                let mut config = edited.borrow_mut();
                apply_update(&*store, &cache_key, &mut config, |c| {
                    c.site_name = "Edited during publish".into();
                });
            }));
        }

        let publisher = Publisher::new(
            &*store,
            &client,
            "https://api.github.com",
            keys.clone(),
            guard,
        );
        publisher.publish(&demo()).await.unwrap();

        let cached = parse_cached(&store.get(&keys.config).unwrap()).unwrap();
        assert_eq!(cached.site_name, "Edited during publish");
        assert_eq!(cached, *edited.borrow());
    }

    #[tokio::test]
    async fn test_rejection_leaves_cache_untouched_and_is_not_retried() {
        let keys = AppSettings::default().storage;
        let store = MemoryStore::new();
        save_credentials(&store, &keys, RAW_URL, "secret").unwrap();
        let client = FakeClient::returning(Err(rejection(401, r#"{"message":"Bad credentials"}"#)));

        let err = publisher(&store, &client).publish(&demo()).await.unwrap_err();

        assert_eq!(err.to_string(), "publish rejected: Bad credentials");
        assert_eq!(client.calls.borrow().len(), 1);
        assert_eq!(store.get(&keys.config), None);
    }

    #[test]
    fn test_rejection_falls_back_to_status() {
        assert_eq!(
            rejection(500, "<html>oops</html>").to_string(),
            "publish rejected: HTTP 500"
        );
        assert_eq!(
            rejection(422, r#"{"message":""}"#),
            PublishError::Rejected {
                status: 422,
                message: None
            }
        );
    }
}
