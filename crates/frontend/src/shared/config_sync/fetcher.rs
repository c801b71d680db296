use async_trait::async_trait;
use gloo_net::http::Request;

use super::loader::ConfigFetcher;

/// Fetches configuration documents over HTTP from the browser.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    bootstrap_path: String,
}

impl HttpFetcher {
    pub fn new(bootstrap_path: impl Into<String>) -> Self {
        Self {
            bootstrap_path: bootstrap_path.into(),
        }
    }
}

async fn get_text(url: &str) -> Result<String, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

#[async_trait(?Send)]
impl ConfigFetcher for HttpFetcher {
    async fn fetch_bootstrap(&self) -> Result<String, String> {
        get_text(&self.bootstrap_path).await
    }

    async fn fetch_remote(&self, url: &str) -> Result<String, String> {
        get_text(url).await
    }
}
