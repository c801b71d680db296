use async_trait::async_trait;
use contracts::usecases::u001_publish_config::PublishRequest;
use gloo_net::http::Request;

use super::publisher::{rejection, DocumentStoreClient, PublishError};

/// GitHub Gist REST client.
#[derive(Debug, Clone, Copy, Default)]
pub struct GistClient;

#[async_trait(?Send)]
impl DocumentStoreClient for GistClient {
    async fn update_file(
        &self,
        endpoint: &str,
        access_token: &str,
        body: &PublishRequest,
    ) -> Result<(), PublishError> {
        let response = Request::patch(endpoint)
            .header("Authorization", &format!("Bearer {}", access_token))
            .header("Accept", "application/vnd.github+json")
            .json(body)
            .map_err(|e| PublishError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| PublishError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(rejection(status, &text));
        }

        Ok(())
    }
}
