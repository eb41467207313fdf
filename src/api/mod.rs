//! API client for backend checks
//!
//! Thin pass-through over reqwest, configured from the `api` section of
//! the session [`Config`](crate::common::Config). Used by tests to verify
//! backend state around UI flows.

use std::time::Duration;

use crate::common::config::ApiConfig;
use crate::common::Result;

/// HTTP client bound to the configured API base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// GET an endpoint and parse the JSON body
    pub async fn get_json(&self, endpoint: &str) -> Result<serde_json::Value> {
        let url = self.url(endpoint);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// POST a JSON body to an endpoint and parse the JSON response
    pub async fn post_json(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        let url = self.url(endpoint);
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Whether an endpoint answers with a success status
    pub async fn health_check(&self, endpoint: &str) -> bool {
        let url = self.url(endpoint);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(%url, error = %e, "health check failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_endpoint_paths_without_double_slashes() {
        let config = ApiConfig {
            base_url: "http://localhost:8080/api/".to_string(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.url("/users"), "http://localhost:8080/api/users");
        assert_eq!(client.url("users"), "http://localhost:8080/api/users");
    }
}
