//! HTTP backend abstraction for the filter endpoint.
//!
//! The backend trait allows dependency injection for testing. The production
//! implementation uses reqwest. There is deliberately no retry loop: a failed
//! submission collapses to an empty result list at the form layer, so
//! retrying would only delay that outcome.

use async_trait::async_trait;
use url::Url;

use crate::config::FilterClientConfig;
use crate::error::{ApiError, ApiResult};

/// Trait for HTTP backends that POST JSON and return the JSON reply.
///
/// This is an implementation detail - external code should use the
/// `FilterApi` port trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST `body` as `application/json` and parse the response body as JSON.
    async fn post_json(
        &self,
        url: &Url,
        body: &serde_json::Value,
    ) -> ApiResult<serde_json::Value>;
}

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &FilterClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json(
        &self,
        url: &Url,
        body: &serde_json::Value,
    ) -> ApiResult<serde_json::Value> {
        let response = self.client.post(url.as_str()).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        // Read the body as text first so a non-JSON reply maps to JsonParse
        // rather than a generic decode error.
        let text = response.text().await?;
        let value = serde_json::from_str(&text)?;
        Ok(value)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
