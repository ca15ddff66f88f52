//! The filter-endpoint client.

use tracing::debug;
use url::Url;

use finder_core::{FilterPayload, ServerRecord};

use crate::config::FilterClientConfig;
use crate::error::ApiResult;
use crate::http::{HttpBackend, ReqwestBackend};

/// Relative path of the filter endpoint on the backend.
pub(crate) const FILTER_PATH: &str = "/servers/filter";

/// Client for the server filter endpoint, generic over the HTTP backend.
pub struct FilterClient<B: HttpBackend> {
    config: FilterClientConfig,
    backend: B,
}

/// The production client type.
pub type DefaultFilterClient = FilterClient<ReqwestBackend>;

impl DefaultFilterClient {
    /// Create a client with the production reqwest backend.
    pub fn new(config: &FilterClientConfig) -> Self {
        let backend = ReqwestBackend::new(config);
        Self::with_backend(config.clone(), backend)
    }
}

impl<B: HttpBackend> FilterClient<B> {
    /// Create a client over an explicit backend (used by tests).
    pub(crate) fn with_backend(config: FilterClientConfig, backend: B) -> Self {
        Self { config, backend }
    }

    /// POST the filter payload and return the matching records.
    ///
    /// The expected reply is `{"data": [...]}`. A JSON reply of any other
    /// shape is tolerated by returning the empty list; non-JSON replies and
    /// HTTP errors are errors.
    pub async fn filter_servers(&self, payload: &FilterPayload) -> ApiResult<Vec<ServerRecord>> {
        let url = self.endpoint_url()?;
        let body = serde_json::to_value(payload)?;

        debug!(%url, "posting filter payload");
        let reply = self.backend.post_json(&url, &body).await?;

        Ok(extract_records(&reply))
    }

    fn endpoint_url(&self) -> ApiResult<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{FILTER_PATH}"))?)
    }
}

/// Pull the record array out of a reply, defaulting to empty.
///
/// Tolerates a missing or ill-typed `data` key and records that fail to
/// deserialize, per the backend contract.
fn extract_records(reply: &serde_json::Value) -> Vec<ServerRecord> {
    reply
        .get("data")
        .cloned()
        .and_then(|data| serde_json::from_value(data).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::http::testing::{CannedReply, FakeBackend};
    use serde_json::json;

    fn client_with(backend: FakeBackend) -> FilterClient<FakeBackend> {
        FilterClient::with_backend(FilterClientConfig::default(), backend)
    }

    #[tokio::test]
    async fn test_filter_servers_decodes_data_array() {
        let backend = FakeBackend::new().with_reply(
            FILTER_PATH,
            CannedReply::Json(json!({
                "data": [
                    {"id": 1, "model": "X", "ram": "8GB", "hdd": "SSD",
                     "location": "LON-01", "price": 50}
                ]
            })),
        );
        let client = client_with(backend);

        let records = client
            .filter_servers(&FilterPayload::default())
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].model, "X");
        assert_eq!(records[0].price.to_string(), "50");
    }

    #[tokio::test]
    async fn test_default_payload_posts_empty_object() {
        let backend = FakeBackend::new()
            .with_reply(FILTER_PATH, CannedReply::Json(json!({"data": []})));
        let client = client_with(backend);

        client
            .filter_servers(&FilterPayload::default())
            .await
            .unwrap();

        assert_eq!(client.backend.sent_bodies(), vec![json!({})]);
    }

    #[tokio::test]
    async fn test_missing_data_key_yields_empty_list() {
        let backend = FakeBackend::new().with_reply(
            FILTER_PATH,
            CannedReply::Json(json!({"message": "Filtered list of servers"})),
        );
        let client = client_with(backend);

        let records = client
            .filter_servers(&FilterPayload::default())
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_ill_typed_data_yields_empty_list() {
        let backend = FakeBackend::new()
            .with_reply(FILTER_PATH, CannedReply::Json(json!({"data": "nope"})));
        let client = client_with(backend);

        let records = client
            .filter_servers(&FilterPayload::default())
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_http_error_status_is_an_error() {
        let backend = FakeBackend::new().with_reply(FILTER_PATH, CannedReply::Status(500));
        let client = client_with(backend);

        let err = client
            .filter_servers(&FilterPayload::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::RequestFailed { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_non_json_reply_is_an_error() {
        let backend = FakeBackend::new().with_reply(
            FILTER_PATH,
            CannedReply::NotJson("<html>502 Bad Gateway</html>".to_string()),
        );
        let client = client_with(backend);

        let err = client
            .filter_servers(&FilterPayload::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::JsonParse(_)));
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_tolerated() {
        let config = FilterClientConfig::new().with_base_url("http://backend:9000/");
        let backend = FakeBackend::new().with_reply(
            "http://backend:9000/servers/filter",
            CannedReply::Json(json!({"data": []})),
        );
        let client = FilterClient::with_backend(config, backend);

        assert!(
            client
                .filter_servers(&FilterPayload::default())
                .await
                .is_ok()
        );
    }
}
