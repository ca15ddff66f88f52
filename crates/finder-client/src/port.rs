//! Port trait implementation for [`FilterClient`].
//!
//! Maps internal API errors to the core-owned port error at the boundary.

use async_trait::async_trait;

use finder_core::{FilterApi, FilterApiError, FilterApiResult, FilterPayload, ServerRecord};

use crate::client::FilterClient;
use crate::error::ApiError;
use crate::http::HttpBackend;

/// Convert internal `ApiError` to core `FilterApiError`.
fn map_error(err: ApiError) -> FilterApiError {
    match err {
        ApiError::RequestFailed { status, .. } => FilterApiError::RequestFailed { status },
        ApiError::Network(e) => FilterApiError::Network {
            message: e.to_string(),
        },
        ApiError::InvalidUrl(e) => FilterApiError::Configuration {
            message: e.to_string(),
        },
        ApiError::JsonParse(e) => FilterApiError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

#[async_trait]
impl<B: HttpBackend> FilterApi for FilterClient<B> {
    async fn filter_servers(&self, payload: &FilterPayload) -> FilterApiResult<Vec<ServerRecord>> {
        FilterClient::filter_servers(self, payload)
            .await
            .map_err(map_error)
    }
}
