//! Port definitions for the filter backend.
//!
//! The core owns the trait and its error type; adapters (HTTP client, test
//! fakes) implement it and map their internal errors at the boundary.

use async_trait::async_trait;
use thiserror::Error;

use crate::filter::FilterPayload;
use crate::record::ServerRecord;

/// Result type alias for filter API operations.
pub type FilterApiResult<T> = Result<T, FilterApiError>;

/// Errors a filter API adapter can surface.
#[derive(Debug, Error)]
pub enum FilterApiError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("filter request failed with status {status}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
    },

    /// The endpoint was unreachable or the connection failed.
    #[error("network error: {message}")]
    Network {
        /// Description of the transport failure
        message: String,
    },

    /// The endpoint answered with a body that is not JSON.
    #[error("invalid response from filter endpoint: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The adapter was misconfigured (bad base URL and the like).
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem
        message: String,
    },
}

/// Port for submitting a filter and receiving matching server records.
///
/// Object-safe so sessions can hold `Arc<dyn FilterApi>`.
#[async_trait]
pub trait FilterApi: Send + Sync {
    /// POST the payload to the filter endpoint and return the matching
    /// records in backend order.
    async fn filter_servers(&self, payload: &FilterPayload) -> FilterApiResult<Vec<ServerRecord>>;
}
