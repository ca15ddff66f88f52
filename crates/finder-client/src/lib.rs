//! HTTP adapter for the server filter endpoint.
//!
//! Implements the core `FilterApi` port over `POST /servers/filter` with an
//! injectable HTTP backend for testing.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultFilterClient, FilterClient};

// Configuration
pub use config::FilterClientConfig;

// Errors
pub use error::{ApiError, ApiResult};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
