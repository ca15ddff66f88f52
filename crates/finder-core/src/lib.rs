//! Core domain types and port definitions for the server finder.
//!
//! This crate is adapter-free: it holds the fixed option catalog, the filter
//! form state with its reducer, the sparse wire payload, and the port trait
//! that HTTP (or test) adapters implement.

#![deny(unused_crate_dependencies)]

pub mod catalog;
pub mod filter;
pub mod form;
pub mod ports;
pub mod record;
pub mod session;

// Re-export commonly used types for convenience
pub use catalog::{
    DiskType, LOCATIONS, MAX_STORAGE_INDEX, RAM_OPTIONS, STORAGE_GB, STORAGE_MARKS,
    UnknownDiskType, is_location, is_ram_option, storage_mark_index,
};
pub use filter::{FilterPayload, FilterState, StorageRange};
pub use form::{FormEvent, FormState};
pub use ports::{FilterApi, FilterApiError, FilterApiResult};
pub use record::{FieldValue, ServerRecord};
pub use session::FormSession;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
