//! Server record domain types.
//!
//! Records are consumed, never produced: the backend owns the catalog and
//! this client displays whatever it returns without validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A display value that may arrive as either a JSON string or a number.
///
/// The backend is not consistent about `id` and `price` (fixtures use
/// numbers, the catalog export uses strings), so both are accepted and
/// rendered verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One row of backend-returned data describing a leasable machine.
///
/// All fields are opaque display values; missing fields deserialize to
/// empty rather than failing the whole result list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerRecord {
    #[serde(default)]
    pub id: FieldValue,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub ram: String,
    #[serde(default)]
    pub hdd: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub price: FieldValue,
}
