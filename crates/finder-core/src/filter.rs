//! Filter state and the sparse wire payload.
//!
//! The payload contract is sparse: a key appears only when the corresponding
//! field differs from its default, so an untouched form serializes to `{}`.

use serde::{Deserialize, Serialize};

use crate::catalog::{DiskType, MAX_STORAGE_INDEX, STORAGE_MARKS};

// ─────────────────────────────────────────────────────────────────────────────
// Storage range
// ─────────────────────────────────────────────────────────────────────────────

/// A two-handle range over the storage mark table.
///
/// Both handles are independent; dragging one past the other yields
/// `lo > hi`, which is kept and encoded as-is. The backend has always
/// received inverted ranges in that shape, so swapping here would silently
/// change the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageRange {
    lo: usize,
    hi: usize,
}

impl Default for StorageRange {
    fn default() -> Self {
        Self::full()
    }
}

impl StorageRange {
    /// The full range, which is the form default and is omitted from the
    /// payload.
    pub const fn full() -> Self {
        Self {
            lo: 0,
            hi: MAX_STORAGE_INDEX,
        }
    }

    /// Build a range from explicit indices, clamped to the mark table.
    pub fn new(lo: usize, hi: usize) -> Self {
        Self {
            lo: lo.min(MAX_STORAGE_INDEX),
            hi: hi.min(MAX_STORAGE_INDEX),
        }
    }

    pub const fn lo(self) -> usize {
        self.lo
    }

    pub const fn hi(self) -> usize {
        self.hi
    }

    /// Replace the lower handle. Clamped to the table, not to `hi`.
    pub fn set_lo(&mut self, index: usize) {
        self.lo = index.min(MAX_STORAGE_INDEX);
    }

    /// Replace the upper handle. Clamped to the table, not to `lo`.
    pub fn set_hi(&mut self, index: usize) {
        self.hi = index.min(MAX_STORAGE_INDEX);
    }

    pub const fn lo_mark(self) -> &'static str {
        STORAGE_MARKS[self.lo]
    }

    pub const fn hi_mark(self) -> &'static str {
        STORAGE_MARKS[self.hi]
    }

    /// Whether this is the full default range.
    pub const fn is_full(self) -> bool {
        self.lo == 0 && self.hi == MAX_STORAGE_INDEX
    }

    /// The payload encoding, `None` for the full range.
    pub fn encode(self) -> Option<String> {
        if self.is_full() {
            None
        } else {
            Some(format!("{}-{}", self.lo_mark(), self.hi_mark()))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Filter state
// ─────────────────────────────────────────────────────────────────────────────

/// The user's current filter selections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Storage capacity range.
    pub storage: StorageRange,
    /// Selected RAM sizes, in selection order.
    pub ram: Vec<String>,
    /// Selected disk type, `None` when unset.
    pub hdd: Option<DiskType>,
    /// Selected datacenter code, `None` when unset.
    pub location: Option<String>,
}

impl FilterState {
    /// Toggle a RAM size: add it if absent, remove it if present.
    ///
    /// Selection order is preserved for serialization and display.
    pub fn toggle_ram(&mut self, value: &str) {
        if let Some(pos) = self.ram.iter().position(|r| r == value) {
            self.ram.remove(pos);
        } else {
            self.ram.push(value.to_string());
        }
    }

    /// Build the sparse payload for this state.
    pub fn to_payload(&self) -> FilterPayload {
        FilterPayload {
            ram: if self.ram.is_empty() {
                None
            } else {
                Some(self.ram.join(","))
            },
            hdd: self.hdd.map(|d| d.as_str().to_string()),
            location: self.location.clone(),
            storage: self.storage.encode(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire payload
// ─────────────────────────────────────────────────────────────────────────────

/// The filter object POSTed to `/servers/filter`.
///
/// Every key is optional and omitted when unset; the all-default filter is
/// the empty object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
}

impl FilterPayload {
    /// Whether no filter field is set.
    pub const fn is_empty(&self) -> bool {
        self.ram.is_none() && self.hdd.is_none() && self.location.is_none() && self.storage.is_none()
    }
}
