//! Fixed option catalog for the filter form.
//!
//! These tables mirror the options the backend understands. They are
//! deliberately constant: the backend does not expose an endpoint for
//! discovering them, so the client ships with the known set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Storage marks
// ─────────────────────────────────────────────────────────────────────────────

/// Human-readable storage capacity labels, indexed 0-11.
///
/// The storage range filter is a pair of indices into this table. Index 0
/// (`"0"`) means "no minimum".
pub const STORAGE_MARKS: [&str; 12] = [
    "0", "250GB", "500GB", "1TB", "2TB", "3TB", "4TB", "8TB", "12TB", "24TB", "48TB", "72TB",
];

/// Capacities in GB parallel to [`STORAGE_MARKS`].
///
/// Used only for range-boundary detection, never sent over the wire.
pub const STORAGE_GB: [u32; 12] = [
    0, 250, 500, 1024, 2048, 3072, 4096, 8192, 12288, 24576, 49152, 73728,
];

/// Highest valid index into the storage mark table.
pub const MAX_STORAGE_INDEX: usize = STORAGE_MARKS.len() - 1;

/// Look up the index of a storage mark label.
pub fn storage_mark_index(label: &str) -> Option<usize> {
    STORAGE_MARKS.iter().position(|mark| *mark == label)
}

// ─────────────────────────────────────────────────────────────────────────────
// RAM options
// ─────────────────────────────────────────────────────────────────────────────

/// RAM sizes the filter form offers as checkboxes.
pub const RAM_OPTIONS: [&str; 10] = [
    "2GB", "4GB", "8GB", "12GB", "16GB", "24GB", "32GB", "48GB", "64GB", "96GB",
];

/// Whether `value` is one of the known RAM sizes.
pub fn is_ram_option(value: &str) -> bool {
    RAM_OPTIONS.contains(&value)
}

// ─────────────────────────────────────────────────────────────────────────────
// Disk types
// ─────────────────────────────────────────────────────────────────────────────

/// Hard disk technology of a leasable server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiskType {
    #[serde(rename = "SAS")]
    Sas,
    #[serde(rename = "SATA")]
    Sata,
    #[serde(rename = "SSD")]
    Ssd,
}

/// Error returned when a string is not a known disk type.
#[derive(Debug, Error)]
#[error("unknown disk type '{0}' (expected SAS, SATA or SSD)")]
pub struct UnknownDiskType(pub String);

impl DiskType {
    /// All disk types, in the order the form presents them.
    pub const ALL: [Self; 3] = [Self::Sas, Self::Sata, Self::Ssd];

    /// The wire representation of this disk type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sas => "SAS",
            Self::Sata => "SATA",
            Self::Ssd => "SSD",
        }
    }
}

impl fmt::Display for DiskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiskType {
    type Err = UnknownDiskType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SAS" => Ok(Self::Sas),
            "SATA" => Ok(Self::Sata),
            "SSD" => Ok(Self::Ssd),
            _ => Err(UnknownDiskType(s.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Locations
// ─────────────────────────────────────────────────────────────────────────────

/// Datacenter codes the filter form offers.
///
/// Each entry is the city name immediately followed by the facility code,
/// exactly as the backend stores them.
pub const LOCATIONS: [&str; 8] = [
    "AmsterdamAMS-01",
    "DallasDAL-10",
    "FrankfurtFRA-10",
    "Hong KongHKG-10",
    "LondonLON-01",
    "San FranciscoSFO-12",
    "SingaporeSIN-11",
    "Washington D.C.WDC-01",
];

/// Whether `code` is one of the known datacenter locations.
pub fn is_location(code: &str) -> bool {
    LOCATIONS.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_tables_are_parallel() {
        assert_eq!(STORAGE_MARKS.len(), STORAGE_GB.len());
        // GB values strictly increase, so mark order is capacity order
        assert!(STORAGE_GB.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_storage_mark_index() {
        assert_eq!(storage_mark_index("0"), Some(0));
        assert_eq!(storage_mark_index("1TB"), Some(3));
        assert_eq!(storage_mark_index("72TB"), Some(MAX_STORAGE_INDEX));
        assert_eq!(storage_mark_index("3PB"), None);
    }

    #[test]
    fn test_disk_type_round_trip() {
        for disk in DiskType::ALL {
            assert_eq!(disk.as_str().parse::<DiskType>().unwrap(), disk);
        }
    }

    #[test]
    fn test_disk_type_parse_is_case_insensitive() {
        assert_eq!("ssd".parse::<DiskType>().unwrap(), DiskType::Ssd);
        assert_eq!("Sata".parse::<DiskType>().unwrap(), DiskType::Sata);
        assert!("NVME".parse::<DiskType>().is_err());
    }

    #[test]
    fn test_disk_type_serializes_to_wire_form() {
        let json = serde_json::to_string(&DiskType::Sas).unwrap();
        assert_eq!(json, "\"SAS\"");
    }

    #[test]
    fn test_ram_and_location_membership() {
        assert!(is_ram_option("96GB"));
        assert!(!is_ram_option("128GB"));
        assert!(is_location("LondonLON-01"));
        assert!(!is_location("ParisPAR-01"));
    }
}
