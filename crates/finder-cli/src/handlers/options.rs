//! Options handler: print the fixed filter catalog.

use finder_core::{DiskType, LOCATIONS, RAM_OPTIONS, STORAGE_GB, STORAGE_MARKS};

/// Execute the options command.
pub fn execute() {
    println!("Storage marks:");
    for (index, (mark, gb)) in STORAGE_MARKS.iter().zip(STORAGE_GB).enumerate() {
        println!("  [{index:2}] {mark:>6}  ({gb} GB)");
    }

    println!();
    println!("RAM sizes: {}", RAM_OPTIONS.join(", "));

    println!();
    let disks: Vec<&str> = DiskType::ALL.iter().map(|d| d.as_str()).collect();
    println!("Disk types: {}", disks.join(", "));

    println!();
    println!("Locations:");
    for location in LOCATIONS {
        println!("  {location}");
    }
}
