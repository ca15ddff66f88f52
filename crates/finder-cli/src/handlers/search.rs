//! One-shot search handler.
//!
//! Unlike the interactive form, this path is a direct API consumer: a
//! transport failure is reported through the error path instead of being
//! collapsed into an empty result list.

use anyhow::Result;

use finder_client::{DefaultFilterClient, FilterClientConfig};
use finder_core::{
    DiskType, FilterState, LOCATIONS, RAM_OPTIONS, is_location, is_ram_option, storage_mark_index,
};

use crate::error::CliError;
use crate::presentation;

/// Arguments of the `search` subcommand.
pub struct SearchArgs {
    pub ram: Vec<String>,
    pub hdd: Option<String>,
    pub location: Option<String>,
    pub storage_min: Option<String>,
    pub storage_max: Option<String>,
}

/// Execute the search command.
pub async fn execute(config: &FilterClientConfig, args: &SearchArgs) -> Result<()> {
    let filter = build_filter(args)?;
    let payload = filter.to_payload();

    let client = DefaultFilterClient::new(config);
    let records = client
        .filter_servers(&payload)
        .await
        .map_err(CliError::from)?;

    println!("{}", presentation::render_results(false, &records));
    Ok(())
}

/// Validate the raw arguments against the option catalog.
fn build_filter(args: &SearchArgs) -> Result<FilterState, CliError> {
    let mut filter = FilterState::default();

    for value in &args.ram {
        if !is_ram_option(value) {
            return Err(CliError::Arguments(format!(
                "unknown RAM size '{value}' (options: {})",
                RAM_OPTIONS.join(", ")
            )));
        }
        filter.toggle_ram(value);
    }

    if let Some(ref hdd) = args.hdd {
        let disk: DiskType = hdd
            .parse()
            .map_err(|err: finder_core::UnknownDiskType| CliError::Arguments(err.to_string()))?;
        filter.hdd = Some(disk);
    }

    if let Some(ref location) = args.location {
        if !is_location(location) {
            return Err(CliError::Arguments(format!(
                "unknown location '{location}' (options: {})",
                LOCATIONS.join(", ")
            )));
        }
        filter.location = Some(location.clone());
    }

    if let Some(ref mark) = args.storage_min {
        let index = storage_mark_index(mark)
            .ok_or_else(|| CliError::Arguments(format!("unknown storage mark '{mark}'")))?;
        filter.storage.set_lo(index);
    }

    if let Some(ref mark) = args.storage_max {
        let index = storage_mark_index(mark)
            .ok_or_else(|| CliError::Arguments(format!("unknown storage mark '{mark}'")))?;
        filter.storage.set_hi(index);
    }

    Ok(filter)
}
