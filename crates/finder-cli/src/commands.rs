//! Main commands enum.
//!
//! This module defines the available commands for the finder tool.

use clap::Subcommand;

/// Available commands for the server finder.
#[derive(Subcommand)]
pub enum Commands {
    /// Filter the catalog once and print the matching servers
    Search {
        /// RAM size to match; repeat for several (e.g. -r 8GB -r 16GB)
        #[arg(short = 'r', long = "ram")]
        ram: Vec<String>,
        /// Hard disk type (SAS, SATA or SSD)
        #[arg(long)]
        hdd: Option<String>,
        /// Datacenter code (see `finder options`)
        #[arg(short, long)]
        location: Option<String>,
        /// Lower storage mark, e.g. "500GB"
        #[arg(long = "storage-min")]
        storage_min: Option<String>,
        /// Upper storage mark, e.g. "8TB"
        #[arg(long = "storage-max")]
        storage_max: Option<String>,
    },

    /// Fill in the filter form interactively
    Form,

    /// List the filter options the form offers
    Options,
}
