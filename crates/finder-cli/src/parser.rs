//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the server finder.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "finder")]
#[command(about = "Filter and browse the catalog of leasable servers")]
#[command(version)]
pub struct Cli {
    /// Base URL of the filter backend for this invocation
    #[arg(long = "api-url", global = true, env = "FINDER_API_URL")]
    pub api_url: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "finder",
            "--verbose",
            "--api-url",
            "http://backend:9000",
            "options",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.api_url, Some("http://backend:9000".to_string()));
    }

    #[test]
    fn test_search_args() {
        let cli = Cli::parse_from([
            "finder",
            "search",
            "-r",
            "8GB",
            "-r",
            "16GB",
            "--hdd",
            "SSD",
            "--storage-min",
            "500GB",
        ]);
        let Some(Commands::Search { ram, hdd, storage_min, .. }) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(ram, vec!["8GB".to_string(), "16GB".to_string()]);
        assert_eq!(hdd.as_deref(), Some("SSD"));
        assert_eq!(storage_min.as_deref(), Some("500GB"));
    }
}
