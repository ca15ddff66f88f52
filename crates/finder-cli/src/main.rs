//! CLI entry point - the composition root.
//!
//! The only place where the HTTP client is wired to the handlers.

use clap::Parser;

use finder_cli::{Cli, CliError, Commands, handlers};
use finder_client::FilterClientConfig;

#[tokio::main]
async fn main() {
    // Load environment variables before parsing: --api-url falls back to
    // FINDER_API_URL
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli).await {
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        eprintln!("Error: {err:#}");
        std::process::exit(code);
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = FilterClientConfig::new();
    if let Some(ref api_url) = cli.api_url {
        config = config.with_base_url(api_url);
    }

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Search {
            ram,
            hdd,
            location,
            storage_min,
            storage_max,
        } => {
            let args = handlers::search::SearchArgs {
                ram,
                hdd,
                location,
                storage_min,
                storage_max,
            };
            handlers::search::execute(&config, &args).await?;
        }
        Commands::Form => {
            handlers::form::execute(&config).await?;
        }
        Commands::Options => {
            handlers::options::execute();
        }
    }

    Ok(())
}
