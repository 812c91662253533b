//! signdex CLI entry point.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use signdex_api::DictionaryClient;
use signdex_client::cli::{Cli, Command, ConfigAction};
use signdex_client::config::ClientConfig;
use signdex_client::error::ClientResult;
use signdex_core::OutputFormatter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Run the command
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    // Load configuration
    let config = if let Some(ref path) = cli.config {
        ClientConfig::load_from(path).map_err(signdex_client::error::ClientError::Config)?
    } else {
        ClientConfig::load().unwrap_or_default()
    };

    // CLI flags override the configuration file
    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());
    let timeout = Duration::from_secs(cli.timeout.unwrap_or(config.api.timeout));
    let client = DictionaryClient::new(base_url, timeout);

    let format = cli.output_format();
    let formatter = OutputFormatter::new(config.format_options());

    match cli.command {
        Some(Command::Version) => signdex_client::commands::version::run(&client).await,
        Some(Command::Signs { term, images }) => {
            signdex_client::commands::signs::run(&client, term.as_deref(), images, format, &formatter)
                .await
        }
        Some(Command::Events) => {
            signdex_client::commands::events::run(&client, format, &formatter).await
        }
        Some(Command::Logo { output }) => {
            signdex_client::commands::logo::run(&client, &output).await
        }
        Some(Command::Config { action }) => match action {
            ConfigAction::Dump => signdex_client::commands::config::dump(&config),
            ConfigAction::Validate => signdex_client::commands::config::validate(&config),
            ConfigAction::Path => signdex_client::commands::config::path(),
        },
        None => {
            println!("signdex - sign language dictionary and events at a glance");
            println!();
            println!("Run 'signdex --help' for usage information.");
            println!();
            println!("Quick start:");
            println!("  1. Search the dictionary: signdex signs hello");
            println!("  2. See upcoming events:   signdex events");
            Ok(())
        }
    }
}
