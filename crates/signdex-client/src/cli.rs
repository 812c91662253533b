//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// signdex - Sign language dictionary and events at a glance
#[derive(Debug, Parser)]
#[command(name = "signdex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "SIGNDEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Override the service base URL
    #[arg(long, env = "SIGNDEX_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Returns the output format based on CLI flags.
    pub fn output_format(&self) -> signdex_core::OutputFormat {
        if self.json {
            signdex_core::OutputFormat::Json
        } else {
            signdex_core::OutputFormat::Tty
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the service version
    Version,

    /// List or search dictionary signs
    Signs {
        /// Search term; lists every sign when omitted
        term: Option<String>,

        /// Resolve each sign's image URL against the service
        #[arg(long)]
        images: bool,
    },

    /// List event records
    Events,

    /// Download the service logo
    Logo {
        /// Destination file
        #[arg(long, short, default_value = "logo.png")]
        output: PathBuf,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
