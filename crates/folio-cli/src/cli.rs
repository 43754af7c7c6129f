//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Folio — render portfolio project cards from a JSON catalogue
#[derive(Parser, Debug)]
#[command(name = "folio", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "FOLIO_CONFIG")]
    pub config: Option<String>,

    /// Log at info level instead of warn
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the catalogue and write the container markup
    Render {
        /// Catalogue URL or file path
        #[arg(short, long, env = "FOLIO_SOURCE")]
        source: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect or create the configuration file
    Config {
        /// Config operation
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `folio config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print a value by dotted key (e.g. `container.id`)
    Get {
        /// Dotted key
        key: String,
    },

    /// Write a default configuration file
    Init {
        /// Target file (defaults to the user config directory)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
