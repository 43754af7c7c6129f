//! Folio CLI
//!
//! Renders portfolio project cards from a JSON catalogue.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use folio_cli::FolioConfig;
use folio_cli::cli::{Cli, Command};
use folio_cli::config_handlers::handle_config_command;
use folio_cli::render::{cmd_render, config_base_dir};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    folio_cli::logging::init(cli.verbose);

    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Render { source, output } => {
            let mut config = FolioConfig::load(config_path)?;
            // A source given on the command line is relative to the cwd.
            let base_dir = match source {
                Some(source) => {
                    config.source = source;
                    None
                }
                None => config_base_dir(config_path),
            };
            let output = output.or_else(|| config.output.as_ref().map(Into::into));

            let report = cmd_render(&config, base_dir.as_deref(), output.as_deref()).await?;
            if let Some(error) = &report.error {
                tracing::warn!("Page shows an error panel: {error}");
            }
        }
        Command::Config { action } => handle_config_command(config_path, action)?,
    }

    Ok(())
}
