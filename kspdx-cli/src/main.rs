//! kspdx -- command-line front end for SPDX 2.1 tag-value documents
//!
//! Loads `kspdx.toml` (defaults when absent), initializes logging on stderr,
//! dispatches the subcommand and maps failures to exit codes.

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;
use colored::Colorize;
use tracing::{debug, info};

use kspdx_core::config::{GeneralConfig, KspdxConfig};

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::output::OutputWriter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(err.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    // config validate reports load failures itself, so logging falls back to defaults here
    let loaded = KspdxConfig::load_or_default(&cli.config).await;

    let mut general = loaded
        .as_ref()
        .map(|c| c.general.clone())
        .unwrap_or_else(|_| GeneralConfig::default());
    if let Some(level) = &cli.log_level {
        general.log_level = level.clone();
    }
    logging::init_tracing(&general)?;

    debug!(config = %cli.config.display(), "kspdx starting");

    let writer = OutputWriter::new(cli.output);

    match cli.command {
        Commands::Render(args) => {
            commands::render::execute(args, &writer).await?;
        }
        Commands::CreationInfo(args) => {
            let config = loaded?;
            commands::creation_info::execute(args, &config.document, &writer).await?;
        }
        Commands::Config(args) => {
            commands::config::execute(args, &cli.config, &writer).await?;
        }
    }

    info!("done");
    Ok(())
}
