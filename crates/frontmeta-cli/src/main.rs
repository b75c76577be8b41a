//! frontmeta CLI
//!
//! Scans Markdown documents and prints the metadata found in their
//! frontmatter.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use frontmeta_cli::config_handlers::handle_config_command;
use frontmeta_cli::logging::init_logging;
use frontmeta_cli::scan_handler::cmd_scan;
use frontmeta_cli::{Cli, CliConfig, Command};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Scan(args) => {
            let config = CliConfig::load(config_path).context("Failed to load configuration")?;
            init_logging(cli.verbose, &config.logging.level);

            let stdout = std::io::stdout();
            let all_ok = cmd_scan(&args, &config, std::io::stdin().lock(), &mut stdout.lock())?;
            Ok(if all_ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Config { action } => {
            init_logging(cli.verbose, "warn");
            handle_config_command(
                config_path,
                action,
                &mut std::io::stdout().lock(),
                &mut std::io::stderr().lock(),
            )?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
