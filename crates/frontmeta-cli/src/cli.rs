//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::OutputFormat;

/// Extract title, keywords, dates and other metadata from Markdown frontmatter.
#[derive(Parser, Debug)]
#[command(name = "frontmeta", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "FRONTMETA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan documents and print their metadata
    Scan(ScanArgs),

    /// Inspect or create the configuration file
    Config {
        /// Config operation to run
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for `frontmeta scan`.
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Documents to scan; `-` or no files reads standard input
    pub files: Vec<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Key attributes by their indexer names (kMDItemTitle, ...)
    #[arg(long)]
    pub external_keys: bool,

    /// Leave the full document text out of the output
    #[arg(long)]
    pub no_full_text: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl ScanArgs {
    /// True when the documents come from standard input.
    pub fn reads_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// `frontmeta config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the config file path in use
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Write a default config file
    Init {
        /// Where to write it (defaults to the per-user config path)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
