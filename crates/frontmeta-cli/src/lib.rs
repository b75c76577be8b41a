//! # frontmeta-cli
//!
//! Command-line host for frontmeta.
//!
//! The `frontmeta` binary provides:
//! - `scan`: extract metadata from files or standard input and print it as
//!   JSON or text
//! - `config`: show, locate or create the configuration file
//!
//! The modules are public so the handlers can be driven from tests or from
//! other front ends with their own readers and writers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;
pub mod output;
pub mod scan_handler;

pub use cli::{Cli, Command, ConfigAction, ScanArgs};
pub use config::{CliConfig, OutputFormat};
pub use error::{Error, Result};
pub use output::{DocumentReport, OutputOptions};
