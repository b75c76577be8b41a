//! Configuration file for the `frontmeta` command.
//!
//! The file is TOML. Every field has a default, so an empty or missing file
//! is valid:
//!
//! ```toml
//! [output]
//! format = "json"        # json | text
//! pretty = false
//! external_keys = false
//! include_full_text = true
//!
//! [logging]
//! level = "warn"
//! ```
//!
//! Lookup order: `--config` (or `FRONTMETA_CONFIG`), then
//! `<config dir>/frontmeta/config.toml` if it exists, then defaults.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name used for the per-user config directory.
pub const PROJECT_NAME: &str = "frontmeta";

/// File name of the config file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Log levels accepted in `logging.level`.
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// How scan results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON object per document (an array for several documents).
    #[default]
    Json,
    /// Indented `name: value` lines per document.
    Text,
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Pretty-print JSON.
    pub pretty: bool,
    /// Use indexer attribute keys (`kMDItemTitle`, ...) instead of names.
    pub external_keys: bool,
    /// Include the full document text.
    pub include_full_text: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: false,
            external_keys: false,
            include_full_text: true,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default log level when neither `RUST_LOG` nor `-v` is given.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// The whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// `<config dir>/frontmeta/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join(CONFIG_FILE))
    }

    /// The explicit path if given, otherwise the default path.
    pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(Self::default_config_path)
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist. The default path is optional: when it is
    /// absent the built-in defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_file(&path),
            _ => {
                log::debug!("No config file found; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read and parse a config file.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| frontmeta_core::Error::io_with_path(e, path))?;
        let config = Self::parse(&content)
            .map_err(|message| Error::config(format!("{}: {message}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content).map_err(Error::config)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> std::result::Result<(), String> {
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
