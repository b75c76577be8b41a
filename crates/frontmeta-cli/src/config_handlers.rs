//! Handler functions for `frontmeta config` subcommands.
//!
//! Handlers write to the given streams instead of stdout/stderr directly so
//! they can be exercised in tests.

use std::io::Write;
use std::path::Path;

use crate::cli::ConfigAction;
use crate::config::{CliConfig, PROJECT_NAME};
use crate::error::{Error, Result};

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
pub fn handle_config_command<W: Write, E: Write>(
    config_path: Option<&Path>,
    action: ConfigAction,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path, out, err),
        ConfigAction::Show => {
            let config = CliConfig::load(config_path)?;
            cmd_config_show(&config, out)
        }
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force, out),
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Print the resolved config file path.
pub fn cmd_config_path<W: Write, E: Write>(
    config_path: Option<&Path>,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    let path = CliConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;

    writeln!(out, "{}", path.display())?;
    if !path.exists() {
        writeln!(
            err,
            "(file does not exist; run `{PROJECT_NAME} config init` to create it)"
        )?;
    }
    Ok(())
}

/// Print the effective configuration as TOML.
pub fn cmd_config_show<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    write!(out, "{}", config.to_toml_string()?)?;
    Ok(())
}

/// Write a default configuration file.
pub fn cmd_config_init<W: Write>(file: Option<&Path>, force: bool, out: &mut W) -> Result<()> {
    let path = match file {
        Some(p) => p.to_path_buf(),
        None => CliConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    write_default_config(&path)?;
    writeln!(out, "Config file created at {}", path.display())?;
    Ok(())
}

fn write_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| frontmeta_core::Error::io_with_path(e, parent))?;
    }

    let toml_str = CliConfig::default().to_toml_string()?;
    std::fs::write(path, toml_str).map_err(|e| frontmeta_core::Error::io_with_path(e, path))?;
    log::debug!("Wrote default config to {}", path.display());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
