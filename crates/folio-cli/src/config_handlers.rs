//! Handler functions for `folio config` commands.
//!
//! Also provides the TOML dotted-key helpers used by `config get`.

use std::path::PathBuf;

use crate::cli::ConfigAction;
use crate::config::{FolioConfig, PROJECT_NAME};
use crate::{Error, Result};

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force).map(|_| ()),
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    match FolioConfig::resolve_config_path(config_path) {
        Some(path) => {
            println!("{}", path.display());
            if !path.exists() {
                eprintln!("(file does not exist; run `{PROJECT_NAME} config init` to create it)");
            }
            Ok(())
        }
        None => Err(Error::config(
            "Could not determine config directory for this platform",
        )),
    }
}

/// Print a configuration value by dotted key.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    let config = FolioConfig::load(config_path)?;
    println!("{}", lookup(&config, key)?);
    Ok(())
}

/// Create a default configuration file and return its path.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = file
        .map(PathBuf::from)
        .or_else(FolioConfig::default_config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    FolioConfig::default().save(&path, force)?;
    println!("Config file created at {}", path.display());
    Ok(path)
}

/// Formatted value of `key` in `config`.
pub fn lookup(config: &FolioConfig, key: &str) -> Result<String> {
    let value = toml::Value::try_from(config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Follow a dotted key (`links.hosting_patterns`) through nested tables.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Render a config value the way `folio config get` prints it.
///
/// Strings print bare, lists as comma-separated items, sections as TOML.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Array(items) => items
            .iter()
            .map(format_toml_value)
            .collect::<Vec<_>>()
            .join(", "),
        toml::Value::Table(table) => {
            toml::to_string_pretty(table).unwrap_or_else(|_| format!("{table:?}"))
        }
        other => other.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
