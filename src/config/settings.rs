//! Application settings loaded from a TOML file.
//!
//! The transition tables are compiled in and are not configurable. Settings only
//! control what the command-line tool prints and how verbosely it logs.

use crate::{
    core::EntityKind,
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;

/// Environment variable holding the config file path
pub const CONFIG_PATH_VAR: &str = "LESSON_STATUS_CONFIG";

/// Config file used when [`CONFIG_PATH_VAR`] is not set
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Structure of the whole config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Default `tracing` filter directive; `RUST_LOG` takes precedence
    pub log_filter: String,
    /// Entity kinds whose tables are printed
    pub kinds: Vec<EntityKind>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            kinds: EntityKind::ALL.to_vec(),
        }
    }
}

/// Parses settings from TOML text.
///
/// # Errors
/// Returns [`Error::Config`] if the TOML is malformed or names an unknown kind.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config: {e}"),
    })
}

/// Loads settings from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A field has the wrong type or an unknown value
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    parse_config(&contents)
}

/// Loads settings from `$LESSON_STATUS_CONFIG`, or `./config.toml`.
///
/// A missing file is not an error: defaults are used. A file that exists but
/// does not parse is.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    if Path::new(&path).exists() {
        load_config(&path)
    } else {
        tracing::debug!("No config file at {path}, using defaults");
        Ok(AppConfig::default())
    }
}
