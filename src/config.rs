//! Configuration file support.
//!
//! Provides YAML-based configuration through `license-report.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::license_report::services::FilterMode;
use crate::shared::error::LicenseReportError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "license-report.config.yml";

/// Options accepted in `license-report.config.yml`.
///
/// Every field is optional; command-line flags take precedence and
/// built-in defaults fill whatever is left.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub markdown_path: Option<String>,
    pub html_path: Option<String>,
    pub marker: Option<String>,
    pub mode: Option<String>,
    pub manifest: Option<String>,
    pub profile: Option<String>,
    pub resolver: Option<String>,
    pub graph_output: Option<String>,
    /// Keys not listed above; reported and otherwise ignored
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured filter mode, if any
    pub fn filter_mode(&self) -> Result<Option<FilterMode>> {
        self.mode
            .as_deref()
            .map(|mode| {
                mode.parse::<FilterMode>().map_err(|message| {
                    anyhow::Error::from(LicenseReportError::Validation {
                        message: format!("Invalid config: {}", message),
                    })
                })
            })
            .transpose()
    }
}

/// Loads and validates the config at `path` (given with `--config`).
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check the `--config` path, or drop the flag to use ./license-report.config.yml",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: The config is YAML, e.g. `mode: strict`",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Looks for `license-report.config.yml` in `dir`; absence is not an error.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(marker) = &config.marker {
        if marker.trim().is_empty() {
            return Err(LicenseReportError::Validation {
                message: "Invalid config: marker must not be empty.\n\n\
                          💡 Hint: Use the literal line that surrounds the table, e.g. \"<!---EXT-LIBS-->\"."
                    .to_string(),
            }
            .into());
        }
    }

    config.filter_mode()?;
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored",
            key
        );
    }
}
