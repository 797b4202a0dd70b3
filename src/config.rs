//! Configuration file support for sbom-flatten.
//!
//! Provides YAML-based configuration through `sbom-flatten.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-flatten.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub root_directory_path: Option<PathBuf>,
    pub output_file_path: Option<PathBuf>,
    pub format: Option<String>,
    pub fail_fast: Option<bool>,
    /// File extensions treated as SBOM documents (default: `json`)
    pub extensions: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref extensions) = config.extensions {
        if extensions.is_empty() {
            bail!(
                "Invalid config: extensions must list at least one file extension.\n\n\
                 💡 Hint: Remove the key to use the default (json)."
            );
        }
        for (i, ext) in extensions.iter().enumerate() {
            if ext.trim().trim_start_matches('.').is_empty() {
                bail!(
                    "Invalid config: extensions[{}] must not be empty.\n\n\
                     💡 Hint: Use a bare extension such as \"json\" or \"cdx\".",
                    i
                );
            }
        }
    }
    if let Some(ref format) = config.format {
        format
            .parse::<crate::application::dto::OutputFormat>()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
