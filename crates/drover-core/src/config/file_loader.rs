//! File-based configuration loading

use crate::config::model::Config;
use crate::error::{DroverError, DroverResult};
use std::fs;
use std::path::Path;

/// Load configuration from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// Returns default config if the file doesn't exist.
pub fn load_from_file(path: &Path) -> DroverResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        DroverError::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            DroverError::config(format!(
                "Failed to parse TOML config '{}': {}",
                path.display(),
                e
            ))
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            DroverError::config(format!(
                "Failed to parse YAML config '{}': {}",
                path.display(),
                e
            ))
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            DroverError::config(format!(
                "Failed to parse JSON config '{}': {}",
                path.display(),
                e
            ))
        })?,
    };

    Ok(config)
}
