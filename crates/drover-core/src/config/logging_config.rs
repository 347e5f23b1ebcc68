//! Logging configuration

use crate::error::{DroverError, DroverResult};
use serde::{Deserialize, Serialize};

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const FORMATS: &[&str] = &["pretty", "compact"];

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,
    /// Log format (pretty, compact)
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl LoggingConfig {
    /// A logging config with every field unset, used as a merge source
    pub fn empty() -> Self {
        Self {
            level: String::new(),
            format: String::new(),
        }
    }

    /// Merge with another logging config; set fields in `other` win
    pub fn merge(&mut self, other: LoggingConfig) {
        if !other.level.is_empty() {
            self.level = other.level;
        }
        if !other.format.is_empty() {
            self.format = other.format;
        }
    }

    /// Validate level and format names
    pub fn validate(&self) -> DroverResult<()> {
        if !LEVELS.contains(&self.level.as_str()) {
            return Err(DroverError::config(format!(
                "Unknown log level '{}', expected one of: {}",
                self.level,
                LEVELS.join(", ")
            )));
        }
        if !FORMATS.contains(&self.format.as_str()) {
            return Err(DroverError::config(format!(
                "Unknown log format '{}', expected one of: {}",
                self.format,
                FORMATS.join(", ")
            )));
        }
        Ok(())
    }
}
