//! Configuration data models

use crate::config::logging_config::LoggingConfig;
use crate::error::{DroverError, DroverResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Model used when no selection is supplied by flag, environment, or file
pub const DEFAULT_MODEL: &str = "openrouter/openai/o3-mini-high";

/// Engine program spawned when none is configured
pub const DEFAULT_ENGINE_COMMAND: &str = "aider";

/// External engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine executable to spawn
    #[serde(default = "default_engine_command")]
    pub command: String,
    /// Extra arguments appended to every engine invocation. Endpoint or
    /// credential flags for the engine belong here; drover never interprets
    /// them.
    #[serde(default)]
    pub extra_args: Vec<String>,
    /// Working directory for the engine process
    #[serde(default)]
    pub working_directory: Option<PathBuf>,
}

fn default_engine_command() -> String {
    DEFAULT_ENGINE_COMMAND.to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command: default_engine_command(),
            extra_args: Vec::new(),
            working_directory: None,
        }
    }
}

impl EngineConfig {
    /// An engine config with every field unset, used as a merge source
    pub fn empty() -> Self {
        Self {
            command: String::new(),
            extra_args: Vec::new(),
            working_directory: None,
        }
    }

    /// Merge with another engine config; set fields in `other` win
    pub fn merge(&mut self, other: EngineConfig) {
        if !other.command.is_empty() {
            self.command = other.command;
        }
        if !other.extra_args.is_empty() {
            self.extra_args = other.extra_args;
        }
        if other.working_directory.is_some() {
            self.working_directory = other.working_directory;
        }
    }
}

/// Top-level drover configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Model identifier handed to the engine, opaque to drover
    #[serde(default = "default_model")]
    pub model: String,
    /// External engine settings
    #[serde(default)]
    pub engine: EngineConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            engine: EngineConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// A config with every field unset, used as a merge source
    pub fn empty() -> Self {
        Self {
            model: String::new(),
            engine: EngineConfig::empty(),
            logging: LoggingConfig::empty(),
        }
    }

    /// Merge with another config; set fields in `other` win
    pub fn merge(&mut self, other: Config) {
        if !other.model.is_empty() {
            self.model = other.model;
        }
        self.engine.merge(other.engine);
        self.logging.merge(other.logging);
    }

    /// Validate the configuration
    pub fn validate(&self) -> DroverResult<()> {
        if self.model.is_empty() {
            return Err(DroverError::config("Model identifier cannot be empty"));
        }
        if self.engine.command.is_empty() {
            return Err(DroverError::config("Engine command cannot be empty"));
        }
        self.logging.validate()
    }
}
