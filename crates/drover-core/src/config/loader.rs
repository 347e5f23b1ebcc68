//! Configuration loading and merging

use crate::config::env_loader::load_from_env;
use crate::config::file_loader::load_from_file;
use crate::config::model::Config;
use crate::error::DroverResult;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Override key for the model identifier
pub const OVERRIDE_MODEL: &str = "model";
/// Override key for the engine executable
pub const OVERRIDE_ENGINE: &str = "engine";
/// Override key for the engine working directory
pub const OVERRIDE_WORKING_DIR: &str = "working_dir";

/// Source of configuration data
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Configuration from a file
    File(PathBuf),
    /// Configuration from `DROVER_*` environment variables
    Environment,
    /// Configuration from command line overrides
    Overrides(HashMap<String, String>),
    /// Default configuration
    Default,
}

/// Configuration loader with support for multiple sources
///
/// Sources are merged in insertion order; later sources win. The CLI uses
/// Default → file → environment → flag overrides, which gives the model
/// selector its flag > env > file > default precedence.
pub struct ConfigLoader {
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    /// Create a new config loader with no sources
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a configuration source
    pub fn add_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Add a file source
    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(ConfigSource::File(path.as_ref().to_path_buf()))
    }

    /// Add the environment variable source
    pub fn with_env(self) -> Self {
        self.add_source(ConfigSource::Environment)
    }

    /// Add command line overrides
    pub fn with_overrides(self, overrides: HashMap<String, String>) -> Self {
        self.add_source(ConfigSource::Overrides(overrides))
    }

    /// Add the default configuration source
    pub fn with_defaults(self) -> Self {
        self.add_source(ConfigSource::Default)
    }

    /// Load and validate configuration from all sources
    pub fn load(self) -> DroverResult<Config> {
        let mut config = Config::default();

        for source in &self.sources {
            let source_config = self.load_from_source(source)?;
            config.merge(source_config);
        }

        config.validate()?;
        Ok(config)
    }

    fn load_from_source(&self, source: &ConfigSource) -> DroverResult<Config> {
        match source {
            ConfigSource::File(path) => {
                tracing::debug!("Loading config from file: {}", path.display());
                let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
                load_from_file(Path::new(&expanded))
            }
            ConfigSource::Environment => {
                tracing::debug!("Loading config from environment");
                Ok(load_from_env())
            }
            ConfigSource::Overrides(overrides) => {
                tracing::debug!("Loading config from command line overrides");
                Ok(Self::load_from_overrides(overrides))
            }
            ConfigSource::Default => Ok(Config::default()),
        }
    }

    fn load_from_overrides(overrides: &HashMap<String, String>) -> Config {
        let mut config = Config::empty();

        if let Some(model) = overrides.get(OVERRIDE_MODEL) {
            config.model = model.clone();
        }
        if let Some(command) = overrides.get(OVERRIDE_ENGINE) {
            config.engine.command = command.clone();
        }
        if let Some(dir) = overrides.get(OVERRIDE_WORKING_DIR) {
            config.engine.working_directory = Some(PathBuf::from(dir));
        }

        config
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Candidate config file locations, in search order
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("drover_config.json")];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("drover").join("config.json"));
    }
    paths
}

/// Load configuration the way the CLI does: defaults, then the config file
/// (an explicit path, or the first existing candidate), then environment
/// variables, then command line overrides.
pub fn load_config_with_overrides(
    config_file: Option<&Path>,
    overrides: HashMap<String, String>,
) -> DroverResult<Config> {
    let mut loader = ConfigLoader::new().with_defaults();

    match config_file {
        Some(path) => loader = loader.with_file(path),
        None => {
            if let Some(found) = default_config_paths().into_iter().find(|p| p.exists()) {
                loader = loader.with_file(found);
            }
        }
    }

    loader.with_env().with_overrides(overrides).load()
}
