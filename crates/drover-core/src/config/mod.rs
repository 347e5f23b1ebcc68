//! Configuration loading and management
//!
//! Configuration merges from four sources, later ones winning: built-in
//! defaults, a config file (JSON, TOML, or YAML), `DROVER_*` environment
//! variables, and command line overrides. The model selector therefore
//! resolves as flag > environment > file > default.

mod env_loader;
mod file_loader;
mod loader;
mod logging_config;
mod model;

pub use env_loader::{ENGINE_ENV, LOG_ENV, MODEL_ENV, WORKING_DIR_ENV, load_from_env};
pub use file_loader::load_from_file;
pub use loader::{
    ConfigLoader, ConfigSource, OVERRIDE_ENGINE, OVERRIDE_MODEL, OVERRIDE_WORKING_DIR,
    default_config_paths, load_config_with_overrides,
};
pub use logging_config::LoggingConfig;
pub use model::{Config, DEFAULT_ENGINE_COMMAND, DEFAULT_MODEL, EngineConfig};
