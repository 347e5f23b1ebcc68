//! Environment variable-based configuration loading

use crate::config::model::Config;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Model identifier override
pub const MODEL_ENV: &str = "DROVER_MODEL";
/// Engine executable override
pub const ENGINE_ENV: &str = "DROVER_ENGINE";
/// Engine working directory override
pub const WORKING_DIR_ENV: &str = "DROVER_WORKING_DIR";
/// Log level override
pub const LOG_ENV: &str = "DROVER_LOG";

const ALL_VARS: &[&str] = &[MODEL_ENV, ENGINE_ENV, WORKING_DIR_ENV, LOG_ENV];

/// Load configuration from `DROVER_*` environment variables
///
/// Unset variables leave the corresponding fields unset, so merging this
/// config never clobbers values from a file.
pub fn load_from_env() -> Config {
    let vars: HashMap<String, String> = ALL_VARS
        .iter()
        .filter_map(|key| env::var(key).ok().map(|value| (key.to_string(), value)))
        .collect();
    from_vars(&vars)
}

fn from_vars(vars: &HashMap<String, String>) -> Config {
    let mut config = Config::empty();

    if let Some(model) = vars.get(MODEL_ENV) {
        config.model = model.clone();
    }
    if let Some(command) = vars.get(ENGINE_ENV) {
        config.engine.command = command.clone();
    }
    if let Some(dir) = vars.get(WORKING_DIR_ENV) {
        config.engine.working_directory = Some(PathBuf::from(shellexpand::tilde(dir).into_owned()));
    }
    if let Some(level) = vars.get(LOG_ENV) {
        config.logging.level = level.clone();
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vars_sets_only_present_fields() {
        let mut vars = HashMap::new();
        vars.insert(MODEL_ENV.to_string(), "openrouter/openai/o3-mini".to_string());
        vars.insert(LOG_ENV.to_string(), "debug".to_string());

        let config = from_vars(&vars);
        assert_eq!(config.model, "openrouter/openai/o3-mini");
        assert_eq!(config.logging.level, "debug");
        // Untouched fields stay unset so merging preserves earlier sources
        assert!(config.engine.command.is_empty());
        assert!(config.engine.working_directory.is_none());
    }

    #[test]
    fn test_from_vars_expands_tilde_in_working_dir() {
        let mut vars = HashMap::new();
        vars.insert(WORKING_DIR_ENV.to_string(), "/tmp/project".to_string());

        let config = from_vars(&vars);
        assert_eq!(
            config.engine.working_directory,
            Some(PathBuf::from("/tmp/project"))
        );
    }

    #[test]
    fn test_empty_vars_yield_empty_config() {
        let config = from_vars(&HashMap::new());
        assert!(config.model.is_empty());
        assert!(config.logging.level.is_empty());
    }
}
