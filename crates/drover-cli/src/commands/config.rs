//! Configuration utility commands

use crate::args::ConfigAction;
use crate::console::Console;
use drover_core::config::{Config, default_config_paths, load_config_with_overrides, load_from_file};
use drover_core::{DroverError, DroverResult};
use std::collections::HashMap;
use std::path::Path;

/// Route a `config` subcommand to its implementation
pub fn execute(action: ConfigAction, console: &Console) -> DroverResult<()> {
    match action {
        ConfigAction::Show { config_file } => show(config_file.as_deref()),
        ConfigAction::Validate { config_file } => validate(config_file.as_deref(), console),
        ConfigAction::Init { config_file, force } => init(&config_file, force, console),
    }
}

/// Print the fully resolved configuration (defaults, file, environment)
fn show(config_file: Option<&Path>) -> DroverResult<()> {
    let config = load_config_with_overrides(config_file, HashMap::new())?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn validate(config_file: Option<&Path>, console: &Console) -> DroverResult<()> {
    let path = match config_file {
        Some(path) => path.to_path_buf(),
        None => default_config_paths()
            .into_iter()
            .find(|p| p.exists())
            .ok_or_else(|| DroverError::config("No config file found to validate"))?,
    };
    if !path.exists() {
        return Err(DroverError::config(format!(
            "Config file '{}' does not exist",
            path.display()
        )));
    }

    let config = load_from_file(&path)?;
    config.validate()?;
    console.success(&format!("Configuration '{}' is valid", path.display()));
    Ok(())
}

fn init(path: &Path, force: bool, console: &Console) -> DroverResult<()> {
    if path.exists() && !force {
        return Err(DroverError::config(format!(
            "Config file '{}' already exists, pass --force to overwrite",
            path.display()
        )));
    }

    let config = Config::default();
    std::fs::write(path, serde_json::to_string_pretty(&config)?)?;
    console.success(&format!(
        "Wrote default configuration to '{}'",
        path.display()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("drover_config.json");
        let console = Console::new(false);

        init(&path, false, &console).unwrap();

        let config = load_from_file(&path).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("drover_config.json");
        let console = Console::new(false);

        init(&path, false, &console).unwrap();
        let err = init(&path, false, &console).unwrap_err();
        assert!(matches!(err, DroverError::Config(_)));

        // --force replaces the file
        init(&path, true, &console).unwrap();
    }

    #[test]
    fn test_validate_rejects_bad_level() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("drover_config.json");
        std::fs::write(&path, r#"{"logging": {"level": "shout"}}"#).unwrap();
        let console = Console::new(false);

        let err = validate(Some(path.as_path()), &console).unwrap_err();
        assert!(matches!(err, DroverError::Config(_)));
    }

    #[test]
    fn test_validate_missing_explicit_file() {
        let console = Console::new(false);
        let err = validate(Some(Path::new("/nonexistent/drover.json")), &console).unwrap_err();
        assert!(matches!(err, DroverError::Config(_)));
    }
}
