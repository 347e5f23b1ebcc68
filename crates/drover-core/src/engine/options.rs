//! Engine session options

use crate::error::{DroverError, DroverResult};
use std::path::PathBuf;

/// Options an engine session is bound to.
///
/// The instruction runner always builds sessions with `auto_commit` and
/// `auto_lint` disabled so the engine neither mutates version control state
/// nor invokes linters on its own. The builders exist for library consumers
/// that want different policies.
///
/// # Examples
///
/// ```
/// use drover_core::EngineOptions;
/// use std::path::PathBuf;
///
/// let options = EngineOptions::new(
///     "openrouter/openai/o3-mini-high",
///     vec![PathBuf::from("a.py")],
/// );
/// assert!(!options.auto_commit);
/// assert!(!options.auto_lint);
/// ```
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Model identifier handed to the engine
    pub model: String,
    /// Files the engine is permitted to read and edit, in invocation order
    pub targets: Vec<PathBuf>,
    /// Whether the engine may commit its own edits
    pub auto_commit: bool,
    /// Whether the engine may run linters after editing
    pub auto_lint: bool,
}

impl EngineOptions {
    /// Create options with both policy flags disabled
    pub fn new(model: impl Into<String>, targets: Vec<PathBuf>) -> Self {
        Self {
            model: model.into(),
            targets,
            auto_commit: false,
            auto_lint: false,
        }
    }

    /// Allow or forbid engine-side commits
    pub fn with_auto_commit(mut self, enabled: bool) -> Self {
        self.auto_commit = enabled;
        self
    }

    /// Allow or forbid engine-side lint runs
    pub fn with_auto_lint(mut self, enabled: bool) -> Self {
        self.auto_lint = enabled;
        self
    }

    /// Validate the options
    pub fn validate(&self) -> DroverResult<()> {
        if self.model.is_empty() {
            return Err(DroverError::config("Model identifier cannot be empty"));
        }
        if self.targets.is_empty() {
            return Err(DroverError::config(
                "Engine options require at least one target file",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_flags_default_to_disabled() {
        let options = EngineOptions::new("gpt-4", vec![PathBuf::from("a.py")]);
        assert!(!options.auto_commit);
        assert!(!options.auto_lint);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let options = EngineOptions::new("gpt-4", vec![PathBuf::from("a.py")])
            .with_auto_commit(true)
            .with_auto_lint(true);
        assert!(options.auto_commit);
        assert!(options.auto_lint);
    }

    #[test]
    fn test_empty_targets_rejected() {
        let options = EngineOptions::new("gpt-4", Vec::new());
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_empty_model_rejected() {
        let options = EngineOptions::new("", vec![PathBuf::from("a.py")]);
        assert!(options.validate().is_err());
    }
}
