//! The instruction runner
//!
//! Validates an invocation, loads the instruction text, and triggers a
//! single engine run. No retries, no partial-failure recovery: one
//! best-effort call into the external engine. The engine session is only
//! ever constructed after the instruction file has been read successfully.

use std::fs;
use std::path::{Path, PathBuf};

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::engine::{EngineOptions, EngineSession, ProcessEngine, RunSummary};
use crate::error::{DroverError, DroverResult};
use crate::input::AutoResponse;

/// Usage line shown on invalid invocations
pub const USAGE: &str = "Usage: drover <instructions-file> <file1> [<file2> ...]";

/// A validated request to apply one instruction file to a set of targets.
///
/// Immutable once built and discarded after the run completes.
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    instructions_file: PathBuf,
    targets: Vec<PathBuf>,
}

impl InvocationRequest {
    /// Create a request; fails with a usage error when no targets are given
    pub fn new(
        instructions_file: impl Into<PathBuf>,
        targets: Vec<PathBuf>,
    ) -> DroverResult<Self> {
        if targets.is_empty() {
            return Err(DroverError::usage(USAGE));
        }
        Ok(Self {
            instructions_file: instructions_file.into(),
            targets,
        })
    }

    /// Path of the instruction file
    pub fn instructions_file(&self) -> &Path {
        &self.instructions_file
    }

    /// Files the engine is permitted to read and edit
    pub fn targets(&self) -> &[PathBuf] {
        &self.targets
    }
}

/// Read the full instruction text from a file.
///
/// The contents are treated as an opaque payload and passed to the engine
/// unmodified. Any failure names the offending path.
pub fn load_instructions(path: &Path) -> DroverResult<String> {
    fs::read_to_string(path).map_err(|e| DroverError::instruction_file(path, e))
}

/// Executes a single engine run for a validated invocation.
///
/// # Examples
///
/// ```no_run
/// use drover_core::{Config, InvocationRequest, Runner};
/// use std::path::PathBuf;
///
/// # async fn example() -> drover_core::DroverResult<()> {
/// let request = InvocationRequest::new("instructions.txt", vec![PathBuf::from("a.py")])?;
/// let runner = Runner::new(Config::default());
/// let summary = runner.run(&request).await?;
/// println!("{}", summary);
/// # Ok(())
/// # }
/// ```
pub struct Runner {
    config: Config,
    cancel: CancellationToken,
}

impl Runner {
    /// Create a runner with the given configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cancel: CancellationToken::new(),
        }
    }

    /// Attach a cancellation token; cancelling it aborts an in-flight run
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// The runner's configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load the instructions and perform one engine run.
    ///
    /// Instruction loading happens first; the engine session is never
    /// constructed when the file cannot be read.
    pub async fn run(&self, request: &InvocationRequest) -> DroverResult<RunSummary> {
        let instructions = load_instructions(request.instructions_file())?;
        tracing::debug!(
            file = %request.instructions_file().display(),
            bytes = instructions.len(),
            "loaded instructions"
        );

        let mut session = self.build_session(request)?;
        self.run_session(&mut session, &instructions).await
    }

    /// Build the engine session for a request.
    ///
    /// Sessions are always bound to an auto-declining prompt strategy and
    /// have automatic commit and automatic lint disabled, regardless of the
    /// configured model.
    pub fn build_session(&self, request: &InvocationRequest) -> DroverResult<ProcessEngine> {
        let options = EngineOptions::new(self.config.model.clone(), request.targets().to_vec());
        let session = ProcessEngine::new(
            options,
            self.config.engine.clone(),
            AutoResponse::Decline,
        )?;
        Ok(session.with_cancellation(self.cancel.clone()))
    }

    /// Run an already-built session with the given instruction text
    pub async fn run_session(
        &self,
        session: &mut dyn EngineSession,
        instructions: &str,
    ) -> DroverResult<RunSummary> {
        tracing::info!(
            model = %session.options().model,
            targets = session.options().targets.len(),
            "dispatching run to engine"
        );
        session.run(instructions).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_request_requires_targets() {
        let err = InvocationRequest::new("instructions.txt", Vec::new()).unwrap_err();
        assert!(matches!(err, DroverError::Usage(_)));
        assert!(err.to_string().contains("Usage:"));
    }

    #[test]
    fn test_request_preserves_target_order() {
        let request = InvocationRequest::new(
            "instructions.txt",
            vec![PathBuf::from("b.py"), PathBuf::from("a.py")],
        )
        .unwrap();
        assert_eq!(
            request.targets(),
            &[PathBuf::from("b.py"), PathBuf::from("a.py")]
        );
    }

    #[test]
    fn test_load_instructions_exact_contents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Add a docstring").unwrap();

        let text = load_instructions(file.path()).unwrap();
        assert_eq!(text, "Add a docstring");
    }

    #[test]
    fn test_load_instructions_missing_file_names_path() {
        let err = load_instructions(Path::new("missing.txt")).unwrap_err();
        match &err {
            DroverError::InstructionFile { path, .. } => {
                assert_eq!(path, &PathBuf::from("missing.txt"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_built_sessions_disable_commit_and_lint() {
        let request =
            InvocationRequest::new("instructions.txt", vec![PathBuf::from("a.py")]).unwrap();
        let runner = Runner::new(Config::default());

        let session = runner.build_session(&request).unwrap();
        assert!(!session.options().auto_commit);
        assert!(!session.options().auto_lint);
        assert_eq!(session.options().targets, vec![PathBuf::from("a.py")]);
    }
}
