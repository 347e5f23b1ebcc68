//! Integration tests for the instruction runner
//!
//! Exercises the run pipeline against a recording fake engine and against
//! trivial real child processes, covering the invocation scenarios the
//! runner must honor.

use async_trait::async_trait;
use drover_core::{
    Config, DroverError, DroverResult, EngineOptions, EngineSession, InvocationRequest, RunSummary,
    Runner, load_instructions,
};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::NamedTempFile;

/// Fake engine that records every instruction text it is run with
struct RecordingEngine {
    options: EngineOptions,
    seen: Arc<Mutex<Vec<String>>>,
}

impl RecordingEngine {
    fn new(options: EngineOptions) -> (Self, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                options,
                seen: seen.clone(),
            },
            seen,
        )
    }
}

#[async_trait]
impl EngineSession for RecordingEngine {
    fn options(&self) -> &EngineOptions {
        &self.options
    }

    async fn run(&mut self, instructions: &str) -> DroverResult<RunSummary> {
        self.seen.lock().unwrap().push(instructions.to_string());
        Ok(RunSummary {
            success: true,
            exit_code: Some(0),
            duration: Duration::from_millis(5),
            declined_prompts: 0,
        })
    }
}

fn instructions_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[tokio::test]
async fn test_exact_instruction_text_reaches_engine() {
    let file = instructions_file("Add a docstring");
    let request = InvocationRequest::new(file.path(), vec![PathBuf::from("a.py")]).unwrap();
    let runner = Runner::new(Config::default());

    let instructions = load_instructions(request.instructions_file()).unwrap();
    let options = EngineOptions::new("openrouter/openai/o3-mini-high", request.targets().to_vec());
    let (mut engine, seen) = RecordingEngine::new(options);

    let summary = runner
        .run_session(&mut engine, &instructions)
        .await
        .unwrap();

    assert!(summary.is_success());
    let seen = seen.lock().unwrap();
    assert_eq!(seen.as_slice(), ["Add a docstring"]);
}

#[tokio::test]
async fn test_instruction_text_is_not_normalized() {
    // Trailing whitespace and embedded newlines must survive untouched
    let raw = "Line one\n\n  indented\ntrailing space \n";
    let file = instructions_file(raw);

    let text = load_instructions(file.path()).unwrap();
    assert_eq!(text, raw);
}

#[tokio::test]
async fn test_missing_instruction_file_fails_before_engine() {
    // The configured engine does not exist; reaching it would surface an
    // Engine error, so an InstructionFile error proves the read failed first
    let mut config = Config::default();
    config.engine.command = "definitely-not-an-engine-binary".to_string();

    let request =
        InvocationRequest::new("missing.txt", vec![PathBuf::from("a.py")]).unwrap();
    let err = Runner::new(config).run(&request).await.unwrap_err();

    match err {
        DroverError::InstructionFile { ref path, .. } => {
            assert_eq!(path, &PathBuf::from("missing.txt"));
        }
        other => panic!("expected instruction-file error, got: {:?}", other),
    }
    assert!(err.to_string().contains("missing.txt"));
}

#[tokio::test]
async fn test_empty_target_list_is_a_usage_error() {
    let err = InvocationRequest::new("instructions.txt", Vec::new()).unwrap_err();
    assert!(matches!(err, DroverError::Usage(_)));
}

#[tokio::test]
async fn test_run_with_stub_engine_process() {
    // `true` stands in for an engine that accepts the invocation and exits 0
    let file = instructions_file("Add a docstring");
    let mut config = Config::default();
    config.engine.command = "true".to_string();

    let request = InvocationRequest::new(file.path(), vec![PathBuf::from("a.py")]).unwrap();
    let summary = Runner::new(config).run(&request).await.unwrap();

    assert!(summary.is_success());
    assert_eq!(summary.exit_code, Some(0));
}

#[tokio::test]
async fn test_failed_engine_exit_is_surfaced_not_hidden() {
    let file = instructions_file("Add a docstring");
    let mut config = Config::default();
    config.engine.command = "false".to_string();

    let request = InvocationRequest::new(file.path(), vec![PathBuf::from("a.py")]).unwrap();
    let summary = Runner::new(config).run(&request).await.unwrap();

    assert!(!summary.is_success());
    assert_eq!(summary.exit_code, Some(1));
}
