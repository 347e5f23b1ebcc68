//! Subprocess-backed engine session
//!
//! Drives the external engine as a child process: the instruction text and
//! the policy flags ride on the argument list, engine output is forwarded to
//! our stdout as it arrives, and confirmation prompts detected in the output
//! stream are answered through the prompt responder on the engine's stdin.

use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use crate::config::EngineConfig;
use crate::error::{DroverError, DroverResult};
use crate::input::{AutoResponse, ConfirmRequest, PromptResponder};

use super::EngineSession;
use super::options::EngineOptions;
use super::summary::RunSummary;

/// Engine session that spawns the configured engine program.
///
/// Any engine honoring the argv contract
/// `<program> --model <id> [--no-auto-commits] [--no-auto-lint] --message
/// <text> <files...>` can be driven; the program name and extra arguments
/// come from [`EngineConfig`].
pub struct ProcessEngine {
    options: EngineOptions,
    engine: EngineConfig,
    responder: PromptResponder,
    cancel: CancellationToken,
}

impl ProcessEngine {
    /// Create a session bound to the given options, engine config, and
    /// prompt strategy
    pub fn new(
        options: EngineOptions,
        engine: EngineConfig,
        prompts: AutoResponse,
    ) -> DroverResult<Self> {
        options.validate()?;
        if engine.command.is_empty() {
            return Err(DroverError::config("Engine command cannot be empty"));
        }
        Ok(Self {
            options,
            engine,
            responder: prompts.into_responder(),
            cancel: CancellationToken::new(),
        })
    }

    /// Attach a cancellation token; cancelling it kills the engine process
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Arguments for one engine invocation
    fn build_args(&self, instructions: &str) -> Vec<String> {
        let mut args = vec!["--model".to_string(), self.options.model.clone()];
        if !self.options.auto_commit {
            args.push("--no-auto-commits".to_string());
        }
        if !self.options.auto_lint {
            args.push("--no-auto-lint".to_string());
        }
        args.extend(self.engine.extra_args.iter().cloned());
        args.push("--message".to_string());
        args.push(instructions.to_string());
        args.extend(
            self.options
                .targets
                .iter()
                .map(|path| path.to_string_lossy().into_owned()),
        );
        args
    }
}

#[async_trait]
impl EngineSession for ProcessEngine {
    fn options(&self) -> &EngineOptions {
        &self.options
    }

    async fn run(&mut self, instructions: &str) -> DroverResult<RunSummary> {
        let start = Instant::now();
        tracing::info!(
            engine = %self.engine.command,
            model = %self.options.model,
            targets = self.options.targets.len(),
            "starting engine run"
        );

        let mut command = Command::new(&self.engine.command);
        command
            .args(self.build_args(instructions))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);
        if let Some(dir) = &self.engine.working_directory {
            command.current_dir(dir);
        }

        let mut child = command.spawn().map_err(|e| {
            DroverError::engine(format!(
                "Failed to spawn engine '{}': {}",
                self.engine.command, e
            ))
        })?;

        let child_stdout = child
            .stdout
            .take()
            .ok_or_else(|| DroverError::engine("Engine stdout was not captured"))?;
        let child_stdin = child
            .stdin
            .take()
            .ok_or_else(|| DroverError::engine("Engine stdin was not captured"))?;

        let declined = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                tracing::warn!("run interrupted, stopping engine");
                let _ = child.kill().await;
                return Err(DroverError::Interrupted);
            }
            result = pump_engine_io(
                child_stdout,
                child_stdin,
                tokio::io::stdout(),
                &self.responder,
            ) => {
                result.map_err(|e| DroverError::engine(format!("Engine I/O failed: {}", e)))?
            }
        };

        let status = child
            .wait()
            .await
            .map_err(|e| DroverError::engine(format!("Failed to wait for engine: {}", e)))?;

        let summary = RunSummary {
            success: status.success(),
            exit_code: status.code(),
            duration: start.elapsed(),
            declined_prompts: declined,
        };
        tracing::info!(
            success = summary.success,
            exit_code = ?summary.exit_code,
            declined = summary.declined_prompts,
            "engine run finished"
        );
        Ok(summary)
    }
}

/// Forward engine output, answering confirmation prompts as they appear.
///
/// Complete lines are forwarded verbatim. Engines leave y/n prompts
/// unterminated while waiting for input, so the trailing partial chunk is
/// inspected after every read; terminated prompt lines are answered too.
/// Returns the number of prompts answered with "no".
async fn pump_engine_io<R, W, F>(
    mut output: R,
    mut answers: W,
    mut forward: F,
    responder: &PromptResponder,
) -> std::io::Result<u32>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    F: AsyncWrite + Unpin,
{
    let mut declined = 0u32;
    let mut pending: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = output.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        pending.extend_from_slice(&chunk[..n]);

        while let Some(pos) = pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = pending.drain(..=pos).collect();
            forward.write_all(&line).await?;
            let text = String::from_utf8_lossy(&line);
            if let Some(request) = parse_confirm(&text) {
                respond(&mut answers, responder, &request, &mut declined).await?;
            }
        }

        if !pending.is_empty() {
            let tail = String::from_utf8_lossy(&pending).into_owned();
            if let Some(request) = parse_confirm(&tail) {
                forward.write_all(&pending).await?;
                forward.write_all(b"\n").await?;
                pending.clear();
                respond(&mut answers, responder, &request, &mut declined).await?;
            }
        }
        forward.flush().await?;
    }

    if !pending.is_empty() {
        forward.write_all(&pending).await?;
        forward.write_all(b"\n").await?;
        forward.flush().await?;
    }

    Ok(declined)
}

async fn respond<W: AsyncWrite + Unpin>(
    answers: &mut W,
    responder: &PromptResponder,
    request: &ConfirmRequest,
    declined: &mut u32,
) -> std::io::Result<()> {
    let answer = responder(request);
    if !answer.is_yes() {
        *declined += 1;
    }
    tracing::debug!(prompt = %request.prompt, reply = answer.as_reply(), "answering engine prompt");
    answers.write_all(answer.as_reply().as_bytes()).await?;
    answers.write_all(b"\n").await?;
    answers.flush().await
}

/// Interpret an output chunk as a confirmation prompt
fn parse_confirm(text: &str) -> Option<ConfirmRequest> {
    const MARKERS: &[&str] = &["(y/n)", "[y/n]", "(yes/no)", "[yes/no]", "(y)es/(n)o"];

    let trimmed = text.trim_end();
    let normalized = trimmed
        .to_lowercase()
        .trim_end_matches(':')
        .trim_end()
        .to_string();
    if MARKERS.iter().any(|marker| normalized.ends_with(marker)) {
        Some(ConfirmRequest::new(trimmed))
    } else {
        None
    }
}
