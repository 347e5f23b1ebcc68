//! The one-shot engine run

use crate::args::Cli;
use crate::console::Console;
use drover_core::config::{
    OVERRIDE_ENGINE, OVERRIDE_MODEL, OVERRIDE_WORKING_DIR, load_config_with_overrides,
};
use drover_core::{DroverError, DroverResult, InvocationRequest, Runner, USAGE};
use std::collections::HashMap;
use tokio_util::sync::CancellationToken;

/// Validate the invocation, resolve configuration, and run the engine once
pub async fn execute(cli: Cli, console: &Console) -> DroverResult<()> {
    let Some(instructions_file) = cli.instructions else {
        return Err(DroverError::usage(USAGE));
    };
    if cli.files.is_empty() {
        return Err(DroverError::usage(USAGE));
    }

    let overrides = build_overrides(cli.model, cli.engine, cli.working_dir);
    let config = load_config_with_overrides(cli.config_file.as_deref(), overrides)?;
    crate::init_logging(&config.logging, cli.verbose);
    tracing::debug!(model = %config.model, engine = %config.engine.command, "resolved configuration");

    console.info(&format!(
        "Applying '{}' to {} file(s) with model {}",
        instructions_file.display(),
        cli.files.len(),
        config.model
    ));

    let request = InvocationRequest::new(instructions_file, cli.files)?;

    // Ctrl+C kills the engine process and aborts the run
    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            interrupt.cancel();
        }
    });

    let runner = Runner::new(config).with_cancellation(cancel);
    let summary = runner.run(&request).await?;

    if summary.declined_prompts > 0 {
        console.warn(&format!(
            "{} confirmation prompt(s) were auto-declined",
            summary.declined_prompts
        ));
    }

    if summary.is_success() {
        console.success(&summary.to_string());
        Ok(())
    } else {
        Err(DroverError::engine(summary.to_string()))
    }
}

fn build_overrides(
    model: Option<String>,
    engine: Option<String>,
    working_dir: Option<std::path::PathBuf>,
) -> HashMap<String, String> {
    let mut overrides = HashMap::new();
    if let Some(model) = model {
        overrides.insert(OVERRIDE_MODEL.to_string(), model);
    }
    if let Some(engine) = engine {
        overrides.insert(OVERRIDE_ENGINE.to_string(), engine);
    }
    if let Some(dir) = working_dir {
        overrides.insert(
            OVERRIDE_WORKING_DIR.to_string(),
            dir.to_string_lossy().into_owned(),
        );
    }
    overrides
}
