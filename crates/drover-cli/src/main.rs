//! Drover CLI application
//!
//! A non-interactive runner that applies an instruction file to a set of
//! source files by delegating the editing work to an external AI
//! pair-programming engine.
//!
//! ```bash
//! drover instructions.txt src/a.py src/b.py
//! drover instructions.txt src/a.py --model openrouter/openai/o3-mini
//! ```
//!
//! The engine never blocks on confirmation prompts (they are auto-declined)
//! and runs with automatic commits and lint runs disabled. Exit code 0 means
//! the engine completed; usage errors, unreadable instruction files, and
//! engine failures all exit 1.

mod args;
mod commands;
mod console;

use clap::Parser;
use clap::error::ErrorKind;
use console::Console;
use drover_core::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Initialize logging from the resolved configuration.
///
/// `--verbose` forces debug level; otherwise the configured level applies
/// (which `DROVER_LOG` already overrode during config loading).
pub(crate) fn init_logging(config: &LoggingConfig, verbose: bool) {
    let level = if verbose {
        "debug".to_string()
    } else {
        config.level.clone()
    };
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::new(level));
    let result = match config.format.as_str() {
        "compact" => builder.compact().try_init(),
        _ => builder.try_init(),
    };
    // A second init in the same process (tests) is fine to ignore
    let _ = result;
}

#[tokio::main]
async fn main() {
    let cli = match args::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version displays are not failures; everything else
            // (including missing arguments) exits 1 with the usage text
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = commands::route(cli).await {
        Console::new(false).error(&err.to_string());
        std::process::exit(1);
    }
}
