//! CLI command implementations

pub mod config;
pub mod run;

use crate::args::{Cli, Commands};
use crate::console::Console;
use drover_core::DroverResult;

/// Route a parsed invocation to its command
pub async fn route(mut cli: Cli) -> DroverResult<()> {
    let console = Console::new(cli.verbose);
    match cli.command.take() {
        Some(Commands::Config { action }) => config::execute(action, &console),
        None => run::execute(cli, &console).await,
    }
}
