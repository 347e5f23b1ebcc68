//! CLI argument definitions using clap
//!
//! One parameterized entry point:
//! - drover instructions.txt a.py b.py     # apply instructions to files
//! - drover ... --model <id>              # pick the engine's model
//! - drover config init/show/validate     # utility commands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file name used across all CLI commands.
pub const DEFAULT_CONFIG_FILE: &str = "drover_config.json";

#[derive(Parser, Debug)]
#[command(name = "drover")]
#[command(about = "Apply an instruction file to source files via an external AI pair-programming engine")]
#[command(
    long_about = r#"Drover - apply an instruction file to source files via an external
AI pair-programming engine

USAGE:
  drover <instructions-file> <file1> [<file2> ...]   # run the engine once
  drover ... --model openrouter/openai/o3-mini       # choose the model
  drover ... --engine aider                          # choose the engine program

UTILITY COMMANDS:
  drover config init                 # Create config file
  drover config show                 # Show resolved config
  drover config validate             # Validate config file

The engine runs non-interactively: every confirmation prompt it raises is
auto-declined, and automatic commits and lint runs are disabled.

For detailed help: drover --help"#
)]
#[command(version)]
pub struct Cli {
    /// Plain-text file describing the edit task
    pub instructions: Option<PathBuf>,

    /// Files the engine is permitted to read and edit
    pub files: Vec<PathBuf>,

    /// Model identifier handed to the engine
    #[arg(long, short)]
    pub model: Option<String>,

    /// Engine executable to spawn
    #[arg(long)]
    pub engine: Option<String>,

    /// Path to configuration file (default: drover_config.json, then the
    /// user config directory)
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Working directory for the engine
    #[arg(long)]
    pub working_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Display the resolved configuration
    Show {
        /// Path to configuration file
        #[arg(long)]
        config_file: Option<PathBuf>,
    },

    /// Validate a configuration file for errors
    Validate {
        /// Path to configuration file
        #[arg(long)]
        config_file: Option<PathBuf>,
    },

    /// Create a new configuration file with defaults
    Init {
        /// Path for the new configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config_file: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
