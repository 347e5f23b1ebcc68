//! Drover core library
//!
//! Drover applies an instruction file to a set of source files by delegating
//! all code-editing intelligence to an external AI pair-programming engine.
//! This crate provides the pieces the CLI is built from: configuration,
//! error types, the non-interactive prompt adapter, the engine session
//! abstraction with its subprocess-backed implementation, and the
//! instruction runner itself.
//!
//! # Example
//!
//! ```no_run
//! use drover_core::{Config, InvocationRequest, Runner};
//! use std::path::PathBuf;
//!
//! # async fn example() -> drover_core::DroverResult<()> {
//! let request = InvocationRequest::new("instructions.txt", vec![PathBuf::from("a.py")])?;
//! let summary = Runner::new(Config::default()).run(&request).await?;
//! println!("{}", summary);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod runner;

// Re-export commonly used types
pub use config::{Config, EngineConfig, LoggingConfig};
pub use engine::{EngineOptions, EngineSession, ProcessEngine, RunSummary};
pub use error::{DroverError, DroverResult};
pub use input::{AutoResponse, ConfirmRequest, PromptAnswer, PromptResponder};
pub use runner::{InvocationRequest, Runner, USAGE, load_instructions};
