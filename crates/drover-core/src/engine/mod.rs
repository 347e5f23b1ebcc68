//! External engine session abstraction
//!
//! The engine is an opaque collaborator: it owns model invocation, diff
//! application, and file editing. Drover binds a session to a model
//! identifier, a target file list, a prompt strategy, and two policy flags,
//! then triggers a single run with the instruction text. Nothing else about
//! the engine is interpreted locally.

mod options;
mod process;
mod summary;

pub use options::EngineOptions;
pub use process::ProcessEngine;
pub use summary::RunSummary;

use crate::error::DroverResult;
use async_trait::async_trait;

/// A session bound to an external code-editing engine.
///
/// One session performs one run: the engine receives the instruction text,
/// edits the target files as it sees fit, and the call resolves when the
/// engine finishes. Implementations surface the outcome as a [`RunSummary`]
/// and map transport failures to [`crate::DroverError::Engine`].
#[async_trait]
pub trait EngineSession: Send {
    /// The options this session was built with
    fn options(&self) -> &EngineOptions;

    /// Run the engine once with the given instruction text
    async fn run(&mut self, instructions: &str) -> DroverResult<RunSummary>;
}
