//! Non-interactive prompt handling
//!
//! The external engine may issue confirmation prompts while it works. During
//! automated runs no prompt is allowed to block execution, so every prompt is
//! routed through a [`PromptResponder`] built from an [`AutoResponse`]
//! strategy. The runner always installs [`AutoResponse::Decline`], which
//! auto-answers "no"; the other strategies exist for library consumers and
//! tests.

mod auto_response;
mod request;

pub use auto_response::{AutoResponse, PromptResponder};
pub use request::{ConfirmRequest, PromptAnswer};
