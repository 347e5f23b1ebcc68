//! Auto-response strategies for non-interactive runs

use std::sync::Arc;

use super::request::{ConfirmRequest, PromptAnswer};

/// Auto-responder function type
pub type PromptResponder = Box<dyn Fn(&ConfirmRequest) -> PromptAnswer + Send + Sync>;

/// Auto-response strategies for non-interactive runs
#[derive(Clone)]
pub enum AutoResponse {
    /// Answer "no" to every confirmation prompt
    Decline,
    /// Answer "yes" to every confirmation prompt
    Accept,
    /// Custom responder function
    Custom(Arc<dyn Fn(&ConfirmRequest) -> PromptAnswer + Send + Sync>),
}

impl std::fmt::Debug for AutoResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AutoResponse::Decline => write!(f, "AutoResponse::Decline"),
            AutoResponse::Accept => write!(f, "AutoResponse::Accept"),
            AutoResponse::Custom(_) => write!(f, "AutoResponse::Custom(...)"),
        }
    }
}

impl AutoResponse {
    /// Convert to a responder function
    pub fn into_responder(self) -> PromptResponder {
        match self {
            AutoResponse::Decline => Box::new(|_req: &ConfirmRequest| PromptAnswer::No),
            AutoResponse::Accept => Box::new(|_req: &ConfirmRequest| PromptAnswer::Yes),
            AutoResponse::Custom(f) => Box::new(move |req: &ConfirmRequest| f(req)),
        }
    }
}
