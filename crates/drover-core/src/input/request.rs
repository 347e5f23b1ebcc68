//! Confirmation requests and answers

/// A confirmation prompt issued by the external engine.
///
/// The engine asks before taking actions it considers sensitive (creating
/// files, adding files to its context, applying edits outside the target
/// set). The prompt text is carried verbatim so a responder can inspect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    /// The prompt text, exactly as the engine emitted it
    pub prompt: String,
}

impl ConfirmRequest {
    /// Create a new confirmation request
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Answer to a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAnswer {
    /// Confirm the action
    Yes,
    /// Decline the action
    No,
}

impl PromptAnswer {
    /// Check whether this answer confirms the action
    pub fn is_yes(&self) -> bool {
        matches!(self, Self::Yes)
    }

    /// The reply written to the engine's input stream
    pub fn as_reply(&self) -> &'static str {
        match self {
            Self::Yes => "y",
            Self::No => "n",
        }
    }
}
