/// Errors surfaced by host prompt adapters.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The adapter cannot present prompts in the current environment.
    #[error("prompter '{prompter}' is not available: {reason}")]
    Unavailable {
        /// Identifier of the prompter.
        prompter: &'static str,
        /// Why the prompter cannot run.
        reason: String,
    },
    /// The user did not answer in time.
    #[error("prompt timed out after {seconds}s")]
    TimedOut {
        /// Timeout that elapsed.
        seconds: u64,
    },
    /// Generic failure surfaced by the adapter.
    #[error("{message}")]
    Failure {
        /// Human-readable error message.
        message: String,
    },
}

impl PromptError {
    /// Helper to construct a failure from any displayable message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }
}

/// Convenience result alias for prompt operations.
pub type PromptResult<T> = std::result::Result<T, PromptError>;
