mod error;

pub use closeguard_api::{PromptMessage, UserAnswer};
pub use error::{PromptError, PromptResult};

/// Trait implemented by host adapters that can put a yes/no prompt in front
/// of the user (a modal dialog, a terminal question, a scripted answer).
pub trait Prompter: Send + Sync {
    /// Stable identifier used for lookup and logging.
    fn id(&self) -> &'static str;

    /// Human-friendly label for UI surfaces.
    fn label(&self) -> &'static str;

    /// Present the prompt and block until the user answers.
    ///
    /// # Errors
    ///
    /// Implementors should surface failures to display the prompt or to read
    /// the answer back.
    fn ask(&self, prompt: &PromptMessage) -> PromptResult<UserAnswer>;
}
