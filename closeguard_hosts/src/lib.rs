mod command;
mod fixed;

use std::time::Duration;

pub use command::{CommandPrompter, DEFAULT_TIMEOUT_SECS};
pub use fixed::FixedAnswerPrompter;

use closeguard_api::UserAnswer;
use closeguard_host_api::{PromptResult, Prompter};
use serde::{Deserialize, Serialize};

/// Settings selecting and tuning the builtin prompter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// External dialog command (program followed by arguments).
    pub command: Option<Vec<String>>,
    /// Seconds to wait for the dialog command.
    pub timeout_secs: u64,
    /// Answer given when no dialog command is configured.
    pub answer: UserAnswer,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            command: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            answer: UserAnswer::No,
        }
    }
}

/// Build the prompter described by `config`.
///
/// # Errors
///
/// Returns an error when a dialog command is configured but empty.
pub fn default_prompter(config: &PromptConfig) -> PromptResult<Box<dyn Prompter>> {
    match &config.command {
        Some(argv) => {
            let prompter = CommandPrompter::from_argv(argv)?
                .with_timeout(Duration::from_secs(config.timeout_secs));
            Ok(Box::new(prompter))
        }
        None => Ok(Box::new(FixedAnswerPrompter::new(config.answer))),
    }
}
