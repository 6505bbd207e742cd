use closeguard_host_api::{PromptMessage, PromptResult, Prompter, UserAnswer};

/// Headless prompter that answers every prompt with the same answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswerPrompter {
    answer: UserAnswer,
}

impl FixedAnswerPrompter {
    /// Construct a prompter that always replies with `answer`.
    #[must_use]
    pub const fn new(answer: UserAnswer) -> Self {
        Self { answer }
    }

    /// The answer this prompter gives.
    #[must_use]
    pub const fn answer(&self) -> UserAnswer {
        self.answer
    }
}

impl Default for FixedAnswerPrompter {
    fn default() -> Self {
        Self::new(UserAnswer::No)
    }
}

impl Prompter for FixedAnswerPrompter {
    fn id(&self) -> &'static str {
        "fixed"
    }

    fn label(&self) -> &'static str {
        "Fixed Answer"
    }

    fn ask(&self, _prompt: &PromptMessage) -> PromptResult<UserAnswer> {
        Ok(self.answer)
    }
}
