use serde::{Deserialize, Serialize};

use crate::RepoCheckResult;

/// Message shown when the working tree has uncommitted changes.
pub const DIRTY_MESSAGE: &str = "Uncommitted git changes, do you want to commit before closing?";
/// Title shown when the working tree has uncommitted changes.
pub const DIRTY_TITLE: &str = "Uncommitted git changes!";
/// Message shown when the branch has commits not yet on its upstream.
pub const UNPUSHED_MESSAGE: &str = "Unpushed git commits, do you want to push before closing?";
/// Title shown when the branch has commits not yet on its upstream.
pub const UNPUSHED_TITLE: &str = "Unpushed git commits!";

/// Win32 `IDOK` dialog result.
pub const IDOK: i32 = 1;
/// Win32 `IDCANCEL` dialog result.
pub const IDCANCEL: i32 = 2;
/// Win32 `IDYES` dialog result.
pub const IDYES: i32 = 6;
/// Win32 `IDNO` dialog result.
pub const IDNO: i32 = 7;

/// Yes/no prompt the host presents before a workspace closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    /// Body text of the prompt.
    pub message: String,
    /// Window title of the prompt.
    pub title: String,
}

impl PromptMessage {
    /// Select the prompt for a classification. `NoChanges` shows no prompt.
    #[must_use]
    pub fn for_result(result: RepoCheckResult) -> Option<Self> {
        let (message, title) = match result {
            RepoCheckResult::NoChanges => return None,
            RepoCheckResult::IsDirty => (DIRTY_MESSAGE, DIRTY_TITLE),
            RepoCheckResult::UnpushedChanges => (UNPUSHED_MESSAGE, UNPUSHED_TITLE),
        };

        Some(Self {
            message: message.to_owned(),
            title: title.to_owned(),
        })
    }
}

/// Answer returned by the host's prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAnswer {
    /// The "OK" button.
    Ok,
    /// The "Cancel" button, or the dialog was dismissed.
    Cancel,
    /// The "Yes" button.
    Yes,
    /// The "No" button.
    No,
    /// Anything the guard does not know how to interpret.
    Unrecognized,
}

impl UserAnswer {
    /// Map a Win32 message box result code to an answer.
    #[must_use]
    pub const fn from_dialog_code(code: i32) -> Self {
        match code {
            IDOK => Self::Ok,
            IDCANCEL => Self::Cancel,
            IDYES => Self::Yes,
            IDNO => Self::No,
            _ => Self::Unrecognized,
        }
    }

    /// Parse a textual answer such as `yes`, `n` or `cancel`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "ok" => Self::Ok,
            "cancel" => Self::Cancel,
            "yes" | "y" => Self::Yes,
            "no" | "n" => Self::No,
            _ => Self::Unrecognized,
        }
    }

    /// The decision this answer implies, if any.
    ///
    /// An affirmative answer aborts the close so the user can commit or push;
    /// a negative one lets it proceed. OK maps to abort and Cancel to proceed,
    /// matching the answer table hosts were built against.
    #[must_use]
    pub const fn decision(self) -> Option<Decision> {
        match self {
            Self::Ok | Self::Yes => Some(Decision::Abort),
            Self::Cancel | Self::No => Some(Decision::Proceed),
            Self::Unrecognized => None,
        }
    }
}

/// What the host should do with the pending close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Let the workspace close.
    #[default]
    Proceed,
    /// Cancel the close.
    Abort,
}

impl Decision {
    /// Resolve an answer, keeping `prior` when the answer is unrecognized.
    #[must_use]
    pub const fn from_answer(answer: UserAnswer, prior: Self) -> Self {
        match answer.decision() {
            Some(decision) => decision,
            None => prior,
        }
    }

    /// The host-side "cancel close" flag for this decision.
    #[must_use]
    pub const fn cancels_close(self) -> bool {
        matches!(self, Self::Abort)
    }
}

/// Non-interactive outcome of a close check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum CloseCheck {
    /// Nothing to warn about; close immediately.
    Proceed,
    /// Cancel the close without asking.
    Abort,
    /// Ask the user before deciding.
    Ask {
        /// Prompt to present.
        prompt: PromptMessage,
    },
}

impl CloseCheck {
    /// Build the check outcome for a classification.
    #[must_use]
    pub fn from_result(result: RepoCheckResult) -> Self {
        PromptMessage::for_result(result).map_or(Self::Proceed, |prompt| Self::Ask { prompt })
    }
}

/// How the guard treats a repository it failed to inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Let the close proceed.
    #[default]
    FailOpen,
    /// Cancel the close.
    FailClosed,
}

impl ErrorPolicy {
    /// The decision taken when inspection fails under this policy.
    #[must_use]
    pub const fn decision(self) -> Decision {
        match self {
            Self::FailOpen => Decision::Proceed,
            Self::FailClosed => Decision::Abort,
        }
    }
}
