use std::sync::Arc;

use crate::{
    guard::{self, CloseGuard},
    inspector, logging, CloseCheck, Decision, ErrorPolicy, GuardConfig, PromptMessage,
    RepoCheckResult, UserAnswer,
};

use super::CoreError;

type Result<T> = std::result::Result<T, CoreError>;

/// High-level handle exposed to hosts via `UniFFI`.
///
/// Hosts that own their dialog call [`GuardSession::check`], present the
/// prompt from an `Ask` outcome, then feed the answer to
/// [`GuardSession::resolve`].
#[derive(Debug)]
pub struct GuardSession {
    guard: CloseGuard,
}

impl GuardSession {
    fn new(guard: CloseGuard) -> Self {
        Self { guard }
    }

    /// Inspect the workspace and report what the host should do.
    pub fn check(&self, workspace_root: String) -> CloseCheck {
        self.guard.check(workspace_root)
    }

    /// Map the user's answer to a decision, starting from a cleared cancel flag.
    ///
    /// Hosts whose cancel flag may already be set should call `decide` with
    /// that flag instead, so an unrecognized answer keeps it.
    pub fn resolve(&self, answer: UserAnswer) -> Decision {
        Decision::from_answer(answer, Decision::Proceed)
    }

    /// Whether inspection failures cancel the close.
    pub fn fails_closed(&self) -> bool {
        self.guard.config().guard.on_error == ErrorPolicy::FailClosed
    }
}

/// Return the `.git` entry of a workspace, if present.
pub fn locate_repository(workspace_root: String) -> Option<String> {
    inspector::locate(workspace_root).map(|path| path.to_string_lossy().into_owned())
}

/// Classify the repository at `repo_path`.
///
/// # Errors
///
/// Returns an error when the repository cannot be opened or queried.
pub fn classify(repo_path: String) -> Result<RepoCheckResult> {
    inspector::classify(repo_path).map_err(CoreError::from)
}

/// Prompt the host should show for `result`, if any.
pub fn prompt_for(result: RepoCheckResult) -> Option<PromptMessage> {
    guard::prompt_for(result)
}

/// Translate a Win32 message box result code.
pub const fn answer_from_code(code: i32) -> UserAnswer {
    UserAnswer::from_dialog_code(code)
}

/// Resolve an answer against the host's current cancel state.
pub const fn decide(answer: UserAnswer, prior: Decision) -> Decision {
    Decision::from_answer(answer, prior)
}

/// Install the stderr log subscriber. Returns `false` if one already exists.
pub fn init_logging(level: Option<String>) -> bool {
    logging::init(level.as_deref())
}

/// Open a guard session via the `UniFFI` namespace function.
///
/// # Errors
///
/// Returns an error when the configuration file cannot be read or parsed.
pub fn open_guard(config_path: Option<String>) -> Result<Arc<GuardSession>> {
    let config = match config_path {
        Some(path) => GuardConfig::load_from(path).map_err(CoreError::from)?,
        None => GuardConfig::default(),
    };
    Ok(Arc::new(GuardSession::new(CloseGuard::new(config))))
}
