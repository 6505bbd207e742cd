//! Turns a repository classification into a close decision.

use std::path::Path;

use closeguard_host_api::Prompter;
use tracing::{debug, info, warn};

use crate::{
    inspector, CloseCheck, Decision, GuardConfig, PromptMessage, RepoCheckResult, UserAnswer,
};

/// Decides whether a workspace may close, one inspection per close attempt.
#[derive(Debug, Clone, Default)]
pub struct CloseGuard {
    config: GuardConfig,
}

impl CloseGuard {
    /// Construct a guard with explicit configuration.
    #[must_use]
    pub const fn new(config: GuardConfig) -> Self {
        Self { config }
    }

    /// Configuration the guard was built with.
    #[must_use]
    pub const fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Run the non-interactive part of the close check.
    ///
    /// A workspace without `.git` proceeds without inspection. Inspection
    /// failures resolve through the configured [`crate::ErrorPolicy`].
    #[must_use]
    pub fn check(&self, workspace_root: impl AsRef<Path>) -> CloseCheck {
        let workspace_root = workspace_root.as_ref();
        let Some(repo_path) = inspector::locate(workspace_root) else {
            debug!(workspace = %workspace_root.display(), "no git repository, close proceeds");
            return CloseCheck::Proceed;
        };

        match inspector::classify_with(&repo_path, &self.config.inspect_options()) {
            Ok(result) => {
                info!(workspace = %workspace_root.display(), ?result, "repository inspected");
                CloseCheck::from_result(result)
            }
            Err(err) => {
                let decision = self.config.guard.on_error.decision();
                warn!(
                    workspace = %workspace_root.display(),
                    error = %err,
                    ?decision,
                    "repository inspection failed"
                );
                match decision {
                    Decision::Proceed => CloseCheck::Proceed,
                    Decision::Abort => CloseCheck::Abort,
                }
            }
        }
    }

    /// Run the full close flow, asking through `prompter` when needed.
    ///
    /// The host's cancel flag starts out cleared, so an unrecognized answer or
    /// a prompt that could not be shown lets the close proceed.
    pub fn before_close(
        &self,
        workspace_root: impl AsRef<Path>,
        prompter: &dyn Prompter,
    ) -> Decision {
        match self.check(workspace_root) {
            CloseCheck::Proceed => Decision::Proceed,
            CloseCheck::Abort => Decision::Abort,
            CloseCheck::Ask { prompt } => {
                let answer = ask(prompter, &prompt);
                let decision = Decision::from_answer(answer, Decision::Proceed);
                info!(prompter = prompter.id(), ?answer, ?decision, "close decided");
                decision
            }
        }
    }
}

/// Prompt selected for `result`, if any.
#[must_use]
pub fn prompt_for(result: RepoCheckResult) -> Option<PromptMessage> {
    PromptMessage::for_result(result)
}

fn ask(prompter: &dyn Prompter, prompt: &PromptMessage) -> UserAnswer {
    match prompter.ask(prompt) {
        Ok(answer) => answer,
        Err(err) => {
            warn!(prompter = prompter.id(), error = %err, "prompt failed");
            UserAnswer::Unrecognized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use closeguard_host_api::{PromptError, PromptResult};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    #[derive(Default)]
    struct CountingPrompter {
        calls: AtomicUsize,
    }

    impl Prompter for CountingPrompter {
        fn id(&self) -> &'static str {
            "counting"
        }

        fn label(&self) -> &'static str {
            "Counting"
        }

        fn ask(&self, _prompt: &PromptMessage) -> PromptResult<UserAnswer> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(PromptError::message("no display"))
        }
    }

    #[test]
    fn workspace_without_git_proceeds_without_prompt() {
        let temp = TempDir::new().expect("tempdir");
        let prompter = CountingPrompter::default();

        let guard = CloseGuard::default();
        assert_eq!(guard.check(temp.path()), CloseCheck::Proceed);
        assert_eq!(guard.before_close(temp.path(), &prompter), Decision::Proceed);
        assert_eq!(prompter.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unreadable_repository_follows_error_policy() {
        let temp = TempDir::new().expect("tempdir");
        std::fs::create_dir(temp.path().join(".git")).expect("fake git dir");

        let open = CloseGuard::default();
        assert_eq!(open.check(temp.path()), CloseCheck::Proceed);

        let mut config = GuardConfig::default();
        config.guard.on_error = crate::ErrorPolicy::FailClosed;
        let closed = CloseGuard::new(config);
        assert_eq!(closed.check(temp.path()), CloseCheck::Abort);
    }

    #[test]
    fn prompt_for_no_changes_is_none() {
        assert!(prompt_for(RepoCheckResult::NoChanges).is_none());
        assert!(prompt_for(RepoCheckResult::IsDirty).is_some());
    }
}
