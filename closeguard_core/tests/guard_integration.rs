mod common;

use std::sync::Mutex;

use closeguard_core::{
    CloseCheck, CloseGuard, Decision, ErrorPolicy, GuardConfig, PromptMessage, Result, UserAnswer,
};
use closeguard_host_api::{PromptResult, Prompter};
use closeguard_hosts::FixedAnswerPrompter;
use common::Fixture;
use tempfile::TempDir;

struct RecordingPrompter {
    answer: UserAnswer,
    prompts: Mutex<Vec<PromptMessage>>,
}

impl RecordingPrompter {
    fn new(answer: UserAnswer) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn prompts(&self) -> Vec<PromptMessage> {
        self.prompts.lock().expect("prompts lock").clone()
    }
}

impl Prompter for RecordingPrompter {
    fn id(&self) -> &'static str {
        "recording"
    }

    fn label(&self) -> &'static str {
        "Recording Prompter"
    }

    fn ask(&self, prompt: &PromptMessage) -> PromptResult<UserAnswer> {
        self.prompts
            .lock()
            .expect("prompts lock")
            .push(prompt.clone());
        Ok(self.answer)
    }
}

#[test]
fn clean_repository_closes_without_prompt() -> Result<()> {
    let fixture = Fixture::committed()?;
    let prompter = RecordingPrompter::new(UserAnswer::Yes);

    let decision = CloseGuard::default().before_close(fixture.root(), &prompter);

    assert_eq!(decision, Decision::Proceed);
    assert!(prompter.prompts().is_empty());
    Ok(())
}

#[test]
fn dirty_repository_asks_to_commit() -> Result<()> {
    let fixture = Fixture::committed()?;
    fixture.write("README.md", "edited\n");
    let prompter = RecordingPrompter::new(UserAnswer::Yes);

    let decision = CloseGuard::default().before_close(fixture.root(), &prompter);

    assert_eq!(decision, Decision::Abort);
    let prompts = prompter.prompts();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].title, "Uncommitted git changes!");
    Ok(())
}

#[test]
fn unpushed_repository_asks_to_push() -> Result<()> {
    let fixture = Fixture::committed()?;
    fixture.track_origin()?;
    fixture.write("README.md", "local\n");
    fixture.commit("local")?;
    let prompter = RecordingPrompter::new(UserAnswer::No);

    let decision = CloseGuard::default().before_close(fixture.root(), &prompter);

    assert_eq!(decision, Decision::Proceed);
    assert_eq!(
        prompter.prompts()[0].message,
        "Unpushed git commits, do you want to push before closing?"
    );
    Ok(())
}

#[test]
fn ok_aborts_and_cancel_proceeds() -> Result<()> {
    let fixture = Fixture::committed()?;
    fixture.write("scratch.txt", "tmp\n");
    let guard = CloseGuard::default();

    let ok = guard.before_close(fixture.root(), &FixedAnswerPrompter::new(UserAnswer::Ok));
    let cancel = guard.before_close(
        fixture.root(),
        &FixedAnswerPrompter::new(UserAnswer::Cancel),
    );

    assert_eq!(ok, Decision::Abort);
    assert_eq!(cancel, Decision::Proceed);
    Ok(())
}

#[test]
fn unrecognized_answer_keeps_close_going() -> Result<()> {
    let fixture = Fixture::committed()?;
    fixture.write("README.md", "edited\n");

    let decision = CloseGuard::default().before_close(
        fixture.root(),
        &FixedAnswerPrompter::new(UserAnswer::Unrecognized),
    );

    assert_eq!(decision, Decision::Proceed);
    Ok(())
}

#[test]
fn check_reports_prompt_for_host_dialogs() -> Result<()> {
    let fixture = Fixture::committed()?;
    fixture.write("README.md", "edited\n");

    match CloseGuard::default().check(fixture.root()) {
        CloseCheck::Ask { prompt } => {
            assert_eq!(
                prompt.message,
                "Uncommitted git changes, do you want to commit before closing?"
            );
        }
        other => panic!("expected a prompt, got {other:?}"),
    }
    Ok(())
}

#[test]
fn untracked_files_ignored_when_configured() -> Result<()> {
    let fixture = Fixture::committed()?;
    fixture.write("scratch.txt", "tmp\n");

    let mut config = GuardConfig::default();
    config.guard.include_untracked = false;

    assert_eq!(CloseGuard::new(config).check(fixture.root()), CloseCheck::Proceed);
    Ok(())
}

#[test]
fn broken_repository_fails_closed_when_configured() {
    let temp = TempDir::new().expect("tempdir");
    std::fs::write(temp.path().join(".git"), "gitdir: /nonexistent/closeguard\n")
        .expect("write gitlink");
    let prompter = RecordingPrompter::new(UserAnswer::No);

    let mut config = GuardConfig::default();
    config.guard.on_error = ErrorPolicy::FailClosed;

    let open = CloseGuard::default().before_close(temp.path(), &prompter);
    let closed = CloseGuard::new(config).before_close(temp.path(), &prompter);

    assert_eq!(open, Decision::Proceed);
    assert_eq!(closed, Decision::Abort);
    assert!(prompter.prompts().is_empty());
}

#[test]
fn config_file_in_workspace_is_honoured() -> Result<()> {
    let fixture = Fixture::committed()?;
    fixture.write(
        "closeguard.toml",
        "[guard]\ninclude_untracked = false\n",
    );
    fixture.commit("add config")?;
    fixture.write("scratch.txt", "tmp\n");

    let config = GuardConfig::load_or_default(fixture.root())?;
    assert_eq!(CloseGuard::new(config).check(fixture.root()), CloseCheck::Proceed);
    Ok(())
}
