use std::ffi::OsString;
use std::io::{self, Read};
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use closeguard_host_api::{PromptError, PromptMessage, PromptResult, Prompter, UserAnswer};
use wait_timeout::ChildExt;

/// Default number of seconds to wait for the user to answer.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const MESSAGE_PLACEHOLDER: &str = "{message}";
const TITLE_PLACEHOLDER: &str = "{title}";
const MESSAGE_ENV: &str = "CLOSEGUARD_PROMPT_MESSAGE";
const TITLE_ENV: &str = "CLOSEGUARD_PROMPT_TITLE";

struct ProcessOutput {
    status: Option<i32>,
    stdout: String,
}

/// Prompter that delegates to an external dialog program such as `zenity`.
///
/// `{message}` and `{title}` in the arguments are substituted; the prompt is
/// also exported as `CLOSEGUARD_PROMPT_MESSAGE` and `CLOSEGUARD_PROMPT_TITLE`.
/// An answer printed on stdout (`yes`, `no`, `ok`, `cancel`) wins over the
/// exit status, which otherwise maps 0 to yes and 1 to no.
#[derive(Debug, Clone)]
pub struct CommandPrompter {
    program: OsString,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandPrompter {
    /// Construct a prompter from a program and its arguments.
    #[must_use]
    pub fn new(program: impl Into<OsString>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Construct a prompter from an argv-style command line.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Unavailable`] when the command line is empty.
    pub fn from_argv(argv: &[String]) -> PromptResult<Self> {
        let (program, args) = argv.split_first().ok_or_else(|| PromptError::Unavailable {
            prompter: "command",
            reason: "no dialog command configured".into(),
        })?;
        Ok(Self::new(program, args.to_vec()))
    }

    /// Override the time the user has to answer.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn run(&self, prompt: &PromptMessage) -> PromptResult<ProcessOutput> {
        let args: Vec<String> = self
            .args
            .iter()
            .map(|arg| {
                arg.replace(MESSAGE_PLACEHOLDER, &prompt.message)
                    .replace(TITLE_PLACEHOLDER, &prompt.title)
            })
            .collect();

        let mut command = Command::new(&self.program);
        command
            .args(&args)
            .env(MESSAGE_ENV, &prompt.message)
            .env(TITLE_ENV, &prompt.title)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());

        let mut child = command.spawn().map_err(|err| PromptError::Unavailable {
            prompter: "command",
            reason: format!("failed to spawn {}: {err}", self.program.to_string_lossy()),
        })?;

        let started = Instant::now();
        // A grandchild can hold the pipe open after the child exits; the read
        // shares the child's timeout budget.
        let stdout_reader = child.stdout.take().map(|mut stdout| {
            let (sender, receiver) = mpsc::channel();
            thread::spawn(move || {
                let mut buffer = Vec::new();
                let result = stdout.read_to_end(&mut buffer).map(|_| buffer);
                let _ = sender.send(result);
            });
            receiver
        });

        let status = match child.wait_timeout(self.timeout) {
            Ok(Some(status)) => status,
            Ok(None) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(PromptError::TimedOut {
                    seconds: self.timeout.as_secs(),
                });
            }
            Err(err) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(PromptError::message(format!(
                    "failed waiting on dialog command: {err}"
                )));
            }
        };

        let remaining = self.timeout.saturating_sub(started.elapsed());
        let stdout = collect_reader(stdout_reader, remaining, self.timeout)?;
        Ok(ProcessOutput {
            status: status.code(),
            stdout,
        })
    }
}

impl Prompter for CommandPrompter {
    fn id(&self) -> &'static str {
        "command"
    }

    fn label(&self) -> &'static str {
        "External Dialog"
    }

    fn ask(&self, prompt: &PromptMessage) -> PromptResult<UserAnswer> {
        let output = self.run(prompt)?;
        Ok(interpret(&output))
    }
}

fn interpret(output: &ProcessOutput) -> UserAnswer {
    let printed = output
        .stdout
        .lines()
        .rev()
        .map(UserAnswer::parse)
        .find(|answer| *answer != UserAnswer::Unrecognized);
    if let Some(answer) = printed {
        return answer;
    }

    match output.status {
        Some(0) => UserAnswer::Yes,
        Some(1) => UserAnswer::No,
        _ => UserAnswer::Unrecognized,
    }
}

fn collect_reader(
    reader: Option<Receiver<io::Result<Vec<u8>>>>,
    remaining: Duration,
    timeout: Duration,
) -> PromptResult<String> {
    let Some(receiver) = reader else {
        return Ok(String::new());
    };
    let bytes = match receiver.recv_timeout(remaining) {
        Ok(result) => result.map_err(|err| {
            PromptError::message(format!("failed to read dialog stdout: {err}"))
        })?,
        Err(RecvTimeoutError::Timeout) => {
            return Err(PromptError::TimedOut {
                seconds: timeout.as_secs(),
            })
        }
        Err(RecvTimeoutError::Disconnected) => {
            return Err(PromptError::message("dialog stdout reader exited early"))
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
