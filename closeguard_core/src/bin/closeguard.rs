//! Terminal host for CloseGuard, usable from editor hooks and scripts.
//!
//! Exits 0 when the workspace may close, 1 when the close should be
//! cancelled, and 2 when the guard itself could not run.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use closeguard_core::{logging, CloseCheck, CloseGuard, Decision, GuardConfig, UserAnswer};
use closeguard_hosts::{default_prompter, FixedAnswerPrompter};

#[derive(Debug, Parser)]
#[command(
    name = "closeguard",
    version,
    about = "Warn before closing a workspace with uncommitted or unpushed git work"
)]
struct Cli {
    /// Workspace root to check (defaults to the current directory).
    workspace: Option<PathBuf>,

    /// Configuration file (defaults to <WORKSPACE>/closeguard.toml).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Answer every prompt with this value instead of asking.
    #[arg(long, value_parser = parse_answer)]
    answer: Option<UserAnswer>,

    /// Print the check outcome without prompting.
    #[arg(long)]
    check_only: bool,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = logging::DEFAULT_LEVEL)]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(Some(&cli.log_level));

    match run(&cli) {
        Ok(Decision::Proceed) => ExitCode::SUCCESS,
        Ok(Decision::Abort) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<Decision> {
    let workspace = match &cli.workspace {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("failed to read current directory")?,
    };

    let config = match &cli.config {
        Some(path) => GuardConfig::load_from(path)?,
        None => GuardConfig::load_or_default(&workspace)?,
    };
    let guard = CloseGuard::new(config);

    if cli.check_only {
        let check = guard.check(&workspace);
        return Ok(match check {
            CloseCheck::Proceed => {
                println!("proceed");
                Decision::Proceed
            }
            CloseCheck::Abort => {
                println!("abort");
                Decision::Abort
            }
            CloseCheck::Ask { prompt } => {
                println!("{}: {}", prompt.title, prompt.message);
                Decision::Abort
            }
        });
    }

    let decision = match cli.answer {
        Some(answer) => guard.before_close(&workspace, &FixedAnswerPrompter::new(answer)),
        None => {
            let prompter = default_prompter(&guard.config().prompt)
                .context("failed to set up the prompt")?;
            guard.before_close(&workspace, prompter.as_ref())
        }
    };

    Ok(decision)
}

fn parse_answer(value: &str) -> std::result::Result<UserAnswer, String> {
    match UserAnswer::parse(value) {
        UserAnswer::Unrecognized => Err(format!(
            "unknown answer '{value}', expected yes, no, ok or cancel"
        )),
        answer => Ok(answer),
    }
}
