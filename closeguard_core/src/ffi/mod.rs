mod error;
mod session;

pub use error::CoreError;
pub use session::{
    answer_from_code, classify, decide, init_logging, locate_repository, open_guard, prompt_for,
    GuardSession,
};

#[allow(
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::missing_errors_doc,
    clippy::empty_line_after_doc_comments,
    clippy::missing_safety_doc,
    clippy::needless_pass_by_value
)]
mod scaffolding {
    use super::{
        answer_from_code, classify, decide, init_logging, locate_repository, open_guard,
        prompt_for, CoreError, GuardSession,
    };
    use crate::{CloseCheck, Decision, PromptMessage, RepoCheckResult, UserAnswer};

    uniffi::include_scaffolding!("closeguard_core");
}

pub use scaffolding::*;
