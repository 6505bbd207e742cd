//! Core library for CloseGuard, the check a host runs before a workspace closes.
//!
//! The crate is layered around three responsibilities:
//! - read-only repository inspection (dirty tree, unpushed commits)
//! - mapping the classification to a prompt and the answer to a decision
//! - host integration through UniFFI bindings and the `closeguard` binary

#![warn(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    missing_docs
)]
#![cfg_attr(
    not(test),
    deny(
        clippy::dbg_macro,
        clippy::expect_used,
        clippy::panic,
        clippy::print_stderr,
        clippy::print_stdout,
        clippy::todo,
        clippy::unwrap_used
    )
)]

/// Guard configuration loaded from `closeguard.toml`.
pub mod config;
/// UniFFI surface consumed by host applications.
pub mod ffi;
/// Close decision flow built on top of the inspector.
pub mod guard;
/// Repository state classification.
pub mod inspector;
/// Tracing subscriber setup for hosts and binaries.
pub mod logging;
/// Git repository access helpers.
pub mod repository;

pub use closeguard_api::{
    BranchTracking, CloseCheck, Decision, ErrorPolicy, PromptMessage, RepoCheckResult, UserAnswer,
    WorkingTreeStatus,
};
pub use config::GuardConfig;
// Generated scaffolding resolves the tag at the crate root.
pub use ffi::UniFfiTag;
pub use guard::CloseGuard;
pub use inspector::{classify, classify_with, locate, InspectOptions};

/// Common result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the core library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Provided path does not correspond to a git repository.
    #[error("path does not reference a git repository: {path}")]
    RepositoryNotFound {
        /// Path that failed to resolve to a repository.
        path: String,
    },
    /// Repository exists but could not be opened or queried.
    #[error("git error: {source}")]
    RepositoryAccess {
        /// Original libgit2 error bubbled up by the core library.
        #[from]
        source: git2::Error,
    },
    /// Bare repositories have no working tree to inspect.
    #[error("repository at {path} is bare and unsupported")]
    BareRepository {
        /// Path of the repository lacking a working tree.
        path: String,
    },
    /// Filesystem interaction failed.
    #[error("failed to access {path}: {source}")]
    Io {
        /// Filesystem path involved in the failed operation.
        path: String,
        /// Source I/O error returned by the standard library.
        #[source]
        source: std::io::Error,
    },
    /// Configuration file could not be parsed.
    #[error("invalid configuration in {path}: {source}")]
    Config {
        /// Path of the offending configuration file.
        path: String,
        /// Parser error.
        #[source]
        source: toml::de::Error,
    },
}
