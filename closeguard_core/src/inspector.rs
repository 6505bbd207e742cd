//! Classifies a repository as clean, dirty, or carrying unpushed commits.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{repository::Repository, RepoCheckResult, Result};

/// Name of the repository entry inside a workspace root.
pub const GIT_DIR_NAME: &str = ".git";

/// Knobs for [`classify_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectOptions {
    /// Whether untracked, non-ignored files make the tree dirty.
    pub include_untracked: bool,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            include_untracked: true,
        }
    }
}

/// Returns `<workspace_root>/.git` when it exists.
///
/// Both a `.git` directory and a `.git` file (linked worktrees) qualify.
#[must_use]
pub fn locate(workspace_root: impl AsRef<Path>) -> Option<PathBuf> {
    let candidate = workspace_root.as_ref().join(GIT_DIR_NAME);
    candidate.exists().then_some(candidate)
}

/// Classify the repository at `repo_path` with default options.
///
/// # Errors
///
/// See [`classify_with`].
pub fn classify(repo_path: impl AsRef<Path>) -> Result<RepoCheckResult> {
    classify_with(repo_path, &InspectOptions::default())
}

/// Classify the repository at `repo_path`.
///
/// The tree is checked first and a dirty tree returns immediately; tracking
/// information is only read for a clean tree. The repository is opened for the
/// duration of this call only.
///
/// # Errors
///
/// Returns [`crate::Error::RepositoryNotFound`] for a path that is not a
/// repository and [`crate::Error::RepositoryAccess`] when libgit2 cannot open
/// or query it.
pub fn classify_with(
    repo_path: impl AsRef<Path>,
    options: &InspectOptions,
) -> Result<RepoCheckResult> {
    let repo_path = repo_path.as_ref();
    let repository = Repository::open(repo_path)?;

    let status = repository.working_tree_status(options.include_untracked)?;
    if status.dirty {
        debug!(path = %repo_path.display(), entries = status.entries, "working tree is dirty");
        return Ok(RepoCheckResult::IsDirty);
    }

    let tracking = repository.branch_tracking()?;
    if let Some(tracking) = &tracking {
        debug!(
            branch = %tracking.branch,
            upstream = %tracking.upstream,
            ahead = tracking.ahead,
            behind = tracking.behind,
            "branch tracking"
        );
    }

    Ok(RepoCheckResult::from_state(&status, tracking.as_ref()))
}
