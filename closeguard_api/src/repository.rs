use serde::{Deserialize, Serialize};

/// Snapshot of the working tree relative to the last commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WorkingTreeStatus {
    /// Indicates if any tracked or untracked file differs from HEAD.
    pub dirty: bool,
    /// Number of status entries that contributed to `dirty`.
    #[serde(default)]
    pub entries: usize,
}

impl WorkingTreeStatus {
    /// A working tree with no pending changes.
    #[must_use]
    pub const fn clean() -> Self {
        Self {
            dirty: false,
            entries: 0,
        }
    }
}

/// Tracking information for the currently checked-out branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchTracking {
    /// Short name of the local branch (e.g., "main").
    pub branch: String,
    /// Short name of the configured upstream (e.g., "origin/main").
    pub upstream: String,
    /// Commits present locally but not on the upstream.
    pub ahead: usize,
    /// Commits present on the upstream but not locally.
    #[serde(default)]
    pub behind: usize,
}

impl BranchTracking {
    /// Whether the local branch carries commits the upstream lacks.
    #[must_use]
    pub const fn has_unpushed(&self) -> bool {
        self.ahead > 0
    }
}

/// Classification of a repository's state, the single output of an inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoCheckResult {
    /// Clean working tree and nothing left to push.
    NoChanges,
    /// The working tree has uncommitted modifications.
    IsDirty,
    /// The tree is clean but the branch is ahead of its upstream.
    UnpushedChanges,
}

impl RepoCheckResult {
    /// Classify a repository from its working tree and tracking state.
    ///
    /// A dirty tree always wins; the ahead count is only consulted for a clean
    /// tree, and a branch without an upstream has nothing to push.
    #[must_use]
    pub fn from_state(status: &WorkingTreeStatus, tracking: Option<&BranchTracking>) -> Self {
        if status.dirty {
            return Self::IsDirty;
        }

        match tracking {
            Some(tracking) if tracking.has_unpushed() => Self::UnpushedChanges,
            _ => Self::NoChanges,
        }
    }

    /// Whether this result should interrupt a close.
    #[must_use]
    pub const fn needs_attention(self) -> bool {
        !matches!(self, Self::NoChanges)
    }
}
