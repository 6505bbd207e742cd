//! Read-only repository access built on top of libgit2.

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use git2::{Branch, ErrorClass, ErrorCode, Repository as GitRepository, Status, StatusOptions};

use crate::{BranchTracking, Error, Result, WorkingTreeStatus};

/// Handle onto the repository being inspected.
///
/// The underlying libgit2 handle is released when this value is dropped, so a
/// handle scoped to one inspection is released on every exit path.
pub struct Repository {
    inner: GitRepository,
    root: PathBuf,
}

impl Repository {
    /// Open the repository rooted at `path`.
    ///
    /// `path` may be the working tree root or its `.git` entry. Parent
    /// directories are not searched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RepositoryNotFound`] when the path does not exist or is
    /// not a repository, [`Error::BareRepository`] when it has no working
    /// tree, and [`Error::RepositoryAccess`] for any other libgit2 failure.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let original = path.as_ref();
        let canonical = match std::fs::canonicalize(original) {
            Ok(canonical) => canonical,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                return Err(Error::RepositoryNotFound {
                    path: display_path(original),
                })
            }
            Err(source) => {
                return Err(Error::Io {
                    path: display_path(original),
                    source,
                })
            }
        };

        let repo = match GitRepository::open(&canonical) {
            Ok(repo) => repo,
            Err(err) if err.code() == ErrorCode::NotFound => {
                return Err(Error::RepositoryNotFound {
                    path: display_path(&canonical),
                })
            }
            Err(err) => return Err(Error::from(err)),
        };

        let root = repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| Error::BareRepository {
                path: display_path(&canonical),
            })?;

        Ok(Self { inner: repo, root })
    }

    /// Returns the absolute path to the working tree root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the working tree status relative to HEAD.
    ///
    /// Ignored files never count. Untracked files count when
    /// `include_untracked` is set, which matches git's default.
    ///
    /// # Errors
    ///
    /// Propagates libgit2 status enumeration failures.
    pub fn working_tree_status(&self, include_untracked: bool) -> Result<WorkingTreeStatus> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(include_untracked)
            .include_ignored(false)
            .recurse_untracked_dirs(false);

        let statuses = self.inner.statuses(Some(&mut opts))?;
        let entries = statuses
            .iter()
            .filter(|entry| {
                let status = entry.status();
                status != Status::CURRENT && !status.contains(Status::IGNORED)
            })
            .count();

        Ok(WorkingTreeStatus {
            dirty: entries > 0,
            entries,
        })
    }

    /// Returns tracking information for the checked-out branch.
    ///
    /// `None` when HEAD is unborn or detached, or when the branch has no
    /// upstream configured.
    ///
    /// # Errors
    ///
    /// Returns any error produced while resolving HEAD, the upstream, or the
    /// ahead/behind graph walk.
    pub fn branch_tracking(&self) -> Result<Option<BranchTracking>> {
        let head = match self.inner.head() {
            Ok(head) => head,
            Err(err)
                if matches!(
                    (err.class(), err.code()),
                    (
                        ErrorClass::Reference,
                        ErrorCode::NotFound | ErrorCode::UnbornBranch
                    )
                ) =>
            {
                return Ok(None)
            }
            Err(err) => return Err(Error::from(err)),
        };

        if !head.is_branch() {
            return Ok(None);
        }

        let branch_name = head.shorthand().map(str::to_owned);
        let local = Branch::wrap(head);
        let upstream = match local.upstream() {
            Ok(upstream) => upstream,
            Err(err) if err.code() == ErrorCode::NotFound => return Ok(None),
            Err(err) => return Err(Error::from(err)),
        };

        let (Some(local_oid), Some(upstream_oid)) =
            (local.get().target(), upstream.get().target())
        else {
            return Ok(None);
        };

        let (ahead, behind) = self.inner.graph_ahead_behind(local_oid, upstream_oid)?;
        let upstream_name = upstream.name()?.map(str::to_owned).unwrap_or_default();

        Ok(Some(BranchTracking {
            branch: branch_name.unwrap_or_default(),
            upstream: upstream_name,
            ahead,
            behind,
        }))
    }
}

pub(crate) fn display_path(path: &Path) -> String {
    path.to_path_buf()
        .into_os_string()
        .to_string_lossy()
        .into_owned()
}

impl fmt::Debug for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
