#![allow(dead_code)]

use std::fs;
use std::path::Path;

use closeguard_core::{Error, Result};
use git2::{BranchType, ErrorClass, ErrorCode, IndexAddOption, Repository as GitRepository};
use tempfile::TempDir;

/// Working repository plus a bare repository standing in for `origin`.
pub struct Fixture {
    pub repo: GitRepository,
    pub workspace: TempDir,
    pub remote: TempDir,
}

impl Fixture {
    /// Repository with a single committed README.
    pub fn committed() -> Result<Self> {
        let workspace = TempDir::new().expect("tempdir");
        let remote = TempDir::new().expect("remote tempdir");
        GitRepository::init_bare(remote.path()).map_err(Error::from)?;
        let repo = GitRepository::init(workspace.path()).map_err(Error::from)?;

        write_file(workspace.path().join("README.md"), "hello\n");
        commit_all(&repo, "initial")?;

        Ok(Self {
            repo,
            workspace,
            remote,
        })
    }

    pub fn root(&self) -> &Path {
        self.workspace.path()
    }

    pub fn branch_name(&self) -> Result<String> {
        let head = self.repo.head().map_err(Error::from)?;
        Ok(head.shorthand().unwrap_or("main").to_owned())
    }

    /// Point `origin/<branch>` at the current HEAD and track it.
    pub fn track_origin(&self) -> Result<()> {
        let branch_name = self.branch_name()?;
        let head_oid = self
            .repo
            .head()
            .map_err(Error::from)?
            .target()
            .expect("direct head");

        let url = self.remote.path().to_string_lossy().into_owned();
        self.repo.remote("origin", &url).map_err(Error::from)?;
        self.repo
            .reference(
                &format!("refs/remotes/origin/{branch_name}"),
                head_oid,
                true,
                "simulate fetch",
            )
            .map_err(Error::from)?;

        let mut branch = self
            .repo
            .find_branch(&branch_name, BranchType::Local)
            .map_err(Error::from)?;
        branch
            .set_upstream(Some(&format!("origin/{branch_name}")))
            .map_err(Error::from)?;
        Ok(())
    }

    /// Move `origin/<branch>` to the current HEAD, as a push would.
    pub fn simulate_push(&self) -> Result<()> {
        let branch_name = self.branch_name()?;
        let head_oid = self
            .repo
            .head()
            .map_err(Error::from)?
            .target()
            .expect("direct head");
        self.repo
            .reference(
                &format!("refs/remotes/origin/{branch_name}"),
                head_oid,
                true,
                "simulate push",
            )
            .map_err(Error::from)?;
        Ok(())
    }

    pub fn write(&self, relative: &str, contents: &str) {
        write_file(self.root().join(relative), contents);
    }

    pub fn commit(&self, message: &str) -> Result<git2::Oid> {
        commit_all(&self.repo, message)
    }

    /// Add `relative` to the index without committing.
    pub fn stage(&self, relative: &str) -> Result<()> {
        let mut index = self.repo.index().map_err(Error::from)?;
        index.add_path(Path::new(relative)).map_err(Error::from)?;
        index.write().map_err(Error::from)
    }
}

pub fn commit_all(repo: &GitRepository, message: &str) -> Result<git2::Oid> {
    let parents = match repo.head() {
        Ok(reference) => {
            let commit = reference.peel_to_commit().map_err(Error::from)?;
            vec![commit]
        }
        Err(err)
            if matches!(
                (err.class(), err.code()),
                (
                    ErrorClass::Reference,
                    ErrorCode::NotFound | ErrorCode::UnbornBranch
                )
            ) =>
        {
            Vec::new()
        }
        Err(err) => return Err(Error::from(err)),
    };

    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
    let mut index = repo.index().map_err(Error::from)?;
    index
        .add_all(["*"], IndexAddOption::DEFAULT, None)
        .map_err(Error::from)?;
    index.write().map_err(Error::from)?;
    let tree_id = index.write_tree().map_err(Error::from)?;
    let tree = repo.find_tree(tree_id).map_err(Error::from)?;
    let signature = git2::Signature::now("Test User", "test@example.com").map_err(Error::from)?;

    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parent_refs,
    )
    .map_err(Error::from)
}

pub fn write_file(path: impl AsRef<Path>, contents: &str) {
    fs::create_dir_all(
        path.as_ref()
            .parent()
            .expect("path should have a parent directory"),
    )
    .expect("create directories");
    fs::write(path, contents).expect("write file");
}
