use thiserror::Error;

use crate::Error;

/// Errors surfaced through the `UniFFI` bindings.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Path does not correspond to a git repository.
    #[error("path is not a git repository")]
    RepositoryNotFound,
    /// Repository could not be opened or queried.
    #[error("git error")]
    RepositoryAccess,
    /// Repository is bare and has no working tree.
    #[error("repository is bare and unsupported")]
    BareRepository,
    /// Filesystem interaction failed.
    #[error("filesystem error")]
    Io,
    /// Configuration file is invalid.
    #[error("invalid configuration")]
    Config,
}

impl From<Error> for CoreError {
    fn from(error: Error) -> Self {
        match error {
            Error::RepositoryNotFound { .. } => Self::RepositoryNotFound,
            Error::RepositoryAccess { .. } => Self::RepositoryAccess,
            Error::BareRepository { .. } => Self::BareRepository,
            Error::Io { .. } => Self::Io,
            Error::Config { .. } => Self::Config,
        }
    }
}
