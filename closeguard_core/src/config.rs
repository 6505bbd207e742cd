//! Guard configuration, read from `closeguard.toml` in the workspace root.

use std::path::Path;

use closeguard_hosts::PromptConfig;
use serde::{Deserialize, Serialize};

use crate::{inspector::InspectOptions, repository::display_path, Error, ErrorPolicy, Result};

/// Configuration file name looked up in the workspace root.
pub const CONFIG_FILE_NAME: &str = "closeguard.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Inspection and failure handling.
    pub guard: GuardSettings,
    /// Builtin prompter selection.
    pub prompt: PromptConfig,
}

/// `[guard]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardSettings {
    /// What to do when the repository cannot be inspected.
    pub on_error: ErrorPolicy,
    /// Whether untracked files count as uncommitted changes.
    pub include_untracked: bool,
}

impl Default for GuardSettings {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::FailOpen,
            include_untracked: true,
        }
    }
}

impl GuardConfig {
    /// Parse configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Config`] when it is not valid configuration.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: display_path(path),
            source,
        })?;

        toml::from_str(&content).map_err(|source| Error::Config {
            path: display_path(path),
            source,
        })
    }

    /// Load `closeguard.toml` from the workspace root, or defaults when absent.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`GuardConfig::load_from`] for a present file.
    pub fn load_or_default(workspace_root: impl AsRef<Path>) -> Result<Self> {
        let path = workspace_root.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Inspection options derived from the `[guard]` table.
    #[must_use]
    pub const fn inspect_options(&self) -> InspectOptions {
        InspectOptions {
            include_untracked: self.guard.include_untracked,
        }
    }
}
