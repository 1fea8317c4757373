//! What gets installed and where.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::detection::{locate_root, CONTENT_DIR};
use crate::error::Result;

/// The kind of boilerplate being installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Theme,
    Plugin,
}

impl TargetKind {
    /// Lowercase name used in commands and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::Plugin => "plugin",
        }
    }

    /// Directory name of the installed artifact.
    pub fn artifact_name(&self) -> &'static str {
        match self {
            Self::Theme => "eightshift-boilerplate",
            Self::Plugin => "eightshift-boilerplate-plugin",
        }
    }

    /// Directory under `wp-content` holding artifacts of this kind.
    pub fn content_subdir(&self) -> &'static str {
        match self {
            Self::Theme => "themes",
            Self::Plugin => "plugins",
        }
    }

    /// Boilerplate repository cloned when no URL is given.
    pub fn default_repo_url(&self) -> &'static str {
        match self {
            Self::Theme => "https://github.com/infinum/eightshift-boilerplate.git",
            Self::Plugin => "https://github.com/infinum/eightshift-boilerplate-plugin.git",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-supplied overrides for a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOptions {
    /// Repository to clone; the kind's default when `None`.
    pub repo_url: Option<String>,
    /// Branch to clone. Empty clones the remote's default branch.
    pub repo_branch: String,
    /// Libs branch to pin. Empty means latest.
    pub libs_branch: String,
    /// Frontend libs branch to pin. Empty means latest.
    pub frontend_libs_branch: String,
}

impl Default for TargetOptions {
    fn default() -> Self {
        Self {
            repo_url: None,
            repo_branch: "main".to_string(),
            libs_branch: String::new(),
            frontend_libs_branch: String::new(),
        }
    }
}

/// A fully resolved install target. Immutable for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    pub kind: TargetKind,
    pub artifact_name: String,
    pub repo_url: String,
    pub repo_branch: String,
    pub libs_branch: String,
    pub frontend_libs_branch: String,
    /// Directory holding the sentinel file.
    pub project_root: PathBuf,
    /// `<root>/wp-content/<themes|plugins>/<artifact>`.
    pub output_path: PathBuf,
}

impl InstallTarget {
    /// Locate the project enclosing `start` and build the target for `kind`.
    ///
    /// # Errors
    ///
    /// Returns `ProjectRootNotFound` when no ancestor of `start` holds the
    /// sentinel.
    pub fn resolve(
        kind: TargetKind,
        options: &TargetOptions,
        start: &Path,
        sentinel: &str,
    ) -> Result<Self> {
        let project_root = locate_root(start, sentinel)?;
        let output_path = project_root
            .join(CONTENT_DIR)
            .join(kind.content_subdir())
            .join(kind.artifact_name());

        let repo_url = options
            .repo_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(kind.default_repo_url())
            .to_string();

        Ok(Self {
            kind,
            artifact_name: kind.artifact_name().to_string(),
            repo_url,
            repo_branch: options.repo_branch.trim().to_string(),
            libs_branch: options.libs_branch.trim().to_string(),
            frontend_libs_branch: options.frontend_libs_branch.trim().to_string(),
            project_root,
            output_path,
        })
    }

    /// Libs branch override, if one was given.
    pub fn libs_branch(&self) -> Option<&str> {
        non_empty(&self.libs_branch)
    }

    /// Frontend libs branch override, if one was given.
    pub fn frontend_libs_branch(&self) -> Option<&str> {
        non_empty(&self.frontend_libs_branch)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
