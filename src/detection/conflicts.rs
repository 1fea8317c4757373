//! Conflict detection for the output path.

use std::fs;
use std::path::Path;

use crate::config::ConflictPolicy;
use crate::error::{CreateError, Result};

/// What the conflict check decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictResolution {
    /// Nothing was in the way.
    Clear,
    /// An existing install is in the way and will be removed before the
    /// new one is cloned, under [`ConflictPolicy::Replace`].
    Replace,
}

/// Apply `policy` to an output path that may already exist.
///
/// Never touches the filesystem; see [`remove_existing`].
/// `kind` only feeds the error message ("theme" or "plugin").
///
/// # Errors
///
/// Returns `SetupExists` under [`ConflictPolicy::Refuse`] when the path
/// exists.
pub fn resolve_conflict(
    output_path: &Path,
    kind: &str,
    policy: ConflictPolicy,
) -> Result<ConflictResolution> {
    if !output_path.exists() {
        return Ok(ConflictResolution::Clear);
    }

    match policy {
        ConflictPolicy::Refuse => Err(CreateError::SetupExists {
            kind: kind.to_string(),
            path: output_path.to_path_buf(),
        }),
        ConflictPolicy::Replace => Ok(ConflictResolution::Replace),
    }
}

/// Delete whatever occupies `output_path`. A missing path is fine.
pub fn remove_existing(output_path: &Path) -> Result<()> {
    if output_path.is_dir() {
        tracing::warn!("Removing existing install at {}", output_path.display());
        fs::remove_dir_all(output_path)?;
    } else if output_path.exists() {
        tracing::warn!("Removing existing file at {}", output_path.display());
        fs::remove_file(output_path)?;
    }
    Ok(())
}
