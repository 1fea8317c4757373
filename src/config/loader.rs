//! Settings loading.

use crate::config::schema::Settings;
use crate::error::{CreateError, Result};
use std::fs;
use std::path::Path;

/// Load a settings file and validate it.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if a value is unusable.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CreateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CreateError::Io(e)
        }
    })?;

    let settings = parse_settings(&content, path)?;
    validate(&settings)?;
    Ok(settings)
}

/// Parse YAML content into [`Settings`].
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(content).map_err(|e| CreateError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Reject values the pipeline cannot work with.
pub fn validate(settings: &Settings) -> Result<()> {
    if settings.clone_timeout == 0 {
        return Err(CreateError::ConfigValidationError {
            message: "clone_timeout must be at least 1 second".to_string(),
        });
    }

    if settings.sentinel.trim().is_empty() || settings.sentinel.contains(['/', '\\']) {
        return Err(CreateError::ConfigValidationError {
            message: format!("sentinel must be a plain file name, got '{}'", settings.sentinel),
        });
    }

    if settings.follow_up_command.trim().is_empty() {
        return Err(CreateError::ConfigValidationError {
            message: "follow_up_command must not be empty".to_string(),
        });
    }

    if settings.libs_package.trim().is_empty() {
        return Err(CreateError::ConfigValidationError {
            message: "libs_package must not be empty".to_string(),
        });
    }

    Ok(())
}

/// Load settings from an optional file, falling back to defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => {
            tracing::debug!("Loading settings from {}", path.display());
            load_settings_file(path)
        }
        None => Ok(Settings::default()),
    }
}
