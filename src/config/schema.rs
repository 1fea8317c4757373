//! Settings schema.
//!
//! Maps the optional YAML settings file. Every field has a default, so an
//! empty file (or no file at all) yields [`Settings::default`].

use serde::{Deserialize, Serialize};

/// Tool settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// What to do when the output path already exists.
    pub on_conflict: ConflictPolicy,

    /// Seconds before the clone step is killed and treated as failed.
    pub clone_timeout: u64,

    /// How requirement checks decide that a tool is missing.
    pub requirement_check: RequirementCheckMode,

    /// File whose presence marks the WordPress project root.
    pub sentinel: String,

    /// Downstream command the follow-up instructions invoke.
    pub follow_up_command: String,

    /// Composer package installed into the cloned boilerplate.
    pub libs_package: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            on_conflict: ConflictPolicy::default(),
            clone_timeout: default_clone_timeout(),
            requirement_check: RequirementCheckMode::default(),
            sentinel: default_sentinel(),
            follow_up_command: default_follow_up_command(),
            libs_package: default_libs_package(),
        }
    }
}

fn default_clone_timeout() -> u64 {
    45
}

fn default_sentinel() -> String {
    "wp-config.php".to_string()
}

fn default_follow_up_command() -> String {
    "wp boilerplate init".to_string()
}

fn default_libs_package() -> String {
    "infinum/eightshift-libs".to_string()
}

/// Policy for an output path that already exists.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Stop without touching anything.
    #[default]
    Refuse,
    /// Delete the existing directory and install fresh.
    Replace,
}

/// How a version-check command is classified as missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementCheckMode {
    /// Missing when the check cannot start, times out, or exits non-zero.
    #[default]
    ExitStatus,
    /// Missing when the check writes anything to stderr.
    Stderr,
}
