//! Requirement status types.

use std::sync::LazyLock;

use regex::Regex;

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+(?:\.\d+)?").expect("version pattern is valid"));

/// The result of checking a single requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementStatus {
    /// The tool answered its version check.
    Present {
        /// First version number found in the check output, if any.
        version: Option<String>,
    },

    /// The tool is not usable.
    Missing {
        /// Why the check classified it as missing.
        reason: String,
    },
}

impl RequirementStatus {
    /// Whether the requirement is satisfied.
    pub fn is_present(&self) -> bool {
        matches!(self, RequirementStatus::Present { .. })
    }

    /// Build a `Present` status, pulling the version out of `output`.
    pub fn present_from_output(output: &str) -> Self {
        RequirementStatus::Present {
            version: extract_version(output),
        }
    }
}

/// Extract the first dotted version number from tool output.
///
/// Handles `v20.11.1`, `git version 2.43.0` and `Composer version 2.7.1 ...`.
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_REGEX
        .find(output)
        .map(|m| m.as_str().to_string())
}
