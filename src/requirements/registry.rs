//! Requirement definitions.
//!
//! The host tools every install needs, in the order they are checked.

use std::fmt;

/// A host tool the pipeline depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Node,
    Composer,
    WpCli,
    Git,
}

impl Requirement {
    /// Every requirement, in check order.
    pub const ALL: [Requirement; 4] = [
        Requirement::Node,
        Requirement::Composer,
        Requirement::WpCli,
        Requirement::Git,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Requirement::Node => "Node.js",
            Requirement::Composer => "Composer",
            Requirement::WpCli => "WP-CLI",
            Requirement::Git => "Git",
        }
    }

    /// Command that prints the tool's version when it is installed.
    pub fn check_command(&self) -> &'static str {
        match self {
            Requirement::Node => "node -v",
            Requirement::Composer => "composer -v",
            Requirement::WpCli => "wp --info",
            Requirement::Git => "git --version",
        }
    }

    /// What to tell the user when the tool is missing.
    pub fn install_hint(&self) -> &'static str {
        match self {
            Requirement::Node => "Please install Node.js LTS version.",
            Requirement::Composer => "Please install Composer LTS version.",
            Requirement::WpCli => "Please install WP-CLI 2.9.0+ version.",
            Requirement::Git => "Please install Git LTS version.",
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
