//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ConflictPolicy, Settings};
use crate::install::TargetOptions;

/// Scaffold an Eightshift boilerplate theme or plugin into a WordPress project.
#[derive(Debug, Parser)]
#[command(name = "eightshift-create")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a settings file
    #[arg(long, global = true, env = "EIGHTSHIFT_CREATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// What to do when the boilerplate is already installed
    #[arg(
        long,
        value_enum,
        global = true,
        env = "EIGHTSHIFT_CREATE_ON_CONFLICT"
    )]
    pub on_conflict: Option<ConflictPolicy>,

    /// Never prompt; print the follow-up commands instead
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(policy) = self.on_conflict {
            settings.on_conflict = policy;
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install the boilerplate theme
    Theme(SetupArgs),

    /// Install the boilerplate plugin
    Plugin(SetupArgs),
}

/// Boilerplate branch cloned when `--setup-repo-branch` is not given.
pub const DEFAULT_REPO_BRANCH: &str = "main";

/// Arguments shared by `theme` and `plugin`.
#[derive(Debug, Clone, clap::Args)]
pub struct SetupArgs {
    /// Override which boilerplate repository is cloned
    #[arg(long, alias = "setupRepoUrl", value_name = "URL")]
    pub setup_repo_url: Option<String>,

    /// Override which boilerplate branch is cloned (mainly used for testing)
    #[arg(
        long,
        alias = "setupRepoBranch",
        value_name = "BRANCH",
        default_value = DEFAULT_REPO_BRANCH
    )]
    pub setup_repo_branch: String,

    /// Override which infinum/eightshift-libs branch is installed (mainly used for testing)
    #[arg(
        long,
        alias = "libsRepoBranch",
        value_name = "BRANCH",
        default_value = ""
    )]
    pub libs_repo_branch: String,

    /// Override which infinum/eightshift-frontend-libs branch is used (mainly used for testing)
    #[arg(
        long,
        alias = "frontendLibsRepoBranch",
        value_name = "BRANCH",
        default_value = ""
    )]
    pub frontend_libs_repo_branch: String,
}

impl Default for SetupArgs {
    fn default() -> Self {
        Self {
            setup_repo_url: None,
            setup_repo_branch: DEFAULT_REPO_BRANCH.to_string(),
            libs_repo_branch: String::new(),
            frontend_libs_repo_branch: String::new(),
        }
    }
}

impl From<&SetupArgs> for TargetOptions {
    fn from(args: &SetupArgs) -> Self {
        Self {
            repo_url: args.setup_repo_url.clone(),
            repo_branch: args.setup_repo_branch.clone(),
            libs_branch: args.libs_repo_branch.clone(),
            frontend_libs_branch: args.frontend_libs_repo_branch.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn theme_defaults() {
        let cli = Cli::try_parse_from(["eightshift-create", "theme"]).unwrap();

        let Commands::Theme(args) = cli.command else {
            panic!("Expected theme command");
        };
        assert_eq!(args.setup_repo_url, None);
        assert_eq!(args.setup_repo_branch, "main");
        assert_eq!(args.libs_repo_branch, "");
        assert_eq!(args.frontend_libs_repo_branch, "");
    }

    #[test]
    fn default_args_match_parsed_defaults() {
        let cli = Cli::try_parse_from(["eightshift-create", "theme"]).unwrap();
        let Commands::Theme(parsed) = cli.command else {
            panic!("Expected theme command");
        };
        let default = SetupArgs::default();

        assert_eq!(default.setup_repo_url, parsed.setup_repo_url);
        assert_eq!(default.setup_repo_branch, parsed.setup_repo_branch);
        assert_eq!(default.libs_repo_branch, parsed.libs_repo_branch);
        assert_eq!(
            default.frontend_libs_repo_branch,
            parsed.frontend_libs_repo_branch
        );
    }

    #[test]
    fn camel_case_aliases_are_accepted() {
        let cli = Cli::try_parse_from([
            "eightshift-create",
            "plugin",
            "--setupRepoUrl",
            "https://example.com/fork.git",
            "--setupRepoBranch",
            "develop",
            "--libsRepoBranch",
            "feature/x",
            "--frontendLibsRepoBranch",
            "release/6",
        ])
        .unwrap();

        let Commands::Plugin(args) = cli.command else {
            panic!("Expected plugin command");
        };
        let options = TargetOptions::from(&args);
        assert_eq!(
            options.repo_url.as_deref(),
            Some("https://example.com/fork.git")
        );
        assert_eq!(options.repo_branch, "develop");
        assert_eq!(options.libs_branch, "feature/x");
        assert_eq!(options.frontend_libs_branch, "release/6");
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from([
            "eightshift-create",
            "theme",
            "--on-conflict",
            "replace",
            "--non-interactive",
            "--debug",
        ])
        .unwrap();

        assert_eq!(cli.on_conflict, Some(ConflictPolicy::Replace));
        assert!(cli.non_interactive);
        assert!(cli.debug);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["eightshift-create"]).is_err());
    }

    #[test]
    fn on_conflict_override_replaces_setting() {
        let cli =
            Cli::try_parse_from(["eightshift-create", "--on-conflict", "replace", "theme"]).unwrap();
        let mut settings = Settings::default();

        cli.apply_overrides(&mut settings);

        assert_eq!(settings.on_conflict, ConflictPolicy::Replace);
    }
}
