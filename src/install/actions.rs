//! The external commands each install step runs.

use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::install::target::TargetKind;
use crate::shell::{shell_quote, CommandOptions, CommandRunner};

/// `git clone [-b '<branch>'] -- '<url>' '<path>'`.
pub fn clone_command(url: &str, branch: &str, output_path: &Path) -> String {
    let url = shell_quote(url);
    let path = shell_quote(&output_path.to_string_lossy());
    if branch.is_empty() {
        format!("git clone -- {} {}", url, path)
    } else {
        format!("git clone -b {} -- {} {}", shell_quote(branch), url, path)
    }
}

/// Clone the boilerplate repository, killing git after `timeout`.
///
/// Git is told never to ask for credentials so a private URL fails
/// instead of blocking until the deadline.
pub fn clone_repository(
    runner: &dyn CommandRunner,
    url: &str,
    branch: &str,
    output_path: &Path,
    timeout: Duration,
) -> Result<()> {
    let command = clone_command(url, branch, output_path);
    let options = CommandOptions::captured()
        .with_timeout(timeout)
        .with_env("GIT_TERMINAL_PROMPT", "0");

    let result = runner.run(&command, &options)?.check(&command)?;
    tracing::debug!("Cloned {} in {:?}", url, result.duration);
    Ok(())
}

/// `wp theme activate <name>` or `wp plugin activate <name>`.
pub fn activate_command(kind: TargetKind, artifact_name: &str) -> String {
    format!("wp {} activate {}", kind.as_str(), artifact_name)
}

/// Activate the installed artifact through WP-CLI.
///
/// Runs from the project root so WP-CLI finds the install.
pub fn activate(
    runner: &dyn CommandRunner,
    kind: TargetKind,
    artifact_name: &str,
    project_root: &Path,
) -> Result<()> {
    let command = activate_command(kind, artifact_name);
    let options = CommandOptions::captured().in_dir(project_root);

    runner.run(&command, &options)?.check(&command)?;
    Ok(())
}

/// Composer package spec, pinned to `dev-<branch>` when a branch is given.
pub fn dependency_spec(package: &str, branch: Option<&str>) -> String {
    match branch {
        Some(branch) => format!("{}:dev-{}", package, branch),
        None => package.to_string(),
    }
}

/// `composer require '<spec>' --no-interaction`.
pub fn install_command(package: &str, branch: Option<&str>) -> String {
    format!(
        "composer require {} --no-interaction",
        shell_quote(&dependency_spec(package, branch))
    )
}

/// Require the libs package inside the cloned boilerplate.
pub fn install_dependencies(
    runner: &dyn CommandRunner,
    package: &str,
    branch: Option<&str>,
    output_path: &Path,
) -> Result<()> {
    let command = install_command(package, branch);
    let options = CommandOptions::captured().in_dir(output_path);

    runner.run(&command, &options)?.check(&command)?;
    Ok(())
}
