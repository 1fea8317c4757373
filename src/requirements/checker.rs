//! Requirement verification.
//!
//! `RequirementChecker` probes each host tool through a [`CommandRunner`]
//! and stops at the first one that is missing.

use crate::config::RequirementCheckMode;
use crate::error::{CreateError, Result};
use crate::requirements::registry::Requirement;
use crate::requirements::status::RequirementStatus;
use crate::shell::{CommandOptions, CommandResult, CommandRunner};

/// Checks whether the host tools are installed.
pub struct RequirementChecker<'a> {
    runner: &'a dyn CommandRunner,
    mode: RequirementCheckMode,
}

impl<'a> RequirementChecker<'a> {
    /// Create a checker that runs probes through `runner`.
    pub fn new(runner: &'a dyn CommandRunner, mode: RequirementCheckMode) -> Self {
        Self { runner, mode }
    }

    /// Run the version check for a single requirement.
    pub fn check_one(&self, requirement: Requirement) -> RequirementStatus {
        let command = requirement.check_command();
        let status = classify(
            self.mode,
            self.runner.run(command, &CommandOptions::captured()),
        );
        tracing::debug!("{} -> {:?}", requirement, status);
        status
    }

    /// Verify every requirement in order.
    ///
    /// Stops at the first missing tool; later tools are not probed.
    ///
    /// # Errors
    ///
    /// Returns `RequirementMissing` naming the first missing tool.
    pub fn verify_all(&self) -> Result<Vec<(Requirement, RequirementStatus)>> {
        let mut found = Vec::with_capacity(Requirement::ALL.len());

        for requirement in Requirement::ALL {
            let status = self.check_one(requirement);
            if let RequirementStatus::Missing { reason } = &status {
                tracing::info!("{} is missing: {}", requirement, reason);
                return Err(CreateError::RequirementMissing {
                    requirement: requirement.name().to_string(),
                    message: requirement.install_hint().to_string(),
                });
            }
            found.push((requirement, status));
        }

        Ok(found)
    }
}

/// Classify a probe result under `mode`.
fn classify(mode: RequirementCheckMode, outcome: Result<CommandResult>) -> RequirementStatus {
    let result = match outcome {
        Ok(result) => result,
        Err(e) => {
            return RequirementStatus::Missing {
                reason: e.to_string(),
            }
        }
    };

    match mode {
        RequirementCheckMode::ExitStatus => {
            if result.timed_out {
                RequirementStatus::Missing {
                    reason: "version check timed out".to_string(),
                }
            } else if !result.success {
                RequirementStatus::Missing {
                    reason: format!("version check exited with code {:?}", result.exit_code),
                }
            } else {
                RequirementStatus::present_from_output(&format!(
                    "{}{}",
                    result.stdout, result.stderr
                ))
            }
        }
        // Some tools print banners or notices to stderr even when healthy,
        // so this mode can report a working tool as missing.
        RequirementCheckMode::Stderr => {
            if result.stderr.is_empty() {
                RequirementStatus::present_from_output(&result.stdout)
            } else {
                RequirementStatus::Missing {
                    reason: format!(
                        "version check wrote to stderr: {}",
                        result.stderr.lines().next().unwrap_or_default()
                    ),
                }
            }
        }
    }
}
