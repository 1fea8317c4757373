//! Integration tests for the install pipeline public API.

use eightshift_create::config::{ConflictPolicy, RequirementCheckMode, Settings};
use eightshift_create::install::{FollowUp, Orchestrator, TargetKind, TargetOptions};
use eightshift_create::shell::MockRunner;
use eightshift_create::ui::MockUI;
use eightshift_create::CreateError;
use std::fs;
use tempfile::TempDir;

fn wordpress() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("wp-config.php"), "<?php").unwrap();
    temp
}

#[test]
fn theme_install_from_nested_directory() {
    let temp = wordpress();
    let nested = temp.path().join("wp-content").join("uploads");
    fs::create_dir_all(&nested).unwrap();
    let settings = Settings::default();
    let runner = MockRunner::new();
    let mut ui = MockUI::new();

    let report = Orchestrator::new(
        &settings,
        &runner,
        TargetKind::Theme,
        TargetOptions::default(),
        &nested,
    )
    .run(&mut ui)
    .unwrap();

    assert_eq!(report.target.project_root, temp.path());
    assert_eq!(
        report.target.output_path,
        temp.path()
            .join("wp-content")
            .join("themes")
            .join("eightshift-boilerplate")
    );
    let activate = runner.call("wp theme activate").unwrap();
    assert_eq!(activate.cwd.as_deref(), Some(temp.path()));
    let composer = runner.call("composer require").unwrap();
    assert_eq!(
        composer.cwd.as_deref(),
        Some(report.target.output_path.as_path())
    );
    assert_eq!(report.follow_up, FollowUp::Message);
}

#[test]
fn libs_branch_pins_composer_package_and_follow_up() {
    let temp = wordpress();
    let settings = Settings::default();
    let runner = MockRunner::new();
    let mut ui = MockUI::new();
    let options = TargetOptions {
        libs_branch: "develop".to_string(),
        ..Default::default()
    };

    Orchestrator::new(&settings, &runner, TargetKind::Plugin, options, temp.path())
        .run(&mut ui)
        .unwrap();

    assert!(runner.was_called("composer require 'infinum/eightshift-libs:dev-develop'"));
    assert!(ui.has_alert("--g_libs_version='develop'"));
}

#[test]
fn missing_requirement_stops_before_clone() {
    let temp = wordpress();
    let settings = Settings::default();
    let runner = MockRunner::new().on_failure("composer -v", 127, "composer: not found");
    let mut ui = MockUI::new();

    let err = Orchestrator::new(
        &settings,
        &runner,
        TargetKind::Theme,
        TargetOptions::default(),
        temp.path(),
    )
    .run(&mut ui)
    .unwrap_err();

    assert!(matches!(err, CreateError::StepFailed { .. }));
    assert!(!runner.was_called("git clone"));
    assert!(ui.has_error("was a required step, exiting."));
}

#[test]
fn stderr_mode_treats_warnings_as_missing() {
    let temp = wordpress();
    let settings = Settings {
        requirement_check: RequirementCheckMode::Stderr,
        ..Default::default()
    };
    let runner = MockRunner::new().on_stderr("wp --info", "PHP Warning: something");
    let mut ui = MockUI::new();

    let result = Orchestrator::new(
        &settings,
        &runner,
        TargetKind::Theme,
        TargetOptions::default(),
        temp.path(),
    )
    .run(&mut ui);

    assert!(result.is_err());
    assert!(!runner.was_called("git clone"));
}

#[test]
fn refuse_and_replace_policies() {
    let temp = wordpress();
    let existing = temp
        .path()
        .join("wp-content")
        .join("themes")
        .join("eightshift-boilerplate");
    fs::create_dir_all(&existing).unwrap();
    let runner = MockRunner::new();

    let refuse = Settings::default();
    let err = Orchestrator::new(
        &refuse,
        &runner,
        TargetKind::Theme,
        TargetOptions::default(),
        temp.path(),
    )
    .run(&mut MockUI::new())
    .unwrap_err();
    assert!(matches!(err, CreateError::SetupExists { .. }));
    assert!(runner.calls().is_empty());

    let replace = Settings {
        on_conflict: ConflictPolicy::Replace,
        ..Default::default()
    };
    Orchestrator::new(
        &replace,
        &runner,
        TargetKind::Theme,
        TargetOptions::default(),
        temp.path(),
    )
    .run(&mut MockUI::new())
    .unwrap();
    assert!(!existing.exists());
    assert!(runner.was_called("git clone"));
}
