//! Integration tests for the interactive setup public API.

use eightshift_create::install::TargetKind;
use eightshift_create::setup::{
    ConfigurationResolver, FrontendLibsType, QuestionContext, SetupPlan, SetupType, READY_TITLE,
};
use eightshift_create::ui::MockUI;

const BASE: &str = "wp boilerplate init";

fn context(kind: TargetKind, libs: Option<&'static str>) -> QuestionContext<'static> {
    QuestionContext {
        kind,
        libs_branch: libs,
        frontend_libs_branch: None,
    }
}

#[test]
fn extended_theme_setup() {
    let mut ui = MockUI::interactive();
    ui.set_prompt_response("setup_type", "extended");
    ui.set_prompt_response("frontend_libs_type", "tailwind");
    ui.set_prompt_response("project_name", "Acme");
    ui.set_prompt_response("libs_version", "2.3.0");

    let plan = ConfigurationResolver::new(context(TargetKind::Theme, None), BASE).run(&mut ui);

    assert_eq!(
        plan,
        Some(SetupPlan::Run {
            command: "wp boilerplate init theme-setup --g_libs_version='2.3.0' --g_frontend_libs_type='tailwind' --g_project_name='Acme' --prompt='g_project_description,g_project_author,g_project_author_url'".to_string()
        })
    );
    assert!(ui.has_alert(READY_TITLE));
}

#[test]
fn branch_override_becomes_version_default() {
    let mut ui = MockUI::interactive();
    ui.set_prompt_response("setup_type", "extended");
    ui.set_prompt_response("frontend_libs_type", "standard");
    ui.set_prompt_response("project_name", "Acme");

    let choice = ConfigurationResolver::new(context(TargetKind::Plugin, Some("develop")), BASE)
        .collect(&mut ui)
        .unwrap();

    assert_eq!(choice.setup_type, SetupType::Extended);
    assert_eq!(choice.frontend_libs_type, Some(FrontendLibsType::Standard));
    assert_eq!(choice.libs_version.as_deref(), Some("develop"));
    assert_eq!(choice.frontend_libs_version, None);
}

#[test]
fn manual_setup_asks_nothing_else() {
    let mut ui = MockUI::interactive();
    ui.set_prompt_response("setup_type", "manual");

    let plan = ConfigurationResolver::new(context(TargetKind::Plugin, None), BASE).run(&mut ui);

    assert_eq!(plan, Some(SetupPlan::Manual));
    assert_eq!(ui.prompts_shown(), &["deactivate_others", "setup_type"]);
}

#[test]
fn empty_project_name_is_asked_again() {
    let mut ui = MockUI::interactive();
    ui.set_prompt_response("setup_type", "fast");
    ui.set_prompt_response("frontend_libs_type", "standard");
    ui.queue_prompt_responses("project_name", vec!["", "  ", "Acme"]);

    let choice = ConfigurationResolver::new(context(TargetKind::Theme, None), BASE)
        .collect(&mut ui)
        .unwrap();

    assert_eq!(choice.project_name.as_deref(), Some("Acme"));
    assert_eq!(ui.warnings().len(), 2);
}

#[test]
fn declined_precondition_warns_after_command() {
    let mut ui = MockUI::interactive();
    ui.set_prompt_response("deactivate_others", "no");
    ui.set_prompt_response("frontend_libs_type", "standard");
    ui.set_prompt_response("project_name", "Acme");

    let plan = ConfigurationResolver::new(context(TargetKind::Theme, None), BASE).run(&mut ui);

    assert!(matches!(plan, Some(SetupPlan::Run { .. })));
    assert!(ui.has_warning("Please deactivate all other themes"));
}
