//! Compiling answers into the downstream setup command.
//!
//! Pure functions; the resolver decides how to show the result.

use crate::install::TargetKind;
use crate::setup::choice::{FrontendLibsType, SetupChoice, SetupType};

/// Fields the downstream tool still asks for after an extended setup.
pub const EXTENDED_PROMPT_FIELDS: &str = "g_project_description,g_project_author,g_project_author_url";

/// What the user should run next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupPlan {
    /// A ready-to-run setup command.
    Run { command: String },
    /// The user picked manual setup.
    Manual,
}

/// Append ` --<name>='<value>'` to `params`.
pub(crate) fn push_flag(params: &mut String, name: &str, value: &str) {
    params.push_str(&format!(" --{}='{}'", name, value.replace('\'', r"'\''")));
}

/// The parameter string for the present fields, in a fixed order.
pub fn compile_params(choice: &SetupChoice) -> String {
    let mut params = String::new();

    if let Some(version) = &choice.libs_version {
        push_flag(&mut params, "g_libs_version", version);
    }
    if let Some(version) = &choice.frontend_libs_version {
        push_flag(&mut params, "g_frontend_libs_version", version);
    }
    if choice.frontend_libs_type == Some(FrontendLibsType::Tailwind) {
        push_flag(&mut params, "g_frontend_libs_type", FrontendLibsType::Tailwind.value());
    }
    if let Some(name) = &choice.project_name {
        push_flag(&mut params, "g_project_name", name);
    }

    params
}

/// `<kind>-clean-setup` for clean frontend libs, `<kind>-setup` otherwise.
pub fn command_name(kind: TargetKind, choice: &SetupChoice) -> String {
    if choice.frontend_libs_type == Some(FrontendLibsType::Clean) {
        format!("{}-clean-setup", kind)
    } else {
        format!("{}-setup", kind)
    }
}

/// The `--prompt` flag for the setup type, if it needs one.
pub fn prompt_flag(setup_type: SetupType) -> Option<String> {
    match setup_type {
        SetupType::Extended => Some(format!(" --prompt='{}'", EXTENDED_PROMPT_FIELDS)),
        SetupType::Fast | SetupType::Manual => None,
    }
}

/// Compile the full follow-up for `choice`.
///
/// `base_command` is the downstream entry point (`wp boilerplate init`).
pub fn compile(kind: TargetKind, choice: &SetupChoice, base_command: &str) -> SetupPlan {
    if choice.setup_type == SetupType::Manual {
        return SetupPlan::Manual;
    }

    let mut command = format!(
        "{} {}{}",
        base_command,
        command_name(kind, choice),
        compile_params(choice)
    );
    if let Some(flag) = prompt_flag(choice.setup_type) {
        command.push_str(&flag);
    }

    SetupPlan::Run { command }
}
