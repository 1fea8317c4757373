//! Follow-up instructions for non-interactive runs.

use crate::install::target::{InstallTarget, TargetKind};
use crate::setup::params::push_flag;
use crate::setup::READY_TITLE;
use crate::ui::{Alert, AlertKind};

/// Fields the downstream tool asks for in the minimal follow-up.
const MINIMAL_PROMPT: &str = "g_project_name";

/// Fields the downstream tool asks for in the full follow-up.
const FULL_PROMPT: &str = "g_project_name,g_project_description,g_project_author,g_project_author_url";

/// Parameters carried over from the branch overrides.
pub fn follow_up_params(libs_branch: Option<&str>, frontend_libs_branch: Option<&str>) -> String {
    let mut params = String::new();
    if let Some(branch) = libs_branch {
        push_flag(&mut params, "g_libs_version", branch);
    }
    if let Some(branch) = frontend_libs_branch {
        push_flag(&mut params, "g_frontend_libs_version", branch);
    }
    params
}

/// The minimal and the full follow-up command, in that order.
pub fn follow_up_commands(kind: TargetKind, base_command: &str, params: &str) -> [String; 2] {
    [MINIMAL_PROMPT, FULL_PROMPT]
        .map(|fields| format!("{} {}-setup{} --prompt='{}'", base_command, kind, params, fields))
}

/// Alert listing both follow-up commands for `target`.
pub fn follow_up_alert(target: &InstallTarget, base_command: &str) -> Alert {
    let params = follow_up_params(target.libs_branch(), target.frontend_libs_branch());
    let [minimal, full] = follow_up_commands(target.kind, base_command, &params);

    Alert::new(AlertKind::Success, READY_TITLE)
        .line("To finish your setup please run one of the following commands:")
        .line("")
        .line(format!("Setup {} fast:", target.kind))
        .line(minimal)
        .line("")
        .line(format!("or setup {} full:", target.kind))
        .line(full)
}
