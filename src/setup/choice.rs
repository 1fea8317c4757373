//! Answers collected by the configuration resolver.

/// How much of the boilerplate the downstream setup configures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupType {
    /// Ask only for the project name.
    #[default]
    Fast,
    /// Also pin library versions and ask for project metadata later.
    Extended,
    /// Print a generic message and let the user run everything.
    Manual,
}

impl SetupType {
    pub const ALL: [SetupType; 3] = [Self::Fast, Self::Extended, Self::Manual];

    /// Value used in prompts and env overrides.
    pub fn value(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Extended => "extended",
            Self::Manual => "manual",
        }
    }

    /// Label shown in the select prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fast => "Fast (only the project name)",
            Self::Extended => "Extended (project name, library versions and metadata)",
            Self::Manual => "Manual (I'll configure everything myself)",
        }
    }

    /// Parse a prompt value.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value.trim())
    }
}

/// Frontend libraries flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendLibsType {
    Tailwind,
    Standard,
    Clean,
}

impl FrontendLibsType {
    pub const ALL: [FrontendLibsType; 3] = [Self::Tailwind, Self::Standard, Self::Clean];

    /// Value used in prompts and in the `--g_frontend_libs_type` flag.
    pub fn value(&self) -> &'static str {
        match self {
            Self::Tailwind => "tailwind",
            Self::Standard => "standard",
            Self::Clean => "clean",
        }
    }

    /// Label shown in the select prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tailwind => "Tailwind CSS",
            Self::Standard => "Standard (SCSS)",
            Self::Clean => "Clean (no frontend libs blocks)",
        }
    }

    /// Parse a prompt value.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value.trim())
    }
}

/// Everything the user answered.
///
/// Gated fields stay `None` when the answers that govern them exclude them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetupChoice {
    /// Whether the user confirmed other installs are deactivated.
    pub precondition_confirmed: bool,
    pub setup_type: SetupType,
    pub frontend_libs_type: Option<FrontendLibsType>,
    pub project_name: Option<String>,
    /// `None` means latest.
    pub libs_version: Option<String>,
    /// `None` means latest.
    pub frontend_libs_version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_type_values_round_trip() {
        for setup_type in SetupType::ALL {
            assert_eq!(SetupType::from_value(setup_type.value()), Some(setup_type));
        }
        assert_eq!(SetupType::from_value("full"), None);
    }

    #[test]
    fn frontend_libs_type_parses_trimmed_values() {
        assert_eq!(
            FrontendLibsType::from_value(" clean "),
            Some(FrontendLibsType::Clean)
        );
        assert_eq!(FrontendLibsType::from_value("bootstrap"), None);
    }

    #[test]
    fn default_choice_has_nothing_collected() {
        let choice = SetupChoice::default();
        assert!(!choice.precondition_confirmed);
        assert_eq!(choice.setup_type, SetupType::Fast);
        assert!(choice.frontend_libs_type.is_none());
        assert!(choice.project_name.is_none());
    }
}
