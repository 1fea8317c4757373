//! Visual theme and styling.

use console::Style;

use super::AlertKind;

/// Colors and glyphs used across the terminal output.
#[derive(Debug, Clone)]
pub struct CreateTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational elements (blue).
    pub info: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for the banner (red bold, Eightshift's brand color).
    pub header: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
}

impl Default for CreateTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().blue(),
            highlight: Style::new().bold(),
            header: Style::new().red().bold(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            border: Style::new(),
        }
    }

    /// Colored or plain, depending on [`should_use_colors`].
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("§"),
            self.highlight.apply_to(title)
        )
    }

    /// Style used for the border and title of an alert.
    pub fn alert_style(&self, kind: AlertKind) -> &Style {
        match kind {
            AlertKind::Success => &self.success,
            AlertKind::Info => &self.info,
        }
    }
}

/// Force colors on or off for the whole process (`--no-color`).
pub fn set_colors_enabled(enabled: bool) {
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::colors_enabled() && console::Term::stdout().is_term()
}
