//! Visual theme and styling.

use console::Style;

/// Styles used for terminal output.
#[derive(Debug, Clone)]
pub struct RehostTheme {
    /// Success messages (green).
    pub success: Style,
    /// Warning messages (orange).
    pub warning: Style,
    /// Error messages (red bold).
    pub error: Style,
    /// Labels in key-value displays (bold).
    pub key: Style,
    /// Secondary text (dim).
    pub dim: Style,
}

impl Default for RehostTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl RehostTheme {
    /// The colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            key: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// A theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            key: Style::new(),
            dim: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{} {}", self.success.apply_to("✓"), msg)
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{} {}", self.warning.apply_to("!"), msg)
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("✗"), self.error.apply_to(msg))
    }

    /// Format a labelled value; blank values render as a dim placeholder.
    pub fn format_field(&self, key: &str, value: &str) -> String {
        let shown = if value.is_empty() {
            self.dim.apply_to("(not set)").to_string()
        } else {
            value.to_string()
        };
        format!("{}: {}", self.key.apply_to(key), shown)
    }
}

/// Whether colored output should be used.
///
/// Honors `NO_COLOR` and whether stdout is a terminal.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}
