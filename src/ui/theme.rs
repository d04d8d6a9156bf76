//! Visual theme and styling.

use console::Style;

/// The launcher's visual theme.
#[derive(Debug, Clone)]
pub struct LauncherTheme {
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for remediation hints (dim).
    pub hint: Style,
}

impl Default for LauncherTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LauncherTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold(),
            hint: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ Error: {}", msg)))
    }

    /// Format an indented hint line.
    pub fn format_hint(&self, msg: &str) -> String {
        format!("{}", self.hint.apply_to(format!("  {}", msg)))
    }
}

/// Check if colors should be enabled for the given terminal.
///
/// `NO_COLOR` (https://no-color.org/) always wins.
pub fn should_use_colors(term: &console::Term) -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    term.is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_error_with_prefix() {
        let msg = LauncherTheme::plain().format_error("bash not found");
        assert_eq!(msg, "✗ Error: bash not found");
    }

    #[test]
    fn theme_indents_hints() {
        let msg = LauncherTheme::plain().format_hint("Windows: Use WSL2");
        assert_eq!(msg, "  Windows: Use WSL2");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = LauncherTheme::default();
        let new = LauncherTheme::new();
        assert_eq!(default.format_error("x"), new.format_error("x"));
    }
}
