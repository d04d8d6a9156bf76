//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, LauncherTheme, UserInterface};

/// Terminal UI implementation.
///
/// Regular messages go to stdout; errors and hints go to stderr so
/// diagnostics never mix with output a caller might be capturing.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: LauncherTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    ///
    /// Colors are used only when `color` is set, `NO_COLOR` is absent and
    /// stderr is a terminal.
    pub fn new(color: bool) -> Self {
        let err = Term::stderr();
        let theme = if color && should_use_colors(&err) {
            LauncherTheme::new()
        } else {
            LauncherTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err,
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn hint(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_hint(msg)).ok();
    }
}

/// Create the UI for this invocation.
pub fn create_ui(color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(color))
}
