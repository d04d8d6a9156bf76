//! User-facing terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminals
//! - [`MockUI`] for capturing output in tests
//! - [`hints`] with remediation text for each failure
//!
//! # Example
//!
//! ```
//! use ai_sandbox_wrapper::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.error("setup.sh not found");
//! assert!(ui.has_error("setup.sh"));
//! ```

pub mod hints;
pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, LauncherTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user (stdout).
    fn message(&mut self, msg: &str);

    /// Display an error message (stderr).
    fn error(&mut self, msg: &str);

    /// Display a remediation hint following an error (stderr).
    fn hint(&mut self, msg: &str);
}
