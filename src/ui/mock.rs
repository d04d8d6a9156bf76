//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use ai_sandbox_wrapper::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Usage: ai-sandbox-wrapper <command>");
//! ui.hint("This may indicate a corrupted installation.");
//!
//! assert!(ui.has_message("Usage"));
//! assert_eq!(ui.hints().len(), 1);
//! ```

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
}

impl MockUI {
    /// Create a new, empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    /// True when nothing at all was written.
    pub fn is_silent(&self) -> bool {
        self.messages.is_empty() && self.errors.is_empty() && self.hints.is_empty()
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn hint(&mut self, msg: &str) {
        self.hints.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_channel_separately() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.error("broken");
        ui.hint("try again");

        assert_eq!(ui.messages(), ["hello"]);
        assert!(ui.has_error("broken"));
        assert!(ui.has_hint("again"));
    }

    #[test]
    fn new_mock_is_silent() {
        assert!(MockUI::new().is_silent());
    }

    #[test]
    fn has_message_matches_substrings() {
        let mut ui = MockUI::new();
        ui.message("Usage: ai-sandbox-wrapper <command>");
        assert!(ui.has_message("Usage"));
        assert!(!ui.has_message("Examples"));
    }
}
