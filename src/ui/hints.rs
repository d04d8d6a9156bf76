//! Remediation hints shown after launcher diagnostics.
//!
//! Hints suggest what the user can do next; they never repeat the
//! diagnostic itself.

/// Hint after the setup script was not found in the install root.
pub fn corrupted_installation() -> &'static str {
    "This may indicate a corrupted installation."
}

/// Hint after the working directory could not be found.
pub fn check_install_root() -> &'static str {
    "Check --root or AI_SANDBOX_WRAPPER_ROOT points at the installation."
}

/// Platform-specific hints after the interpreter could not be spawned.
pub fn interpreter_missing(interpreter: &str) -> Vec<String> {
    vec![
        format!("macOS/Linux: {} is usually pre-installed", interpreter),
        "Windows: Use WSL2 or Git Bash".to_string(),
        "Set AI_SANDBOX_WRAPPER_SHELL to use a different shell.".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupted_installation_hint() {
        assert!(corrupted_installation().contains("corrupted installation"));
    }

    #[test]
    fn install_root_hint_names_override() {
        assert!(check_install_root().contains("AI_SANDBOX_WRAPPER_ROOT"));
    }

    #[test]
    fn interpreter_hints_name_interpreter() {
        let hints = interpreter_missing("zsh");
        assert!(hints[0].contains("zsh"));
        assert!(hints.iter().any(|h| h.contains("Git Bash")));
    }
}
