//! Setup command implementation.
//!
//! Builds the [`InvocationRequest`] for `setup.sh` and hands control to it.
//! Everything the script prints goes straight to the terminal; the command
//! itself prints nothing unless the launch fails.

use crate::cli::args::CommandName;
use crate::config::{LauncherConfig, ROOT_ENV_VAR, SETUP_SCRIPT};
use crate::error::Result;
use crate::shell::{Delegator, InvocationRequest, ProcessBackend};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The setup command.
pub struct SetupCommand<'a> {
    config: &'a LauncherConfig,
    backend: &'a mut dyn ProcessBackend,
}

impl<'a> SetupCommand<'a> {
    /// Create a new setup command.
    pub fn new(config: &'a LauncherConfig, backend: &'a mut dyn ProcessBackend) -> Self {
        Self { config, backend }
    }

    /// Build the request: `setup.sh` in the install root, run from the
    /// install root, with the root exported to the script.
    pub fn request(&self) -> Result<InvocationRequest> {
        let root = self.config.install_root()?;
        Ok(
            InvocationRequest::new(CommandName::Setup.as_str(), root.join(SETUP_SCRIPT), &root)
                .env(ROOT_ENV_VAR, root.to_string_lossy()),
        )
    }
}

impl Command for SetupCommand<'_> {
    fn execute(&mut self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let request = self.request()?;
        tracing::debug!("Delegating to {}", request.script.display());

        let mut delegator = Delegator::new(&mut *self.backend, self.config.interpreter.as_str());
        let termination = delegator.delegate(&request)?;
        tracing::debug!("Setup {}", termination);

        Ok(CommandResult::from_termination(termination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WrapperError;
    use crate::shell::{MockBackend, Termination};
    use crate::ui::MockUI;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn root_with_script() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("setup.sh"), "echo setting up\n").unwrap();
        temp
    }

    #[test]
    fn request_points_at_install_root() {
        let root = root_with_script();
        let config = LauncherConfig::default().with_root(root.path());
        let mut backend = MockBackend::default();
        let command = SetupCommand::new(&config, &mut backend);

        let request = command.request().unwrap();
        assert_eq!(request.command, "setup");
        assert_eq!(request.script, root.path().join("setup.sh"));
        assert_eq!(request.cwd, PathBuf::from(root.path()));
        assert_eq!(
            request.env.get("AI_SANDBOX_ROOT").map(String::as_str),
            Some(root.path().to_str().unwrap())
        );
    }

    #[test]
    fn uses_configured_interpreter() {
        let root = root_with_script();
        let config = LauncherConfig::default()
            .with_root(root.path())
            .with_interpreter("/usr/local/bin/bash");
        let mut backend = MockBackend::default();

        SetupCommand::new(&config, &mut backend)
            .execute(&mut MockUI::new())
            .unwrap();
        assert_eq!(backend.last_spawn().unwrap().program, "/usr/local/bin/bash");
    }

    #[test]
    fn successful_setup_prints_nothing() {
        let root = root_with_script();
        let config = LauncherConfig::default().with_root(root.path());
        let mut backend = MockBackend::default();
        let mut ui = MockUI::new();

        let result = SetupCommand::new(&config, &mut backend)
            .execute(&mut ui)
            .unwrap();
        assert_eq!(result, CommandResult::success());
        assert!(ui.is_silent());
    }

    #[test]
    fn failing_script_is_relayed_without_message() {
        let root = root_with_script();
        let config = LauncherConfig::default().with_root(root.path());
        let mut backend = MockBackend::exiting(Termination::Exited(2));
        let mut ui = MockUI::new();

        let result = SetupCommand::new(&config, &mut backend)
            .execute(&mut ui)
            .unwrap();
        assert_eq!(result, CommandResult::failure(2));
        assert!(ui.is_silent());
    }

    #[test]
    fn missing_script_fails_before_spawn() {
        let root = TempDir::new().unwrap();
        let config = LauncherConfig::default().with_root(root.path());
        let mut backend = MockBackend::default();

        let err = SetupCommand::new(&config, &mut backend)
            .execute(&mut MockUI::new())
            .unwrap_err();
        assert!(matches!(err, WrapperError::ScriptNotFound { .. }));
        assert!(backend.spawned().is_empty());
    }
}
