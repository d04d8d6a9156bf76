//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the parsed command
//! - [`report_error`] for turning a failure into user-facing output

use crate::cli::args::{Cli, CommandName};
use crate::config::LauncherConfig;
use crate::error::{Result, WrapperError};
use crate::shell::{ProcessBackend, SystemBackend, Termination};
use crate::ui::UserInterface;

use super::help::{HelpCommand, USAGE};
use super::setup::SetupCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Relay a child's termination as our own result.
    pub fn from_termination(termination: Termination) -> Self {
        if termination.success() {
            Self::success()
        } else {
            Self::failure(termination.exit_code())
        }
    }
}

/// Dispatches the parsed command to its implementation.
pub struct CommandDispatcher<B: ProcessBackend = SystemBackend> {
    config: LauncherConfig,
    backend: B,
}

impl CommandDispatcher<SystemBackend> {
    /// Create a dispatcher that spawns real processes.
    pub fn new(config: LauncherConfig) -> Self {
        Self::with_backend(config, SystemBackend)
    }
}

impl<B: ProcessBackend> CommandDispatcher<B> {
    /// Create a dispatcher with a specific process backend.
    pub fn with_backend(config: LauncherConfig, backend: B) -> Self {
        Self { config, backend }
    }

    /// Get the process backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Dispatch and execute the command selected by `cli`.
    pub fn dispatch(&mut self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let name = CommandName::from_cli(cli)?;
        if !cli.extra.is_empty() {
            tracing::debug!("Ignoring extra arguments: {:?}", cli.extra);
        }
        self.run(name, ui)
    }

    /// Execute a known command.
    pub fn run(&mut self, name: CommandName, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!("Dispatching '{}'", name);
        match name {
            CommandName::Setup => SetupCommand::new(&self.config, &mut self.backend).execute(ui),
            CommandName::Help => HelpCommand.execute(ui),
        }
    }
}

/// Report a failure: the diagnostic, its hints, then usage for usage errors.
pub fn report_error(ui: &mut dyn UserInterface, err: &WrapperError) {
    ui.error(&err.to_string());
    for hint in err.hints() {
        ui.hint(&hint);
    }
    if err.shows_usage() {
        ui.message(USAGE);
    }
}
