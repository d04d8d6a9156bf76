//! Launcher configuration.
//!
//! Settings come from CLI flags, each of which can also be supplied through
//! an environment variable (see [`crate::cli::Cli`]). This module turns them
//! into the concrete values a setup run needs:
//!
//! - [`LauncherConfig`] - install root override and interpreter
//! - [`install_root`] - locating the install root from the running executable

pub mod install_root;

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::Result;

pub use install_root::{discover_install_root, install_root_for_exe};

/// File name of the delegated setup script, relative to the install root.
pub const SETUP_SCRIPT: &str = "setup.sh";

/// Variable injected into the child's environment naming the install root.
pub const ROOT_ENV_VAR: &str = "AI_SANDBOX_ROOT";

/// Interpreter used when none is configured.
pub const DEFAULT_INTERPRETER: &str = "bash";

/// Resolved launcher settings for one invocation.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Explicit install root, bypassing discovery.
    pub root_override: Option<PathBuf>,

    /// Program used to run the setup script.
    pub interpreter: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            root_override: None,
            interpreter: DEFAULT_INTERPRETER.to_string(),
        }
    }
}

impl LauncherConfig {
    /// Build the configuration from parsed arguments.
    ///
    /// An empty value, as left by `VAR=` in a shell, counts as unset.
    pub fn from_cli(cli: &Cli) -> Self {
        let root_override = cli
            .root
            .as_ref()
            .filter(|root| !root.is_empty())
            .map(PathBuf::from);
        let interpreter = match cli.shell.trim() {
            "" => DEFAULT_INTERPRETER,
            shell => shell,
        };

        Self {
            root_override,
            interpreter: interpreter.to_string(),
        }
    }

    /// Use a fixed install root.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root_override = Some(root.into());
        self
    }

    /// Use a different interpreter.
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// The install root: the override when set, otherwise discovered from
    /// the running executable.
    ///
    /// Discovery is deferred to here so that `help` never depends on it.
    pub fn install_root(&self) -> Result<PathBuf> {
        match &self.root_override {
            Some(root) => Ok(root.clone()),
            None => discover_install_root(),
        }
    }
}
