//! Error types for launcher operations.
//!
//! This module defines [`WrapperError`], the error type used throughout the
//! launcher, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration errors (missing script, missing working directory) are
//!   detected before anything is spawned
//! - Environment errors (missing interpreter) are detected at spawn time
//! - Usage errors carry the usage text along with the diagnostic
//! - A child that exits non-zero is *not* an error; its code is relayed as-is
//!
//! Every variant maps to exit code 1 and provides actionable hints.

use std::path::PathBuf;
use thiserror::Error;

use crate::ui::hints;

/// Core error type for launcher operations.
#[derive(Debug, Error)]
pub enum WrapperError {
    /// The delegated script is missing from the install root.
    #[error("{} not found at {}", crate::config::SETUP_SCRIPT, .path.display())]
    ScriptNotFound { path: PathBuf },

    /// The working directory for the child does not exist.
    #[error("Working directory not found: {}", .path.display())]
    WorkingDirNotFound { path: PathBuf },

    /// The interpreter could not be found when spawning.
    #[error("{interpreter} not found. Please install {interpreter} to run setup.")]
    InterpreterNotFound { interpreter: String },

    /// Spawning failed for a reason other than a missing interpreter.
    #[error("Error running setup with {interpreter}: {source}")]
    SpawnFailed {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the running child failed.
    #[error("Lost track of the setup process: {0}")]
    WaitFailed(#[source] std::io::Error),

    /// The command argument is not one we know.
    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    /// Arguments could not be parsed at all.
    #[error("{message}")]
    InvalidArguments { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WrapperError {
    /// Exit code the launcher terminates with for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Whether the usage text should follow the diagnostic.
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            Self::UnknownCommand { .. } | Self::InvalidArguments { .. }
        )
    }

    /// Remediation hints printed after the diagnostic.
    pub fn hints(&self) -> Vec<String> {
        match self {
            Self::ScriptNotFound { .. } => vec![hints::corrupted_installation().to_string()],
            Self::WorkingDirNotFound { .. } => vec![hints::check_install_root().to_string()],
            Self::InterpreterNotFound { interpreter } => hints::interpreter_missing(interpreter),
            _ => Vec::new(),
        }
    }
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, WrapperError>;
