//! AI Sandbox Wrapper launcher.
//!
//! A thin command-line front end that hands control to the bundled
//! `setup.sh`, with the child's standard streams attached to the terminal,
//! and exits with the child's own exit code.
//!
//! # Modules
//!
//! - [`cli`] - Argument parsing and command dispatch
//! - [`config`] - Install root and interpreter resolution
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Child process delegation and exit-code mapping
//! - [`ui`] - Terminal output, diagnostics and hints
//!
//! # Example
//!
//! ```
//! use ai_sandbox_wrapper::shell::Termination;
//!
//! // A child killed by SIGKILL is reported like a shell would.
//! assert_eq!(Termination::Signaled(9).exit_code(), 137);
//! assert_eq!(Termination::Exited(2).exit_code(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{Result, WrapperError};
