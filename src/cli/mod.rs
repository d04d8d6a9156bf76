//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap's derive macros
//! - [`commands`] - Command implementations and dispatching

pub mod args;
pub mod commands;

pub use args::{Cli, CommandName};
pub use commands::{report_error, Command, CommandDispatcher, CommandResult};
