//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`].

pub mod dispatcher;
pub mod help;
pub mod setup;

pub use dispatcher::{report_error, Command, CommandDispatcher, CommandResult};
pub use help::{HelpCommand, USAGE};
pub use setup::SetupCommand;
