//! CLI argument definitions.
//!
//! The launcher takes a single positional command. clap's own help flag and
//! help subcommand are disabled: `help`, `--help` and `-h` are all read as
//! the command itself and route to
//! [`HelpCommand`](super::commands::help::HelpCommand), so their output is
//! identical. Only the first argument selects the command; a `--help` after
//! it is ignored like any other trailing argument.

use clap::Parser;
use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;

use crate::config::DEFAULT_INTERPRETER;
use crate::error::{Result, WrapperError};

/// Launcher for the AI Sandbox Wrapper interactive setup.
#[derive(Debug, Parser)]
#[command(name = "ai-sandbox-wrapper")]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true, disable_help_subcommand = true)]
pub struct Cli {
    /// Install root containing setup.sh (empty means unset)
    #[arg(long, value_name = "DIR", env = "AI_SANDBOX_WRAPPER_ROOT")]
    pub root: Option<OsString>,

    /// Shell used to run setup.sh (empty means the default)
    #[arg(
        long,
        value_name = "PROGRAM",
        env = "AI_SANDBOX_WRAPPER_SHELL",
        default_value = DEFAULT_INTERPRETER
    )]
    pub shell: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Command to run: setup (default) or help
    #[arg(allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Ignored; accepted for compatibility with wrappers passing extra args.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

/// The fixed set of commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandName {
    /// Run the setup script (default).
    Setup,
    /// Print usage.
    Help,
}

impl CommandName {
    /// Name as typed on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Help => "help",
        }
    }

    /// Select the command for parsed arguments. No command means setup.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        match cli.command.as_deref() {
            None => Ok(Self::Setup),
            Some(name) => name.parse(),
        }
    }
}

impl FromStr for CommandName {
    type Err = WrapperError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "setup" => Ok(Self::Setup),
            "help" | "--help" | "-h" => Ok(Self::Help),
            _ => Err(WrapperError::UnknownCommand {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
