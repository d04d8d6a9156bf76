//! Help command implementation.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Static usage text.
pub const USAGE: &str = "
🔒 AI Sandbox Wrapper

Usage:
  ai-sandbox-wrapper [options] <command>

Commands:
  setup     Run interactive setup (configure workspaces, select tools)
  help      Show this help message

Options:
  --root <DIR>         Install root containing setup.sh [env: AI_SANDBOX_WRAPPER_ROOT]
  --shell <PROGRAM>    Shell used to run setup.sh (default: bash) [env: AI_SANDBOX_WRAPPER_SHELL]
  --no-color           Disable colored output
  --debug              Enable debug logging
  -h, --help           Show this help message
  -V, --version        Show version

Examples:
  ai-sandbox-wrapper setup

Documentation: https://github.com/kokorolx/ai-sandbox-wrapper
";

/// The help command: prints usage and succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(USAGE);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn help_prints_usage_once() {
        let mut ui = MockUI::new();
        let result = HelpCommand.execute(&mut ui).unwrap();
        assert!(result.success);
        assert_eq!(ui.messages(), [USAGE]);
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn usage_lists_every_command() {
        for command in ["setup", "help"] {
            assert!(USAGE.contains(&format!("  {} ", command)));
        }
    }
}
