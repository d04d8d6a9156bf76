//! AI Sandbox Wrapper entry point.

use std::process::ExitCode;

use ai_sandbox_wrapper::cli::{report_error, Cli, CommandDispatcher};
use ai_sandbox_wrapper::config::LauncherConfig;
use ai_sandbox_wrapper::ui::create_ui;
use ai_sandbox_wrapper::WrapperError;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs are written to stderr; stdout belongs to the setup script.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("ai_sandbox_wrapper=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("ai_sandbox_wrapper=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

/// Arguments clap could not parse are usage errors: diagnostic, usage, exit 1.
fn usage_failure(err: clap::Error) -> ExitCode {
    if err.kind() == ErrorKind::DisplayVersion {
        err.print().ok();
        return ExitCode::SUCCESS;
    }

    let rendered = err.to_string();
    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string();

    let mut ui = create_ui(true);
    let err = WrapperError::InvalidArguments { message };
    report_error(ui.as_mut(), &err);
    exit_code(err.exit_code())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_failure(err),
    };
    init_tracing(cli.debug);

    tracing::debug!("Starting with args: {:?}", cli);

    let mut ui = create_ui(!cli.no_color);
    let mut dispatcher = CommandDispatcher::new(LauncherConfig::from_cli(&cli));

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => exit_code(result.exit_code),
        Err(e) => {
            report_error(ui.as_mut(), &e);
            exit_code(e.exit_code())
        }
    }
}
