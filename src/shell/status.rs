//! Child termination and exit-code mapping.

use std::fmt;
use std::process::ExitStatus;

/// Exit code used when a child's termination cannot be expressed as one.
pub const FALLBACK_EXIT_CODE: i32 = 1;

/// Offset added to a signal number, as shells report `$?` for signals.
const SIGNAL_EXIT_BASE: i32 = 128;

/// How a child process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The child exited with an explicit code.
    Exited(i32),

    /// The child was killed by a signal.
    Signaled(i32),

    /// The platform reported neither a code nor a signal.
    Unknown,
}

impl Termination {
    /// Classify a `std` exit status.
    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self::Signaled(signal);
            }
        }

        Self::Unknown
    }

    /// The exit code the launcher itself should terminate with.
    ///
    /// Codes are relayed verbatim when they fit a process exit status;
    /// signals become `128 + signal`. Anything else is reported as a failure,
    /// never as success.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Exited(code) if (0..=255).contains(&code) => code,
            Self::Exited(_) => FALLBACK_EXIT_CODE,
            Self::Signaled(signal) if (1..=127).contains(&signal) => SIGNAL_EXIT_BASE + signal,
            Self::Signaled(_) | Self::Unknown => FALLBACK_EXIT_CODE,
        }
    }

    /// Whether the child reported success.
    pub fn success(self) -> bool {
        matches!(self, Self::Exited(0))
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exited(code) => write!(f, "exited with code {}", code),
            Self::Signaled(signal) => write!(f, "terminated by signal {}", signal),
            Self::Unknown => write!(f, "terminated without a status"),
        }
    }
}

/// Lifecycle of a single delegation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has happened yet.
    Idle,
    /// Checking that the script and working directory exist.
    Validating,
    /// Launching the interpreter.
    Spawning,
    /// Waiting for the child to finish.
    Running,
    /// The child finished.
    Terminated(Termination),
    /// Validation or spawning failed; no child is running.
    Failed,
}
