//! Process spawning backends.
//!
//! [`ProcessBackend`] is the seam between the delegator and the operating
//! system. [`SystemBackend`] spawns real processes; tests use
//! [`MockBackend`](super::MockBackend).

use std::collections::HashMap;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use super::signals::IgnoreInterrupts;
use super::status::Termination;

/// Everything needed to launch the child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnSpec {
    /// Interpreter program, resolved through `PATH` if not a path.
    pub program: String,

    /// Arguments passed to the interpreter.
    pub args: Vec<PathBuf>,

    /// Working directory of the child.
    pub cwd: PathBuf,

    /// Variables set on top of the inherited environment.
    pub env: HashMap<String, String>,
}

/// A launched child process.
pub trait ChildHandle {
    /// Process ID, when the backend has one.
    fn id(&self) -> Option<u32>;

    /// Block until the child terminates.
    fn wait(&mut self) -> io::Result<Termination>;
}

/// Something that can launch child processes.
pub trait ProcessBackend {
    /// Launch the child described by `spec`.
    ///
    /// An error of kind [`io::ErrorKind::NotFound`] means the program
    /// itself could not be found.
    fn spawn(&mut self, spec: &SpawnSpec) -> io::Result<Box<dyn ChildHandle>>;
}

/// Backend that spawns real processes with inherited standard streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBackend;

impl ProcessBackend for SystemBackend {
    fn spawn(&mut self, spec: &SpawnSpec) -> io::Result<Box<dyn ChildHandle>> {
        // Anything we printed must reach the terminal before the child writes.
        io::stdout().flush().ok();
        io::stderr().flush().ok();

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .current_dir(&spec.cwd)
            .envs(&spec.env)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn()?;
        // The child shares our terminal and gets Ctrl-C itself; we only relay.
        // Ignoring starts as soon as it exists so no interrupt can orphan it.
        let interrupts = IgnoreInterrupts::install();
        Ok(Box::new(SystemChild {
            child,
            _interrupts: interrupts,
        }))
    }
}

/// A running child. Terminal interrupts stay ignored until it is dropped.
struct SystemChild {
    child: Child,
    _interrupts: IgnoreInterrupts,
}

impl ChildHandle for SystemChild {
    fn id(&self) -> Option<u32> {
        Some(self.child.id())
    }

    fn wait(&mut self) -> io::Result<Termination> {
        let status = self.child.wait()?;
        Ok(Termination::from_status(status))
    }
}
