//! Delegating control to the setup script.
//!
//! A [`Delegator`] takes an [`InvocationRequest`] through
//! `Idle → Validating → Spawning → Running → Terminated`. Validation or spawn
//! failures end in [`Phase::Failed`] with an error; a child that runs to
//! completion always ends in [`Phase::Terminated`], whatever its exit code.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use crate::error::{Result, WrapperError};

use super::backend::{ProcessBackend, SpawnSpec, SystemBackend};
use super::permissions::{ensure_executable, PermissionChange, PermissionSupport};
use super::status::{Phase, Termination};

/// One request to run a script, built per CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    /// Command that produced this request (e.g. `setup`).
    pub command: String,

    /// Script handed to the interpreter. Must be an existing regular file.
    pub script: PathBuf,

    /// Working directory of the child. Must be an existing directory.
    pub cwd: PathBuf,

    /// Variables merged over the inherited environment; these win on collision.
    pub env: HashMap<String, String>,
}

impl InvocationRequest {
    /// Create a request with an empty environment overlay.
    pub fn new(
        command: impl Into<String>,
        script: impl Into<PathBuf>,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            command: command.into(),
            script: script.into(),
            cwd: cwd.into(),
            env: HashMap::new(),
        }
    }

    /// Add a variable to the environment overlay.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Check the filesystem preconditions, without spawning anything.
    pub fn validate(&self) -> Result<()> {
        if !self.script.is_file() {
            return Err(WrapperError::ScriptNotFound {
                path: self.script.clone(),
            });
        }
        if !self.cwd.is_dir() {
            return Err(WrapperError::WorkingDirNotFound {
                path: self.cwd.clone(),
            });
        }
        Ok(())
    }
}

/// Runs invocation requests through a [`ProcessBackend`].
pub struct Delegator<'a> {
    backend: &'a mut dyn ProcessBackend,
    interpreter: String,
    permissions: PermissionSupport,
    phase: Phase,
}

impl<'a> Delegator<'a> {
    /// Create a delegator running scripts with `interpreter`.
    pub fn new(backend: &'a mut dyn ProcessBackend, interpreter: impl Into<String>) -> Self {
        Self {
            backend,
            interpreter: interpreter.into(),
            permissions: PermissionSupport::current(),
            phase: Phase::Idle,
        }
    }

    /// Override the platform's permission capability.
    pub fn with_permission_support(mut self, support: PermissionSupport) -> Self {
        self.permissions = support;
        self
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run `request` to completion and report how the child terminated.
    ///
    /// A non-zero exit is not an error; it is returned as a [`Termination`]
    /// for the caller to relay.
    pub fn delegate(&mut self, request: &InvocationRequest) -> Result<Termination> {
        self.transition(Phase::Validating);
        if let Err(e) = request.validate() {
            self.transition(Phase::Failed);
            return Err(e);
        }
        self.prepare_script(request);

        self.transition(Phase::Spawning);
        let spec = SpawnSpec {
            program: self.interpreter.clone(),
            args: vec![request.script.clone()],
            cwd: request.cwd.clone(),
            env: request.env.clone(),
        };
        let mut child = match self.backend.spawn(&spec) {
            Ok(child) => child,
            Err(e) => {
                self.transition(Phase::Failed);
                return Err(spawn_error(&self.interpreter, e));
            }
        };

        self.transition(Phase::Running);
        tracing::debug!(
            "Running '{}' (pid {:?}) in {}",
            request.command,
            child.id(),
            request.cwd.display()
        );

        match child.wait() {
            Ok(termination) => {
                self.transition(Phase::Terminated(termination));
                Ok(termination)
            }
            Err(e) => {
                self.transition(Phase::Failed);
                Err(WrapperError::WaitFailed(e))
            }
        }
    }

    fn transition(&mut self, next: Phase) {
        tracing::debug!("Delegation {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    /// Mark the script executable. The interpreter runs it either way, so a
    /// failure here is only worth a warning.
    fn prepare_script(&self, request: &InvocationRequest) {
        match ensure_executable(&request.script, self.permissions) {
            Ok(PermissionChange::Applied) => {
                tracing::debug!("Made {} executable", request.script.display())
            }
            Ok(PermissionChange::Unchanged) => {}
            Ok(PermissionChange::Skipped) => {
                tracing::debug!("Platform has no executable bit; leaving permissions alone")
            }
            Err(e) => tracing::warn!(
                "Could not make {} executable: {}",
                request.script.display(),
                e
            ),
        }
    }
}

/// Run `request` with real processes.
pub fn delegate(request: &InvocationRequest, interpreter: &str) -> Result<Termination> {
    let mut backend = SystemBackend;
    Delegator::new(&mut backend, interpreter).delegate(request)
}

fn spawn_error(interpreter: &str, e: io::Error) -> WrapperError {
    if e.kind() == io::ErrorKind::NotFound {
        WrapperError::InterpreterNotFound {
            interpreter: interpreter.to_string(),
        }
    } else {
        WrapperError::SpawnFailed {
            interpreter: interpreter.to_string(),
            source: e,
        }
    }
}
