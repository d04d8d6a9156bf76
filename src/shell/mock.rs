//! Mock process backend for testing.
//!
//! `MockBackend` never starts a process. It records every spawn request and
//! answers with a pre-configured outcome, so delegation can be tested without
//! touching the operating system.
//!
//! # Example
//!
//! ```
//! use ai_sandbox_wrapper::shell::{MockBackend, Termination};
//!
//! let backend = MockBackend::exiting(Termination::Exited(2));
//! assert!(backend.spawned().is_empty());
//! ```

use std::io;

use super::backend::{ChildHandle, ProcessBackend, SpawnSpec};
use super::status::Termination;

#[derive(Debug, Clone)]
enum Outcome {
    Terminate(Termination),
    SpawnError(io::ErrorKind),
    WaitError(io::ErrorKind),
}

/// Process backend that records spawns and returns scripted results.
#[derive(Debug, Clone)]
pub struct MockBackend {
    outcome: Outcome,
    spawned: Vec<SpawnSpec>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::exiting(Termination::Exited(0))
    }
}

impl MockBackend {
    /// Children spawned by this backend terminate with `termination`.
    pub fn exiting(termination: Termination) -> Self {
        Self {
            outcome: Outcome::Terminate(termination),
            spawned: Vec::new(),
        }
    }

    /// Spawning fails with an error of `kind`.
    pub fn failing_spawn(kind: io::ErrorKind) -> Self {
        Self {
            outcome: Outcome::SpawnError(kind),
            spawned: Vec::new(),
        }
    }

    /// Spawning succeeds but waiting fails with an error of `kind`.
    pub fn failing_wait(kind: io::ErrorKind) -> Self {
        Self {
            outcome: Outcome::WaitError(kind),
            spawned: Vec::new(),
        }
    }

    /// Every spawn request received, including failed ones.
    pub fn spawned(&self) -> &[SpawnSpec] {
        &self.spawned
    }

    /// The most recent spawn request.
    pub fn last_spawn(&self) -> Option<&SpawnSpec> {
        self.spawned.last()
    }
}

impl ProcessBackend for MockBackend {
    fn spawn(&mut self, spec: &SpawnSpec) -> io::Result<Box<dyn ChildHandle>> {
        self.spawned.push(spec.clone());
        match &self.outcome {
            Outcome::SpawnError(kind) => Err(io::Error::new(*kind, "mock spawn failure")),
            Outcome::Terminate(termination) => Ok(Box::new(MockChild {
                result: Ok(*termination),
            })),
            Outcome::WaitError(kind) => Ok(Box::new(MockChild { result: Err(*kind) })),
        }
    }
}

struct MockChild {
    result: std::result::Result<Termination, io::ErrorKind>,
}

impl ChildHandle for MockChild {
    fn id(&self) -> Option<u32> {
        None
    }

    fn wait(&mut self) -> io::Result<Termination> {
        self.result
            .map_err(|kind| io::Error::new(kind, "mock wait failure"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn spec() -> SpawnSpec {
        SpawnSpec {
            program: "bash".into(),
            args: vec![PathBuf::from("/root/setup.sh")],
            cwd: PathBuf::from("/root"),
            env: HashMap::new(),
        }
    }

    #[test]
    fn records_spawns() {
        let mut backend = MockBackend::default();
        backend.spawn(&spec()).unwrap();
        assert_eq!(backend.spawned().len(), 1);
        assert_eq!(backend.last_spawn(), Some(&spec()));
    }

    #[test]
    fn scripted_termination_is_returned() {
        let mut backend = MockBackend::exiting(Termination::Signaled(9));
        let mut child = backend.spawn(&spec()).unwrap();
        assert_eq!(child.wait().unwrap(), Termination::Signaled(9));
    }

    #[test]
    fn spawn_failure_still_records_request() {
        let mut backend = MockBackend::failing_spawn(io::ErrorKind::NotFound);
        let err = backend.spawn(&spec()).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(backend.spawned().len(), 1);
    }

    #[test]
    fn wait_failure_is_reported() {
        let mut backend = MockBackend::failing_wait(io::ErrorKind::Interrupted);
        let mut child = backend.spawn(&spec()).unwrap();
        assert_eq!(child.wait().unwrap_err().kind(), io::ErrorKind::Interrupted);
    }
}
