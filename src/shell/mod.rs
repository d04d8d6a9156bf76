//! Child process delegation.
//!
//! - [`delegate`] - the [`Delegator`] state machine and [`InvocationRequest`]
//! - [`backend`] - the [`ProcessBackend`] seam and the real [`SystemBackend`]
//! - [`mock`] - a scripted [`MockBackend`] for tests
//! - [`status`] - [`Termination`] and its exit-code mapping
//! - [`permissions`] - making the script executable where supported
//! - [`signals`] - ignoring terminal interrupts while the child runs

pub mod backend;
pub mod delegate;
pub mod mock;
pub mod permissions;
pub mod signals;
pub mod status;

pub use backend::{ChildHandle, ProcessBackend, SpawnSpec, SystemBackend};
pub use delegate::{delegate, Delegator, InvocationRequest};
pub use mock::MockBackend;
pub use permissions::{ensure_executable, PermissionChange, PermissionSupport};
pub use status::{Phase, Termination};
