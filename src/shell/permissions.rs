//! Executable permissions on the setup script.
//!
//! Whether permissions can be set at all is a platform capability, checked
//! up front through [`PermissionSupport`] instead of attempting the change
//! and ignoring the failure.

use std::path::Path;

/// Mode given to the setup script before it runs.
pub const SCRIPT_MODE: u32 = 0o755;

/// What the current platform can do with file permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionSupport {
    /// POSIX mode bits can be read and written.
    ModeBits,
    /// The platform has no executable bit (e.g. Windows).
    Unsupported,
}

impl PermissionSupport {
    /// Capability of the platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(unix) {
            Self::ModeBits
        } else {
            Self::Unsupported
        }
    }
}

/// Result of [`ensure_executable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionChange {
    /// The mode was updated.
    Applied,
    /// The file already had the desired mode.
    Unchanged,
    /// The platform cannot set executable permissions.
    Skipped,
}

/// Give `path` the [`SCRIPT_MODE`] permissions where the platform supports it.
pub fn ensure_executable(
    path: &Path,
    support: PermissionSupport,
) -> std::io::Result<PermissionChange> {
    match support {
        PermissionSupport::ModeBits => set_mode(path),
        PermissionSupport::Unsupported => Ok(PermissionChange::Skipped),
    }
}

#[cfg(unix)]
fn set_mode(path: &Path) -> std::io::Result<PermissionChange> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = std::fs::metadata(path)?.permissions();
    if permissions.mode() & 0o777 == SCRIPT_MODE {
        return Ok(PermissionChange::Unchanged);
    }

    permissions.set_mode(SCRIPT_MODE);
    std::fs::set_permissions(path, permissions)?;
    Ok(PermissionChange::Applied)
}

#[cfg(not(unix))]
fn set_mode(_path: &Path) -> std::io::Result<PermissionChange> {
    Ok(PermissionChange::Skipped)
}
