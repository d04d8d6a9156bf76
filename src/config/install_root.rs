//! Install root discovery.
//!
//! The launcher is installed as `<root>/bin/ai-sandbox-wrapper`, with the
//! setup script next to `bin/` at `<root>/setup.sh`.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::Result;

/// Locate the install root from the running executable.
///
/// Symlinks are resolved first so that a launcher linked into `~/.local/bin`
/// still finds its real installation.
pub fn discover_install_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Cannot locate the running executable")?;
    let exe = exe
        .canonicalize()
        .with_context(|| format!("Cannot resolve executable path {}", exe.display()))?;

    let root = install_root_for_exe(&exe)
        .with_context(|| format!("Executable {} has no parent directory", exe.display()))?;
    tracing::debug!("Discovered install root {}", root.display());
    Ok(root)
}

/// Install root for an executable path: the parent of the directory that
/// holds it, or that directory itself when it is a filesystem root.
pub fn install_root_for_exe(exe: &Path) -> Option<PathBuf> {
    let bin_dir = exe.parent()?;
    let root = bin_dir.parent().unwrap_or(bin_dir);
    Some(root.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_parent_of_bin_dir() {
        let root = install_root_for_exe(Path::new("/opt/sandbox/bin/ai-sandbox-wrapper"));
        assert_eq!(root, Some(PathBuf::from("/opt/sandbox")));
    }

    #[test]
    fn executable_at_filesystem_root_uses_that_root() {
        let root = install_root_for_exe(Path::new("/ai-sandbox-wrapper"));
        assert_eq!(root, Some(PathBuf::from("/")));
    }

    #[test]
    fn bare_path_has_no_root() {
        assert_eq!(install_root_for_exe(Path::new("/")), None);
    }

    #[test]
    fn discovery_points_at_existing_directory() {
        let root = discover_install_root().unwrap();
        assert!(root.is_dir());
        assert!(root.is_absolute());
    }
}
