//! Privilege escalation helper selection.

use std::fmt;
use std::path::PathBuf;
use std::process::Command;

use crate::error::{DiscupError, Result};
use crate::shell;

/// Helper names in preference order.
const HELPERS: &[&str] = &["pkexec", "sudo"];

/// A resolved way to run commands with superuser privileges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elevation {
    /// Helper executable, or `None` when the process is already root.
    helper: Option<PathBuf>,
}

impl Elevation {
    /// Resolve an elevation mechanism.
    ///
    /// Prefers `pkexec`, falls back to `sudo`. A root process needs no
    /// helper at all. With no mechanism available, no progress is
    /// possible: this is the one fatal error in the program.
    pub fn resolve() -> Result<Self> {
        if shell::is_elevated() {
            return Ok(Self { helper: None });
        }

        shell::find_in_path(HELPERS)
            .map(|path| Self { helper: Some(path) })
            .ok_or(DiscupError::NoElevation)
    }

    /// An elevation that runs `program` through the given helper.
    pub fn with_helper(path: PathBuf) -> Self {
        Self { helper: Some(path) }
    }

    /// An elevation that runs `program` directly (already root).
    pub fn direct() -> Self {
        Self { helper: None }
    }

    /// Build a command for `program`, prefixed with the helper if one is
    /// needed.
    pub fn command(&self, program: &str) -> Command {
        match &self.helper {
            Some(helper) => {
                let mut cmd = Command::new(helper);
                cmd.arg(program);
                cmd
            }
            None => Command::new(program),
        }
    }
}

impl fmt::Display for Elevation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.helper {
            Some(helper) => {
                let name = helper
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| helper.display().to_string());
                write!(f, "{}", name)
            }
            None => write!(f, "none (already root)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn helper_prefixes_the_program() {
        let elevation = Elevation::with_helper(PathBuf::from("/usr/bin/sudo"));
        let cmd = elevation.command("dpkg");

        assert_eq!(cmd.get_program(), OsStr::new("/usr/bin/sudo"));
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec![OsStr::new("dpkg")]);
    }

    #[test]
    fn direct_runs_the_program_itself() {
        let elevation = Elevation::direct();
        let cmd = elevation.command("dpkg");

        assert_eq!(cmd.get_program(), OsStr::new("dpkg"));
        assert_eq!(cmd.get_args().count(), 0);
    }

    #[test]
    fn display_uses_helper_name() {
        let elevation = Elevation::with_helper(PathBuf::from("/usr/bin/pkexec"));
        assert_eq!(elevation.to_string(), "pkexec");
        assert_eq!(Elevation::direct().to_string(), "none (already root)");
    }

    #[test]
    fn preference_order_is_pkexec_then_sudo() {
        assert_eq!(HELPERS, &["pkexec", "sudo"]);
    }
}
