//! Process detection and detached launching.
//!
//! Process-table scraping is format-coupled like dpkg output, so the
//! lookup sits behind the [`ProcessQuery`] trait; the launcher itself only
//! depends on "is it running" and the PATH search.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::app::AppProfile;
use crate::error::Result;
use crate::shell;

/// Capability interface for process-table queries.
pub trait ProcessQuery {
    /// Whether a process with exactly this name is running.
    fn is_running(&self, process_name: &str) -> bool;
}

/// Production implementation backed by `pgrep -x`.
#[derive(Debug, Default)]
pub struct PgrepQuery;

impl ProcessQuery for PgrepQuery {
    fn is_running(&self, process_name: &str) -> bool {
        Command::new("pgrep")
            .args(["-x", process_name])
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}

/// Result of an [`ensure_running`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// A matching process already exists; nothing was spawned.
    AlreadyRunning,
    /// The executable at this path was spawned detached.
    Started(PathBuf),
    /// No candidate executable was found on PATH.
    NotFound,
}

/// Launch the application unless it is already running.
///
/// Idempotent: with a matching process in the table this returns
/// [`LaunchOutcome::AlreadyRunning`] without touching PATH or spawning
/// anything.
pub fn ensure_running(
    processes: &dyn ProcessQuery,
    profile: &AppProfile,
) -> Result<LaunchOutcome> {
    if processes.is_running(profile.process_name) {
        return Ok(LaunchOutcome::AlreadyRunning);
    }

    let Some(executable) = shell::find_in_path(profile.executables) else {
        return Ok(LaunchOutcome::NotFound);
    };

    spawn_detached(&executable)?;
    Ok(LaunchOutcome::Started(executable))
}

/// Spawn an executable as a fire-and-forget child.
///
/// Output streams are discarded and the child is moved into its own
/// session so it outlives the terminal this process was started from.
/// The child is never waited on.
fn spawn_detached(executable: &Path) -> Result<()> {
    let mut cmd = Command::new(executable);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        // SAFETY: setsid() is async-signal-safe and touches no parent state
        unsafe {
            cmd.pre_exec(|| {
                libc::setsid();
                Ok(())
            });
        }
    }

    let child = cmd.spawn()?;
    tracing::debug!(pid = child.id(), path = %executable.display(), "spawned detached");
    Ok(())
}
