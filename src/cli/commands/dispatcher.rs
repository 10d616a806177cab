//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI flags

use crate::app::AppProfile;
use crate::cli::args::Cli;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI flags to their command implementations.
pub struct CommandDispatcher {
    profile: &'static AppProfile,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given application profile.
    pub fn new(profile: &'static AppProfile) -> Self {
        Self { profile }
    }

    /// Dispatch and execute the command the flags select.
    ///
    /// `--check` reports, `--update` updates without launching, and the
    /// bare invocation updates (with confirmation) then launches.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(shell) = cli.completions {
            let cmd = super::completions::CompletionsCommand::new(shell);
            return cmd.execute(ui);
        }

        if cli.check {
            let cmd = super::check::CheckCommand::new(self.profile, cli.json);
            return cmd.execute(ui);
        }

        let launch = !cli.update;
        let cmd = super::update::UpdateCommand::new(self.profile, launch, cli.yes);
        cmd.execute(ui)
    }
}
