//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::ui::UserInterface;

use super::{Command, CommandResult};

/// Generate completions for the given shell on stdout.
pub struct CompletionsCommand {
    shell: Shell,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(shell: Shell) -> Self {
        Self { shell }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.shell, &mut cmd, "discup", &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
