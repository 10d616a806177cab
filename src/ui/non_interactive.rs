//! Non-interactive UI for CI/headless environments.
//!
//! Prompts are never shown: `confirm` answers with its default and says
//! so, which is what lets an unattended run proceed through the update.

use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation that never prompts.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("! {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        let answer = if default { "yes" } else { "no" };
        self.message(&format!("{} -> {} (non-interactive)", question, answer));
        Ok(default)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.message(message);
        Box::new(SilentSpinner)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that only reports its final state.
struct SilentSpinner;

impl SpinnerHandle for SilentSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}
