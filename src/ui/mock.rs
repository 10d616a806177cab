//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Confirm answers can be queued ahead
//! of time.
//!
//! # Example
//!
//! ```
//! use discup::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_confirm_response(false);
//!
//! // Use ui in code under test...
//! ui.message("Checking versions");
//! let declined = !ui.confirm("Update now?", true).unwrap();
//!
//! assert!(declined);
//! assert!(ui.messages().contains(&"Checking versions".to_string()));
//! ```

use std::collections::VecDeque;

use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured confirm
/// responses. With no queued response, `confirm` answers its default.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    spinners: Vec<String>,
    confirms_asked: Vec<String>,
    confirm_responses: VecDeque<bool>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            interactive: true,
            ..Default::default()
        }
    }

    /// Queue an answer for the next confirm prompt.
    ///
    /// Answers are consumed in order; an exhausted queue falls back to
    /// the prompt's default.
    pub fn queue_confirm_response(&mut self, answer: bool) {
        self.confirm_responses.push_back(answer);
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all spinner start messages.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get the questions asked through confirm prompts.
    pub fn confirms_asked(&self) -> &[String] {
        &self.confirms_asked
    }

    /// Check whether any captured line of any kind contains `needle`.
    pub fn has_line(&self, needle: &str) -> bool {
        self.messages
            .iter()
            .chain(&self.successes)
            .chain(&self.warnings)
            .chain(&self.errors)
            .any(|line| line.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        self.confirms_asked.push(question.to_string());
        Ok(self.confirm_responses.pop_front().unwrap_or(default))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner that swallows everything.
struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_message_kind() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.success("s");
        ui.warning("w");
        ui.error("e");

        assert_eq!(ui.messages(), ["m".to_string()]);
        assert_eq!(ui.successes(), ["s".to_string()]);
        assert_eq!(ui.warnings(), ["w".to_string()]);
        assert_eq!(ui.errors(), ["e".to_string()]);
        assert!(ui.has_line("w"));
        assert!(!ui.has_line("nope"));
    }

    #[test]
    fn queued_confirm_answers_are_consumed_in_order() {
        let mut ui = MockUI::new();
        ui.queue_confirm_response(false);
        ui.queue_confirm_response(true);

        assert!(!ui.confirm("first?", true).unwrap());
        assert!(ui.confirm("second?", false).unwrap());
        // Queue exhausted: fall back to the default
        assert!(ui.confirm("third?", true).unwrap());
        assert_eq!(ui.confirms_asked().len(), 3);
    }
}
