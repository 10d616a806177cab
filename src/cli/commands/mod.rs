//! Command implementations.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod update;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use crate::ui::UserInterface;

/// Print the two version status lines every mode starts with.
pub(crate) fn report_versions(
    ui: &mut dyn UserInterface,
    installed: Option<&str>,
    latest: Option<&str>,
) {
    ui.message(&format!(
        "Installed version: {}",
        installed.unwrap_or("not installed")
    ));
    ui.message(&format!(
        "Latest version:    {}",
        latest.unwrap_or("unknown")
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn report_versions_spells_out_absence() {
        let mut ui = MockUI::new();
        report_versions(&mut ui, None, None);

        assert!(ui.has_line("Installed version: not installed"));
        assert!(ui.has_line("Latest version:    unknown"));
    }

    #[test]
    fn report_versions_prints_both_values() {
        let mut ui = MockUI::new();
        report_versions(&mut ui, Some("0.0.267"), Some("0.0.270"));

        assert!(ui.has_line("Installed version: 0.0.267"));
        assert!(ui.has_line("Latest version:    0.0.270"));
    }
}
