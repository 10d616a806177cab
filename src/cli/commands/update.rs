//! The update-and-launch workflow.
//!
//! The default invocation and `--update` both run through here; the only
//! differences are whether the user is asked first and whether Discord is
//! launched afterwards.

use crate::app::AppProfile;
use crate::error::Result;
use crate::install::{install, InstallOutcome};
use crate::launch::{ensure_running, LaunchOutcome, PgrepQuery};
use crate::package::{DpkgQuery, PackageQuery};
use crate::release::ReleaseResolver;
use crate::ui::UserInterface;

use super::{report_versions, Command, CommandResult};

/// Whether an update run would install something.
///
/// Pure presence/inequality check: an unknown latest version never
/// triggers, any difference (including "not installed") does. There is
/// deliberately no semantic version ordering here.
pub fn update_needed(installed: Option<&str>, latest: Option<&str>) -> bool {
    match latest {
        Some(latest) => installed != Some(latest),
        None => false,
    }
}

/// Update Discord if needed, then (optionally) make sure it is running.
pub struct UpdateCommand {
    profile: &'static AppProfile,
    /// Launch the application after the update phase (the no-flag mode).
    launch: bool,
    /// Skip the confirmation prompt.
    assume_yes: bool,
}

impl UpdateCommand {
    /// Create a new update command.
    pub fn new(profile: &'static AppProfile, launch: bool, assume_yes: bool) -> Self {
        Self {
            profile,
            launch,
            assume_yes,
        }
    }

    fn run_update(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let installed = DpkgQuery.installed_version(self.profile.package);
        let latest = ReleaseResolver::new(self.profile.download_url).latest_version();
        report_versions(ui, installed.as_deref(), latest.as_deref());

        if !update_needed(installed.as_deref(), latest.as_deref()) {
            if latest.is_some() {
                ui.success(&format!("{} is up to date", self.profile.name));
            } else {
                ui.warning("Could not determine the latest version; skipping update");
            }
            return Ok(CommandResult::success());
        }

        // Confirmation only in the launch-afterwards (no-flag) mode
        let interactive = self.launch && !self.assume_yes && ui.is_interactive();

        match install(ui, self.profile, interactive) {
            Ok(InstallOutcome::Installed) => {
                ui.success(&format!("{} updated", self.profile.name));
            }
            Ok(InstallOutcome::Declined) => {
                ui.message("Update cancelled");
            }
            Err(e) if e.is_fatal() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => {
                // Reported, not escalated: the run carries on
                ui.error(&e.to_string());
            }
        }

        Ok(CommandResult::success())
    }

    fn run_launch(&self, ui: &mut dyn UserInterface) {
        match ensure_running(&PgrepQuery, self.profile) {
            Ok(LaunchOutcome::AlreadyRunning) => {
                ui.message(&format!("{} is already running", self.profile.name));
            }
            Ok(LaunchOutcome::Started(path)) => {
                ui.success(&format!(
                    "Started {} ({})",
                    self.profile.name,
                    path.display()
                ));
            }
            Ok(LaunchOutcome::NotFound) => {
                ui.warning(&format!(
                    "Could not find the {} executable",
                    self.profile.name
                ));
            }
            Err(e) => {
                ui.error(&format!("Failed to start {}: {}", self.profile.name, e));
            }
        }
    }

    fn should_launch(&self, result: &CommandResult) -> bool {
        // A fatal update failure terminates the run before any launch
        self.launch && result.success
    }
}

impl Command for UpdateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let result = self.run_update(ui)?;

        if self.should_launch(&result) {
            self.run_launch(ui);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_versions_need_no_update() {
        assert!(!update_needed(Some("1.2.3"), Some("1.2.3")));
    }

    #[test]
    fn differing_versions_need_an_update() {
        assert!(update_needed(Some("1.2.3"), Some("1.2.4")));
    }

    #[test]
    fn missing_install_with_known_latest_needs_an_update() {
        assert!(update_needed(None, Some("2.0.0")));
    }

    #[test]
    fn unknown_latest_never_triggers() {
        assert!(!update_needed(Some("1.2.3"), None));
        assert!(!update_needed(None, None));
    }

    #[test]
    fn comparison_is_textual_not_semantic() {
        // A locally newer build still differs from the remote string and
        // is offered the remote package
        assert!(update_needed(Some("9.9.9"), Some("1.0.0")));
    }

    #[test]
    fn fatal_update_failure_suppresses_launch() {
        let cmd = UpdateCommand::new(&crate::app::DISCORD, true, false);
        assert!(cmd.should_launch(&CommandResult::success()));
        assert!(!cmd.should_launch(&CommandResult::failure(1)));
    }

    #[test]
    fn update_only_mode_never_launches() {
        let cmd = UpdateCommand::new(&crate::app::DISCORD, false, false);
        assert!(!cmd.should_launch(&CommandResult::success()));
    }
}
