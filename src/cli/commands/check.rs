//! The `--check` command: report versions, touch nothing.

use serde::Serialize;

use crate::app::AppProfile;
use crate::error::Result;
use crate::package::{DpkgQuery, PackageQuery};
use crate::release::ReleaseResolver;
use crate::ui::UserInterface;

use super::update::update_needed;
use super::{report_versions, Command, CommandResult};

/// Machine-readable version report for `--check --json`.
#[derive(Debug, Serialize)]
pub struct VersionReport {
    /// dpkg package name.
    pub package: String,
    /// Installed version, if any.
    pub installed: Option<String>,
    /// Latest published version, if it could be resolved.
    pub latest: Option<String>,
    /// Whether an update run would install something.
    pub update_available: bool,
}

impl VersionReport {
    /// Build a report from the two version lookups.
    pub fn new(profile: &AppProfile, installed: Option<String>, latest: Option<String>) -> Self {
        let update_available = update_needed(installed.as_deref(), latest.as_deref());
        Self {
            package: profile.package.to_string(),
            installed,
            latest,
            update_available,
        }
    }
}

/// Report the installed and latest versions.
pub struct CheckCommand {
    profile: &'static AppProfile,
    json: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(profile: &'static AppProfile, json: bool) -> Self {
        Self { profile, json }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let installed = DpkgQuery.installed_version(self.profile.package);
        let latest = ReleaseResolver::new(self.profile.download_url).latest_version();

        if self.json {
            let report = VersionReport::new(self.profile, installed, latest);
            // Machine output goes to stdout untouched by UI modes
            println!(
                "{}",
                serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?
            );
        } else {
            report_versions(ui, installed.as_deref(), latest.as_deref());
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DISCORD;

    #[test]
    fn report_flags_update_when_versions_differ() {
        let report =
            VersionReport::new(&DISCORD, Some("0.0.267".into()), Some("0.0.270".into()));
        assert!(report.update_available);
        assert_eq!(report.package, "discord");
    }

    #[test]
    fn report_has_no_update_without_a_latest_version() {
        let report = VersionReport::new(&DISCORD, Some("0.0.267".into()), None);
        assert!(!report.update_available);
    }

    #[test]
    fn report_serializes_absent_versions_as_null() {
        let report = VersionReport::new(&DISCORD, None, None);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"installed\":null"));
        assert!(json.contains("\"latest\":null"));
        assert!(json.contains("\"update_available\":false"));
    }
}
