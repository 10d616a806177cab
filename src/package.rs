//! Installed-version queries against the dpkg status database.
//!
//! dpkg output is format-coupled text, so the query sits behind the
//! [`PackageQuery`] trait and the rest of the system depends only on the
//! parsed contract: a version string, or nothing.

use std::process::Command;

/// Capability interface for package status queries.
pub trait PackageQuery {
    /// The installed version of `package`, or `None` if the package is
    /// not installed or the query tool is unavailable.
    ///
    /// Absence is a normal outcome here, never an error.
    fn installed_version(&self, package: &str) -> Option<String>;
}

/// Production implementation backed by `dpkg -s`.
#[derive(Debug, Default)]
pub struct DpkgQuery;

impl PackageQuery for DpkgQuery {
    fn installed_version(&self, package: &str) -> Option<String> {
        let output = Command::new("dpkg").args(["-s", package]).output().ok()?;

        if !output.status.success() {
            tracing::debug!(package, "dpkg reports no such package");
            return None;
        }

        parse_version_field(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Extract the `Version:` field from dpkg status output.
///
/// Returns the trimmed value after the first colon of the first line
/// starting with `Version:`. An empty value counts as absent.
pub fn parse_version_field(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| line.starts_with("Version:"))
        .and_then(|line| line.split_once(':'))
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DPKG_STATUS: &str = "\
Package: discord
Status: install ok installed
Priority: optional
Section: non-free/net
Maintainer: Discord Inc <sales@discordapp.com>
Architecture: amd64
Version: 0.0.267
Depends: libc++1, libasound2
Description: All-in-one voice and text chat
";

    #[test]
    fn parses_version_from_status_output() {
        assert_eq!(
            parse_version_field(DPKG_STATUS),
            Some("0.0.267".to_string())
        );
    }

    #[test]
    fn value_after_first_colon_is_kept_whole() {
        // Debian epochs put a second colon inside the value
        assert_eq!(
            parse_version_field("Version: 2:1.0-1\n"),
            Some("2:1.0-1".to_string())
        );
    }

    #[test]
    fn value_is_trimmed() {
        assert_eq!(
            parse_version_field("Version:   0.0.270  \n"),
            Some("0.0.270".to_string())
        );
    }

    #[test]
    fn missing_version_line_is_absent() {
        assert_eq!(parse_version_field("Package: discord\nStatus: ok\n"), None);
    }

    #[test]
    fn empty_output_is_absent() {
        assert_eq!(parse_version_field(""), None);
    }

    #[test]
    fn empty_value_is_absent_not_empty_string() {
        assert_eq!(parse_version_field("Version:\n"), None);
        assert_eq!(parse_version_field("Version:   \n"), None);
    }

    #[test]
    fn version_must_start_the_line() {
        assert_eq!(parse_version_field("Config-Version: 1.2.3\n"), None);
    }

    #[test]
    fn missing_package_yields_none() {
        let query = DpkgQuery;
        // dpkg (if present) fails the status query; if dpkg itself is
        // missing the spawn fails. Either way: absence, not a panic.
        assert_eq!(
            query.installed_version("discup-test-no-such-package-xyz"),
            None
        );
    }
}
