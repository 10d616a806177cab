//! Latest-version resolution from the download endpoint.
//!
//! The endpoint answers a HEAD request with a redirect chain ending at a
//! versioned artifact URL, e.g.
//! `https://dl.discordapp.net/apps/linux/0.0.270/discord-0.0.270.deb`.
//! The version is whatever `/D.D.D/` segment that final URL carries.

use std::time::Duration;

use regex::Regex;
use reqwest::blocking::Client;

/// User agent sent on every request.
pub const USER_AGENT: &str = concat!("discup/", env!("CARGO_PKG_VERSION"));

/// Resolves the latest published version for a download endpoint.
pub struct ReleaseResolver {
    client: Client,
    endpoint: String,
}

impl ReleaseResolver {
    /// Create a resolver for the given endpoint with a 10-second timeout.
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint: endpoint.to_string(),
        }
    }

    /// The latest available version, or `None` if it cannot be determined.
    ///
    /// Network failures, non-success statuses, and URLs without a version
    /// segment are all the same outcome: unknown. Nothing here escalates.
    pub fn latest_version(&self) -> Option<String> {
        let response = match self.client.head(&self.endpoint).send() {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("version check failed: {e}");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "version check got non-success status");
            return None;
        }

        let resolved = response.url().as_str();
        tracing::debug!(resolved, "download endpoint resolved");
        extract_version(resolved)
    }
}

/// Extract a `MAJOR.MINOR.PATCH` version from a resolved URL.
///
/// Matches the first three dot-separated digit groups enclosed in path
/// separators.
pub fn extract_version(url: &str) -> Option<String> {
    let re = Regex::new(r"/(\d+\.\d+\.\d+)/").ok()?;
    re.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
