//! Download-and-install of the package artifact.

use std::fs::File;
use std::io;
use std::time::Duration;

use reqwest::blocking::Client;
use tempfile::Builder;

use crate::app::AppProfile;
use crate::error::{DiscupError, Result};
use crate::release::USER_AGENT;
use crate::ui::UserInterface;

use super::Elevation;

/// Result of an install attempt that did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The new package was installed.
    Installed,
    /// The user declined the update; nothing was touched.
    Declined,
}

/// Download the latest package and install it with elevated privileges.
///
/// When `interactive`, the user is asked first and a "no" returns
/// [`InstallOutcome::Declined`] with no side effects. The downloaded
/// artifact lives in a `NamedTempFile`, so it is removed on every exit
/// path, success or failure.
///
/// Errors: [`DiscupError::NoElevation`] when no escalation mechanism
/// exists (fatal to the run), [`DiscupError::Download`] /
/// [`DiscupError::Install`] for reported, recoverable failures.
pub fn install(
    ui: &mut dyn UserInterface,
    profile: &AppProfile,
    interactive: bool,
) -> Result<InstallOutcome> {
    if interactive {
        let update_now = ui.confirm("A new version is available. Update now?", true)?;
        if !update_now {
            return Ok(InstallOutcome::Declined);
        }
    }

    let elevation = Elevation::resolve()?;
    tracing::debug!(%elevation, "resolved privilege escalation");

    let mut artifact = Builder::new()
        .prefix("discord-latest-")
        .suffix(".deb")
        .tempfile()?;

    let mut spinner =
        ui.start_spinner(&format!("Downloading the latest {} package...", profile.name));
    match download_artifact(profile.download_url, artifact.as_file_mut()) {
        Ok(bytes) => spinner.finish_success(&format!("Downloaded {}", format_size(bytes))),
        Err(e) => {
            spinner.finish_error("Download failed");
            return Err(e);
        }
    }

    ui.message(&format!("Installing {}...", profile.name));

    // Inherited stdio: pkexec/sudo may need to prompt for authorization
    let status = elevation
        .command("dpkg")
        .arg("-i")
        .arg(artifact.path())
        .status()
        .map_err(|e| DiscupError::Install {
            message: format!("failed to run dpkg: {e}"),
        })?;

    if !status.success() {
        tracing::debug!(code = ?status.code(), "dpkg -i failed, repairing dependencies");
        ui.warning("dpkg reported errors; attempting dependency repair");

        let repair = elevation
            .command("apt-get")
            .args(["-f", "-y", "install"])
            .status()
            .map_err(|e| DiscupError::Install {
                message: format!("failed to run apt-get: {e}"),
            })?;

        if !repair.success() {
            return Err(DiscupError::Install {
                message: format!(
                    "apt-get -f install exited with code {}",
                    repair
                        .code()
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "unknown".to_string())
                ),
            });
        }
    }

    Ok(InstallOutcome::Installed)
}

/// GET `url` and stream the response body into `dest`.
///
/// Returns the number of bytes written. No overall timeout: package
/// payloads are large and slow links are legitimate; only the connect
/// phase is bounded.
pub fn download_artifact(url: &str, dest: &mut File) -> Result<u64> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to build HTTP client");

    let mut response = client.get(url).send().map_err(|e| DiscupError::Download {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    if !response.status().is_success() {
        return Err(DiscupError::Download {
            url: url.to_string(),
            message: format!("HTTP {}", response.status()),
        });
    }

    let bytes = io::copy(&mut response, dest).map_err(|e| DiscupError::Download {
        url: url.to_string(),
        message: format!("while writing artifact: {e}"),
    })?;

    tracing::debug!(bytes, url, "artifact downloaded");
    Ok(bytes)
}

/// Human-readable byte count.
fn format_size(bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    const KIB: u64 = 1024;

    if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DISCORD;
    use crate::ui::MockUI;

    #[test]
    fn declined_update_has_no_side_effects() {
        let mut ui = MockUI::new();
        ui.queue_confirm_response(false);

        let outcome = install(&mut ui, &DISCORD, true).unwrap();

        assert_eq!(outcome, InstallOutcome::Declined);
        // The decline happens before elevation lookup and download
        assert!(ui.confirms_asked()[0].contains("Update now?"));
        assert!(ui.spinners().is_empty());
    }

    #[test]
    fn format_size_picks_a_unit() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KiB");
        assert_eq!(format_size(96 * 1024 * 1024), "96.0 MiB");
    }
}
