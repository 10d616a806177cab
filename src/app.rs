//! The application profile.
//!
//! Everything Discup knows about the application it manages lives here:
//! the dpkg package name, the download endpoint, the exact process name
//! to look for, and the executable names to search on PATH. Commands take
//! a profile reference instead of reaching for constants, so tests can
//! substitute their own.

/// Description of the managed desktop application.
#[derive(Debug, Clone, Copy)]
pub struct AppProfile {
    /// Human-readable name, used in status lines.
    pub name: &'static str,

    /// dpkg package name queried for the installed version.
    pub package: &'static str,

    /// Download endpoint. A HEAD request here redirects to a versioned
    /// artifact URL; a GET returns the .deb payload.
    pub download_url: &'static str,

    /// Exact process name matched against the process table.
    pub process_name: &'static str,

    /// Executable names searched on PATH, in preference order.
    pub executables: &'static [&'static str],
}

/// The Discord profile.
///
/// The endpoint resolves to the latest stable linux build; the process
/// table entry is capitalized while the package and the usual binary name
/// are not, hence both spellings in the executable list.
pub const DISCORD: AppProfile = AppProfile {
    name: "Discord",
    package: "discord",
    download_url: "https://discord.com/api/download?platform=linux&format=deb",
    process_name: "Discord",
    executables: &["discord", "Discord"],
};
