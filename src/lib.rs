//! Discup - keep Discord up to date and running on Debian-based systems.
//!
//! Discup queries the dpkg database for the installed Discord version,
//! resolves the latest published version from the official download
//! endpoint, installs the newer package when the two differ, and finally
//! launches Discord if it is not already running.
//!
//! # Modules
//!
//! - [`app`] - The application profile (package name, endpoint, process name)
//! - [`cli`] - Command-line interface and command dispatching
//! - [`error`] - Error types and result aliases
//! - [`install`] - Privilege elevation and package installation
//! - [`launch`] - Process detection and detached launching
//! - [`package`] - Installed-version queries against dpkg
//! - [`release`] - Latest-version resolution from the download endpoint
//! - [`shell`] - PATH lookup and environment checks
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use discup::release::extract_version;
//!
//! // The latest version is carried in the resolved download URL
//! let url = "https://dl.discordapp.net/apps/linux/0.0.270/discord-0.0.270.deb";
//! assert_eq!(extract_version(url), Some("0.0.270".to_string()));
//! ```

pub mod app;
pub mod cli;
pub mod error;
pub mod install;
pub mod launch;
pub mod package;
pub mod release;
pub mod shell;
pub mod ui;

pub use error::{DiscupError, Result};
