//! Package download and elevated installation.
//!
//! This is the only part of Discup that mutates system state: it writes a
//! temporary artifact, runs `dpkg -i` through a privilege escalation
//! helper, and falls back to `apt-get -f install` for dependency repair.

pub mod elevation;
pub mod installer;

pub use elevation::Elevation;
pub use installer::{download_artifact, install, InstallOutcome};
