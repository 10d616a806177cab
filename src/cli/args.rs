//! CLI argument definitions.
//!
//! Discup is flag-based rather than subcommand-based: the default
//! invocation updates and launches, `--update` updates only, `--check`
//! only reports.

use clap::Parser;
use clap_complete::Shell;

/// Discup - keep Discord up to date and running on Debian-based systems.
#[derive(Debug, Parser)]
#[command(name = "discup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the installed and latest versions, then exit
    #[arg(long, conflicts_with = "update")]
    pub check: bool,

    /// Install the latest version if needed, but do not launch Discord
    #[arg(long)]
    pub update: bool,

    /// Assume "yes" for the update confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Print the version report as JSON (requires --check)
    #[arg(long, requires = "check")]
    pub json: bool,

    /// Show verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_parses() {
        let cli = Cli::try_parse_from(["discup"]).unwrap();
        assert!(!cli.check);
        assert!(!cli.update);
        assert!(!cli.yes);
    }

    #[test]
    fn check_and_update_conflict() {
        assert!(Cli::try_parse_from(["discup", "--check", "--update"]).is_err());
    }

    #[test]
    fn json_requires_check() {
        assert!(Cli::try_parse_from(["discup", "--json"]).is_err());
        assert!(Cli::try_parse_from(["discup", "--check", "--json"]).is_ok());
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["discup", "-v", "-q"]).is_err());
    }

    #[test]
    fn completions_parses_a_shell() {
        let cli = Cli::try_parse_from(["discup", "--completions", "bash"]).unwrap();
        assert_eq!(cli.completions, Some(Shell::Bash));
    }
}
