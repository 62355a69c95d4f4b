//! CLI definitions for collab-kit
//!
//! This module defines the CLI structure using clap's derive macros.

use clap::Parser;

/// Resolve orchestration prompts and tee output to a log file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Role whose prompt to resolve
    #[arg(short, long, default_value = "supervisor")]
    pub role: String,

    /// Comma-separated worker names substituted for {members}
    #[arg(short, long)]
    pub members: Option<String>,

    /// Explicit prompts.yaml path (overrides tier discovery)
    #[arg(short, long)]
    pub prompts: Option<String>,

    /// Duplicate all output into this append-mode log file
    #[arg(long)]
    pub log_file: Option<String>,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_supervisor_role() {
        let cli = Cli::parse_from(["collab-kit"]);
        assert_eq!(cli.role, "supervisor");
        assert!(cli.members.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn parses_members_and_log_file() {
        let cli = Cli::parse_from([
            "collab-kit",
            "--members",
            "coder,reviewer",
            "--log-file",
            "run.log",
            "--json",
        ]);
        assert_eq!(cli.members.as_deref(), Some("coder,reviewer"));
        assert_eq!(cli.log_file.as_deref(), Some("run.log"));
        assert!(cli.json);
    }
}
