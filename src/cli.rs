//! Command-line interface for number_baseball.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Number Baseball - guess three distinct digits from strike/ball hints
#[derive(Parser, Debug)]
#[command(name = "number_baseball")]
#[command(about = "Guess three distinct digits from strike/ball hints", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true, env = "NUMBER_BASEBALL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed for the secret generator (overrides the settings file)
    #[arg(long, global = true, env = "NUMBER_BASEBALL_SEED")]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset (overrides the settings file)
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    /// Disable revealing the answer
    #[arg(long, global = true)]
    pub no_reveal: bool,

    /// Subcommand to run (defaults to line mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in line mode on stdin/stdout
    Play,

    /// Play in the terminal UI
    Tui,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_line_mode() {
        let cli = Cli::try_parse_from(["number_baseball"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_reveal);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["number_baseball", "tui", "--seed", "5", "--no-reveal"]).unwrap();
        assert_eq!(cli.command, Some(Command::Tui));
        assert_eq!(cli.seed, Some(5));
        assert!(cli.no_reveal);
    }
}
