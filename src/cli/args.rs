#![forbid(unsafe_code)]

//! Command-line argument definitions
//!
//! The two gating flags (`-d/--debug`, `-v/--verbose`) are global: they work
//! before or after the subcommand and are merged into the execution context
//! exactly once, at startup, before any command body runs.

use crate::config::ColorOption;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "echelon",
    version,
    about = "Demo CLI for leveled, context-aware colored output",
    propagate_version = true
)]
pub struct Cli {
    /// Print code-level diagnostics, prefixed with timestamp and call site
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    /// Print process-level detail
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// When to colorize output
    #[arg(long, value_enum, value_name = "WHEN", global = true)]
    pub color: Option<ColorArg>,

    /// Path to a config file (defaults to ./echelon.toml when present)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Command-line value for the color option
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorOption {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorOption::Auto,
            ColorArg::Always => ColorOption::Always,
            ColorArg::Never => ColorOption::Never,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Greet someone once at every output level
    Hello {
        /// Name to greet; defaults to $USER, then "you"
        name: Option<String>,
    },
    /// Show the level table through the structured printer
    Levels,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_default_off() {
        let cli = Cli::try_parse_from(["echelon"]).unwrap();
        assert!(!cli.debug);
        assert!(!cli.verbose);
        assert_eq!(cli.color, None);
        assert_eq!(cli.config, None);
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_short_and_long_flags() {
        let cli = Cli::try_parse_from(["echelon", "-d", "-v"]).unwrap();
        assert!(cli.debug);
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["echelon", "--debug", "--verbose"]).unwrap();
        assert!(cli.debug);
        assert!(cli.verbose);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["echelon", "hello", "-d"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Some(Command::Hello { .. })));
    }

    #[test]
    fn test_hello_with_name() {
        let cli = Cli::try_parse_from(["echelon", "hello", "Alice"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Hello {
                name: Some("Alice".to_string())
            })
        );
    }

    #[test]
    fn test_color_values() {
        for (value, expected) in [
            ("auto", ColorArg::Auto),
            ("always", ColorArg::Always),
            ("never", ColorArg::Never),
        ] {
            let cli = Cli::try_parse_from(["echelon", "--color", value]).unwrap();
            assert_eq!(cli.color, Some(expected));
        }
        assert!(Cli::try_parse_from(["echelon", "--color", "sometimes"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["echelon", "goodbye"]).is_err());
    }
}
