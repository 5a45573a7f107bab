#![forbid(unsafe_code)]

//! The echelon demo binary
//!
//! Parses the two gating flags, merges them over the config file, installs
//! the ambient context, and hands fully constructed emitters to the command
//! bodies.

use clap::{CommandFactory, Parser};
use echelon::cli::{Cli, Command, commands};
use echelon::config::{Config, ConfigError};
use echelon::context::{self, ExecContext};
use echelon::output::{StructuredEmitter, TextEmitter};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("echelon: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let (config, config_source) = load_config(&cli)?;

    // Flags OR-merge over the config: either side can enable, neither can
    // disable what the other enabled.
    let ctx = ExecContext::new(
        cli.debug || config.output.debug,
        cli.verbose || config.output.verbose,
    );
    context::install(ctx);

    let color = cli.color.map(Into::into).unwrap_or(config.output.color);
    let choice = color.to_color_choice(io::stdout().is_terminal());

    let mut echo = TextEmitter::stdout(ctx, choice);
    let mut printer = StructuredEmitter::stdout(ctx, choice);

    commands::debug_banner(&mut echo, &cli, config_source.as_deref())?;

    match &cli.command {
        Some(Command::Hello { name }) => commands::hello(&mut echo, name.as_deref())?,
        Some(Command::Levels) => commands::levels(&mut printer)?,
        None => Cli::command().print_help()?,
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<(Config, Option<PathBuf>), ConfigError> {
    match &cli.config {
        Some(path) => Ok((Config::load(path)?, Some(path.clone()))),
        None => Config::discover(Path::new(".")),
    }
}
