#![forbid(unsafe_code)]

//! Command bodies for the demo binary
//!
//! Each command is a thin walk over the dispatcher: emitters come in from
//! `main` fully constructed, holding the invocation's execution context.

use crate::cli::args::{Cli, Command};
use crate::level::Level;
use crate::output::{StructuredEmitter, TextEmitter};
use serde_json::json;
use std::env;
use std::io;
use std::path::Path;
use termcolor::WriteColor;

/// Greet `name` once at every output level
///
/// With default flags only the six ungated levels show; `-v` adds the
/// verbose line and `-d` adds the debug line plus call-site prefixes.
pub fn hello<W: WriteColor>(echo: &mut TextEmitter<W>, name: Option<&str>) -> io::Result<()> {
    let name = match name {
        Some(name) => name.to_string(),
        None => env::var("USER").unwrap_or_else(|_| "you".to_string()),
    };

    crate::echo_debug!(echo, "Hello {name} (debug: code-level diagnostics)")?;
    crate::echo_verbose!(echo, "Hello {name} (verbose: process detail)")?;
    crate::echo_info!(echo, "Hello {name} (info)")?;
    crate::echo_warning!(echo, "Hello {name} (warning)")?;
    crate::echo_error!(echo, "Hello {name} (error)")?;
    crate::echo_success!(echo, "Hello {name} (success)")?;
    crate::echo_fatal!(echo, "Hello {name} (fatal)")?;
    crate::echo_noset!(echo, "Hello {name} (noset: unstyled)")?;
    Ok(())
}

/// Render the level table through the structured printer
///
/// Each row prints at its own level, so the table itself demonstrates the
/// gating rule: the debug and verbose rows only appear when their flags
/// allow them.
pub fn levels<W: WriteColor>(printer: &mut StructuredEmitter<W>) -> io::Result<()> {
    for level in Level::ALL {
        let spec = level.spec();
        crate::print_at!(
            printer,
            level,
            spec.name,
            json!({
                "label": spec.label,
                "styled": spec.style.is_some(),
                "always_shown": !matches!(level, Level::Debug | Level::Verbose),
            })
        )?;
    }
    Ok(())
}

/// Dump the resolved invocation before the command body runs
///
/// Emits entirely at the debug level, so without `-d` this is silent.
pub fn debug_banner<W: WriteColor>(
    echo: &mut TextEmitter<W>,
    cli: &Cli,
    config_source: Option<&Path>,
) -> io::Result<()> {
    crate::echo_debug!(echo, "{:=^100}", " echelon invocation ")?;
    crate::echo_debug!(echo, "command = {}", command_path(cli))?;
    crate::echo_debug!(echo, "debug = {}", cli.debug)?;
    crate::echo_debug!(echo, "verbose = {}", cli.verbose)?;
    crate::echo_debug!(echo, "color = {:?}", cli.color)?;
    match config_source {
        Some(path) => crate::echo_debug!(echo, "config = {}", path.display())?,
        None => crate::echo_debug!(echo, "config = <defaults>")?,
    }
    crate::echo_debug!(echo, "{:-^100}", "")?;
    Ok(())
}

fn command_path(cli: &Cli) -> String {
    match &cli.command {
        Some(Command::Hello { .. }) => "echelon hello".to_string(),
        Some(Command::Levels) => "echelon levels".to_string(),
        None => "echelon".to_string(),
    }
}
