#![forbid(unsafe_code)]

//! Single-string emitter: one styled line per emission
//!
//! The emitter snapshots an [`ExecContext`] at construction and applies the
//! shared gating policy before any formatting work. An emitter holding no
//! context (detached, or built from an empty ambient registry) silently
//! drops every emission instead of failing; that supports output helpers
//! invoked outside any command invocation.

use crate::callsite::{CallSite, debug_prefix};
use crate::context::{self, ExecContext};
use crate::level::Level;
use chrono::Local;
use std::fmt;
use std::io::{self, Write};
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Leveled single-line text emitter over any colored writer
pub struct TextEmitter<W: WriteColor> {
    ctx: Option<ExecContext>,
    writer: W,
}

impl TextEmitter<StandardStream> {
    /// Emitter over stdout with an explicit context
    pub fn stdout(ctx: ExecContext, choice: ColorChoice) -> Self {
        TextEmitter::new(ctx, StandardStream::stdout(choice))
    }

    /// Emitter over stdout using the ambient context, if one is installed
    pub fn ambient(choice: ColorChoice) -> Self {
        TextEmitter::from_ambient(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> TextEmitter<W> {
    /// Creates an emitter bound to the given context
    pub fn new(ctx: ExecContext, writer: W) -> Self {
        TextEmitter {
            ctx: Some(ctx),
            writer,
        }
    }

    /// Creates an emitter with no context; every emission is a silent no-op
    pub fn detached(writer: W) -> Self {
        TextEmitter { ctx: None, writer }
    }

    /// Creates an emitter over `writer` snapshotting the ambient context
    pub fn from_ambient(writer: W) -> Self {
        TextEmitter {
            ctx: context::current(),
            writer,
        }
    }

    /// The context this emitter was built with, if any
    pub fn context(&self) -> Option<ExecContext> {
        self.ctx
    }

    /// Consumes the emitter, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Emit one line at `level`
    ///
    /// Applies the gate first, then the debug prefix, then the style:
    /// `style` wins when given, otherwise the level's default applies, and
    /// an unstyled level renders plain. Sink failures propagate untouched.
    pub fn emit(
        &mut self,
        level: Level,
        message: &str,
        style: Option<&ColorSpec>,
        site: CallSite,
    ) -> io::Result<()> {
        let Some(ctx) = self.ctx else {
            return Ok(());
        };
        if !ctx.allows(level) {
            return Ok(());
        }
        self.write_line(ctx, level, message, style, site)
    }

    /// Like [`emit`](Self::emit), but renders `args` only after the gate
    /// passes, so suppressed calls never pay for formatting
    pub fn emit_args(
        &mut self,
        level: Level,
        style: Option<&ColorSpec>,
        site: CallSite,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        let Some(ctx) = self.ctx else {
            return Ok(());
        };
        if !ctx.allows(level) {
            return Ok(());
        }
        self.write_line(ctx, level, &args.to_string(), style, site)
    }

    fn write_line(
        &mut self,
        ctx: ExecContext,
        level: Level,
        body: &str,
        style: Option<&ColorSpec>,
        site: CallSite,
    ) -> io::Result<()> {
        let prefix = if ctx.debug {
            debug_prefix(Local::now(), site)
        } else {
            String::new()
        };

        let effective = effective_style(level, style);
        if let Some(spec) = &effective {
            self.writer.set_color(spec)?;
        }
        write!(self.writer, "{prefix}{body}")?;
        if effective.is_some() {
            self.writer.reset()?;
        }
        writeln!(self.writer)
    }
}

/// The style actually applied: the override when given, the level default
/// otherwise
pub fn effective_style(level: Level, style: Option<&ColorSpec>) -> Option<ColorSpec> {
    match style {
        Some(spec) => Some(spec.clone()),
        None => level.default_style(),
    }
}

/// Emit a formatted line at an explicit level, capturing the call site
#[macro_export]
macro_rules! echo {
    ($emitter:expr, $level:expr, $($arg:tt)*) => {
        $emitter.emit_args($level, None, $crate::callsite!(), ::std::format_args!($($arg)*))
    };
}

/// Emit an unstyled line
#[macro_export]
macro_rules! echo_noset {
    ($emitter:expr, $($arg:tt)*) => {
        $crate::echo!($emitter, $crate::level::Level::Noset, $($arg)*)
    };
}

/// Emit a code-level diagnostic; shown only when debug is enabled
#[macro_export]
macro_rules! echo_debug {
    ($emitter:expr, $($arg:tt)*) => {
        $crate::echo!($emitter, $crate::level::Level::Debug, $($arg)*)
    };
}

/// Emit process detail; shown when verbose or debug is enabled
#[macro_export]
macro_rules! echo_verbose {
    ($emitter:expr, $($arg:tt)*) => {
        $crate::echo!($emitter, $crate::level::Level::Verbose, $($arg)*)
    };
}

#[macro_export]
macro_rules! echo_info {
    ($emitter:expr, $($arg:tt)*) => {
        $crate::echo!($emitter, $crate::level::Level::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! echo_warning {
    ($emitter:expr, $($arg:tt)*) => {
        $crate::echo!($emitter, $crate::level::Level::Warning, $($arg)*)
    };
}

#[macro_export]
macro_rules! echo_success {
    ($emitter:expr, $($arg:tt)*) => {
        $crate::echo!($emitter, $crate::level::Level::Success, $($arg)*)
    };
}

#[macro_export]
macro_rules! echo_error {
    ($emitter:expr, $($arg:tt)*) => {
        $crate::echo!($emitter, $crate::level::Level::Error, $($arg)*)
    };
}

#[macro_export]
macro_rules! echo_fatal {
    ($emitter:expr, $($arg:tt)*) => {
        $crate::echo!($emitter, $crate::level::Level::Fatal, $($arg)*)
    };
}
