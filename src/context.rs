#![forbid(unsafe_code)]

//! Per-invocation execution context and the gating policy
//!
//! The context holds the two booleans that gate the verbose levels. It is
//! built once at startup from CLI flags merged with config defaults, and is
//! read-only afterwards: emitters snapshot it at construction and never
//! re-read it.
//!
//! An ambient registry is provided for library-style callers that cannot
//! thread the context through explicitly. When no context is installed,
//! emitters built from the ambient registry stay silent instead of failing.

use crate::level::Level;
use std::sync::RwLock;

/// Execution context for one command invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecContext {
    /// Show code-level diagnostics and the timestamped call-site prefix
    pub debug: bool,
    /// Show process-level detail
    pub verbose: bool,
}

impl ExecContext {
    pub fn new(debug: bool, verbose: bool) -> Self {
        ExecContext { debug, verbose }
    }

    /// The gating policy: decide whether an emission at `level` proceeds
    ///
    /// - `Debug` emits iff the debug flag is set
    /// - `Verbose` emits iff the verbose or debug flag is set
    /// - every other level always emits
    ///
    /// Callers must evaluate this before doing any formatting work so that
    /// suppressed calls cost nothing.
    pub fn allows(self, level: Level) -> bool {
        match level {
            Level::Debug => self.debug,
            Level::Verbose => self.verbose || self.debug,
            _ => true,
        }
    }
}

static AMBIENT: RwLock<Option<ExecContext>> = RwLock::new(None);

/// Install the ambient context for this process
///
/// Called once at startup, after flag parsing and before any command body.
pub fn install(ctx: ExecContext) {
    match AMBIENT.write() {
        Ok(mut guard) => *guard = Some(ctx),
        Err(poisoned) => *poisoned.into_inner() = Some(ctx),
    }
}

/// Remove the ambient context
pub fn clear() {
    match AMBIENT.write() {
        Ok(mut guard) => *guard = None,
        Err(poisoned) => *poisoned.into_inner() = None,
    }
}

/// The currently installed ambient context, if any
pub fn current() -> Option<ExecContext> {
    match AMBIENT.read() {
        Ok(guard) => *guard,
        Err(poisoned) => *poisoned.into_inner(),
    }
}
