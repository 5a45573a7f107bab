#![forbid(unsafe_code)]

//! The level table: a closed set of output levels with display labels
//! and default foreground styles
//!
//! Levels are looked up by name only; declaration order carries no meaning.
//! The table is fixed at compile time and never mutated.

use termcolor::{Color, ColorSpec};
use thiserror::Error;

/// Requested a level name outside the fixed set.
///
/// This is a programming error, never a user-input error, and callers are
/// expected to fail fast rather than swallow it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output level: '{0}'")]
pub struct UnknownLevel(pub String);

/// An output level controlling whether and how a message is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Noset,
    Debug,
    Verbose,
    Info,
    Warning,
    Success,
    Error,
    Fatal,
}

/// Descriptor for a single level: its name, display label, and default style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub style: Option<ColorSpec>,
}

impl Level {
    /// All eight levels, for iteration in demos and tests
    pub const ALL: [Level; 8] = [
        Level::Noset,
        Level::Debug,
        Level::Verbose,
        Level::Info,
        Level::Warning,
        Level::Success,
        Level::Error,
        Level::Fatal,
    ];

    /// The level's canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Level::Noset => "noset",
            Level::Debug => "debug",
            Level::Verbose => "verbose",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Success => "success",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }

    /// The level's display label (empty for `Noset`)
    pub fn label(self) -> &'static str {
        match self {
            Level::Noset => "",
            Level::Debug => "DEBUG",
            Level::Verbose => "VERBOSE",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Success => "SUCCESS",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// The level's default foreground style, applied when the caller does not
    /// supply an explicit style override
    ///
    /// `Noset` has no default style and renders unstyled.
    pub fn default_style(self) -> Option<ColorSpec> {
        let (color, intense) = match self {
            Level::Noset => return None,
            Level::Debug => (Color::Black, true),
            Level::Verbose => (Color::Blue, false),
            Level::Info => (Color::Cyan, false),
            Level::Warning => (Color::Yellow, false),
            Level::Success => (Color::Green, true),
            Level::Error => (Color::Red, false),
            Level::Fatal => (Color::Red, true),
        };
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color)).set_intense(intense);
        Some(spec)
    }

    /// The full descriptor for this level
    pub fn spec(self) -> LevelSpec {
        LevelSpec {
            name: self.name(),
            label: self.label(),
            style: self.default_style(),
        }
    }

    /// Look up a level by name
    ///
    /// Fails with [`UnknownLevel`] for any name outside the fixed set.
    pub fn from_name(name: &str) -> Result<Level, UnknownLevel> {
        Level::ALL
            .into_iter()
            .find(|level| level.name() == name)
            .ok_or_else(|| UnknownLevel(name.to_string()))
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_all_levels() {
        for level in Level::ALL {
            assert_eq!(Level::from_name(level.name()), Ok(level));
            assert_eq!(level.name().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn test_from_name_rejects_unknown_names() {
        let err = Level::from_name("trace").unwrap_err();
        assert_eq!(err, UnknownLevel("trace".to_string()));
        assert_eq!(err.to_string(), "unknown output level: 'trace'");
        assert!(Level::from_name("INFO").is_err());
        assert!(Level::from_name("").is_err());
    }

    #[test]
    fn test_noset_has_no_default_style() {
        assert_eq!(Level::Noset.default_style(), None);
        assert_eq!(Level::Noset.label(), "");
    }

    #[test]
    fn test_default_style_families() {
        let fg = |level: Level| {
            let spec = level.default_style().unwrap();
            (spec.fg().copied(), spec.intense())
        };

        assert_eq!(fg(Level::Debug), (Some(Color::Black), true));
        assert_eq!(fg(Level::Verbose), (Some(Color::Blue), false));
        assert_eq!(fg(Level::Info), (Some(Color::Cyan), false));
        assert_eq!(fg(Level::Warning), (Some(Color::Yellow), false));
        assert_eq!(fg(Level::Success), (Some(Color::Green), true));
        assert_eq!(fg(Level::Error), (Some(Color::Red), false));
        assert_eq!(fg(Level::Fatal), (Some(Color::Red), true));
    }

    #[test]
    fn test_spec_matches_accessors() {
        for level in Level::ALL {
            let spec = level.spec();
            assert_eq!(spec.name, level.name());
            assert_eq!(spec.label, level.label());
            assert_eq!(spec.style, level.default_style());
        }
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Level::Warning.to_string(), "warning");
        assert_eq!(Level::Noset.to_string(), "noset");
    }
}
