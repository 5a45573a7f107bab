#![forbid(unsafe_code)]

//! The `echelon.toml` configuration file
//!
//! Holds invocation defaults for the output dispatcher:
//!
//! ```toml
//! [output]
//! color = "auto"    # auto | always | never
//! debug = false
//! verbose = false
//! ```
//!
//! Every field is optional; an absent file means defaults. Command-line
//! flags OR-merge over the config: a flag can enable what the config leaves
//! off, never the reverse.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use termcolor::ColorChoice;
use thiserror::Error;

/// File name searched for in the working directory
pub const CONFIG_FILE_NAME: &str = "echelon.toml";

/// Errors from loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// When to colorize output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorOption {
    /// Maps onto a termcolor choice; `Auto` drops to `Never` when stdout is
    /// not a terminal
    pub fn to_color_choice(self, stdout_is_tty: bool) -> ColorChoice {
        match self {
            ColorOption::Always => ColorChoice::Always,
            ColorOption::Never => ColorChoice::Never,
            ColorOption::Auto => {
                if stdout_is_tty {
                    ColorChoice::Auto
                } else {
                    ColorChoice::Never
                }
            }
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
}

/// The `[output]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: ColorOption,
    pub debug: bool,
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from an explicit path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Config::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `echelon.toml` from `dir` if present, defaults otherwise
    ///
    /// Returns the path actually read alongside the configuration so callers
    /// can report where their settings came from.
    pub fn discover(dir: &Path) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Ok((Config::load(&path)?, Some(path)))
        } else {
            Ok((Config::default(), None))
        }
    }
}
