//! Configuration file parsing and validation

pub mod echelon_toml;

pub use echelon_toml::{ColorOption, Config, ConfigError, OutputConfig};
