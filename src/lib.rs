#![forbid(unsafe_code)]

//! Echelon: leveled, context-aware colored output for CLI tools
//!
//! A fixed set of eight output levels, two emitter variants (single styled
//! line vs. pretty-printed objects) sharing one level table and one gating
//! policy, and a per-invocation execution context whose `debug`/`verbose`
//! flags decide what shows.

pub mod callsite;
pub mod cli;
pub mod config;
pub mod context;
pub mod level;
pub mod output;
