#![forbid(unsafe_code)]

//! Multi-object emitter: variadic values pretty-printed per emission
//!
//! Structurally identical to the text emitter and sharing its level table and
//! gating policy; the difference is the sink signature. Scalars render
//! inline, mappings and sequences pretty-print over multiple lines, and a
//! non-empty debug prefix is written as a leading object of the same call
//! rather than being concatenated into the first value.

use crate::callsite::{CallSite, debug_prefix};
use crate::context::{self, ExecContext};
use crate::level::Level;
use crate::output::text::effective_style;
use chrono::Local;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Leveled multi-object emitter over any colored writer
pub struct StructuredEmitter<W: WriteColor> {
    ctx: Option<ExecContext>,
    writer: W,
}

impl StructuredEmitter<StandardStream> {
    /// Emitter over stdout with an explicit context
    pub fn stdout(ctx: ExecContext, choice: ColorChoice) -> Self {
        StructuredEmitter::new(ctx, StandardStream::stdout(choice))
    }

    /// Emitter over stdout using the ambient context, if one is installed
    pub fn ambient(choice: ColorChoice) -> Self {
        StructuredEmitter::from_ambient(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> StructuredEmitter<W> {
    /// Creates an emitter bound to the given context
    pub fn new(ctx: ExecContext, writer: W) -> Self {
        StructuredEmitter {
            ctx: Some(ctx),
            writer,
        }
    }

    /// Creates an emitter with no context; every emission is a silent no-op
    pub fn detached(writer: W) -> Self {
        StructuredEmitter { ctx: None, writer }
    }

    /// Creates an emitter over `writer` snapshotting the ambient context
    pub fn from_ambient(writer: W) -> Self {
        StructuredEmitter {
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

    /// Print `objects` at `level`, space-separated, ending in one newline
    ///
    /// Gate first, then the debug prefix as a leading object, then every
    /// value through [`render`]. The style rule matches the text emitter:
    /// an explicit `style` wins, the level default applies otherwise.
    pub fn print(
        &mut self,
        level: Level,
        objects: &[Value],
        style: Option<&ColorSpec>,
        site: CallSite,
    ) -> io::Result<()> {
        let Some(ctx) = self.ctx else {
            return Ok(());
        };
        if !ctx.allows(level) {
            return Ok(());
        }

        let effective = effective_style(level, style);
        if let Some(spec) = &effective {
            self.writer.set_color(spec)?;
        }

        let mut separate = false;
        if ctx.debug {
            let prefix = debug_prefix(Local::now(), site);
            write!(self.writer, "{}", prefix.trim_end())?;
            separate = true;
        }
        for object in objects {
            if separate {
                write!(self.writer, " ")?;
            }
            write!(self.writer, "{}", render(object))?;
            separate = true;
        }

        if effective.is_some() {
            self.writer.reset()?;
        }
        writeln!(self.writer)
    }
}

/// Render one value: strings and scalars inline, mappings and sequences
/// pretty-printed
pub fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null | Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
    }
}

/// Converts any serializable value for printing, mapping conversion failures
/// to `null` rather than surfacing them mid-emission
pub fn to_value_or_null<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Print serializable objects at an explicit level, capturing the call site
#[macro_export]
macro_rules! print_at {
    ($emitter:expr, $level:expr $(, $object:expr)* $(,)?) => {
        $emitter.print(
            $level,
            &[$($crate::output::structured::to_value_or_null(&$object)),*],
            None,
            $crate::callsite!(),
        )
    };
}

/// Print objects unstyled
#[macro_export]
macro_rules! print_noset {
    ($emitter:expr $(, $object:expr)* $(,)?) => {
        $crate::print_at!($emitter, $crate::level::Level::Noset $(, $object)*)
    };
}

/// Print code-level diagnostics; shown only when debug is enabled
#[macro_export]
macro_rules! print_debug {
    ($emitter:expr $(, $object:expr)* $(,)?) => {
        $crate::print_at!($emitter, $crate::level::Level::Debug $(, $object)*)
    };
}

/// Print process detail; shown when verbose or debug is enabled
#[macro_export]
macro_rules! print_verbose {
    ($emitter:expr $(, $object:expr)* $(,)?) => {
        $crate::print_at!($emitter, $crate::level::Level::Verbose $(, $object)*)
    };
}

#[macro_export]
macro_rules! print_info {
    ($emitter:expr $(, $object:expr)* $(,)?) => {
        $crate::print_at!($emitter, $crate::level::Level::Info $(, $object)*)
    };
}

#[macro_export]
macro_rules! print_warning {
    ($emitter:expr $(, $object:expr)* $(,)?) => {
        $crate::print_at!($emitter, $crate::level::Level::Warning $(, $object)*)
    };
}

#[macro_export]
macro_rules! print_success {
    ($emitter:expr $(, $object:expr)* $(,)?) => {
        $crate::print_at!($emitter, $crate::level::Level::Success $(, $object)*)
    };
}

#[macro_export]
macro_rules! print_error {
    ($emitter:expr $(, $object:expr)* $(,)?) => {
        $crate::print_at!($emitter, $crate::level::Level::Error $(, $object)*)
    };
}

#[macro_export]
macro_rules! print_fatal {
    ($emitter:expr $(, $object:expr)* $(,)?) => {
        $crate::print_at!($emitter, $crate::level::Level::Fatal $(, $object)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use predicates::prelude::*;
    use serde_json::json;
    use termcolor::{Ansi, NoColor};

    fn plain_emitter(debug: bool, verbose: bool) -> StructuredEmitter<NoColor<Vec<u8>>> {
        StructuredEmitter::new(ExecContext::new(debug, verbose), NoColor::new(Vec::new()))
    }

    fn rendered(emitter: StructuredEmitter<NoColor<Vec<u8>>>) -> String {
        String::from_utf8(emitter.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn test_strings_render_inline_without_quotes() {
        let mut emitter = plain_emitter(false, false);
        crate::print_info!(emitter, "alpha", "beta").unwrap();
        assert_eq!(rendered(emitter), "alpha beta\n");
    }

    #[test]
    fn test_scalars_render_inline() {
        let mut emitter = plain_emitter(false, false);
        crate::print_info!(emitter, 42, true, ()).unwrap();
        assert_eq!(rendered(emitter), "42 true null\n");
    }

    #[test]
    fn test_mappings_pretty_print() {
        let mut emitter = plain_emitter(false, false);
        crate::print_info!(emitter, json!({"name": "verbose", "gated": true})).unwrap();
        let output = rendered(emitter);
        assert!(output.contains("{\n"), "not pretty-printed: {output:?}");
        assert!(output.contains("\"name\": \"verbose\""));
        assert!(output.contains("\"gated\": true"));
    }

    #[test]
    fn test_sequences_pretty_print() {
        let mut emitter = plain_emitter(false, false);
        crate::print_info!(emitter, json!(["one", "two"])).unwrap();
        let output = rendered(emitter);
        assert!(output.contains("[\n"), "not pretty-printed: {output:?}");
        assert!(output.contains("\"one\""));
    }

    #[test]
    fn test_gating_matches_text_emitter() {
        let mut emitter = plain_emitter(false, false);
        crate::print_debug!(emitter, "hidden").unwrap();
        crate::print_verbose!(emitter, "hidden").unwrap();
        assert_eq!(rendered(emitter), "");

        let mut emitter = plain_emitter(false, true);
        crate::print_verbose!(emitter, "shown").unwrap();
        assert_eq!(rendered(emitter), "shown\n");

        let mut emitter = plain_emitter(true, false);
        crate::print_debug!(emitter, "shown").unwrap();
        assert!(rendered(emitter).ends_with("shown\n"));
    }

    #[test]
    fn test_prefix_is_a_leading_object_in_debug_mode() {
        let mut emitter = plain_emitter(true, false);
        crate::print_info!(emitter, "body", json!({"k": 1})).unwrap();
        let output = rendered(emitter);

        let pattern = predicate::str::is_match(
            r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}\] src/output/structured\.rs test_prefix_is_a_leading_object_in_debug_mode\(\): body \{\n",
        )
        .unwrap();
        assert!(pattern.eval(&output), "unexpected output: {output:?}");
    }

    #[test]
    fn test_no_prefix_when_debug_disabled() {
        let mut emitter = plain_emitter(false, true);
        crate::print_warning!(emitter, "just the body").unwrap();
        assert_eq!(rendered(emitter), "just the body\n");
    }

    #[test]
    fn test_empty_object_list_emits_bare_line() {
        let mut emitter = plain_emitter(false, false);
        crate::print_info!(emitter).unwrap();
        assert_eq!(rendered(emitter), "\n");
    }

    #[test]
    fn test_detached_emitter_is_silent() {
        let mut emitter = StructuredEmitter::detached(NoColor::new(Vec::new()));
        crate::print_fatal!(emitter, "dropped").unwrap();
        assert_eq!(rendered(emitter), "");
    }

    #[test]
    fn test_styled_levels_write_escape_codes() {
        let mut emitter =
            StructuredEmitter::new(ExecContext::default(), Ansi::new(Vec::new()));
        crate::print_success!(emitter, "done").unwrap();
        let output = String::from_utf8(emitter.into_inner().into_inner()).unwrap();
        assert!(output.contains('\u{1b}'), "expected ANSI codes: {output:?}");
        assert!(output.contains("done"));
    }

    #[test]
    fn test_explicit_style_override_applies() {
        let mut bold = ColorSpec::new();
        bold.set_bold(true);

        let mut emitter = plain_emitter(false, false);
        emitter
            .print(
                Level::Error,
                &[Value::String("x".to_string())],
                Some(&bold),
                crate::callsite!(),
            )
            .unwrap();
        assert_eq!(rendered(emitter), "x\n");
    }

    #[test]
    fn test_to_value_or_null_on_unserializable_input() {
        let mut non_string_keys = std::collections::HashMap::new();
        non_string_keys.insert(vec![1u8], "v");
        assert_eq!(to_value_or_null(&non_string_keys), Value::Null);
        assert_eq!(to_value_or_null(&"text"), Value::String("text".to_string()));
    }
}
