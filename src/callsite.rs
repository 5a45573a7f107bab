#![forbid(unsafe_code)]

//! Call-site capture and the debug-mode prefix
//!
//! The debug prefix names where an emission came from. Rather than walking
//! the stack at run time, the [`callsite!`](crate::callsite!) macro captures
//! the source location at compile time, at the point of invocation.

use chrono::{DateTime, Local};
use std::env;
use std::path::Path;

/// The source location of an emission call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// Source file as reported by the compiler, usually relative to the
    /// crate root
    pub file: &'static str,
    pub line: u32,
    /// Name of the enclosing function, without its module path
    pub function: &'static str,
}

impl CallSite {
    /// The file path as shown in the debug prefix: relative to the current
    /// working directory when that can be computed, the bare file name
    /// otherwise, always `/`-separated
    pub fn display_path(&self) -> String {
        let path = Path::new(self.file);
        let shown = if path.is_absolute() {
            match env::current_dir()
                .ok()
                .and_then(|cwd| path.strip_prefix(&cwd).ok().map(Path::to_path_buf))
            {
                Some(relative) => relative,
                None => path
                    .file_name()
                    .map(|name| Path::new(name).to_path_buf())
                    .unwrap_or_default(),
            }
        } else {
            path.to_path_buf()
        };

        shown
            .components()
            .map(|component| component.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Build the debug-mode prefix: `[<timestamp>] <path> <function>(): `
///
/// The timestamp carries millisecond precision. The prefix has no styling of
/// its own; it inherits whatever style is applied to the emitted line.
pub fn debug_prefix(now: DateTime<Local>, site: CallSite) -> String {
    format!(
        "[{}] {} {}(): ",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        site.display_path(),
        site.function
    )
}

/// Captures the name of the enclosing function, without its module path
#[macro_export]
macro_rules! function_name {
    () => {{
        fn here() {}
        fn name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = name_of(here);
        let name = name.strip_suffix("::here").unwrap_or(name);
        let name = name.strip_suffix("::{{closure}}").unwrap_or(name);
        name.rsplit("::").next().unwrap_or(name)
    }};
}

/// Captures a [`CallSite`](crate::callsite::CallSite) at the point of invocation
#[macro_export]
macro_rules! callsite {
    () => {
        $crate::callsite::CallSite {
            file: ::std::file!(),
            line: ::std::line!(),
            function: $crate::function_name!(),
        }
    };
}
