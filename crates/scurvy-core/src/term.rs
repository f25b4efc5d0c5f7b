//! Terminal capability detection.
//!
//! Decides whether a stream is backed by a real terminal and whether the
//! environment advertises extended (256-color or truecolor) support.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, LineWriter, Write};

/// Environment variables consulted for color support.
pub const COLOR_ENV_VARS: [&str; 2] = ["TERM", "COLORTERM"];

/// Markers that advertise 256-color or truecolor support.
const EXTENDED_COLOR_MARKERS: [&str; 3] = ["256", "24bit", "truecolor"];

/// Source of environment variables.
#[cfg_attr(test, mockall::automock)]
pub trait EnvProvider: Send + Sync {
    /// Value of `name`, or an empty string when unset.
    fn var(&self, name: &str) -> String;
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn var(&self, name: &str) -> String {
        std::env::var(name).unwrap_or_default()
    }
}

/// A fixed set of variables, for hosts that sandbox the environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvProvider for MapEnv {
    fn var(&self, name: &str) -> String {
        self.vars.get(name).cloned().unwrap_or_default()
    }
}

/// Check whether `TERM` or `COLORTERM` advertise 256-color or truecolor support.
pub fn supports_extended_color(env: &dyn EnvProvider) -> bool {
    COLOR_ENV_VARS.iter().any(|name| {
        let value = env.var(name);
        EXTENDED_COLOR_MARKERS.iter().any(|marker| value.contains(marker))
    })
}

/// An output stream that knows whether it is a terminal.
///
/// Only stdout, stderr and files can be terminals; buffered writers ask the
/// stream they wrap, everything else keeps the default answer. The locked
/// stdout/stderr handles are not `Send` and cannot be used here; wrap the
/// unlocked handle in a `BufWriter` instead.
pub trait OutputStream: Write + Send {
    /// Whether the stream is attached to a terminal.
    fn is_tty(&self) -> bool {
        false
    }
}

impl OutputStream for io::Stdout {
    fn is_tty(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl OutputStream for io::Stderr {
    fn is_tty(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl OutputStream for File {
    fn is_tty(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl OutputStream for Vec<u8> {}

impl OutputStream for io::Sink {}

impl<W: OutputStream> OutputStream for BufWriter<W> {
    fn is_tty(&self) -> bool {
        self.get_ref().is_tty()
    }
}

impl<W: OutputStream> OutputStream for LineWriter<W> {
    fn is_tty(&self) -> bool {
        self.get_ref().is_tty()
    }
}

impl<T: OutputStream + ?Sized> OutputStream for Box<T> {
    fn is_tty(&self) -> bool {
        (**self).is_tty()
    }
}

/// Check if `stream` is backed by a terminal.
pub fn is_terminal(stream: &dyn OutputStream) -> bool {
    stream.is_tty()
}
