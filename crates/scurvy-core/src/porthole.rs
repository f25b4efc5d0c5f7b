//! The execution context handed to commands.
//!
//! A [`PortHole`] bundles leveled logging, colored text helpers, console
//! detection and configuration access. Capabilities are negotiated once
//! at construction and never change afterwards.
//!
//! ## Example
//!
//! ```rust
//! use scurvy_core::PortHole;
//!
//! let p = PortHole::new(Vec::<u8>::new(), std::io::sink(), None, "info", true);
//! p.info("starting");
//! assert_eq!(p.blue("plain"), "plain");
//! assert_eq!(p.log_level().to_string(), "info");
//! ```

use crate::color::ColorScheme;
use crate::log::Logger;
use crate::term::{self, EnvProvider, OutputStream, ProcessEnv};
use parking_lot::Mutex;
use scurvy_types::{ConfigStore, LogLevel, Result};
use std::fmt::{self, Display};
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

/// Execution context: logging, colors, console and configuration.
pub struct PortHole {
    colors: ColorScheme,
    colors_enabled: bool,
    is_tty: bool,
    output: Mutex<Box<dyn OutputStream>>,
    logger: Logger,
    config: Option<Arc<dyn ConfigStore>>,
}

impl PortHole {
    /// Create a context, reading color support from the process environment.
    ///
    /// Log records go to `error_out`; program output goes to `console_out`.
    /// An unrecognized `log_level` (including an empty one) falls back to
    /// `warn`. Colors are only used when `want_colors` is set, the console
    /// is a terminal, and the terminal advertises extended color support.
    pub fn new(
        console_out: impl OutputStream + 'static,
        error_out: impl Write + Send + 'static,
        config: Option<Arc<dyn ConfigStore>>,
        log_level: &str,
        want_colors: bool,
    ) -> Self {
        Self::with_env(console_out, error_out, config, log_level, want_colors, &ProcessEnv)
    }

    /// Like [`PortHole::new`], reading environment variables from `env`.
    pub fn with_env(
        console_out: impl OutputStream + 'static,
        error_out: impl Write + Send + 'static,
        config: Option<Arc<dyn ConfigStore>>,
        log_level: &str,
        want_colors: bool,
        env: &dyn EnvProvider,
    ) -> Self {
        let level = match log_level.parse::<LogLevel>() {
            Ok(level) => level,
            Err(_) => {
                debug!(requested = log_level, "unrecognized log level, using {}", LogLevel::FALLBACK);
                LogLevel::FALLBACK
            }
        };

        let is_tty = term::is_terminal(&console_out);
        let colors_enabled = want_colors && term::supports_extended_color(env) && is_tty;

        debug!(level = %level, is_tty, colors_enabled, "port hole ready");

        Self {
            colors: ColorScheme::new(colors_enabled),
            colors_enabled,
            is_tty,
            output: Mutex::new(Box::new(console_out)),
            logger: Logger::new(error_out, level),
            config,
        }
    }

    /// Log at trace level.
    pub fn trace(&self, message: impl Display) {
        self.log(LogLevel::Trace, message);
    }

    /// Log at debug level.
    pub fn debug(&self, message: impl Display) {
        self.log(LogLevel::Debug, message);
    }

    /// Log at info level.
    pub fn info(&self, message: impl Display) {
        self.log(LogLevel::Info, message);
    }

    /// Log at warn level.
    pub fn warn(&self, message: impl Display) {
        self.log(LogLevel::Warn, message);
    }

    /// Log at error level.
    pub fn error(&self, message: impl Display) {
        self.log(LogLevel::Error, message);
    }

    /// Log at fatal level. Execution continues.
    pub fn fatal(&self, message: impl Display) {
        self.log(LogLevel::Fatal, message);
    }

    /// Log at panic level. Execution continues.
    pub fn panic(&self, message: impl Display) {
        self.log(LogLevel::Panic, message);
    }

    /// Log at `level`.
    pub fn log(&self, level: LogLevel, message: impl Display) {
        self.logger.log(level, &message);
    }

    /// Effective minimum log level.
    pub fn log_level(&self) -> LogLevel {
        self.logger.level()
    }

    /// Decorate with magenta.
    pub fn magenta(&self, text: &str) -> String {
        (self.colors.magenta)(text)
    }

    /// Decorate with cyan.
    pub fn cyan(&self, text: &str) -> String {
        (self.colors.cyan)(text)
    }

    /// Decorate with red.
    pub fn red(&self, text: &str) -> String {
        (self.colors.red)(text)
    }

    /// Decorate with yellow.
    pub fn yellow(&self, text: &str) -> String {
        (self.colors.yellow)(text)
    }

    /// Decorate with blue.
    pub fn blue(&self, text: &str) -> String {
        (self.colors.blue)(text)
    }

    /// Decorate with green.
    pub fn green(&self, text: &str) -> String {
        (self.colors.green)(text)
    }

    /// Decorate with gray.
    pub fn gray(&self, text: &str) -> String {
        (self.colors.gray)(text)
    }

    /// Decorate with bold.
    pub fn bold(&self, text: &str) -> String {
        (self.colors.bold)(text)
    }

    /// Color scheme in use.
    pub fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    /// Whether the console was a terminal at construction.
    pub fn is_console_tty(&self) -> bool {
        self.is_tty
    }

    /// Whether color decorators emit escape sequences.
    pub fn is_console_colored(&self) -> bool {
        self.colors_enabled
    }

    /// Write `message` straight to the console, bypassing the logger.
    pub fn console_write(&self, message: impl Display) -> Result<()> {
        let mut output = self.output.lock();
        write!(output, "{}", message)?;
        Ok(())
    }

    /// Configuration store, if one was supplied.
    pub fn config(&self) -> Option<&Arc<dyn ConfigStore>> {
        self.config.as_ref()
    }
}

impl fmt::Debug for PortHole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortHole")
            .field("log_level", &self.logger.level())
            .field("colors_enabled", &self.colors_enabled)
            .field("is_tty", &self.is_tty)
            .field("has_config", &self.config.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfig;
    use crate::term::MapEnv;
    use std::io;

    /// Console that claims to be a terminal.
    struct FakeTty(Vec<u8>);

    impl Write for FakeTty {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl OutputStream for FakeTty {
        fn is_tty(&self) -> bool {
            true
        }
    }

    /// Console whose writes always fail.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl OutputStream for Broken {}

    fn truecolor() -> MapEnv {
        MapEnv::new().with_var("COLORTERM", "truecolor")
    }

    #[test]
    fn test_colors_need_all_three_conditions() {
        let p = PortHole::with_env(FakeTty(Vec::new()), io::sink(), None, "info", true, &truecolor());
        assert!(p.is_console_tty());
        assert!(p.is_console_colored());
        assert_eq!(p.blue("Blue"), "\x1b[0;34mBlue\x1b[0m");
        assert_eq!(p.gray("Grey"), "\x1b[0;90mGrey\x1b[0m");
        assert_eq!(p.bold("Bold"), "\x1b[0;1;39mBold\x1b[0m");

        let p = PortHole::with_env(FakeTty(Vec::new()), io::sink(), None, "info", false, &truecolor());
        assert!(p.is_console_tty());
        assert!(!p.is_console_colored());
        assert_eq!(p.blue("Blue"), "Blue");

        let p = PortHole::with_env(FakeTty(Vec::new()), io::sink(), None, "info", true, &MapEnv::new());
        assert!(!p.is_console_colored());
        assert_eq!(p.red("Red"), "Red");

        let p = PortHole::with_env(Vec::<u8>::new(), io::sink(), None, "info", true, &truecolor());
        assert!(!p.is_console_tty());
        assert!(!p.is_console_colored());
        assert_eq!(p.green("Green"), "Green");
    }

    #[test]
    fn test_console_write_error() {
        let p = PortHole::new(Broken, io::sink(), None, "info", false);
        let err = p.console_write("test").unwrap_err();
        assert!(matches!(err, scurvy_types::ScurvyError::Io(_)));
    }

    #[test]
    fn test_config_is_shared() {
        let config = Arc::new(MemoryConfig::new());
        let p = PortHole::new(io::sink(), io::sink(), Some(config.clone() as Arc<dyn ConfigStore>), "debug", false);

        p.config()
            .unwrap()
            .set_value("global", "verbose", true.into())
            .unwrap();
        assert!(config.get_bool("global", "verbose").unwrap());
        assert_eq!(p.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_level_fallbacks() {
        for bad in ["bad", "", "INFO", "Debug"] {
            let p = PortHole::new(io::sink(), io::sink(), None, bad, false);
            assert_eq!(p.log_level(), LogLevel::Warn);
        }
        let p = PortHole::new(io::sink(), io::sink(), None, "critical", false);
        assert_eq!(p.log_level(), LogLevel::Panic);
    }

    #[test]
    fn test_port_hole_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PortHole>();
    }
}
