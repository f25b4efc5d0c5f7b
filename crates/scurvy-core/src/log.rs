//! Structured logging for the execution context.
//!
//! Each [`Logger`] owns its own `tracing` dispatcher rendering JSON records
//! to a caller supplied stream, so several contexts can log side by side
//! without touching the global subscriber.

use chrono::{SecondsFormat, Utc};
use parking_lot::{Mutex, MutexGuard};
use scurvy_types::LogLevel;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use tracing::{Dispatch, Level};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

/// Stamps records with an RFC 3339 UTC time.
#[derive(Debug, Clone, Copy, Default)]
struct Rfc3339Utc;

impl FormatTime for Rfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

/// Log destination shared by every record of one logger.
#[derive(Clone)]
struct SharedSink(Arc<Mutex<Box<dyn Write + Send>>>);

impl<'a> MakeWriter<'a> for SharedSink {
    type Writer = SinkGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SinkGuard(self.0.lock())
    }
}

// Holds the sink lock for one record, so lines from different threads
// never interleave.
struct SinkGuard<'a>(MutexGuard<'a, Box<dyn Write + Send>>);

impl Write for SinkGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

/// Leveled JSON logger.
///
/// Every record is one JSON object per line with `timestamp`, `level`,
/// `severity` and `message` fields. `fatal` and `panic` records are
/// written at `tracing`'s `ERROR` level and only differ in `severity`;
/// logging them never stops the process.
pub struct Logger {
    level: LogLevel,
    dispatch: Dispatch,
}

impl Logger {
    /// Create a logger writing records at or above `level` to `sink`.
    pub fn new(sink: impl Write + Send + 'static, level: LogLevel) -> Self {
        let sink = SharedSink(Arc::new(Mutex::new(Box::new(sink))));

        // Filtering happens in `log`, the subscriber takes everything.
        let subscriber = tracing_subscriber::fmt()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
            .with_target(false)
            .with_timer(Rfc3339Utc)
            .with_max_level(LevelFilter::TRACE)
            .with_writer(sink)
            .finish();

        Self {
            level,
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// Minimum level that produces output.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether records at `level` are written.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    /// Write one record at `level`, unless it is below the minimum.
    pub fn log(&self, level: LogLevel, message: &dyn fmt::Display) {
        if !self.enabled(level) {
            return;
        }

        let severity = level.as_str();
        tracing::dispatcher::with_default(&self.dispatch, || match level {
            LogLevel::Trace => tracing::event!(Level::TRACE, severity = severity, "{}", message),
            LogLevel::Debug => tracing::event!(Level::DEBUG, severity = severity, "{}", message),
            LogLevel::Info => tracing::event!(Level::INFO, severity = severity, "{}", message),
            LogLevel::Warn => tracing::event!(Level::WARN, severity = severity, "{}", message),
            LogLevel::Error | LogLevel::Fatal | LogLevel::Panic => {
                tracing::event!(Level::ERROR, severity = severity, "{}", message)
            }
        });
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn lines(&self) -> Vec<Value> {
            String::from_utf8(self.0.lock().clone())
                .unwrap()
                .lines()
                .map(|l| serde_json::from_str(l).unwrap())
                .collect()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_record_fields() {
        let out = Capture::default();
        let logger = Logger::new(out.clone(), LogLevel::Trace);
        logger.log(LogLevel::Info, &format_args!("hello {}", 42));

        let lines = out.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["message"], "hello 42");
        assert_eq!(lines[0]["severity"], "info");
        assert_eq!(lines[0]["level"], "INFO");
        assert!(lines[0]["timestamp"].as_str().is_some_and(|t| t.ends_with('Z')));
    }

    #[test]
    fn test_level_gating() {
        let out = Capture::default();
        let logger = Logger::new(out.clone(), LogLevel::Error);
        assert!(!logger.enabled(LogLevel::Warn));
        assert!(logger.enabled(LogLevel::Panic));

        logger.log(LogLevel::Warn, &"dropped");
        assert!(out.lines().is_empty());

        logger.log(LogLevel::Fatal, &"kept");
        let lines = out.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["message"], "kept");
        assert_eq!(lines[0]["severity"], "fatal");
        assert_eq!(lines[0]["level"], "ERROR");
    }

    #[test]
    fn test_concurrent_records_stay_whole() {
        let out = Capture::default();
        let logger = Arc::new(Logger::new(out.clone(), LogLevel::Info));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        logger.log(LogLevel::Info, &format_args!("thread {} record {}", t, i));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let lines = out.lines();
        assert_eq!(lines.len(), 200);
        assert!(lines
            .iter()
            .all(|l| l["message"].as_str().is_some_and(|m| m.starts_with("thread "))));
    }
}
