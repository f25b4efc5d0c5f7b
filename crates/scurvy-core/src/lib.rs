//! # Scurvy Core
//!
//! Execution context utilities for command-line tools.
//!
//! This crate provides:
//!
//! - **Configuration**: Thread-safe namespaced key/value store with typed getters
//! - **Terminal**: Terminal detection and extended color support checks
//! - **Colors**: ANSI decorators that turn into no-ops when colors are off
//! - **Logging**: Leveled JSON records on a caller supplied stream
//! - **Port Hole**: One facade bundling all of the above
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use scurvy_core::{ConfigStore, MemoryConfig, PortHole};
//!
//! let config: Arc<dyn ConfigStore> = Arc::new(MemoryConfig::new());
//! config.set_value("global", "verbose", true.into())?;
//!
//! let p = PortHole::new(std::io::stdout(), std::io::stderr(), Some(config), "warn", true);
//! p.info("not shown at warn");
//! p.console_write(format_args!("{} done\n", p.green("ok")))?;
//!
//! let verbose = p.config().map(|c| c.get_bool("global", "verbose")).transpose()?;
//! assert_eq!(verbose, Some(true));
//! # Ok::<(), scurvy_core::ScurvyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ansi;
pub mod color;
pub mod config;
pub mod log;
pub mod porthole;
pub mod term;

// Re-export commonly used items
pub use color::{Color, ColorScheme};
pub use config::MemoryConfig;
pub use log::Logger;
pub use porthole::PortHole;
pub use term::{EnvProvider, MapEnv, OutputStream, ProcessEnv};
pub use scurvy_types::{ConfigStore, ConfigValue, LogLevel, Result, ScurvyError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
