//! # Scurvy Types
//!
//! Core types, traits, and enums shared by the scurvy crates.
//!
//! This crate provides:
//!
//! - The error type and result alias
//! - The log level enumeration
//! - The dynamically typed configuration value
//! - The configuration store trait
//!
//! ## Example
//!
//! ```
//! use scurvy_types::{ConfigValue, LogLevel};
//!
//! assert_eq!(LogLevel::parse_or_fallback("bad"), LogLevel::Warn);
//! assert_eq!(ConfigValue::from(55), ConfigValue::Int(55));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod enums;
pub mod traits;
pub mod config;

// Re-export common types for convenience
pub use errors::{ScurvyError, Result};
pub use enums::LogLevel;
pub use traits::ConfigStore;
pub use config::ConfigValue;
