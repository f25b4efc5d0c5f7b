//! Error types for scurvy operations.

use thiserror::Error;

/// The main error type for scurvy operations.
///
/// Only two kinds of failure reach callers of the execution context: a
/// stored configuration value that cannot be coerced to the requested
/// type, and a failed write to the console stream.
#[derive(Error, Debug)]
pub enum ScurvyError {
    /// A stored value (or the lack of one) cannot be read as the requested type
    #[error("Unable to read {key} as {expected}: found {found}")]
    TypeCoercion {
        /// Composite `namespace.key` that was looked up
        key: String,
        /// Requested type name
        expected: &'static str,
        /// Description of what was actually stored
        found: String,
    },

    /// Unrecognized log level name
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScurvyError {
    /// Build a coercion error for `key`.
    pub fn coercion(key: impl Into<String>, expected: &'static str, found: impl Into<String>) -> Self {
        ScurvyError::TypeCoercion {
            key: key.into(),
            expected,
            found: found.into(),
        }
    }

    /// Whether this is a type coercion failure.
    pub fn is_type_coercion(&self) -> bool {
        matches!(self, ScurvyError::TypeCoercion { .. })
    }
}

/// A specialized Result type for scurvy operations.
pub type Result<T> = std::result::Result<T, ScurvyError>;
