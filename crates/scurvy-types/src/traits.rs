//! Core trait definitions for scurvy abstractions.

use std::collections::HashMap;
use crate::config::ConfigValue;
use crate::errors::Result;

/// Trait for namespaced configuration stores.
///
/// Values are addressed by a namespace and a key. Implementations must be
/// safe to share between threads; each call is atomic on its own but no
/// grouping across calls is offered.
pub trait ConfigStore: Send + Sync {
    /// Whether a value has been stored for `ns`/`key`.
    fn is_set(&self, ns: &str, key: &str) -> bool;

    /// Store `value`, replacing whatever was there.
    fn set_value(&self, ns: &str, key: &str, value: ConfigValue) -> Result<()>;

    /// Read a value as a bool.
    fn get_bool(&self, ns: &str, key: &str) -> Result<bool>;

    /// Read a value as an integer.
    fn get_int(&self, ns: &str, key: &str) -> Result<i64>;

    /// Read a value as a string.
    fn get_string(&self, ns: &str, key: &str) -> Result<String>;

    /// Read a value as a list of strings.
    fn get_string_list(&self, ns: &str, key: &str) -> Result<Vec<String>>;

    /// Read a value as a string-to-string map.
    fn get_string_map(&self, ns: &str, key: &str) -> Result<HashMap<String, String>>;
}
