//! In-memory configuration store.
//!
//! Values live under a composite key made of a namespace and a key joined
//! by a literal `.`. Nothing is escaped, so `("a.b", "c")` and
//! `("a", "b.c")` address the same entry.
//!
//! Reads go through explicit coercion functions. A missing value reads as
//! the zero value for scalar getters (`false`, `0`, `""`) and as an error
//! for collection getters.
//!
//! ## Example
//!
//! ```rust
//! use scurvy_core::config::MemoryConfig;
//! use scurvy_core::ConfigStore;
//!
//! let config = MemoryConfig::new();
//! config.set_value("global", "verbose", true.into())?;
//! assert!(config.get_bool("global", "verbose")?);
//! # Ok::<(), scurvy_core::ScurvyError>(())
//! ```

use parking_lot::RwLock;
use scurvy_types::{ConfigStore, ConfigValue, Result};
use std::collections::HashMap;

/// Build the composite key for `ns` and `key`.
pub fn format_key(ns: &str, key: &str) -> String {
    format!("{}.{}", ns, key)
}

/// Thread-safe configuration store backed by a hash map.
#[derive(Debug, Default)]
pub struct MemoryConfig {
    values: RwLock<HashMap<String, ConfigValue>>,
}

impl MemoryConfig {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Whether nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    fn lookup(&self, key: &str) -> Option<ConfigValue> {
        self.values.read().get(key).cloned()
    }
}

impl ConfigStore for MemoryConfig {
    fn is_set(&self, ns: &str, key: &str) -> bool {
        self.values.read().contains_key(&format_key(ns, key))
    }

    fn set_value(&self, ns: &str, key: &str, value: ConfigValue) -> Result<()> {
        self.values.write().insert(format_key(ns, key), value);
        Ok(())
    }

    fn get_bool(&self, ns: &str, key: &str) -> Result<bool> {
        let key = format_key(ns, key);
        coerce::to_bool(&key, self.lookup(&key).as_ref())
    }

    fn get_int(&self, ns: &str, key: &str) -> Result<i64> {
        let key = format_key(ns, key);
        coerce::to_int(&key, self.lookup(&key).as_ref())
    }

    fn get_string(&self, ns: &str, key: &str) -> Result<String> {
        let key = format_key(ns, key);
        coerce::to_string(&key, self.lookup(&key).as_ref())
    }

    fn get_string_list(&self, ns: &str, key: &str) -> Result<Vec<String>> {
        let key = format_key(ns, key);
        coerce::to_string_list(&key, self.lookup(&key).as_ref())
    }

    fn get_string_map(&self, ns: &str, key: &str) -> Result<HashMap<String, String>> {
        let key = format_key(ns, key);
        coerce::to_string_map(&key, self.lookup(&key).as_ref())
    }
}

/// Conversions from stored values to requested types.
///
/// `key` is only used to label errors.
pub mod coerce {
    use scurvy_types::{ConfigValue, Result, ScurvyError};
    use serde_json::Value;
    use std::collections::HashMap;

    const ABSENT: &str = "no value";

    fn mismatch(key: &str, expected: &'static str, value: &ConfigValue) -> ScurvyError {
        ScurvyError::coercion(key, expected, format!("{} {}", value.kind(), value))
    }

    /// Read as bool. Absent reads as `false`.
    pub fn to_bool(key: &str, value: Option<&ConfigValue>) -> Result<bool> {
        match value {
            None => Ok(false),
            Some(ConfigValue::Bool(b)) => Ok(*b),
            Some(ConfigValue::Int(i)) => Ok(*i != 0),
            Some(v @ ConfigValue::String(s)) => match s.as_str() {
                "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
                "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
                _ => Err(mismatch(key, "bool", v)),
            },
            Some(v) => Err(mismatch(key, "bool", v)),
        }
    }

    /// Read as integer. Absent reads as `0`.
    pub fn to_int(key: &str, value: Option<&ConfigValue>) -> Result<i64> {
        match value {
            None => Ok(0),
            Some(ConfigValue::Int(i)) => Ok(*i),
            Some(ConfigValue::Bool(b)) => Ok(i64::from(*b)),
            Some(v @ ConfigValue::String(s)) => {
                parse_int(trim_zero_decimal(s)).ok_or_else(|| mismatch(key, "int", v))
            }
            Some(v) => Err(mismatch(key, "int", v)),
        }
    }

    /// Read as string. Absent reads as `""`.
    pub fn to_string(key: &str, value: Option<&ConfigValue>) -> Result<String> {
        match value {
            None => Ok(String::new()),
            Some(ConfigValue::String(s)) => Ok(s.clone()),
            Some(ConfigValue::Bool(b)) => Ok(b.to_string()),
            Some(ConfigValue::Int(i)) => Ok(i.to_string()),
            Some(v) => Err(mismatch(key, "string", v)),
        }
    }

    /// Read as a list of strings. A string is split on whitespace, other
    /// scalars become a one-element list.
    pub fn to_string_list(key: &str, value: Option<&ConfigValue>) -> Result<Vec<String>> {
        match value {
            None => Err(ScurvyError::coercion(key, "string list", ABSENT)),
            Some(ConfigValue::StringList(list)) => Ok(list.clone()),
            Some(ConfigValue::String(s)) => Ok(s.split_whitespace().map(String::from).collect()),
            Some(v @ (ConfigValue::Bool(_) | ConfigValue::Int(_))) => Ok(vec![to_string(key, Some(v))?]),
            Some(v) => Err(mismatch(key, "string list", v)),
        }
    }

    /// Read as a string map. A string must hold a JSON object whose values
    /// are all strings.
    pub fn to_string_map(key: &str, value: Option<&ConfigValue>) -> Result<HashMap<String, String>> {
        match value {
            None => Err(ScurvyError::coercion(key, "string map", ABSENT)),
            Some(ConfigValue::StringMap(map)) => Ok(map.clone()),
            Some(v @ ConfigValue::String(s)) => {
                parse_json_map(s).ok_or_else(|| mismatch(key, "string map", v))
            }
            Some(v) => Err(mismatch(key, "string map", v)),
        }
    }

    fn parse_json_map(s: &str) -> Option<HashMap<String, String>> {
        let Value::Object(object) = serde_json::from_str::<Value>(s).ok()? else {
            return None;
        };

        object
            .into_iter()
            .map(|(k, v)| match v {
                Value::String(s) => Some((k, s)),
                _ => None,
            })
            .collect()
    }

    // Integer literal with an optional sign and a 0x, 0o, 0b or leading 0
    // (octal) base prefix. No surrounding whitespace.
    fn parse_int(s: &str) -> Option<i64> {
        let (sign, unsigned) = match s.as_bytes().first()? {
            b'-' => ("-", &s[1..]),
            b'+' => ("", &s[1..]),
            _ => ("", s),
        };

        let lower = unsigned.to_ascii_lowercase();
        let (radix, digits) = if let Some(rest) = lower.strip_prefix("0x") {
            (16, rest)
        } else if let Some(rest) = lower.strip_prefix("0o") {
            (8, rest)
        } else if let Some(rest) = lower.strip_prefix("0b") {
            (2, rest)
        } else if lower.len() > 1 && lower.starts_with('0') {
            (8, &lower[1..])
        } else {
            (10, lower.as_str())
        };

        if !digits.bytes().next()?.is_ascii_alphanumeric() {
            return None;
        }
        i64::from_str_radix(&format!("{}{}", sign, digits), radix).ok()
    }

    // "55.00" -> "55"; needs at least one zero after the dot.
    fn trim_zero_decimal(s: &str) -> &str {
        match s.rsplit_once('.') {
            Some((whole, frac)) if !frac.is_empty() && frac.bytes().all(|b| b == b'0') => whole,
            _ => s,
        }
    }
}
