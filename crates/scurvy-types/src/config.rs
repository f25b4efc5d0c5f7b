//! Configuration value types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A dynamically typed configuration value.
///
/// Values are tagged at the call boundary and converted to the requested
/// type by the store's typed getters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Plain string
    String(String),
    /// List of strings
    StringList(Vec<String>),
    /// String-to-string map
    StringMap(HashMap<String, String>),
}

impl ConfigValue {
    /// Name of the variant, used in coercion errors.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "bool",
            ConfigValue::Int(_) => "int",
            ConfigValue::String(_) => "string",
            ConfigValue::StringList(_) => "string list",
            ConfigValue::StringMap(_) => "string map",
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Int(i) => write!(f, "{}", i),
            ConfigValue::String(s) => write!(f, "{:?}", s),
            ConfigValue::StringList(list) => write!(f, "{:?}", list),
            ConfigValue::StringMap(map) => {
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort();
                write!(f, "{{")?;
                for (i, (k, v)) in entries.into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {:?}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Int(i64::from(value))
    }
}

impl From<u32> for ConfigValue {
    fn from(value: u32) -> Self {
        ConfigValue::Int(i64::from(value))
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(value: Vec<String>) -> Self {
        ConfigValue::StringList(value)
    }
}

impl From<Vec<&str>> for ConfigValue {
    fn from(value: Vec<&str>) -> Self {
        ConfigValue::StringList(value.into_iter().map(String::from).collect())
    }
}

impl From<HashMap<String, String>> for ConfigValue {
    fn from(value: HashMap<String, String>) -> Self {
        ConfigValue::StringMap(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(ConfigValue::from(true), ConfigValue::Bool(true));
        assert_eq!(ConfigValue::from(55), ConfigValue::Int(55));
        assert_eq!(ConfigValue::from("test"), ConfigValue::String("test".to_string()));
        assert_eq!(
            ConfigValue::from(vec!["a", "b"]),
            ConfigValue::StringList(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_untagged_json() {
        let value: ConfigValue = serde_json::from_str(r#"{"a": "t"}"#).unwrap();
        let mut expected = HashMap::new();
        expected.insert("a".to_string(), "t".to_string());
        assert_eq!(value, ConfigValue::StringMap(expected));

        let value: ConfigValue = serde_json::from_str("42").unwrap();
        assert_eq!(value, ConfigValue::Int(42));

        assert_eq!(serde_json::to_string(&ConfigValue::Bool(true)).unwrap(), "true");
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfigValue::from("abc").to_string(), "\"abc\"");
        assert_eq!(ConfigValue::from(vec!["a"]).to_string(), "[\"a\"]");

        let mut map = HashMap::new();
        map.insert("b".to_string(), "2".to_string());
        map.insert("a".to_string(), "1".to_string());
        assert_eq!(ConfigValue::from(map).to_string(), "{\"a\": \"1\", \"b\": \"2\"}");
    }
}
