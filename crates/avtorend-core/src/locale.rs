//! Locale dictionaries
//!
//! Locale files may be flat (`{"nav.home": "Home"}`) or nested
//! (`{"nav": {"home": "Home"}}`); both flatten to dotted key paths.

use std::collections::HashMap;

use serde_json::Value;

/// Mapping from dotted key path to display string.
///
/// Replaced wholesale on every language switch, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleDictionary {
    entries: HashMap<String, String>,
}

impl LocaleDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from a parsed locale file.
    ///
    /// Strings are taken as-is, numbers and booleans are stringified, and
    /// `null`/arrays are skipped. A non-object root yields an empty dictionary.
    pub fn from_json(value: &Value) -> Self {
        let mut entries = HashMap::new();
        if let Value::Object(map) = value {
            for (key, child) in map {
                flatten_into(&mut entries, key.clone(), child);
            }
        }
        Self { entries }
    }

    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Ok(Self::from_json(&value))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleDictionary {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn flatten_into(entries: &mut HashMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::String(s) => {
            entries.insert(prefix, s.clone());
        }
        Value::Number(n) => {
            entries.insert(prefix, n.to_string());
        }
        Value::Bool(b) => {
            entries.insert(prefix, b.to_string());
        }
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(entries, format!("{}.{}", prefix, key), child);
            }
        }
        Value::Null | Value::Array(_) => {}
    }
}
