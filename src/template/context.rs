//! Named values for `{{key}}` placeholders
//!
//! Any string map can serve as a context through the [`Lookup`] trait. The
//! [`Context`] type adds loading from TOML files so templates can be rendered
//! against a file of key/value pairs.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Read-only key lookup used to resolve named placeholders
pub trait Lookup {
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl<K, V, S> Lookup for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(|v| v.as_ref())
    }
}

impl<K, V> Lookup for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(|v| v.as_ref())
    }
}

impl<T: Lookup + ?Sized> Lookup for &T {
    fn lookup(&self, key: &str) -> Option<&str> {
        (**self).lookup(key)
    }
}

/// Errors that can occur when loading a context file
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Failed to read context file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse context TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Unsupported value for '{key}': {kind} values cannot be substituted")]
    UnsupportedValue { key: String, kind: &'static str },
}

/// A set of named values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    values: BTreeMap<String, String>,
}

/// TOML structure for deserializing contexts: a flat table of scalars
#[derive(Deserialize)]
struct TomlContext {
    #[serde(flatten)]
    entries: BTreeMap<String, toml::Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a context from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ContextError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Set a value, returning the one it replaces
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromStr for Context {
    type Err = ContextError;

    /// Parse a context from TOML text.
    ///
    /// Strings are taken verbatim; numbers, booleans and datetimes are turned
    /// into text. Arrays and tables are rejected.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let parsed: TomlContext = toml::from_str(content)?;
        let mut context = Context::new();

        for (key, value) in parsed.entries {
            let text = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Datetime(d) => d.to_string(),
                toml::Value::Array(_) => {
                    return Err(ContextError::UnsupportedValue { key, kind: "array" })
                }
                toml::Value::Table(_) => {
                    return Err(ContextError::UnsupportedValue { key, kind: "table" })
                }
            };
            context.values.insert(key, text);
        }

        Ok(context)
    }
}

impl Lookup for Context {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Context::new();
        context.extend(iter);
        context
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Context {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_lookup() {
        let mut map = HashMap::new();
        map.insert("player1".to_string(), "John".to_string());
        assert_eq!(map.lookup("player1"), Some("John"));
        assert_eq!(map.lookup("player2"), None);
    }

    #[test]
    fn test_btreemap_of_str_lookup() {
        let map: BTreeMap<&str, &str> = [("a", "1")].into_iter().collect();
        assert_eq!(map.lookup("a"), Some("1"));
    }

    #[test]
    fn test_collect_and_override() {
        let mut context: Context = [("player1", "John"), ("player2", "Doe")]
            .into_iter()
            .collect();
        assert_eq!(context.len(), 2);
        assert_eq!(context.insert("player2", "Roe"), Some("Doe".to_string()));
        assert_eq!(context.lookup("player2"), Some("Roe"));
    }

    #[test]
    fn test_parse_toml_scalars() {
        let toml_str = r#"
player1 = "John"
score = 42
ratio = 0.5
active = true
"#;
        let context: Context = toml_str.parse().expect("Should parse");
        assert_eq!(context.get("player1"), Some("John"));
        assert_eq!(context.get("score"), Some("42"));
        assert_eq!(context.get("ratio"), Some("0.5"));
        assert_eq!(context.get("active"), Some("true"));
    }

    #[test]
    fn test_parse_toml_empty() {
        let context: Context = "".parse().expect("Should parse");
        assert!(context.is_empty());
    }

    #[test]
    fn test_array_rejected() {
        let result: Result<Context, _> = "names = [\"a\", \"b\"]".parse();
        assert!(matches!(
            result,
            Err(ContextError::UnsupportedValue { ref key, kind: "array" }) if key == "names"
        ));
    }

    #[test]
    fn test_table_rejected() {
        let result: Result<Context, _> = "[player]\nname = \"John\"".parse();
        assert!(matches!(
            result,
            Err(ContextError::UnsupportedValue { kind: "table", .. })
        ));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result: Result<Context, _> = "this is not valid toml {{{{".parse();
        assert!(matches!(result, Err(ContextError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Context::from_file(Path::new("/nonexistent/context.toml"));
        assert!(matches!(result, Err(ContextError::IoError(_))));
    }
}
