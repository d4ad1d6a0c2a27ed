//! The project configuration document.

use serde::Deserialize;
use serde_yaml::{Deserializer, Mapping, Value};

/// A parsed project configuration.
///
/// This is a direct transcription of the YAML file: an ordered mapping whose
/// values may be scalars, nested mappings or sequences. Nothing about its
/// shape is assumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    root: Value,
}

impl Configuration {
    /// Wrap a YAML value. A null document (empty file) becomes an empty mapping.
    pub fn new(root: Value) -> Self {
        let root = match root {
            Value::Null => Value::Mapping(Mapping::new()),
            other => other,
        };
        Self { root }
    }

    /// An empty configuration.
    pub fn empty() -> Self {
        Self::new(Value::Null)
    }

    /// Parse a configuration from YAML text.
    ///
    /// Only the first document of a multi-document stream is used, so stray
    /// `---` separators in a hand-edited file do not break it.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        let root = match Deserializer::from_str(text).next() {
            Some(document) => Value::deserialize(document)?,
            None => Value::Null,
        };
        Ok(Self::new(root))
    }

    /// The underlying document.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.as_mapping().and_then(|m| m.get(key))
    }

    /// Number of top-level entries (0 when the root is not a mapping).
    pub fn len(&self) -> usize {
        self.root.as_mapping().map_or(0, Mapping::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for Configuration {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}
