//! JSON mirror of the configuration.
//!
//! YAML is a superset of what JSON can express, so a few shapes need mapping:
//! - non-string keys are turned into strings
//! - tagged values lose their tag
//! - non-finite floats become strings

use serde_json::{Map, Number as JsonNumber, Value as JsonValue};
use serde_yaml::{Number as YamlNumber, Value as YamlValue};

use crate::config::document::Configuration;

/// Convert the configuration to a JSON value, keeping key order.
pub fn to_json(config: &Configuration) -> JsonValue {
    yaml_to_json(config.root())
}

/// Serialize the configuration as pretty-printed JSON bytes.
pub fn serialize(config: &Configuration) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec_pretty(&to_json(config))
}

/// Convert any YAML value to JSON.
pub fn yaml_to_json(value: &YamlValue) -> JsonValue {
    match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(*b),
        YamlValue::Number(n) => number_to_json(n),
        YamlValue::String(s) => JsonValue::String(s.clone()),
        YamlValue::Sequence(items) => JsonValue::Array(items.iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(key_to_string(key), yaml_to_json(value));
            }
            JsonValue::Object(map)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

/// Render a mapping key as a JSON object key.
pub fn key_to_string(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Tagged(tagged) => key_to_string(&tagged.value),
        complex => yaml_to_json(complex).to_string(),
    }
}

fn number_to_json(n: &YamlNumber) -> JsonValue {
    if let Some(i) = n.as_i64() {
        JsonValue::Number(i.into())
    } else if let Some(u) = n.as_u64() {
        JsonValue::Number(u.into())
    } else {
        n.as_f64()
            .and_then(JsonNumber::from_f64)
            .map(JsonValue::Number)
            .unwrap_or_else(|| JsonValue::String(n.to_string()))
    }
}
