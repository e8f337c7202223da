//! Reverse direction — YAML text back to pretty-printed JSON.
//!
//! YAML parsing is delegated entirely to `serde_yaml`; this module only maps
//! the parsed tree onto `serde_json::Value` and re-serializes it. No YAML
//! parsing rules are defined or validated here.

use crate::error::Result;
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

/// Parse YAML text and re-serialize it as pretty-printed JSON.
///
/// Returns an error if the input is not valid YAML.
pub fn yaml_to_json(yaml: &str) -> Result<String> {
    let value: YamlValue = serde_yaml::from_str(yaml)?;
    let json = json_value(&value);
    Ok(serde_json::to_string_pretty(&json)?)
}

/// Map a parsed YAML tree onto `serde_json::Value`.
///
/// Non-finite YAML floats (`.nan`, `.inf`) become `null` — JSON numbers
/// cannot carry them. Tagged values unwrap to their inner value; mapping
/// keys that are not strings are stringified.
fn json_value(value: &YamlValue) -> JsonValue {
    match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                JsonValue::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                JsonValue::Number(u.into())
            } else if let Some(f) = n.as_f64() {
                match serde_json::Number::from_f64(f) {
                    Some(num) => JsonValue::Number(num),
                    None => JsonValue::Null,
                }
            } else {
                JsonValue::Null
            }
        }
        YamlValue::String(s) => JsonValue::String(s.clone()),
        YamlValue::Sequence(seq) => JsonValue::Array(seq.iter().map(json_value).collect()),
        YamlValue::Mapping(map) => {
            let mut out = serde_json::Map::new();
            for (key, val) in map {
                out.insert(key_string(key), json_value(val));
            }
            JsonValue::Object(out)
        }
        YamlValue::Tagged(tagged) => json_value(&tagged.value),
    }
}

/// Render a YAML mapping key as a JSON object key.
fn key_string(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
