//! # Declaration Document Loading
//!
//! Reads human-authored YAML declaration documents and materializes them as
//! the raw records the compiler consumes. A file may hold several YAML
//! documents separated by `---`; each document is either a mapping (one
//! record) or a sequence of mappings (many records). Multiple files
//! concatenate into one batch in argument order.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// Load every record from one declaration document file.
pub fn load_documents(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    parse_documents(&content)
        .with_context(|| format!("invalid declaration document {}", path.display()))
}

/// Parse a YAML string into raw records, multi-document aware.
pub fn parse_documents(content: &str) -> Result<Vec<Value>> {
    let mut records = Vec::new();
    for document in serde_yaml::Deserializer::from_str(content) {
        let value = serde_yaml::Value::deserialize(document).context("invalid YAML")?;
        match value {
            // An empty document (e.g. a trailing `---`) contributes nothing.
            serde_yaml::Value::Null => {}
            serde_yaml::Value::Sequence(items) => {
                for item in items {
                    records.push(yaml_to_json(item)?);
                }
            }
            other => records.push(yaml_to_json(other)?),
        }
    }
    Ok(records)
}

/// Convert a YAML value into the JSON value model the compiler consumes.
///
/// Declaration documents use the JSON-compatible subset of YAML. Mapping
/// keys must be strings — the raw-record model cannot represent anything
/// else, so a numeric or boolean key is rejected at this edge rather than
/// silently stringified.
fn yaml_to_json(yaml: serde_yaml::Value) -> Result<Value> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(i.into()))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(u.into()))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .with_context(|| format!("cannot represent {f} in JSON"))
            } else {
                bail!("unsupported YAML number: {n:?}")
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s)),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>> = seq.into_iter().map(yaml_to_json).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut object = serde_json::Map::with_capacity(map.len());
            for (key, value) in map {
                let serde_yaml::Value::String(key) = key else {
                    bail!("mapping keys must be strings, got {key:?}");
                };
                object.insert(key, yaml_to_json(value)?);
            }
            Ok(Value::Object(object))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sequence_document_yields_many_records() {
        let yaml = r#"
- is_a: types
  language: cpp
  schema:
    int: int
- is_a: model
  name: player
  schema:
    - {name: age, type: int(2)}
"#;
        let records = parse_documents(yaml).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["is_a"], "types");
        assert_eq!(records[1]["name"], "player");
    }

    #[test]
    fn test_mapping_document_yields_one_record() {
        let yaml = "is_a: types\nlanguage: py\nschema:\n  int: int\n";
        let records = parse_documents(yaml).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["language"], "py");
    }

    #[test]
    fn test_multi_document_stream_concatenates() {
        let yaml = r#"
is_a: types
language: cpp
schema:
  int: int
---
- is_a: model
  name: player
  schema: []
---
"#;
        let records = parse_documents(yaml).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_scalar_conversion() {
        let yaml = "a: 1\nb: -2\nc: true\nd: [x, 1.5]\ne:\n";
        let records = parse_documents(yaml).unwrap();
        assert_eq!(
            records[0],
            json!({"a": 1, "b": -2, "c": true, "d": ["x", 1.5], "e": null})
        );
    }

    #[test]
    fn test_non_string_mapping_key_is_rejected() {
        let err = parse_documents("2: cpp\n").unwrap_err();
        assert!(format!("{err:#}").contains("keys must be strings"));
    }

    #[test]
    fn test_nested_non_string_key_is_rejected() {
        let yaml = "is_a: types\nschema:\n  2: cpp\n";
        assert!(parse_documents(yaml).is_err());
    }

    #[test]
    fn test_invalid_yaml_is_rejected() {
        assert!(parse_documents(": : :").is_err());
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        assert!(parse_documents("").unwrap().is_empty());
    }
}
