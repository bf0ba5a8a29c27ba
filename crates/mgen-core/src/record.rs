//! # Raw Records & Discriminators
//!
//! A declaration document deserializes into a flat, order-independent list
//! of raw records: string-keyed `serde_json::Value` objects of unknown
//! shape. The only structure this module assumes is the `is_a` discriminator
//! key, which classifies a record as a type table, a model layout, or a
//! value set. Everything else about a record's shape is the business of the
//! validator for its kind.

use serde_json::Value;

/// Key that classifies a raw record.
pub const DISCRIMINATOR_KEY: &str = "is_a";

/// The kind of declaration a raw record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// A type table: per-language representations of abstract type names.
    Types,
    /// A model layout: an ordered list of sized fields.
    Model,
    /// A value set: named constants for a generator to inline.
    Value,
}

impl RecordKind {
    /// The discriminator string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Types => "types",
            Self::Model => "model",
            Self::Value => "value",
        }
    }

    /// Parse a discriminator string.
    ///
    /// An unknown string is not an error; it simply names no known kind,
    /// and the record carrying it is never selected by a kind filter.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "types" => Some(Self::Types),
            "model" => Some(Self::Model),
            "value" => Some(Self::Value),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The raw discriminator string of a record, if it has a usable one.
///
/// Returns `None` when the record is not a mapping, lacks the `is_a` key,
/// or carries a non-string discriminator value.
pub fn discriminator(record: &Value) -> Option<&str> {
    record.get(DISCRIMINATOR_KEY).and_then(Value::as_str)
}

/// The kind of a record, if its discriminator names a known kind.
pub fn record_kind(record: &Value) -> Option<RecordKind> {
    discriminator(record).and_then(RecordKind::parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_roundtrip() {
        for kind in [RecordKind::Types, RecordKind::Model, RecordKind::Value] {
            assert_eq!(RecordKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_kind_string() {
        assert_eq!(RecordKind::parse("enum"), None);
        assert_eq!(RecordKind::parse(""), None);
        assert_eq!(RecordKind::parse("Types"), None);
    }

    #[test]
    fn test_discriminator_present() {
        let record = json!({"is_a": "types", "language": "cpp"});
        assert_eq!(discriminator(&record), Some("types"));
        assert_eq!(record_kind(&record), Some(RecordKind::Types));
    }

    #[test]
    fn test_discriminator_missing() {
        assert_eq!(discriminator(&json!({})), None);
        assert_eq!(discriminator(&json!({"isa": "types"})), None);
    }

    #[test]
    fn test_discriminator_not_a_string() {
        assert_eq!(discriminator(&json!({"is_a": 1})), None);
        assert_eq!(discriminator(&json!({"is_a": null})), None);
    }

    #[test]
    fn test_non_mapping_record_has_no_discriminator() {
        assert_eq!(discriminator(&json!("types")), None);
        assert_eq!(discriminator(&json!([1, 2])), None);
    }

    #[test]
    fn test_unknown_discriminator_is_no_kind() {
        let record = json!({"is_a": "enum"});
        assert_eq!(discriminator(&record), Some("enum"));
        assert_eq!(record_kind(&record), None);
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(format!("{}", RecordKind::Model), "model");
    }
}
