//! # Type Schema Validator
//!
//! Validates the `is_a: types` records of a batch and merges them into the
//! type registry. Validation and merging are separate phases: every
//! declaration is structurally checked before any entry is merged, so a
//! violation anywhere rejects the entire set — code generation must never
//! run off a partially validated registry.
//!
//! A type declaration looks like:
//!
//! ```yaml
//! is_a: types
//! language: cpp
//! schema:
//!   int: int                          # bare string, shorthand for {code}
//!   array:
//!     code: "std::vector<{_1}>"
//!     imports: vector
//! ```

use mgen_core::{CompileError, LanguageId, TypeEntry, TypeName, TypeRegistry};
use serde_json::{Map, Value};

/// Substitution slot indices recognized in emission templates.
const PLACEHOLDER_SLOTS: std::ops::RangeInclusive<u32> = 1..=9;

/// Build the type registry from the `is_a: types` subsequence of a batch.
///
/// # Errors
///
/// - [`CompileError::NoTypeDeclarations`] when the subsequence is empty.
/// - [`CompileError::MissingLanguage`] / [`CompileError::MissingSchema`]
///   when a declaration lacks its target language or schema payload. One
///   schema-less record fails the whole batch; nothing is skipped.
/// - [`CompileError::Structural`] for any shape violation inside a schema.
/// - [`CompileError::DuplicateType`] when a (language, type name) pair is
///   declared twice, regardless of whether the declarations agree.
pub fn build_type_registry(records: &[&Value]) -> Result<TypeRegistry, CompileError> {
    if records.is_empty() {
        return Err(CompileError::NoTypeDeclarations);
    }

    let mut validated = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        validated.push(validate_declaration(index, record)?);
    }

    let mut registry = TypeRegistry::new();
    for declaration in validated {
        for (name, entry) in declaration.entries {
            registry.insert(declaration.language.clone(), name, entry)?;
        }
    }
    Ok(registry)
}

/// A structurally valid type declaration, ready to merge.
struct TypeDeclaration {
    language: LanguageId,
    entries: Vec<(TypeName, TypeEntry)>,
}

fn validate_declaration(index: usize, record: &Value) -> Result<TypeDeclaration, CompileError> {
    let language = match record.get("language") {
        Some(Value::String(s)) => LanguageId::new(s.clone()),
        _ => return Err(CompileError::MissingLanguage { index }),
    };

    let schema = record
        .get("schema")
        .ok_or(CompileError::MissingSchema { index })?;
    let Some(schema) = schema.as_object() else {
        return Err(structural(index, &language, "schema must be a mapping"));
    };
    if schema.is_empty() {
        return Err(structural(
            index,
            &language,
            "schema must have at least one entry",
        ));
    }

    let mut entries = Vec::with_capacity(schema.len());
    for (name, value) in schema {
        let entry = parse_entry(value)
            .map_err(|reason| structural(index, &language, format!("type `{name}`: {reason}")))?;
        entries.push((TypeName::new(name.clone()), entry));
    }
    Ok(TypeDeclaration { language, entries })
}

fn structural(index: usize, language: &LanguageId, reason: impl Into<String>) -> CompileError {
    CompileError::structural(
        format!("type declaration #{index} (language `{language}`)"),
        reason,
    )
}

/// Normalize one representation entry.
///
/// A bare string is shorthand for `{code: s}`. A mapping carries a required
/// string `code` and may carry string `imports` and `template` hints; any
/// other key is rejected.
fn parse_entry(value: &Value) -> Result<TypeEntry, String> {
    match value {
        Value::String(code) => Ok(resolve_entry(code.clone(), None, None)),
        Value::Object(map) => {
            for key in map.keys() {
                if !matches!(key.as_str(), "code" | "imports" | "template") {
                    return Err(format!("unknown entry key `{key}`"));
                }
            }
            let code = match map.get("code") {
                Some(Value::String(s)) => s.clone(),
                Some(_) => return Err("`code` must be a string".to_string()),
                None => return Err("entry is missing required `code`".to_string()),
            };
            let imports = optional_string(map, "imports")?;
            let template = optional_string(map, "template")?;
            Ok(resolve_entry(code, imports, template))
        }
        _ => Err("entry must be a template string or a mapping".to_string()),
    }
}

fn optional_string(map: &Map<String, Value>, key: &str) -> Result<Option<String>, String> {
    match map.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(format!("`{key}` must be a string")),
    }
}

fn resolve_entry(code: String, imports: Option<String>, template: Option<String>) -> TypeEntry {
    let maximum_possible_args = max_possible_args(&code);
    TypeEntry {
        code,
        imports,
        template,
        maximum_possible_args,
    }
}

/// Highest substitution slot `{_k}` referenced by an emission template.
///
/// `std::map<{_1}, {_2}>` accepts two arguments; a template with no slots
/// accepts none. A repeated slot counts once — arity is the highest index,
/// not the number of occurrences.
fn max_possible_args(code: &str) -> u32 {
    PLACEHOLDER_SLOTS
        .rev()
        .find(|slot| code.contains(&format!("{{_{slot}}}")))
        .unwrap_or(0)
}
