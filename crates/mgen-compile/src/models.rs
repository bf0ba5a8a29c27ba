//! # Model Schema Validator
//!
//! Validates the `is_a: model` records of a batch and merges them into the
//! model registry. Like the type pass, every declaration is validated and
//! resolved before any merging happens.
//!
//! A model declaration looks like:
//!
//! ```yaml
//! is_a: model
//! name: player
//! schema:
//!   - {name: name, type: str(30)}
//!   - {name: age, type: int(2), test: [7, 99]}
//!   - {name: stats, type: list(30), len: 30}
//! ```
//!
//! Declarations and field specs carry exact key sets: an unknown key is a
//! shape violation, not something to ignore — a typo like `nme` must not
//! silently drop a field attribute.

use mgen_core::{CompileError, FieldSpec, ModelName, ModelRegistry, TypeName};
use serde_json::Value;

use crate::signature;

const RECORD_KEYS: &[&str] = &["is_a", "name", "schema"];
const FIELD_KEYS: &[&str] = &["name", "type", "test", "len"];

/// Build the model registry from the `is_a: model` subsequence of a batch.
///
/// # Errors
///
/// - [`CompileError::NoModelDeclarations`] when the subsequence is empty.
/// - [`CompileError::Structural`] for any shape violation in a declaration
///   or field spec, identifying the offending record.
/// - [`CompileError::InvalidTypeSignature`] when a field's `type` string
///   does not match the `name(size)` grammar.
/// - [`CompileError::DuplicateModel`] when a model name is declared twice.
pub fn build_model_registry(records: &[&Value]) -> Result<ModelRegistry, CompileError> {
    if records.is_empty() {
        return Err(CompileError::NoModelDeclarations);
    }

    let mut resolved = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        resolved.push(resolve_declaration(index, record)?);
    }

    let mut registry = ModelRegistry::new();
    for (name, fields) in resolved {
        registry.insert(name, fields)?;
    }
    Ok(registry)
}

fn resolve_declaration(
    index: usize,
    record: &Value,
) -> Result<(ModelName, Vec<FieldSpec>), CompileError> {
    let context = format!("model declaration #{index}");

    let Some(map) = record.as_object() else {
        return Err(CompileError::structural(&context, "declaration must be a mapping"));
    };
    for key in map.keys() {
        if !RECORD_KEYS.contains(&key.as_str()) {
            return Err(CompileError::structural(&context, format!("unknown key `{key}`")));
        }
    }
    match map.get("is_a") {
        Some(Value::String(s)) if s == "model" => {}
        _ => {
            return Err(CompileError::structural(
                context,
                "`is_a` must be the string \"model\"",
            ))
        }
    }
    let name = match map.get("name") {
        Some(Value::String(s)) => ModelName::new(s.clone()),
        Some(_) => return Err(CompileError::structural(&context, "`name` must be a string")),
        None => return Err(CompileError::structural(&context, "missing required `name`")),
    };
    let Some(fields) = map.get("schema").and_then(Value::as_array) else {
        return Err(CompileError::structural(
            format!("model declaration #{index} (`{name}`)"),
            "`schema` must be a sequence of field specs",
        ));
    };

    let mut specs = Vec::with_capacity(fields.len());
    for (position, field) in fields.iter().enumerate() {
        specs.push(resolve_field(&name, position, field)?);
    }
    Ok((name, specs))
}

/// Validate one raw field spec and resolve its signature and defaults.
fn resolve_field(model: &ModelName, position: usize, field: &Value) -> Result<FieldSpec, CompileError> {
    let context = format!("field #{position} of model `{model}`");

    let Some(map) = field.as_object() else {
        return Err(CompileError::structural(&context, "field spec must be a mapping"));
    };
    for key in map.keys() {
        if !FIELD_KEYS.contains(&key.as_str()) {
            return Err(CompileError::structural(&context, format!("unknown key `{key}`")));
        }
    }

    let name = match map.get("name") {
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(CompileError::structural(&context, "`name` must be a string")),
        None => return Err(CompileError::structural(&context, "missing required `name`")),
    };
    let declared = match map.get("type") {
        Some(Value::String(s)) => s,
        Some(_) => return Err(CompileError::structural(&context, "`type` must be a string")),
        None => return Err(CompileError::structural(&context, "missing required `type`")),
    };

    let (type_name, size) =
        signature::parse(declared).map_err(|err| CompileError::InvalidTypeSignature {
            model: model.clone(),
            field: name.clone(),
            signature: err.signature,
        })?;

    let test = match map.get("test") {
        None => None,
        Some(Value::Array(values)) => Some(values.clone()),
        Some(_) => return Err(CompileError::structural(&context, "`test` must be a sequence")),
    };
    let len = match map.get("len") {
        None => 1,
        Some(value) => value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                CompileError::structural(&context, "`len` must be a non-negative integer")
            })?,
    };

    Ok(FieldSpec {
        name,
        type_name: TypeName::new(type_name),
        size,
        test,
        len,
    })
}
