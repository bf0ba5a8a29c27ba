//! Integration tests: full batches through the public compile API.
//!
//! These exercise the end-to-end contract — classification, both validator
//! passes, the merge steps, and the optional reference check — against the
//! JSON shapes a YAML declaration document produces.

use mgen_compile::{compile, compile_with, CompileOptions};
use mgen_core::{CompileError, LanguageId, ModelName, TypeName};
use serde_json::{json, Value};

fn mixed_batch() -> Vec<Value> {
    vec![
        json!({
            "is_a": "types",
            "language": "cpp",
            "schema": {
                "int": "int",
                "str": {"code": "std::string", "imports": "string"},
                "array": {"code": "std::vector<{_1}>", "imports": "vector"},
                "map": {"code": "std::map<{_1}, {_2}>", "imports": "map"},
            }
        }),
        json!({
            "is_a": "types",
            "language": "py",
            "schema": {
                "int": "int",
                "str": "str",
                "array": "list[{_1}]",
                "map": "dict[{_1}, {_2}]",
            }
        }),
        json!({
            "is_a": "model",
            "name": "player",
            "schema": [
                {"name": "name", "type": "str(30)"},
                {"name": "age", "type": "int(2)", "test": [7, 99]},
            ]
        }),
        json!({
            "is_a": "model",
            "name": "weapon",
            "schema": [
                {"name": "type", "type": "str(20)", "test": ["Sword", "Axe", "Spear"]},
                {"name": "stats", "type": "array(30)", "len": 30},
            ]
        }),
    ]
}

#[test]
fn test_single_type_declaration_end_to_end() {
    let records = vec![json!({
        "is_a": "types",
        "language": "cpp",
        "schema": {"int": {"code": "int"}}
    })];

    let registries = compile(&records).unwrap();
    assert_eq!(
        serde_json::to_value(&registries.types).unwrap(),
        json!({"cpp": {"int": {"code": "int", "maximum_possible_args": 0}}})
    );
}

#[test]
fn test_single_model_declaration_end_to_end() {
    let records = vec![json!({
        "is_a": "model",
        "name": "player",
        "schema": [{"name": "age", "type": "int(2)"}]
    })];

    let registries = compile(&records).unwrap();
    assert_eq!(
        serde_json::to_value(&registries.models).unwrap(),
        json!({"player": [
            {"name": "age", "type": "int", "size": 2, "test": null, "len": 1}
        ]})
    );
}

#[test]
fn test_redeclared_type_name_for_one_language() {
    let records = vec![
        json!({"is_a": "types", "language": "cpp", "schema": {"int": "int"}}),
        json!({"is_a": "types", "language": "cpp", "schema": {"int": "long"}}),
    ];
    assert_eq!(
        compile(&records).unwrap_err(),
        CompileError::DuplicateType {
            language: LanguageId::new("cpp"),
            name: TypeName::new("int"),
        }
    );
}

#[test]
fn test_field_type_without_size() {
    let records = vec![json!({
        "is_a": "model",
        "name": "player",
        "schema": [{"name": "age", "type": "int"}]
    })];
    assert_eq!(
        compile(&records).unwrap_err(),
        CompileError::InvalidTypeSignature {
            model: ModelName::new("player"),
            field: "age".to_string(),
            signature: "int".to_string(),
        }
    );
}

#[test]
fn test_mixed_batch_compiles_both_registries() {
    let registries = compile(&mixed_batch()).unwrap();

    assert_eq!(registries.types.language_count(), 2);
    assert_eq!(registries.models.len(), 2);

    let map_entry = registries
        .types
        .get(&LanguageId::new("py"), &TypeName::new("map"))
        .unwrap();
    assert_eq!(map_entry.maximum_possible_args, 2);

    let weapon = registries.models.get(&ModelName::new("weapon")).unwrap();
    assert_eq!(weapon[1].len, 30);
    assert_eq!(weapon[1].size, 30);
}

#[test]
fn test_compilation_is_deterministic() {
    let first = compile(&mixed_batch()).unwrap();
    let second = compile(&mixed_batch()).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_one_bad_record_rejects_the_whole_batch() {
    let mut records = mixed_batch();
    records.push(json!({"is_a": "types", "language": "lua", "schema": {}}));

    // The four valid declarations do not survive the fifth's violation.
    assert!(matches!(
        compile(&records).unwrap_err(),
        CompileError::Structural { .. }
    ));
}

#[test]
fn test_undiscriminated_record_rejects_the_whole_batch() {
    let mut records = mixed_batch();
    records.push(json!({"name": "stray"}));

    assert_eq!(
        compile(&records).unwrap_err(),
        CompileError::MissingDiscriminator { index: 4 }
    );
}

#[test]
fn test_reference_check_over_a_mixed_batch() {
    let options = CompileOptions {
        check_references: true,
    };

    // Every field of the mixed batch references a declared type.
    compile_with(&mixed_batch(), &options).unwrap();

    let mut records = mixed_batch();
    records.push(json!({
        "is_a": "model",
        "name": "spell",
        "schema": [{"name": "power", "type": "float(8)"}]
    }));
    assert_eq!(
        compile_with(&records, &options).unwrap_err(),
        CompileError::UnknownTypeReference {
            model: ModelName::new("spell"),
            field: "power".to_string(),
            type_name: TypeName::new("float"),
        }
    );
}

#[test]
fn test_registries_serialize_to_a_stable_shape() {
    let registries = compile(&mixed_batch()).unwrap();
    let value = serde_json::to_value(&registries).unwrap();

    assert!(value["types"]["cpp"]["array"]["imports"] == json!("vector"));
    assert!(value["models"]["player"][1]["test"] == json!([7, 99]));

    // Registries round-trip through their serialized form.
    let reparsed: mgen_core::Registries = serde_json::from_value(value).unwrap();
    assert_eq!(reparsed, registries);
}
