//! # Compilation Pipeline
//!
//! Stages the passes over a raw batch: classify, validate types, validate
//! models, optionally cross-check references. Each stage feeds the next and
//! the first failure aborts the call — the `Result` is the only output
//! channel, so a caller can never observe a half-populated registry.

use mgen_core::record::RecordKind;
use mgen_core::{CompileError, ModelRegistry, Registries, TypeRegistry};
use serde_json::Value;

use crate::classify::classify;
use crate::models::build_model_registry;
use crate::references::check_references;
use crate::types::build_type_registry;

/// Knobs for a compilation pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompileOptions {
    /// Run the cross-registry reference check after both passes succeed.
    pub check_references: bool,
}

/// Compile a raw batch into its type and model registries.
///
/// Equivalent to [`compile_with`] with default options.
pub fn compile(records: &[Value]) -> Result<Registries, CompileError> {
    compile_with(records, &CompileOptions::default())
}

/// Compile a raw batch with explicit options.
///
/// The batch must be non-empty and every record discriminated. A kind with
/// no records yields an empty registry on that side — a batch holding only
/// type declarations still compiles, as does one holding only models.
/// Records of kind `value` (and unknown kinds) are ignored here. Use
/// [`compile_types`] / [`compile_models`] when a kind is mandatory.
pub fn compile_with(
    records: &[Value],
    options: &CompileOptions,
) -> Result<Registries, CompileError> {
    let type_records = classify(records, RecordKind::Types)?;
    let model_records = classify(records, RecordKind::Model)?;

    let types = if type_records.is_empty() {
        TypeRegistry::new()
    } else {
        build_type_registry(&type_records)?
    };
    let models = if model_records.is_empty() {
        ModelRegistry::new()
    } else {
        build_model_registry(&model_records)?
    };

    if options.check_references {
        check_references(&types, &models)?;
    }

    Ok(Registries { types, models })
}

/// Compile only the type declarations of a batch.
///
/// Unlike [`compile`], at least one `is_a: types` record is required;
/// zero fails with [`CompileError::NoTypeDeclarations`].
pub fn compile_types(records: &[Value]) -> Result<TypeRegistry, CompileError> {
    build_type_registry(&classify(records, RecordKind::Types)?)
}

/// Compile only the model declarations of a batch.
///
/// Unlike [`compile`], at least one `is_a: model` record is required;
/// zero fails with [`CompileError::NoModelDeclarations`].
pub fn compile_models(records: &[Value]) -> Result<ModelRegistry, CompileError> {
    build_model_registry(&classify(records, RecordKind::Model)?)
}
