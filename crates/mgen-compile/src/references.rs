//! # Cross-Registry Consistency
//!
//! Optional post-pass over both compiled registries: every model field's
//! type name must be declared somewhere in the type registry. Neither pass
//! needs the other to run, so this check only makes sense after both have
//! succeeded; the orchestrator runs it last, behind
//! [`CompileOptions::check_references`](crate::CompileOptions).

use mgen_core::{CompileError, ModelRegistry, TypeRegistry};

/// Check that every model field references a declared type name.
///
/// A type name counts as declared when at least one language's table
/// carries it. Whether a given target language covers the name is a
/// generation-time concern, not a compilation-time one — a batch that only
/// declares `int` for `cpp` can still describe a model generated for `cpp`
/// alone.
///
/// # Errors
///
/// Returns [`CompileError::UnknownTypeReference`] for the first dangling
/// field, in sorted model order.
pub fn check_references(
    types: &TypeRegistry,
    models: &ModelRegistry,
) -> Result<(), CompileError> {
    for (model, fields) in models.models() {
        for field in fields {
            if !types.declares(&field.type_name) {
                return Err(CompileError::UnknownTypeReference {
                    model: model.clone(),
                    field: field.name.clone(),
                    type_name: field.type_name.clone(),
                });
            }
        }
    }
    Ok(())
}
