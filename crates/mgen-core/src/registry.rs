//! # Compiled Registries
//!
//! The two outputs of a compilation pass: the language-keyed type registry
//! and the model registry. Both are built once per pass and read-only to
//! downstream consumers — the generator receives shared references and the
//! only mutating operations are the write-once `insert`s used by the
//! compiler itself.
//!
//! ## Invariants
//!
//! - A (language, type name) pair is inserted at most once; the second
//!   insert fails with [`CompileError::DuplicateType`]. Same for model
//!   names and [`CompileError::DuplicateModel`]. The checks live on the
//!   registry types so no compilation path can bypass them.
//! - Both registries iterate in sorted key order (`BTreeMap`), so the
//!   serialized output of a batch is byte-stable across runs. Field order
//!   within a model is declaration order, not sorted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CompileError;
use crate::identity::{LanguageId, ModelName, TypeName};

/// Concrete representation of one abstract type name in one target language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    /// Emission template. May reference substitution slots `{_1}`..`{_9}`
    /// for generic type arguments (e.g. `std::vector<{_1}>`).
    pub code: String,

    /// Optional dependency the generator must pull in alongside the type
    /// (a header, module, or package name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imports: Option<String>,

    /// Optional external template-file hint for generators that emit from
    /// files rather than inline templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Highest substitution slot referenced by `code`; 0 for non-generic
    /// types. Computed during compilation, never declared.
    pub maximum_possible_args: u32,
}

/// Per-language table mapping abstract type names to their representations.
pub type TypeTable = BTreeMap<TypeName, TypeEntry>;

/// Compiled language-keyed type tables.
///
/// Shape: `language -> type name -> entry`. Type names are unique per
/// language; the same name may appear under several languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRegistry {
    languages: BTreeMap<LanguageId, TypeTable>,
}

impl TypeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a type entry, write-once per (language, type name).
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::DuplicateType`] if the pair is already
    /// present, whether or not the entries agree.
    pub fn insert(
        &mut self,
        language: LanguageId,
        name: TypeName,
        entry: TypeEntry,
    ) -> Result<(), CompileError> {
        let table = self.languages.entry(language.clone()).or_default();
        if table.contains_key(&name) {
            return Err(CompileError::DuplicateType { language, name });
        }
        table.insert(name, entry);
        Ok(())
    }

    /// The type table of one target language.
    pub fn language(&self, language: &LanguageId) -> Option<&TypeTable> {
        self.languages.get(language)
    }

    /// Look up one type's representation in one language.
    pub fn get(&self, language: &LanguageId, name: &TypeName) -> Option<&TypeEntry> {
        self.languages.get(language).and_then(|table| table.get(name))
    }

    /// True when at least one language's table declares `name`.
    pub fn declares(&self, name: &TypeName) -> bool {
        self.languages.values().any(|table| table.contains_key(name))
    }

    /// Iterate the per-language tables in sorted language order.
    pub fn languages(&self) -> impl Iterator<Item = (&LanguageId, &TypeTable)> {
        self.languages.iter()
    }

    /// Number of target languages with at least one declared type.
    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    /// True when no language has declared any type.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// One resolved field of a model layout.
///
/// The declared signature string is already decomposed into a type-name
/// reference and a fixed size, ready for a generator to emit a sized field
/// (possibly repeated `len` times).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name as declared.
    pub name: String,

    /// Referenced abstract type name (the identifier of the signature).
    #[serde(rename = "type")]
    pub type_name: TypeName,

    /// Fixed size of the field (the integer literal of the signature).
    pub size: u32,

    /// Sample values for generated test fixtures; `None` when the
    /// declaration gave none.
    pub test: Option<Vec<Value>>,

    /// Repetition count for the field; defaults to 1.
    pub len: u32,
}

/// Compiled model layouts, keyed by model name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelRegistry {
    models: BTreeMap<ModelName, Vec<FieldSpec>>,
}

impl ModelRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a model's resolved fields, write-once per model name.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::DuplicateModel`] if the name is already
    /// present.
    pub fn insert(&mut self, name: ModelName, fields: Vec<FieldSpec>) -> Result<(), CompileError> {
        if self.models.contains_key(&name) {
            return Err(CompileError::DuplicateModel { name });
        }
        self.models.insert(name, fields);
        Ok(())
    }

    /// The resolved fields of one model, in declaration order.
    pub fn get(&self, name: &ModelName) -> Option<&[FieldSpec]> {
        self.models.get(name).map(Vec::as_slice)
    }

    /// Iterate the models in sorted name order.
    pub fn models(&self) -> impl Iterator<Item = (&ModelName, &Vec<FieldSpec>)> {
        self.models.iter()
    }

    /// Number of compiled models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// True when no model has been compiled.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Output of a full compilation pass: both registries, produced atomically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registries {
    /// The compiled type registry.
    pub types: TypeRegistry,
    /// The compiled model registry.
    pub models: ModelRegistry,
}
