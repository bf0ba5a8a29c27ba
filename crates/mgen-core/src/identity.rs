//! # Identifier Newtypes
//!
//! Newtype wrappers for the three identifier namespaces of the compiler.
//! These prevent accidental identifier confusion — you cannot pass a
//! `TypeName` where a `ModelName` is expected, and a registry keyed by
//! `LanguageId` cannot be indexed with a bare string that happens to be a
//! type name.
//!
//! All three serialize transparently as their inner string, so they key
//! JSON maps without ceremony.

use serde::{Deserialize, Serialize};

/// Identifier of a target language a generator can emit for (e.g. `cpp`, `py`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LanguageId(pub String);

/// Abstract name of a type as declared in a type table (e.g. `int`, `array`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TypeName(pub String);

/// Name of a composite model layout (e.g. `player`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModelName(pub String);

impl LanguageId {
    /// Wrap a language identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TypeName {
    /// Wrap a type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ModelName {
    /// Wrap a model name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for ModelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
