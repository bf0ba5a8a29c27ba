//! # Error Taxonomy
//!
//! Every observable failure mode of a compilation pass, as one exhaustive
//! enum. All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Validation is fail-fast and whole-batch: the first violation aborts
//!   the call, and no partial registry is observable.
//! - These are deterministic, pure-data errors — retrying the same input
//!   reproduces the same failure, so there is no recovery path.
//! - Each variant carries enough context (record index, language, model,
//!   field) for a driver to render a precise diagnostic; this crate never
//!   formats user-facing reports itself.

use thiserror::Error;

use crate::identity::{LanguageId, ModelName, TypeName};

/// A violated compilation rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// No records were supplied where at least one was required.
    #[error("no records supplied")]
    EmptyInput,

    /// A record lacks a usable `is_a` discriminator.
    #[error("record #{index} has no usable `is_a` discriminator")]
    MissingDiscriminator {
        /// Position of the record in the supplied batch.
        index: usize,
    },

    /// The batch contains no type declarations where at least one was required.
    #[error("batch contains no `is_a: types` records")]
    NoTypeDeclarations,

    /// The batch contains no model declarations where at least one was required.
    #[error("batch contains no `is_a: model` records")]
    NoModelDeclarations,

    /// A type declaration does not name its target language.
    #[error("type declaration #{index} does not name a target language")]
    MissingLanguage {
        /// Position of the declaration among the type records.
        index: usize,
    },

    /// A type declaration lacks its schema payload.
    #[error("type declaration #{index} has no schema")]
    MissingSchema {
        /// Position of the declaration among the type records.
        index: usize,
    },

    /// A declaration or field spec violates the required shape.
    #[error("{context}: {reason}")]
    Structural {
        /// Identity of the offending declaration or field.
        context: String,
        /// The shape rule that was violated.
        reason: String,
    },

    /// A (language, type name) pair was declared more than once.
    ///
    /// Type declarations are write-once; redeclaring a name is rejected
    /// even when both declarations agree.
    #[error("type `{name}` is declared more than once for language `{language}`")]
    DuplicateType {
        /// The language whose table already holds the name.
        language: LanguageId,
        /// The redeclared type name.
        name: TypeName,
    },

    /// A model name was declared more than once.
    #[error("model `{name}` is declared more than once")]
    DuplicateModel {
        /// The redeclared model name.
        name: ModelName,
    },

    /// A field's declared type does not match the `name(size)` grammar.
    #[error("field `{field}` of model `{model}` has a malformed type signature {signature:?}")]
    InvalidTypeSignature {
        /// The model whose field failed to parse.
        model: ModelName,
        /// The field carrying the signature.
        field: String,
        /// The string that failed to parse.
        signature: String,
    },

    /// A model field references a type name no language declares.
    #[error("field `{field}` of model `{model}` references undeclared type `{type_name}`")]
    UnknownTypeReference {
        /// The model whose field dangles.
        model: ModelName,
        /// The field carrying the reference.
        field: String,
        /// The referenced type name.
        type_name: TypeName,
    },
}

impl CompileError {
    /// Shorthand for a [`CompileError::Structural`] violation.
    pub fn structural(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Structural {
            context: context.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_record_identity() {
        let err = CompileError::MissingDiscriminator { index: 3 };
        assert!(err.to_string().contains("#3"));

        let err = CompileError::DuplicateType {
            language: LanguageId::new("cpp"),
            name: TypeName::new("int"),
        };
        assert!(err.to_string().contains("cpp"));
        assert!(err.to_string().contains("int"));
    }

    #[test]
    fn test_structural_shorthand() {
        let err = CompileError::structural("type declaration #0", "schema must be a mapping");
        assert_eq!(
            err.to_string(),
            "type declaration #0: schema must be a mapping"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        // Test authors match on exact kinds; equality keeps that cheap.
        assert_eq!(CompileError::EmptyInput, CompileError::EmptyInput);
        assert_ne!(
            CompileError::NoTypeDeclarations,
            CompileError::NoModelDeclarations
        );
    }
}
