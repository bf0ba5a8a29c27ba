//! # mgen-core — Foundational Types for mgen
//!
//! This crate is the bedrock of the mgen declarative code-generation front
//! end. It defines the value model for raw declaration records, the
//! identifier newtypes, the compiled registry types, and the error taxonomy
//! shared by every compilation pass. The compiler passes themselves live in
//! `mgen-compile`; document loading and the CLI live in `mgen-cli`.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifier namespaces.** `LanguageId`,
//!    `TypeName`, `ModelName` — no bare strings for identifiers, so a type
//!    name cannot be confused with a model name at a call site.
//!
//! 2. **Write-once registries.** Duplicate detection lives on
//!    [`TypeRegistry::insert`] and [`ModelRegistry::insert`], not in the
//!    passes that call them, so no compilation path can bypass it.
//!
//! 3. **One exhaustive error enum.** Every validation rule has exactly one
//!    [`CompileError`] variant, each carrying the offending record or field
//!    identity. Callers match on kinds; nothing is stringly-typed.
//!
//! 4. **Deterministic output.** Registries are `BTreeMap`-backed, so equal
//!    inputs serialize to identical bytes; field order within a model is
//!    declaration order.
//!
//! ## Crate Policy
//!
//! - No dependencies on other mgen crates (this is the leaf of the DAG).
//! - No I/O and no logging; pure data types only.
//! - No `unsafe` code, no `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`; everything a generator
//!   consumes implements `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod record;
pub mod registry;

// Re-export primary types for ergonomic imports.
pub use error::CompileError;
pub use identity::{LanguageId, ModelName, TypeName};
pub use record::{discriminator, record_kind, RecordKind, DISCRIMINATOR_KEY};
pub use registry::{FieldSpec, ModelRegistry, Registries, TypeEntry, TypeRegistry, TypeTable};
