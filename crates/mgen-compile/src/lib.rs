//! # mgen-compile — The Compiler Passes
//!
//! Compiles a batch of raw declaration records into the two registries a
//! code generator consumes. The passes are pure, synchronous, single-shot
//! functions over fully materialized input: no I/O, no logging, no shared
//! mutable state. Compilation is atomic from the caller's perspective —
//! either the whole batch succeeds and yields complete registries, or it
//! fails with one typed [`CompileError`](mgen_core::CompileError) and
//! yields nothing.
//!
//! ## Passes
//!
//! - [`classify()`] (`classify.rs`): partitions records by their `is_a`
//!   discriminator, rejecting undiscriminated batches whole.
//! - [`build_type_registry`](types::build_type_registry) (`types.rs`):
//!   validates type declarations and merges them write-once into the
//!   language-keyed [`TypeRegistry`](mgen_core::TypeRegistry).
//! - [`build_model_registry`](models::build_model_registry) (`models.rs`):
//!   validates model declarations, resolves field signatures via the
//!   grammar in `signature.rs`, and merges write-once into the
//!   [`ModelRegistry`](mgen_core::ModelRegistry).
//! - [`check_references()`] (`references.rs`): optional post-pass tying
//!   model fields to declared type names.
//!
//! The [`compile()`] / [`compile_with`] orchestrators in `pipeline.rs` wire
//! the passes together; [`compile_types`] and [`compile_models`] run one
//! side alone and require at least one record of their kind.

pub mod classify;
pub mod models;
pub mod pipeline;
pub mod references;
pub mod signature;
pub mod types;

pub use classify::classify;
pub use models::build_model_registry;
pub use pipeline::{compile, compile_models, compile_types, compile_with, CompileOptions};
pub use references::check_references;
pub use signature::{parse as parse_signature, SignatureError};
pub use types::build_type_registry;
