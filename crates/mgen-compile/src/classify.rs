//! # Record Classifier
//!
//! Partitions a flat batch of raw records by their `is_a` discriminator.
//! The classifier is deliberately strict about the batch as a whole: a
//! single record without a usable discriminator rejects everything, so a
//! malformed document can never partially load.

use mgen_core::record::{discriminator, record_kind, RecordKind};
use mgen_core::CompileError;
use serde_json::Value;

/// Select the records of one kind from a raw batch, preserving order.
///
/// The whole batch is checked before any filtering: an empty batch fails
/// with [`CompileError::EmptyInput`], and any record that is not a mapping
/// or lacks a string `is_a` value fails with
/// [`CompileError::MissingDiscriminator`]. Records whose discriminator
/// names an unknown kind are discriminated but never selected.
///
/// A zero-length result is not an error here — the validator for each kind
/// decides whether zero matches is acceptable.
pub fn classify<'a>(
    records: &'a [Value],
    kind: RecordKind,
) -> Result<Vec<&'a Value>, CompileError> {
    ensure_discriminated(records)?;
    Ok(records
        .iter()
        .filter(|record| record_kind(record) == Some(kind))
        .collect())
}

/// Whole-batch discriminator check, fail-fast on the first bad record.
fn ensure_discriminated(records: &[Value]) -> Result<(), CompileError> {
    if records.is_empty() {
        return Err(CompileError::EmptyInput);
    }
    for (index, record) in records.iter().enumerate() {
        if discriminator(record).is_none() {
            return Err(CompileError::MissingDiscriminator { index });
        }
    }
    Ok(())
}
