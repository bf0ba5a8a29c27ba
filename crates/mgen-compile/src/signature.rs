//! # Field Type Signatures
//!
//! A model field declares its type in the compact `name(size)` notation —
//! `int(2)` for a two-byte integer, `str(30)` for a thirty-byte buffer.
//! The grammar is anchored: the whole string must be one identifier, an
//! opening parenthesis, a decimal size, and a closing parenthesis, with no
//! surrounding characters. Trailing garbage after the closing parenthesis
//! would otherwise let malformed declarations slip through silently.

use thiserror::Error;

/// A string that failed to parse as a `name(size)` signature.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed type signature {signature:?}: expected `name(size)`")]
pub struct SignatureError {
    /// The string that failed to parse.
    pub signature: String,
}

/// Decompose a field type signature into its type name and fixed size.
///
/// The identifier is one or more word characters (alphanumerics or `_`);
/// the size is one or more ASCII digits fitting a `u32`.
///
/// # Errors
///
/// Returns [`SignatureError`] carrying the offending string on any
/// non-match. The model validator wraps it with model and field context.
pub fn parse(signature: &str) -> Result<(String, u32), SignatureError> {
    let error = || SignatureError {
        signature: signature.to_string(),
    };

    let (name, rest) = signature.split_once('(').ok_or_else(error)?;
    let digits = rest.strip_suffix(')').ok_or_else(error)?;

    if name.is_empty() || !name.chars().all(is_word_char) {
        return Err(error());
    }
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(error());
    }

    let size = digits.parse().map_err(|_| error())?;
    Ok((name.to_string(), size))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
