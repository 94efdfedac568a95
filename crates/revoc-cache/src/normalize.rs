//! Key normalization against backend capability limits.
//!
//! Storage backends publish hard length limits for context labels and
//! record keys. Token identifiers come from the outside world and can be
//! arbitrarily long, so they are reduced to a content-addressed substitute
//! when they do not fit. Context labels are chosen by this codebase and a
//! label that does not fit is a configuration mistake, not an input to
//! accommodate.

use std::borrow::Cow;

use aws_lc_rs::digest;
use thiserror::Error;

/// Context label exceeding the backend's published limit.
///
/// A context that cannot be stored verbatim cannot safely subdivide the
/// store, so normalization refuses it outright.
#[derive(Debug, Error)]
#[error("context length {length} exceeds storage limit {limit}")]
pub struct ContextTooLong {
    /// Length of the rejected context label.
    pub length: usize,

    /// The backend's published context limit.
    pub limit: usize,
}

/// Produces the effective key to use for `(context, key)` under the given
/// backend limits.
///
/// An oversized key is replaced by the lowercase hex SHA-384 digest of the
/// raw key. The cache only ever compares keys for equality and never needs
/// the original string back, so a fixed-width digest is a safe substitute.
/// Keys within the limit pass through unchanged and unallocated.
///
/// ## Errors
///
/// Fails with [`ContextTooLong`] when the context label exceeds the
/// backend's context limit; no storage call may be made in that case.
pub fn normalize<'a>(
    context: &str,
    key: &'a str,
    max_context_length: usize,
    max_key_length: usize,
) -> Result<Cow<'a, str>, ContextTooLong> {
    if context.len() > max_context_length {
        return Err(ContextTooLong {
            length: context.len(),
            limit: max_context_length,
        });
    }

    if key.len() > max_key_length {
        tracing::debug!(
            "hashing {}-byte key to fit storage key limit {}",
            key.len(),
            max_key_length
        );
        return Ok(Cow::Owned(digest_key(key)));
    }

    Ok(Cow::Borrowed(key))
}

/// Lowercase hex SHA-384 digest of a raw key.
fn digest_key(key: &str) -> String {
    hex::encode(digest::digest(&digest::SHA384, key.as_bytes()))
}
