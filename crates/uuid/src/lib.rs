//! Compact UUID value type and text codec.
//!
//! [`CompactUuid`] is an immutable 128-bit identifier stored as two unsigned 64-bit halves
//! (`high`, `low`). Equality, ordering and hashing work directly on those halves, so the type is
//! cheap to copy, compare and use as a map key.
//!
//! ## Canonical string form
//! - Length: 36
//! - Layout: `8-4-4-4-12` hex digit groups, hyphens at indices 8, 13, 18 and 23
//! - Characters: `0-9` and `a-f` only (lowercase)
//! - Example: `550e8400-e29b-41d4-a716-446655440000`
//!
//! Parsing reads the five digit runs straight from their fixed offsets instead of splitting on
//! hyphens, and formatting writes nibbles right-to-left from a lookup table into a stack
//! buffer. Both avoid generic radix conversion.
//!
//! Notes:
//! - Uppercase digits, braces, URNs and the 32-digit simple form are rejected by
//!   [`CompactUuid::parse`].
//! - `parse` does not inspect the separator positions. Use [`CompactUuid::is_canonical`] when the
//!   full layout must be enforced.
//!
//! ## Construction
//! - [`CompactUuid::parse`] for the canonical string.
//! - [`CompactUuid::from_halves`] for the raw `high`/`low` pair (no validation).
//! - [`CompactUuid::random`] for a version 4 identifier from the shared secure random source.
//! - [`CompactUuid::name_based`] for a version 3 identifier derived from an MD5 digest.
//!
//! Random and name-based generation go through the [`RandomSource`] and [`NameDigest`]
//! capabilities; the `*_with` constructors accept caller-supplied implementations.

mod codec;
mod compact;
#[cfg(feature = "serde")]
mod serde_impl;
mod source;

// Re-export public types
pub use compact::CompactUuid;
pub use source::{shared_random, Md5Digest, NameDigest, RandomSource, SecureRandom};

/// Error type for UUID operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UuidError {
    /// Input string is not exactly 36 bytes long
    #[error("Invalid UUID string: expected 36 characters, got {0}")]
    InvalidLength(usize),
    /// A digit position holds something other than `0-9` or `a-f`
    #[error("Invalid UUID string: invalid char '{character}' at index {index}")]
    InvalidCharacter { character: char, index: usize },
    /// Byte input is not exactly 16 bytes long
    #[error("Invalid UUID bytes: expected 16 bytes, got {0}")]
    InvalidByteLength(usize),
    /// The secure random source could not produce bytes
    #[error("Secure random source failed: {0}")]
    RandomSource(String),
    /// The digest algorithm for name-based identifiers is not available
    #[error("Digest algorithm unavailable: {0}")]
    DigestUnavailable(String),
}

impl UuidError {
    /// Returns `true` for errors caused by a malformed UUID string.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            UuidError::InvalidLength(_) | UuidError::InvalidCharacter { .. }
        )
    }
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
