//! The [`CompactUuid`] value type.

use crate::codec;
use crate::source::{shared_random, Md5Digest, NameDigest, RandomSource};
use crate::{UuidError, UuidResult};
use std::hash::{Hash, Hasher};
use std::{fmt, str::FromStr};

/// An immutable 128-bit universally unique identifier.
///
/// The value is held as two unsigned 64-bit halves. For the Leach-Salz variant the halves are
/// laid out as follows:
///
/// ```text
/// high: 0xFFFFFFFF00000000 time_low
///       0x00000000FFFF0000 time_mid
///       0x000000000000F000 version
///       0x0000000000000FFF time_hi
/// low:  0xC000000000000000 variant
///       0x3FFF000000000000 clock_seq
///       0x0000FFFFFFFFFFFF node
/// ```
///
/// Only [`CompactUuid::random`] and [`CompactUuid::name_based`] set the version and variant
/// fields. Every other constructor keeps the bits it is given.
///
/// # Comparison
/// Equality and ordering use the raw bits: `high` first, then `low`, both unsigned. The
/// ordering is the same as comparing [`CompactUuid::as_u128`].
///
/// # Display format
/// Always the canonical 36-character lowercase hyphenated form.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CompactUuid {
    // Field order drives the derived ordering.
    high: u64,
    low: u64,
}

impl CompactUuid {
    /// Length of the canonical string form.
    pub const STRING_LENGTH: usize = codec::STRING_LENGTH;

    /// Length of the big-endian byte form.
    pub const BYTE_LENGTH: usize = 16;

    /// The identifier with all 128 bits cleared.
    pub const NIL: CompactUuid = CompactUuid::from_halves(0, 0);

    /// Creates an identifier from its most and least significant halves.
    ///
    /// No validation is performed; the caller is responsible for the version and variant bits.
    pub const fn from_halves(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    /// Creates an identifier from 16 big-endian bytes.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        let high = u64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]);
        let low = u64::from_be_bytes([
            bytes[8], bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
        ]);
        Self { high, low }
    }

    /// Creates an identifier from a big-endian byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidByteLength`] unless `bytes` holds exactly 16 bytes.
    pub fn from_slice(bytes: &[u8]) -> UuidResult<Self> {
        let array: [u8; 16] = bytes
            .try_into()
            .map_err(|_| UuidError::InvalidByteLength(bytes.len()))?;
        Ok(Self::from_bytes(array))
    }

    /// Parses the canonical 36-character form.
    ///
    /// The five digit runs are read from fixed offsets and must contain only `0-9` and `a-f`.
    /// The separator positions are not checked; see [`CompactUuid::is_canonical`] for the
    /// strict layout check.
    ///
    /// # Arguments
    ///
    /// * `input` - UUID string, e.g. `550e8400-e29b-41d4-a716-446655440000`.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidLength`] if `input` is not 36 characters long, or
    /// [`UuidError::InvalidCharacter`] naming the first character in a digit position that is
    /// not lowercase hex.
    pub fn parse(input: &str) -> UuidResult<Self> {
        codec::decode(input)
    }

    /// Returns true if `input` is exactly the canonical form.
    ///
    /// This is a purely syntactic check that validates:
    /// - Exactly 36 bytes long
    /// - Hyphens at indices 8, 13, 18 and 23
    /// - Lowercase hex characters (`0-9` and `a-f`) everywhere else
    pub fn is_canonical(input: &str) -> bool {
        codec::is_canonical(input)
    }

    /// Generates a version 4 identifier from the process-wide secure random source.
    ///
    /// # Panics
    ///
    /// Panics if the operating system cannot seed or feed the random source. That indicates a
    /// broken runtime environment rather than a recoverable condition.
    pub fn random() -> Self {
        shared_random()
            .and_then(Self::random_with)
            .unwrap_or_else(|err| fatal(err))
    }

    /// Generates a version 4 identifier from `source`.
    ///
    /// # Errors
    ///
    /// Propagates the error of [`RandomSource::fill_bytes`].
    pub fn random_with<R: RandomSource + ?Sized>(source: &R) -> UuidResult<Self> {
        let mut bytes = [0u8; 16];
        source.fill_bytes(&mut bytes)?;
        Ok(Self::from_bytes(stamp(bytes, 4)))
    }

    /// Generates a version 3 identifier from the MD5 digest of `name`.
    ///
    /// The same `name` always produces the same identifier.
    pub fn name_based(name: &[u8]) -> Self {
        Self::name_based_with(&Md5Digest, name).unwrap_or_else(|err| fatal(err))
    }

    /// Generates a version 3 identifier from `digest` applied to `name`.
    ///
    /// # Errors
    ///
    /// Propagates the error of [`NameDigest::digest`].
    pub fn name_based_with<D: NameDigest + ?Sized>(digest: &D, name: &[u8]) -> UuidResult<Self> {
        let bytes = digest.digest(name)?;
        Ok(Self::from_bytes(stamp(bytes, 3)))
    }

    /// Returns the most significant 64 bits.
    pub const fn high(&self) -> u64 {
        self.high
    }

    /// Returns the least significant 64 bits.
    pub const fn low(&self) -> u64 {
        self.low
    }

    /// Returns the full 128-bit value.
    pub const fn as_u128(&self) -> u128 {
        ((self.high as u128) << 64) | self.low as u128
    }

    /// Returns the 16 big-endian bytes, `high` first.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.high.to_be_bytes());
        bytes[8..].copy_from_slice(&self.low.to_be_bytes());
        bytes
    }

    /// Returns the raw 4-bit version field.
    pub const fn version(&self) -> u8 {
        ((self.high >> 12) & 0xf) as u8
    }

    /// Returns a 32-bit hash that is stable across processes.
    ///
    /// Each half is folded by XOR-ing its upper and lower 32-bit words, then the two folds are
    /// XOR-ed together.
    pub const fn hash_code(&self) -> u32 {
        (self.high ^ (self.high >> 32) ^ self.low ^ (self.low >> 32)) as u32
    }

    /// Writes the canonical form into `buf` without allocating.
    ///
    /// # Returns
    ///
    /// Returns the written buffer as a string slice.
    pub fn encode<'b>(&self, buf: &'b mut [u8; codec::STRING_LENGTH]) -> &'b str {
        codec::encode(self, buf)
    }
}

/// Sets the version nibble in byte 6 and the IETF variant in byte 8.
fn stamp(mut bytes: [u8; 16], version: u8) -> [u8; 16] {
    bytes[6] = (bytes[6] & 0x0f) | (version << 4);
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    bytes
}

fn fatal(err: UuidError) -> ! {
    tracing::error!("UUID generation unavailable: {}", err);
    panic!("UUID generation unavailable: {err}");
}

impl Hash for CompactUuid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl fmt::Display for CompactUuid {
    /// Formats the identifier in canonical form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; codec::STRING_LENGTH];
        f.write_str(self.encode(&mut buf))
    }
}

impl fmt::Debug for CompactUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; codec::STRING_LENGTH];
        f.debug_tuple("CompactUuid")
            .field(&format_args!("{}", self.encode(&mut buf)))
            .finish()
    }
}

impl FromStr for CompactUuid {
    type Err = UuidError;

    /// Equivalent to calling [`CompactUuid::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompactUuid::parse(s)
    }
}

impl TryFrom<&str> for CompactUuid {
    type Error = UuidError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        CompactUuid::parse(value)
    }
}

impl From<u128> for CompactUuid {
    fn from(value: u128) -> Self {
        Self::from_halves((value >> 64) as u64, value as u64)
    }
}

impl From<CompactUuid> for u128 {
    fn from(value: CompactUuid) -> Self {
        value.as_u128()
    }
}

impl From<uuid::Uuid> for CompactUuid {
    fn from(value: uuid::Uuid) -> Self {
        Self::from(value.as_u128())
    }
}

impl From<CompactUuid> for uuid::Uuid {
    fn from(value: CompactUuid) -> Self {
        uuid::Uuid::from_u128(value.as_u128())
    }
}
