//! Fixed-offset text codec for the canonical 36-character form.
//!
//! The canonical layout never moves, so both directions work on absolute byte offsets:
//!
//! ```text
//! 0        9    14   19   24
//! xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
//! ```

use crate::{CompactUuid, UuidError, UuidResult};

/// Length of the canonical string form.
pub(crate) const STRING_LENGTH: usize = 36;

/// Offsets of the four separators.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Parses the canonical string form.
///
/// Only the five digit runs are decoded; the bytes at the separator offsets are skipped
/// without inspection.
pub(crate) fn decode(input: &str) -> UuidResult<CompactUuid> {
    let buf = input.as_bytes();
    if buf.len() != STRING_LENGTH {
        return Err(length_error(input));
    }

    let mut high = decode_run(input, 0, 8)?;
    high = (high << 16) | decode_run(input, 9, 4)?;
    high = (high << 16) | decode_run(input, 14, 4)?;

    let mut low = decode_run(input, 19, 4)?;
    low = (low << 48) | decode_run(input, 24, 12)?;

    Ok(CompactUuid::from_halves(high, low))
}

/// Decodes `digits` lowercase hex digits starting at byte offset `begin`.
///
/// Callers guarantee `begin + digits <= input.len()`.
fn decode_run(input: &str, begin: usize, digits: usize) -> UuidResult<u64> {
    let buf = input.as_bytes();
    let mut result = 0u64;
    for index in begin..begin + digits {
        let nibble = match buf[index] {
            b @ b'0'..=b'9' => b - b'0',
            b @ b'a'..=b'f' => b - b'a' + 10,
            _ => return Err(invalid_character(input, index)),
        };
        result = (result << 4) | u64::from(nibble);
    }
    Ok(result)
}

/// Builds the error for an input whose byte length is not 36.
///
/// A string of 36 characters can still miss the byte length when it holds non-ASCII
/// characters; those are reported as the offending character rather than a length mismatch.
fn length_error(input: &str) -> UuidError {
    let chars = input.chars().count();
    if chars == STRING_LENGTH {
        if let Some((index, character)) = input.char_indices().find(|(_, c)| !c.is_ascii()) {
            return UuidError::InvalidCharacter { character, index };
        }
    }
    UuidError::InvalidLength(chars)
}

fn invalid_character(input: &str, index: usize) -> UuidError {
    // `index` can land inside a multi-byte character; report the character covering it.
    let character = input
        .char_indices()
        .take_while(|(start, _)| *start <= index)
        .last()
        .map(|(_, c)| c)
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    UuidError::InvalidCharacter { character, index }
}

/// Writes the canonical form of `uuid` into `buf` and returns it as a string slice.
pub(crate) fn encode<'b>(uuid: &CompactUuid, buf: &'b mut [u8; STRING_LENGTH]) -> &'b str {
    let (high, low) = (uuid.high(), uuid.low());

    write_digits(high >> 32, 8, buf, 0);
    write_digits(high >> 16, 4, buf, 9);
    write_digits(high, 4, buf, 14);
    write_digits(low >> 48, 4, buf, 19);
    write_digits(low, 12, buf, 24);
    for offset in HYPHENS {
        buf[offset] = b'-';
    }

    // SAFETY: every byte was written above from HEX_DIGITS or as a hyphen, all ASCII.
    unsafe { std::str::from_utf8_unchecked(buf) }
}

/// Writes the low `digits` nibbles of `value` right-to-left, zero-padded.
fn write_digits(mut value: u64, digits: usize, buf: &mut [u8], begin: usize) {
    for slot in buf[begin..begin + digits].iter_mut().rev() {
        *slot = HEX_DIGITS[(value & 0xf) as usize];
        value >>= 4;
    }
}

/// Strict layout check: length, separator positions and lowercase hex digits.
pub(crate) fn is_canonical(input: &str) -> bool {
    input.len() == STRING_LENGTH
        && input.bytes().enumerate().all(|(index, b)| {
            if HYPHENS.contains(&index) {
                b == b'-'
            } else {
                matches!(b, b'0'..=b'9' | b'a'..=b'f')
            }
        })
}
