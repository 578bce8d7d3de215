//! Unsigned LEB128 varints: `uint`, `uint_safe` and `uint_safe32`.
//!
//! Each byte carries 7 bits of the value, least significant group first;
//! the high bit flags a continuation. Decoders only accept the shortest
//! encoding of a value.

use crate::constants::{INT_SAFE_MAX_BYTE_COUNT, UINT_MAX_BYTE_COUNT, UINT_SAFE32_MAX_BYTE_COUNT};
use crate::cursor::ByteCursor;
use crate::error::{BareError, Issue, Result};
use crate::validator::{is_u32, is_u64_safe};

use super::fixed::{read_u8, truncate_u64_safe};

/// Raw 7-bit groups of a varint read by [`read_varint`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Varint {
    pub value: u64,
    pub byte_count: usize,
    pub last_byte: u8,
}

impl Varint {
    /// Is the encoding longer than needed, i.e. does it end with a zero group?
    #[inline]
    pub fn is_padded(&self) -> bool {
        self.byte_count > 1 && self.last_byte == 0
    }
}

/// Reads up to `max_byte_count` bytes of a varint.
///
/// Stops after `max_byte_count` bytes even if the continuation bit of the
/// last byte is set; callers check `last_byte` against their own limit.
#[inline]
pub(crate) fn read_varint(bc: &mut ByteCursor<'_>, max_byte_count: usize) -> Result<Varint> {
    let first = read_u8(bc)?;
    if first < 0x80 {
        return Ok(Varint {
            value: u64::from(first),
            byte_count: 1,
            last_byte: first,
        });
    }
    let mut value = u64::from(first & 0x7f);
    let mut shift = 7;
    let mut byte_count = 1;
    loop {
        let byte = read_u8(bc)?;
        value |= u64::from(byte & 0x7f) << shift;
        byte_count += 1;
        if byte < 0x80 || byte_count == max_byte_count {
            return Ok(Varint {
                value,
                byte_count,
                last_byte: byte,
            });
        }
        shift += 7;
    }
}

/// Number of bytes of the LEB128 encoding of `x`.
#[inline]
pub(crate) const fn varint_len(x: u64) -> usize {
    let bits = 64 - x.leading_zeros() as usize;
    if bits == 0 {
        1
    } else {
        (bits + 6) / 7
    }
}

#[inline]
pub(crate) fn write_varint(bc: &mut ByteCursor<'_>, mut x: u64) -> Result<()> {
    let len = varint_len(x);
    bc.reserve(len)?;
    let slot = bc.write_slot(len);
    for byte in &mut slot[..len - 1] {
        *byte = (x as u8 & 0x7f) | 0x80;
        x >>= 7;
    }
    slot[len - 1] = x as u8;
    Ok(())
}

/// Moves back to `start` and builds the error reported there.
#[inline]
pub(crate) fn rewind(bc: &mut ByteCursor<'_>, start: usize, issue: Issue) -> BareError {
    bc.set_offset(start);
    BareError::new(start, issue)
}

/// Reads a varint of at most 10 bytes.
///
/// Fails with [`Issue::NonCanonical`] if the encoding is padded or if its
/// tenth byte holds more than the 64th bit.
pub fn read_uint(bc: &mut ByteCursor<'_>) -> Result<u64> {
    let start = bc.offset();
    let varint = read_varint(bc, UINT_MAX_BYTE_COUNT)?;
    if varint.is_padded() || (varint.byte_count == UINT_MAX_BYTE_COUNT && varint.last_byte > 1) {
        return Err(rewind(bc, start, Issue::NonCanonical));
    }
    Ok(varint.value)
}

/// Writes `x` as the shortest LEB128 encoding, 1 to 10 bytes.
pub fn write_uint(bc: &mut ByteCursor<'_>, x: u64) -> Result<()> {
    write_varint(bc, x)
}

/// Reads a varint of at most 8 bytes whose value is at most
/// `MAX_SAFE_INTEGER`.
pub fn read_uint_safe(bc: &mut ByteCursor<'_>) -> Result<u64> {
    let start = bc.offset();
    let varint = read_varint(bc, INT_SAFE_MAX_BYTE_COUNT)?;
    if varint.is_padded() {
        return Err(rewind(bc, start, Issue::NonCanonical));
    }
    if varint.byte_count == INT_SAFE_MAX_BYTE_COUNT && varint.last_byte > 0xf {
        return Err(rewind(bc, start, Issue::TooLargeNumber));
    }
    Ok(varint.value)
}

/// Writes a non-negative safe integer as a varint.
///
/// # Panics
///
/// In debug builds, if `x > MAX_SAFE_INTEGER`. Release builds keep the low
/// 53 bits.
pub fn write_uint_safe(bc: &mut ByteCursor<'_>, x: u64) -> Result<()> {
    debug_assert!(is_u64_safe(x), "too large number");
    write_varint(bc, truncate_u64_safe(x))
}

/// Reads a varint of at most 5 bytes whose value fits in a `u32`.
///
/// This is the length prefix of data, strings and arrays.
pub fn read_uint_safe32(bc: &mut ByteCursor<'_>) -> Result<u32> {
    let start = bc.offset();
    let varint = read_varint(bc, UINT_SAFE32_MAX_BYTE_COUNT)?;
    if varint.is_padded() {
        return Err(rewind(bc, start, Issue::NonCanonical));
    }
    if varint.byte_count == UINT_SAFE32_MAX_BYTE_COUNT && varint.last_byte > 0xf {
        return Err(rewind(bc, start, Issue::TooLargeNumber));
    }
    Ok(varint.value as u32)
}

/// Writes `x` as a varint of at most 5 bytes.
///
/// # Panics
///
/// In debug builds, if `x` does not fit in a `u32`. Release builds keep the
/// low 32 bits.
pub fn write_uint_safe32(bc: &mut ByteCursor<'_>, x: u64) -> Result<()> {
    debug_assert!(is_u32(x), "too large number");
    write_varint(bc, u64::from(x as u32))
}

/// Writes a length prefix.
///
/// A payload longer than `max_buffer_length` can never fit behind its
/// prefix, so it fails with [`Issue::TooLargeBuffer`] before anything is
/// written. That bound is a `u32`, which keeps the prefix in range.
#[inline]
pub(crate) fn write_len(bc: &mut ByteCursor<'_>, len: usize) -> Result<()> {
    if len > bc.config().max_buffer_length() as usize {
        return Err(BareError::new(0, Issue::TooLargeBuffer));
    }
    write_uint_safe32(bc, len as u64)
}
