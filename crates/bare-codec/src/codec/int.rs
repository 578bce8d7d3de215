//! Signed zig-zag varints: `int` and `int_safe`.
//!
//! Zig-zag maps 0, -1, 1, -2, ... onto 0, 1, 2, 3, ... so small magnitudes
//! of either sign stay short on the wire.

use crate::constants::INT_SAFE_MAX_BYTE_COUNT;
use crate::cursor::ByteCursor;
use crate::error::{Issue, Result};
use crate::validator::is_safe_integer;

use super::fixed::truncate_safe_integer;
use super::uint::{read_uint, read_varint, rewind, write_varint};

#[inline]
const fn zigzag(x: i64) -> u64 {
    ((x << 1) ^ (x >> 63)) as u64
}

#[inline]
const fn unzigzag(zz: u64) -> i64 {
    (zz >> 1) as i64 ^ -((zz & 1) as i64)
}

/// Reads a zig-zag varint of at most 10 bytes.
pub fn read_int(bc: &mut ByteCursor<'_>) -> Result<i64> {
    read_uint(bc).map(unzigzag)
}

/// Writes `x` zig-zag mapped, in the same varint form as [`crate::write_uint`].
pub fn write_int(bc: &mut ByteCursor<'_>, x: i64) -> Result<()> {
    write_varint(bc, zigzag(x))
}

/// Reads a zig-zag varint of at most 8 bytes whose value is a safe integer.
pub fn read_int_safe(bc: &mut ByteCursor<'_>) -> Result<i64> {
    let start = bc.offset();
    let varint = read_varint(bc, INT_SAFE_MAX_BYTE_COUNT)?;
    if varint.is_padded() {
        return Err(rewind(bc, start, Issue::NonCanonical));
    }
    if varint.byte_count == INT_SAFE_MAX_BYTE_COUNT && varint.last_byte > 0x1f {
        return Err(rewind(bc, start, Issue::TooLargeNumber));
    }
    // 54 zig-zag bits still admit -2^53
    let result = unzigzag(varint.value);
    if !is_safe_integer(result) {
        return Err(rewind(bc, start, Issue::TooLargeNumber));
    }
    Ok(result)
}

/// Writes a safe integer as a zig-zag varint.
///
/// # Panics
///
/// In debug builds, if `x` is not a safe integer. Release builds wrap `x`
/// into the safe range first.
pub fn write_int_safe(bc: &mut ByteCursor<'_>, x: i64) -> Result<()> {
    debug_assert!(is_safe_integer(x), "too large number");
    write_varint(bc, zigzag(truncate_safe_integer(x)))
}
