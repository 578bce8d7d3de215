//! Fixed-width primitives: `bool`, `u8`..`u64`, `i8`..`i64`, `f32`, `f64`.
//!
//! Everything is little-endian on the wire.

use paste::paste;

use crate::constants::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
use crate::cursor::ByteCursor;
use crate::error::{BareError, Issue, Result};
use crate::validator::{is_safe_integer, is_u64_safe};

macro_rules! fixed_le {
    ($($ty:ident),*) => {
        paste! {
            $(
                #[doc = concat!("Reads a little-endian `", stringify!($ty), "`.")]
                #[inline]
                pub fn [<read_ $ty>](bc: &mut ByteCursor<'_>) -> Result<$ty> {
                    Ok($ty::from_le_bytes(bc.read_array()?))
                }

                #[doc = concat!("Writes a little-endian `", stringify!($ty), "`.")]
                #[inline]
                pub fn [<write_ $ty>](bc: &mut ByteCursor<'_>, x: $ty) -> Result<()> {
                    bc.write(&x.to_le_bytes())
                }
            )*
        }
    };
}

fixed_le!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

/// Reads a bool byte. Any value other than 0 or 1 is rejected and the byte
/// is left unconsumed.
pub fn read_bool(bc: &mut ByteCursor<'_>) -> Result<bool> {
    let val = read_u8(bc)?;
    if val > 1 {
        let offset = bc.offset() - 1;
        bc.set_offset(offset);
        return Err(BareError::new(offset, Issue::InvalidBool));
    }
    Ok(val > 0)
}

/// Writes `x` as a single `0` or `1` byte.
pub fn write_bool(bc: &mut ByteCursor<'_>, x: bool) -> Result<()> {
    write_u8(bc, u8::from(x))
}

/// Reads an `i64` that must lie within `MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER`.
///
/// Out-of-range values fail with [`Issue::TooLargeNumber`] and leave the
/// eight bytes unconsumed.
pub fn read_i64_safe(bc: &mut ByteCursor<'_>) -> Result<i64> {
    let result = read_i64(bc)?;
    if !is_safe_integer(result) {
        let offset = bc.offset() - 8;
        bc.set_offset(offset);
        return Err(BareError::new(offset, Issue::TooLargeNumber));
    }
    Ok(result)
}

/// Writes a safe integer as an `i64`.
///
/// # Panics
///
/// In debug builds, if `x` is not a safe integer. Release builds wrap `x`
/// modulo 2^54 into the safe range instead.
pub fn write_i64_safe(bc: &mut ByteCursor<'_>, x: i64) -> Result<()> {
    debug_assert!(is_safe_integer(x), "too large number");
    write_i64(bc, truncate_safe_integer(x))
}

/// Reads a `u64` that must not exceed `MAX_SAFE_INTEGER`.
pub fn read_u64_safe(bc: &mut ByteCursor<'_>) -> Result<u64> {
    let result = read_u64(bc)?;
    if !is_u64_safe(result) {
        let offset = bc.offset() - 8;
        bc.set_offset(offset);
        return Err(BareError::new(offset, Issue::TooLargeNumber));
    }
    Ok(result)
}

/// Writes a non-negative safe integer as a `u64`.
///
/// # Panics
///
/// In debug builds, if `x > MAX_SAFE_INTEGER`. Release builds keep the low
/// 53 bits.
pub fn write_u64_safe(bc: &mut ByteCursor<'_>, x: u64) -> Result<()> {
    debug_assert!(is_u64_safe(x), "too large number");
    write_u64(bc, truncate_u64_safe(x))
}

/// Wraps `x` modulo 2^54 into a signed 54-bit value, then maps -2^53 (the
/// only 54-bit value outside the safe range) to `MIN_SAFE_INTEGER`.
#[inline]
pub(crate) const fn truncate_safe_integer(x: i64) -> i64 {
    let wrapped = (x << 10) >> 10;
    if wrapped < MIN_SAFE_INTEGER {
        MIN_SAFE_INTEGER
    } else {
        wrapped
    }
}

#[inline]
pub(crate) const fn truncate_u64_safe(x: u64) -> u64 {
    x & MAX_SAFE_INTEGER as u64
}
