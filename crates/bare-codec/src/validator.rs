//! Range predicates used to assert that a host value fits its wire width.
//!
//! Every predicate truncates to the target width (two's complement) and
//! compares with the original value.
//!
//! The fixed-width writers take the exact Rust type, so these are for
//! callers that hold a wider host value, such as a schema codec that keeps
//! every integer field as an `i64` and narrows it before writing:
//!
//! ```
//! use bare_codec::validator::{is_i8, is_u8};
//! use bare_codec::{encode, write_i8, BareError, Config, Issue};
//!
//! assert!(is_u8(255));
//! assert!(!is_u8(256));
//!
//! let field: i64 = -3;
//! let bytes = encode(Config::default(), |bc| {
//!     if !is_i8(field) {
//!         return Err(BareError::new(bc.offset(), Issue::TooLargeNumber));
//!     }
//!     write_i8(bc, field as i8)
//! })
//! .unwrap();
//! assert_eq!(bytes, [0xfd]);
//! ```

use crate::constants::MAX_SAFE_INTEGER;

/// Can `val` be stored as a signed integer in 8 bits?
#[inline]
pub const fn is_i8(val: i64) -> bool {
    val == val as i8 as i64
}

/// Can `val` be stored as a signed integer in 16 bits?
#[inline]
pub const fn is_i16(val: i64) -> bool {
    val == val as i16 as i64
}

/// Can `val` be stored as a signed integer in 32 bits?
#[inline]
pub const fn is_i32(val: i64) -> bool {
    val == val as i32 as i64
}

/// Can `val` be stored as a signed integer in 64 bits?
#[inline]
pub const fn is_i64(val: i128) -> bool {
    val == val as i64 as i128
}

/// Can `val` be stored as an unsigned integer in 8 bits?
#[inline]
pub const fn is_u8(val: u64) -> bool {
    val == val & 0xff
}

/// Can `val` be stored as an unsigned integer in 16 bits?
#[inline]
pub const fn is_u16(val: u64) -> bool {
    val == val & 0xffff
}

/// Can `val` be stored as an unsigned integer in 32 bits?
#[inline]
pub const fn is_u32(val: u64) -> bool {
    val == val & 0xffff_ffff
}

/// Can `val` be stored as an unsigned integer in 64 bits?
#[inline]
pub const fn is_u64(val: i128) -> bool {
    val == val as u64 as i128
}

/// Is `val` within `MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER`?
#[inline]
pub const fn is_safe_integer(val: i64) -> bool {
    // shifts the safe range onto 0..=2 * MAX
    (val.wrapping_add(MAX_SAFE_INTEGER) as u64) <= (2 * MAX_SAFE_INTEGER) as u64
}

/// Is `val` a non-negative safe integer?
#[inline]
pub const fn is_u64_safe(val: u64) -> bool {
    val <= MAX_SAFE_INTEGER as u64
}
