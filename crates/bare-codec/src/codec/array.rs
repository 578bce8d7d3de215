//! Typed numeric arrays.
//!
//! A variable array is a `uint_safe32` element count followed by the
//! elements; a fixed array has its count supplied by the schema. Elements
//! are little-endian fixed-width values. On little-endian hosts the whole
//! element buffer is checked or reserved once and transcoded chunk by chunk,
//! which lowers to a plain copy. Big-endian hosts go through the scalar codec
//! of each element.

use std::mem::size_of;

use paste::paste;

use crate::constants::IS_LITTLE_ENDIAN_PLATFORM;
use crate::cursor::ByteCursor;
use crate::error::{BareError, Issue, Result};

use super::fixed;
use super::uint::{read_uint_safe32, write_len};

/// Byte length of `len` elements of `T`, checked against the readable bytes.
#[inline]
fn check_elements<T>(bc: &ByteCursor<'_>, len: usize) -> Result<usize> {
    let byte_len = len
        .checked_mul(size_of::<T>())
        .ok_or_else(|| BareError::new(bc.offset(), Issue::MissingBytes))?;
    bc.check(byte_len)?;
    Ok(byte_len)
}

macro_rules! typed_array {
    ($($ty:ident),*) => {
        paste! {
            $(
                pub(crate) fn [<read_ $ty _fixed_array_le>](
                    bc: &mut ByteCursor<'_>,
                    len: usize,
                ) -> Result<Vec<$ty>> {
                    let byte_len = check_elements::<$ty>(bc, len)?;
                    let bytes = bc.read(byte_len)?;
                    Ok(bytes
                        .chunks_exact(size_of::<$ty>())
                        .map(|chunk| {
                            let mut raw = [0u8; size_of::<$ty>()];
                            raw.copy_from_slice(chunk);
                            $ty::from_le_bytes(raw)
                        })
                        .collect())
                }

                pub(crate) fn [<read_ $ty _fixed_array_be>](
                    bc: &mut ByteCursor<'_>,
                    len: usize,
                ) -> Result<Vec<$ty>> {
                    check_elements::<$ty>(bc, len)?;
                    (0..len).map(|_| fixed::[<read_ $ty>](bc)).collect()
                }

                #[doc = concat!("Reads `len` `", stringify!($ty), "` elements.")]
                #[inline]
                pub fn [<read_ $ty _fixed_array>](
                    bc: &mut ByteCursor<'_>,
                    len: usize,
                ) -> Result<Vec<$ty>> {
                    if IS_LITTLE_ENDIAN_PLATFORM {
                        [<read_ $ty _fixed_array_le>](bc, len)
                    } else {
                        [<read_ $ty _fixed_array_be>](bc, len)
                    }
                }

                pub(crate) fn [<write_ $ty _fixed_array_le>](
                    bc: &mut ByteCursor<'_>,
                    x: &[$ty],
                ) -> Result<()> {
                    let byte_len = std::mem::size_of_val(x);
                    bc.reserve(byte_len)?;
                    let slot = bc.write_slot(byte_len);
                    for (chunk, item) in slot.chunks_exact_mut(size_of::<$ty>()).zip(x) {
                        chunk.copy_from_slice(&item.to_le_bytes());
                    }
                    Ok(())
                }

                pub(crate) fn [<write_ $ty _fixed_array_be>](
                    bc: &mut ByteCursor<'_>,
                    x: &[$ty],
                ) -> Result<()> {
                    bc.reserve(std::mem::size_of_val(x))?;
                    for &item in x {
                        fixed::[<write_ $ty>](bc, item)?;
                    }
                    Ok(())
                }

                #[doc = concat!("Writes the `", stringify!($ty), "` elements of `x` without a length prefix.")]
                #[inline]
                pub fn [<write_ $ty _fixed_array>](
                    bc: &mut ByteCursor<'_>,
                    x: &[$ty],
                ) -> Result<()> {
                    if IS_LITTLE_ENDIAN_PLATFORM {
                        [<write_ $ty _fixed_array_le>](bc, x)
                    } else {
                        [<write_ $ty _fixed_array_be>](bc, x)
                    }
                }

                #[doc = concat!("Reads a length-prefixed `", stringify!($ty), "` array.")]
                pub fn [<read_ $ty _array>](bc: &mut ByteCursor<'_>) -> Result<Vec<$ty>> {
                    let len = read_uint_safe32(bc)? as usize;
                    if len == 0 {
                        return Ok(Vec::new());
                    }
                    [<read_ $ty _fixed_array>](bc, len)
                }

                #[doc = concat!("Writes a length-prefixed `", stringify!($ty), "` array.")]
                pub fn [<write_ $ty _array>](bc: &mut ByteCursor<'_>, x: &[$ty]) -> Result<()> {
                    write_len(bc, x.len())?;
                    if x.is_empty() {
                        return Ok(());
                    }
                    [<write_ $ty _fixed_array>](bc, x)
                }
            )*
        }
    };
}

typed_array!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);
