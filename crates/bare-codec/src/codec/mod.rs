//! Encoders and decoders of the BARE primitive types.
//!
//! Every decoder takes a [`ByteCursor`](crate::ByteCursor) and returns the
//! value or a [`BareError`](crate::BareError). Every encoder takes a cursor
//! and a value; it only fails when the buffer cannot grow any further.

mod array;
mod data;
mod fixed;
mod int;
mod string;
mod uint;
mod utf8;

pub use array::*;
pub use data::{read_data, read_fixed_data, write_data, write_fixed_data};
pub use fixed::{
    read_bool, read_f32, read_f64, read_i16, read_i32, read_i64, read_i64_safe, read_i8,
    read_u16, read_u32, read_u64, read_u64_safe, read_u8, write_bool, write_f32, write_f64,
    write_i16, write_i32, write_i64, write_i64_safe, write_i8, write_u16, write_u32, write_u64,
    write_u64_safe, write_u8,
};
pub use int::{read_int, read_int_safe, write_int, write_int_safe};
pub use string::{read_fixed_string, read_string, write_fixed_string, write_string};
pub use uint::{
    read_uint, read_uint_safe, read_uint_safe32, write_uint, write_uint_safe, write_uint_safe32,
};
