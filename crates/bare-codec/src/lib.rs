//! BARE (Binary Application Record Encoding) primitive codecs.
//!
//! This crate provides the encoders and decoders that higher-level BARE
//! struct, union and map codecs are built from, all operating on a
//! growable [`ByteCursor`].
//!
//! # Overview
//!
//! - [`ByteCursor`] - Byte buffer plus read/write offset and growth policy
//! - [`Config`] - Buffer limits and UTF-8 transcoder thresholds
//! - [`BareError`] - Malformed input or exhausted buffer, with the offending offset
//! - `read_*` / `write_*` - One pair per BARE primitive
//!
//! # Example
//!
//! ```
//! use bare_codec::{decode, encode, read_string, read_uint, write_string, write_uint, Config};
//!
//! let bytes = encode(Config::default(), |bc| {
//!     write_uint(bc, 0x1337)?;
//!     write_string(bc, "bare")
//! })
//! .unwrap();
//! assert_eq!(bytes, [0xb7, 0x26, 0x04, b'b', b'a', b'r', b'e']);
//!
//! let (n, s) = decode(&bytes, Config::default(), |bc| {
//!     Ok((read_uint(bc)?, read_string(bc)?))
//! })
//! .unwrap();
//! assert_eq!((n, s.as_str()), (0x1337, "bare"));
//! ```
//!
//! # Range assertions
//!
//! Encoders whose argument type is wider than the wire domain (the `*_safe`
//! family, `write_uint_safe32`) check the range with `debug_assert!`. Release
//! builds skip the check and truncate the value to the wire domain instead.

#![warn(missing_docs)]

mod codec;
mod config;
mod cursor;
mod error;

pub mod constants;
pub mod validator;

pub use codec::*;
pub use config::{Config, ConfigBuilder, ConfigError};
pub use cursor::ByteCursor;
pub use error::{BareError, Issue, Result, Utf8Error};

/// Runs `f` against a fresh cursor built from `config` and returns the
/// written bytes.
pub fn encode<F>(config: Config, f: F) -> Result<Vec<u8>>
where
    F: FnOnce(&mut ByteCursor<'static>) -> Result<()>,
{
    let mut bc = ByteCursor::with_config(config);
    f(&mut bc)?;
    Ok(bc.into_written())
}

/// Runs `f` against a cursor over `bytes`.
///
/// Trailing bytes left unread by `f` are not an error.
pub fn decode<'a, T, F>(bytes: &'a [u8], config: Config, f: F) -> Result<T>
where
    F: FnOnce(&mut ByteCursor<'a>) -> Result<T>,
{
    let mut bc = ByteCursor::new(bytes, config)?;
    f(&mut bc)
}
