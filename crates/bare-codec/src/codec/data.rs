//! Opaque byte sequences.

use crate::cursor::ByteCursor;
use crate::error::Result;

use super::uint::{read_uint_safe32, write_len};

/// Reads `len` bytes into a fresh vector.
pub fn read_fixed_data(bc: &mut ByteCursor<'_>, len: usize) -> Result<Vec<u8>> {
    bc.read(len).map(<[u8]>::to_vec)
}

/// Writes `x` verbatim. Its length is part of the schema, not the wire.
pub fn write_fixed_data(bc: &mut ByteCursor<'_>, x: &[u8]) -> Result<()> {
    bc.write(x)
}

/// Reads a length-prefixed byte sequence.
pub fn read_data(bc: &mut ByteCursor<'_>) -> Result<Vec<u8>> {
    let len = read_uint_safe32(bc)?;
    read_fixed_data(bc, len as usize)
}

/// Writes `x` behind a `uint_safe32` length prefix.
pub fn write_data(bc: &mut ByteCursor<'_>, x: &[u8]) -> Result<()> {
    write_len(bc, x.len())?;
    write_fixed_data(bc, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::Issue;
    use hex_literal::hex;

    #[test]
    fn data_is_length_prefixed() {
        let mut bc = ByteCursor::default();
        write_data(&mut bc, &[1, 2, 3]).unwrap();
        write_data(&mut bc, &[]).unwrap();
        assert_eq!(bc.written(), &hex!("03 010203 00"));

        let bytes = bc.into_written();
        let mut bc = ByteCursor::new(&bytes[..], Config::default()).unwrap();
        assert_eq!(read_data(&mut bc).unwrap(), [1, 2, 3]);
        assert!(read_data(&mut bc).unwrap().is_empty());
        assert_eq!(bc.remaining(), 0);
    }

    #[test]
    fn decoded_data_is_a_copy() {
        let bytes = hex!("02 aabb");
        let mut bc = ByteCursor::new(&bytes[..], Config::default()).unwrap();
        let mut data = read_data(&mut bc).unwrap();
        data[0] = 0;
        assert_eq!(bytes, hex!("02 aabb"));
    }

    #[test]
    fn fixed_data_reads_exactly_len_bytes() {
        let bytes = hex!("010203");
        let mut bc = ByteCursor::new(&bytes[..], Config::default()).unwrap();
        assert_eq!(read_fixed_data(&mut bc, 2).unwrap(), [1, 2]);
        let err = read_fixed_data(&mut bc, 2).unwrap_err();
        assert_eq!((err.issue(), err.offset()), (Issue::MissingBytes, 2));
        assert!(read_fixed_data(&mut bc, 0).unwrap().is_empty());
    }

    #[test]
    fn truncated_payload_reports_missing_bytes_after_prefix() {
        let bytes = hex!("05 0102");
        let mut bc = ByteCursor::new(&bytes[..], Config::default()).unwrap();
        let err = read_data(&mut bc).unwrap_err();
        assert_eq!((err.issue(), err.offset()), (Issue::MissingBytes, 1));
    }

    #[test]
    fn oversized_blob_fails_before_its_prefix() {
        let config = Config::builder()
            .initial_buffer_length(0)
            .max_buffer_length(4)
            .build()
            .unwrap();
        let mut bc = ByteCursor::with_config(config);
        let err = write_data(&mut bc, &[0xab; 10]).unwrap_err();
        assert_eq!((err.issue(), err.offset()), (Issue::TooLargeBuffer, 0));
        assert_eq!(bc.offset(), 0);
        assert!(bc.written().is_empty());
    }
}
