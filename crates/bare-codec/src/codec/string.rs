//! UTF-8 strings.
//!
//! Short strings go through the hand-rolled transcoder in [`super::utf8`];
//! longer ones through `std`. The cut-off points come from the cursor's
//! [`Config`](crate::Config). Both paths produce and accept the same bytes.

use crate::cursor::ByteCursor;
use crate::error::{BareError, Result, Utf8Error};

use super::uint::{read_uint_safe32, write_len};
use super::utf8::{decode_utf8, encode_utf8, utf8_len};

/// Reads a length-prefixed UTF-8 string.
pub fn read_string(bc: &mut ByteCursor<'_>) -> Result<String> {
    let len = read_uint_safe32(bc)?;
    read_fixed_string(bc, len as usize)
}

/// Writes `x` behind a `uint_safe32` byte-length prefix.
pub fn write_string(bc: &mut ByteCursor<'_>, x: &str) -> Result<()> {
    if uses_hand_encoder(bc, x) {
        let len = utf8_len(x);
        write_len(bc, len)?;
        write_encoded(bc, x, len)
    } else {
        write_len(bc, x.len())?;
        bc.write(x.as_bytes())
    }
}

/// Reads `len` bytes of UTF-8.
///
/// Invalid UTF-8 fails with [`Issue::InvalidUtf8`](crate::Issue::InvalidUtf8)
/// at the first byte of the string, where the cursor is left.
pub fn read_fixed_string(bc: &mut ByteCursor<'_>, len: usize) -> Result<String> {
    let start = bc.offset();
    let threshold = bc.config().text_decoder_threshold() as usize;
    let bytes = bc.read(len)?;
    let decoded = if len < threshold {
        decode_utf8(bytes)
    } else {
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(Utf8Error::from)
    };
    decoded.map_err(|cause| {
        bc.set_offset(start);
        BareError::invalid_utf8(start, cause)
    })
}

/// Writes the UTF-8 bytes of `x` without a length prefix.
pub fn write_fixed_string(bc: &mut ByteCursor<'_>, x: &str) -> Result<()> {
    if uses_hand_encoder(bc, x) {
        write_encoded(bc, x, utf8_len(x))
    } else {
        bc.write(x.as_bytes())
    }
}

/// Does `x` have fewer chars than the encoder threshold?
fn uses_hand_encoder(bc: &ByteCursor<'_>, x: &str) -> bool {
    let threshold = bc.config().text_encoder_threshold() as usize;
    x.chars().take(threshold).count() < threshold
}

fn write_encoded(bc: &mut ByteCursor<'_>, x: &str, len: usize) -> Result<()> {
    bc.reserve(len)?;
    let written = encode_utf8(x, bc.write_slot(len));
    debug_assert_eq!(written, len);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::Issue;
    use hex_literal::hex;

    /// Forces both transcoders to the hand-rolled path (`true`) or to `std`.
    fn config(hand_rolled: bool) -> Config {
        let threshold = if hand_rolled { u32::MAX } else { 0 };
        Config::builder()
            .text_decoder_threshold(threshold)
            .text_encoder_threshold(threshold)
            .build()
            .unwrap()
    }

    fn encode(
        hand_rolled: bool,
        f: impl FnOnce(&mut ByteCursor<'static>) -> Result<()>,
    ) -> Vec<u8> {
        let mut bc = ByteCursor::with_config(config(hand_rolled));
        f(&mut bc).unwrap();
        bc.into_written()
    }

    #[test]
    fn read_string_values() {
        for hand_rolled in [true, false] {
            let bytes = hex!(
                "04 62617265
                 06 c3a9c3a0c3b9
                 15 f09f8e88f09f8f83f09f8fbfe2808de29982efb88f
                 1b e38193e38293e381abe381a1e381afe38081e4b896e7958cefbc81"
            );
            let mut bc = ByteCursor::new(&bytes[..], config(hand_rolled)).unwrap();
            assert_eq!(read_string(&mut bc).unwrap(), "bare");
            assert_eq!(read_string(&mut bc).unwrap(), "\u{e9}\u{e0}\u{f9}");
            assert_eq!(
                read_string(&mut bc).unwrap(),
                "\u{1f388}\u{1f3c3}\u{1f3ff}\u{200d}\u{2642}\u{fe0f}"
            );
            assert_eq!(
                read_string(&mut bc).unwrap(),
                "\u{3053}\u{3093}\u{306b}\u{3061}\u{306f}\u{3001}\u{4e16}\u{754c}\u{ff01}"
            );
            let err = read_string(&mut bc).unwrap_err();
            assert_eq!(err.issue(), Issue::MissingBytes);
        }
    }

    #[test]
    fn missing_chars() {
        let mut bc = ByteCursor::new(&[0x1][..], Config::default()).unwrap();
        let err = read_string(&mut bc).unwrap_err();
        assert_eq!((err.issue(), err.offset()), (Issue::MissingBytes, 1));
    }

    #[test]
    fn rejects_malformed_strings_on_both_paths() {
        let cases: [&[u8]; 11] = [
            &hex!("01 c080"),
            &hex!("01 80"),
            &hex!("01 f8"),
            &hex!("01 fc"),
            &hex!("01 fe"),
            &hex!("01 ff"),
            &hex!("02 c080"),
            &hex!("03 e08080"),
            &hex!("04 f0808080"),
            &hex!("04 f5808080"),
            &hex!("03 eda080"),
        ];
        for hand_rolled in [true, false] {
            for bytes in cases {
                let mut bc = ByteCursor::new(bytes, config(hand_rolled)).unwrap();
                let err = read_string(&mut bc).unwrap_err();
                assert_eq!(
                    (err.issue(), err.offset()),
                    (Issue::InvalidUtf8, 1),
                    "{bytes:02x?}"
                );
                assert_eq!(bc.offset(), 1);
                let cause = err.cause().unwrap();
                assert_eq!(
                    matches!(cause, Utf8Error::Sequence { .. }),
                    hand_rolled,
                    "{cause}"
                );
            }
        }
    }

    #[test]
    fn write_string_values() {
        for hand_rolled in [true, false] {
            assert_eq!(encode(hand_rolled, |bc| write_string(bc, "bare")), hex!("04 62617265"));
            assert_eq!(
                encode(hand_rolled, |bc| write_string(bc, "\u{e9}\u{e0}\u{f9}")),
                hex!("06 c3a9c3a0c3b9")
            );
            assert_eq!(
                encode(hand_rolled, |bc| write_string(
                    bc,
                    "\u{1f388}\u{1f3c3}\u{1f3ff}\u{200d}\u{2642}\u{fe0f}"
                )),
                hex!("15 f09f8e88f09f8f83f09f8fbfe2808de29982efb88f")
            );
            assert_eq!(encode(hand_rolled, |bc| write_string(bc, "")), [0]);
        }
    }

    #[test]
    fn long_string_has_two_byte_prefix() {
        let s = "\u{e9}".repeat(128);
        for hand_rolled in [true, false] {
            let bytes = encode(hand_rolled, |bc| write_string(bc, &s));
            assert_eq!(&bytes[..2], &hex!("8002"));
            assert_eq!(&bytes[2..], s.as_bytes());
        }
    }

    #[test]
    fn fixed_strings() {
        let long = "b".repeat(300);
        let mut bc = ByteCursor::new(long.as_bytes(), Config::default()).unwrap();
        assert_eq!(read_fixed_string(&mut bc, 300).unwrap(), long);

        let mut bc = ByteCursor::new(&b"bare"[..], Config::default()).unwrap();
        assert_eq!(read_fixed_string(&mut bc, 4).unwrap(), "bare");

        let mut bc = ByteCursor::default();
        write_fixed_string(&mut bc, &long).unwrap();
        assert_eq!(bc.written(), long.as_bytes());

        let mut bc = ByteCursor::default();
        write_fixed_string(&mut bc, "bare").unwrap();
        assert_eq!(bc.written(), b"bare");
    }

    #[test]
    fn default_thresholds_pick_path_by_size() {
        let config = Config::builder()
            .text_decoder_threshold(2)
            .text_encoder_threshold(2)
            .build()
            .unwrap();
        // one byte: hand-rolled, two bytes: std
        let mut bc = ByteCursor::new(&hex!("01 80 02 c080")[..], config).unwrap();
        let err = read_string(&mut bc).unwrap_err();
        assert!(matches!(err.cause(), Some(Utf8Error::Sequence { .. })));
        bc.set_offset(2);
        let err = read_string(&mut bc).unwrap_err();
        assert!(matches!(err.cause(), Some(Utf8Error::Native(_))));
        assert_eq!(err.offset(), 3);
    }
}
