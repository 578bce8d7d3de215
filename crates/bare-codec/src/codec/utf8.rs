//! Hand-rolled UTF-8 transcoding for short strings.

use crate::error::Utf8Error;

/// UTF-8 byte length of `s`, computed code point by code point.
pub(crate) fn utf8_len(s: &str) -> usize {
    s.chars()
        .map(|c| match u32::from(c) {
            0..=0x7f => 1,
            0x80..=0x7ff => 2,
            0x800..=0xffff => 3,
            _ => 4,
        })
        .sum()
}

/// Encodes `s` into the front of `out` and returns the number of bytes
/// written. `out` must hold at least `utf8_len(s)` bytes.
pub(crate) fn encode_utf8(s: &str, out: &mut [u8]) -> usize {
    let mut i = 0;
    for c in s.chars() {
        let cp = u32::from(c);
        match cp {
            0..=0x7f => {
                out[i] = cp as u8;
                i += 1;
            }
            0x80..=0x7ff => {
                out[i] = 0xc0 | (cp >> 6) as u8;
                out[i + 1] = 0x80 | (cp & 0x3f) as u8;
                i += 2;
            }
            0x800..=0xffff => {
                out[i] = 0xe0 | (cp >> 12) as u8;
                out[i + 1] = 0x80 | ((cp >> 6) & 0x3f) as u8;
                out[i + 2] = 0x80 | (cp & 0x3f) as u8;
                i += 3;
            }
            _ => {
                out[i] = 0xf0 | (cp >> 18) as u8;
                out[i + 1] = 0x80 | ((cp >> 12) & 0x3f) as u8;
                out[i + 2] = 0x80 | ((cp >> 6) & 0x3f) as u8;
                out[i + 3] = 0x80 | (cp & 0x3f) as u8;
                i += 4;
            }
        }
    }
    i
}

/// Decodes `bytes` into a new string.
///
/// Rejects stray continuation bytes, lead bytes above `0xf7`, overlong
/// forms, surrogates, code points above `U+10FFFF` and sequences cut short
/// by the end of `bytes`.
pub(crate) fn decode_utf8(bytes: &[u8]) -> Result<String, Utf8Error> {
    let mut out = String::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let lead = bytes[i];
        if lead < 0x80 {
            out.push(char::from(lead));
            i += 1;
            continue;
        }
        let invalid = Utf8Error::Sequence { valid_up_to: i };
        let (len, min, init) = match lead {
            0xc0..=0xdf => (2, 0x80, lead & 0x1f),
            0xe0..=0xef => (3, 0x800, lead & 0x0f),
            0xf0..=0xf7 => (4, 0x1_0000, lead & 0x07),
            _ => return Err(invalid),
        };
        let Some(tail) = bytes.get(i + 1..i + len) else {
            return Err(invalid);
        };
        let mut cp = u32::from(init);
        for &byte in tail {
            if byte & 0xc0 != 0x80 {
                return Err(invalid);
            }
            cp = (cp << 6) | u32::from(byte & 0x3f);
        }
        if cp < min {
            return Err(invalid);
        }
        // surrogates and values above U+10FFFF
        match char::from_u32(cp) {
            Some(c) => out.push(c),
            None => return Err(invalid),
        }
        i += len;
    }
    Ok(out)
}
