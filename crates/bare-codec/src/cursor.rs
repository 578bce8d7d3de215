//! Byte cursor shared by every encode and decode primitive.

use std::borrow::Cow;

use crate::config::Config;
use crate::error::{BareError, Issue, Result};

/// A read/write offset over a byte buffer, plus the buffer growth policy.
///
/// Decoding usually borrows the input; encoding usually owns a buffer
/// allocated by [`ByteCursor::with_config`]. A cursor over borrowed bytes
/// copies them into an owned buffer on the first write, so caller memory is
/// never mutated.
///
/// ```txt
/// |                 bytes                   |
/// |<------ offset ------>|
/// |<---------------- config.max_buffer_length ---------------->|
/// ```
///
/// # Example
///
/// ```
/// use bare_codec::{ByteCursor, Config};
///
/// let mut bc = ByteCursor::with_config(Config::default());
/// bare_codec::write_u8(&mut bc, 0x2a).unwrap();
/// assert_eq!(bc.written(), &[0x2a]);
///
/// let mut bc = ByteCursor::new(&[0x2a][..], Config::default()).unwrap();
/// assert_eq!(bare_codec::read_u8(&mut bc).unwrap(), 0x2a);
/// ```
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    bytes: Cow<'a, [u8]>,
    /// Next byte to read or write. Always `<= bytes.len()`.
    offset: usize,
    config: Config,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor at offset 0 over `bytes`.
    ///
    /// Fails with [`Issue::TooLargeBuffer`] if `bytes` is longer than
    /// `config.max_buffer_length()`.
    pub fn new(bytes: impl Into<Cow<'a, [u8]>>, config: Config) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.len() > config.max_buffer_length() as usize {
            return Err(BareError::new(0, Issue::TooLargeBuffer));
        }
        Ok(Self {
            bytes,
            offset: 0,
            config,
        })
    }

    /// Position of the next read or write.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Moves the cursor. `offset` is clamped to the buffer length.
    pub fn set_offset(&mut self, offset: usize) {
        debug_assert!(offset <= self.bytes.len());
        self.offset = offset.min(self.bytes.len());
    }

    /// Length of the readable/writable window.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Is the window empty?
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bytes left between the offset and the end of the window.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    /// Limits and thresholds this cursor was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The whole window, including bytes past the offset.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bytes `[0, offset)`, i.e. what has been written so far.
    pub fn written(&self) -> &[u8] {
        &self.bytes[..self.offset]
    }

    /// Consumes the cursor and returns the bytes written so far.
    pub fn into_written(self) -> Vec<u8> {
        let mut bytes = self.bytes.into_owned();
        bytes.truncate(self.offset);
        bytes
    }

    /// Consumes the cursor and returns its whole window.
    pub fn into_bytes(self) -> Cow<'a, [u8]> {
        self.bytes
    }

    /// Checks that `n` bytes are available for reading.
    ///
    /// Fails with [`Issue::MissingBytes`] at the current offset otherwise.
    #[inline]
    pub fn check(&self, n: usize) -> Result<()> {
        if n > self.bytes.len() - self.offset {
            return Err(BareError::new(self.offset, Issue::MissingBytes));
        }
        Ok(())
    }

    /// Makes room for writing `n` bytes, growing the buffer if needed.
    ///
    /// Fails with [`Issue::TooLargeBuffer`] if the buffer would exceed
    /// `config.max_buffer_length()`.
    #[inline]
    pub fn reserve(&mut self, n: usize) -> Result<()> {
        if n > self.bytes.len() - self.offset {
            self.grow(self.offset.saturating_add(n))?;
        }
        Ok(())
    }

    /// Grows the window to at least `min_len` bytes, preserving its content.
    ///
    /// An owned buffer with enough spare capacity is resized in place;
    /// otherwise a new allocation receives a copy of the current window.
    fn grow(&mut self, min_len: usize) -> Result<()> {
        let max_len = self.config.max_buffer_length() as usize;
        if min_len > max_len {
            return Err(BareError::new(0, Issue::TooLargeBuffer));
        }
        let target = min_len.saturating_mul(2).min(max_len);
        let old_len = self.bytes.len();
        match &mut self.bytes {
            Cow::Owned(vec) if vec.capacity() >= min_len => {
                let new_len = target.min(vec.capacity());
                #[cfg(feature = "tracing")]
                tracing::trace!(old_len, new_len, "grow buffer in place");
                vec.resize(new_len, 0);
            }
            Cow::Owned(vec) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(old_len, new_len = target, "reallocate buffer");
                vec.resize(target, 0);
            }
            Cow::Borrowed(slice) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(old_len, new_len = target, "copy borrowed buffer");
                let mut vec = Vec::with_capacity(target);
                vec.extend_from_slice(slice);
                vec.resize(target, 0);
                self.bytes = Cow::Owned(vec);
            }
        }
        debug_assert!(self.bytes.len() >= min_len && old_len <= self.bytes.len());
        Ok(())
    }

    /// Returns a view of the next `n` bytes and advances past them.
    ///
    /// The view aliases the cursor's buffer: callers must copy or consume it
    /// before mutating the cursor again.
    #[inline]
    pub(crate) fn read(&mut self, n: usize) -> Result<&[u8]> {
        self.check(n)?;
        let start = self.offset;
        self.offset += n;
        Ok(&self.bytes[start..self.offset])
    }

    #[inline]
    pub(crate) fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.check(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.bytes[self.offset..self.offset + N]);
        self.offset += N;
        Ok(out)
    }

    /// Writes `bytes` at the offset and advances past them.
    #[inline]
    pub(crate) fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.reserve(bytes.len())?;
        let start = self.offset;
        self.offset += bytes.len();
        self.bytes.to_mut()[start..self.offset].copy_from_slice(bytes);
        Ok(())
    }

    /// Mutable view of the next `n` bytes, which must already be reserved.
    /// Advances past them.
    #[inline]
    pub(crate) fn write_slot(&mut self, n: usize) -> &mut [u8] {
        let start = self.offset;
        self.offset += n;
        &mut self.bytes.to_mut()[start..start + n]
    }
}

impl ByteCursor<'static> {
    /// Creates an encoding cursor over a zeroed owned buffer of
    /// `config.initial_buffer_length()` bytes.
    pub fn with_config(config: Config) -> Self {
        Self {
            bytes: Cow::Owned(vec![0; config.initial_buffer_length() as usize]),
            offset: 0,
            config,
        }
    }
}

impl Default for ByteCursor<'static> {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}
