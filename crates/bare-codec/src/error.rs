//! Decode and buffer-capacity error type.

use std::fmt;

use thiserror::Error;

/// Result alias used by every codec primitive.
pub type Result<T, E = BareError> = std::result::Result<T, E>;

/// What went wrong while decoding, or while growing the write buffer.
///
/// The `Display` output of each variant is the issue tag reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Issue {
    /// Fewer bytes remain than the primitive requires.
    MissingBytes,
    /// A varint is not the shortest encoding of its value.
    NonCanonical,
    /// A decoded value does not fit the requested integer domain.
    TooLargeNumber,
    /// The buffer would exceed `Config::max_buffer_length`.
    TooLargeBuffer,
    /// A string's bytes are not valid UTF-8.
    InvalidUtf8,
    /// A bool byte other than 0 or 1.
    InvalidBool,
}

impl Issue {
    /// The message printed after the offset, e.g. `"missing bytes"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Issue::MissingBytes => "missing bytes",
            Issue::NonCanonical => "must be canonical",
            Issue::TooLargeNumber => "too large number",
            Issue::TooLargeBuffer => "too large buffer",
            Issue::InvalidUtf8 => "invalid UTF-8 string",
            Issue::InvalidBool => "a bool must be equal to 0 or 1",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Underlying UTF-8 transcoding failure carried as the cause of
/// [`Issue::InvalidUtf8`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Utf8Error {
    /// Rejected by the hand-rolled decoder; `valid_up_to` is relative to
    /// the first byte of the string.
    #[error("invalid UTF-8 sequence after {valid_up_to} valid bytes")]
    Sequence {
        /// Bytes accepted before the offending sequence.
        valid_up_to: usize,
    },
    /// Rejected by `std::str::from_utf8`.
    #[error(transparent)]
    Native(#[from] std::str::Utf8Error),
}

/// Error raised by decode paths on malformed input, and by encode paths
/// when the buffer cannot grow any further.
///
/// `offset` is the byte position where the failure was detected. For
/// multi-byte sequences it points at the first byte of the sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("(byte:{offset}) {issue}")]
pub struct BareError {
    offset: usize,
    issue: Issue,
    #[source]
    cause: Option<Utf8Error>,
}

impl BareError {
    /// Creates an error with no underlying cause.
    pub fn new(offset: usize, issue: Issue) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(offset, issue = issue.as_str(), "bare error");
        Self {
            offset,
            issue,
            cause: None,
        }
    }

    /// Creates an [`Issue::InvalidUtf8`] error wrapping the transcoder failure.
    pub fn invalid_utf8(offset: usize, cause: Utf8Error) -> Self {
        let mut err = Self::new(offset, Issue::InvalidUtf8);
        err.cause = Some(cause);
        err
    }

    /// Byte position the failure is reported at.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// What went wrong.
    pub fn issue(&self) -> Issue {
        self.issue
    }

    /// The transcoder failure behind an [`Issue::InvalidUtf8`], if any.
    pub fn cause(&self) -> Option<&Utf8Error> {
        self.cause.as_ref()
    }
}
