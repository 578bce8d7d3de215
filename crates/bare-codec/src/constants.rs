//! Wire-format limits and defaults.

/// Default length of a freshly allocated write buffer.
pub const INITIAL_BUFFER_LENGTH: u32 = 1024;
/// Default upper bound of any cursor buffer (32 MiB).
pub const MAX_BUFFER_LENGTH: u32 = 32 * 1024 * 1024;

/// Strings with fewer bytes than this are decoded by the hand-rolled decoder.
pub const TEXT_DECODER_THRESHOLD: u32 = 256;
/// Strings with fewer chars than this are encoded by the hand-rolled encoder.
pub const TEXT_ENCODER_THRESHOLD: u32 = 256;

/// Maximum byte count of a full-width `uint` / `int` varint (9 * 7 + 1 bits).
pub const UINT_MAX_BYTE_COUNT: usize = 10;
/// Maximum byte count of a `uint_safe` / `int_safe` varint (7 * 7 + 4 or 5 bits).
pub const INT_SAFE_MAX_BYTE_COUNT: usize = 8;
/// Maximum byte count of a `uint_safe32` varint (4 * 7 + 4 bits).
pub const UINT_SAFE32_MAX_BYTE_COUNT: usize = 5;

/// Largest integer exactly representable by an IEEE-754 double: 2^53 - 1.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;
/// Smallest integer exactly representable by an IEEE-754 double: -(2^53 - 1).
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

/// Host byte order, fixed at compile time.
pub const IS_LITTLE_ENDIAN_PLATFORM: bool = cfg!(target_endian = "little");
