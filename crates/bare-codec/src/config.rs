//! Immutable cursor policy.

use thiserror::Error;

use crate::constants::{
    INITIAL_BUFFER_LENGTH, MAX_BUFFER_LENGTH, TEXT_DECODER_THRESHOLD, TEXT_ENCODER_THRESHOLD,
};

/// Buffer and transcoding policy shared by any number of cursors.
///
/// All lengths are `u32`. `initial_buffer_length <= max_buffer_length`
/// always holds; use [`Config::builder`] to build a non-default policy.
///
/// # Example
///
/// ```
/// use bare_codec::Config;
///
/// let config = Config::builder()
///     .initial_buffer_length(0)
///     .max_buffer_length(3)
///     .build()
///     .unwrap();
/// assert_eq!(config.max_buffer_length(), 3);
/// assert_eq!(config.text_decoder_threshold(), 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    initial_buffer_length: u32,
    max_buffer_length: u32,
    text_decoder_threshold: u32,
    text_encoder_threshold: u32,
}

impl Config {
    /// The values in [`crate::constants`].
    pub const DEFAULT: Config = Config {
        initial_buffer_length: INITIAL_BUFFER_LENGTH,
        max_buffer_length: MAX_BUFFER_LENGTH,
        text_decoder_threshold: TEXT_DECODER_THRESHOLD,
        text_encoder_threshold: TEXT_ENCODER_THRESHOLD,
    };

    /// Starts from the defaults; unset fields keep their default value.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Length of the buffer allocated by [`ByteCursor::with_config`](crate::ByteCursor::with_config).
    pub fn initial_buffer_length(&self) -> u32 {
        self.initial_buffer_length
    }

    /// Upper bound of a cursor's buffer length.
    pub fn max_buffer_length(&self) -> u32 {
        self.max_buffer_length
    }

    /// Byte length below which strings are decoded by hand.
    pub fn text_decoder_threshold(&self) -> u32 {
        self.text_decoder_threshold
    }

    /// Char count below which strings are encoded by hand.
    pub fn text_encoder_threshold(&self) -> u32 {
        self.text_encoder_threshold
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Rejected [`ConfigBuilder`] settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `initial_buffer_length` is greater than `max_buffer_length`.
    #[error(
        "initialBufferLength ({initial}) must be lower than or equal to maxBufferLength ({max})"
    )]
    InitialExceedsMax {
        /// Requested initial buffer length.
        initial: u32,
        /// Requested maximum buffer length.
        max: u32,
    },
}

/// Builder for [`Config`]; unset fields keep their default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigBuilder {
    initial_buffer_length: Option<u32>,
    max_buffer_length: Option<u32>,
    text_decoder_threshold: Option<u32>,
    text_encoder_threshold: Option<u32>,
}

impl ConfigBuilder {
    /// Sets [`Config::initial_buffer_length`].
    pub fn initial_buffer_length(mut self, len: u32) -> Self {
        self.initial_buffer_length = Some(len);
        self
    }

    /// Sets [`Config::max_buffer_length`].
    pub fn max_buffer_length(mut self, len: u32) -> Self {
        self.max_buffer_length = Some(len);
        self
    }

    /// Sets [`Config::text_decoder_threshold`]. `0` always uses `std`.
    pub fn text_decoder_threshold(mut self, threshold: u32) -> Self {
        self.text_decoder_threshold = Some(threshold);
        self
    }

    /// Sets [`Config::text_encoder_threshold`]. `0` always uses `std`.
    pub fn text_encoder_threshold(mut self, threshold: u32) -> Self {
        self.text_encoder_threshold = Some(threshold);
        self
    }

    /// Fails if the initial length exceeds the maximum.
    pub fn build(self) -> Result<Config, ConfigError> {
        let default = Config::DEFAULT;
        let config = Config {
            initial_buffer_length: self
                .initial_buffer_length
                .unwrap_or(default.initial_buffer_length),
            max_buffer_length: self.max_buffer_length.unwrap_or(default.max_buffer_length),
            text_decoder_threshold: self
                .text_decoder_threshold
                .unwrap_or(default.text_decoder_threshold),
            text_encoder_threshold: self
                .text_encoder_threshold
                .unwrap_or(default.text_encoder_threshold),
        };
        if config.initial_buffer_length > config.max_buffer_length {
            return Err(ConfigError::InitialExceedsMax {
                initial: config.initial_buffer_length,
                max: config.max_buffer_length,
            });
        }
        Ok(config)
    }
}
