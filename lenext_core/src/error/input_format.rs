//! Input format error types

use thiserror::Error;

/// Structural problems with caller-supplied input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputFormatError {
    /// Digest hex string is not exactly 32 characters
    #[error("Invalid digest length: expected 32 hex characters, got {length}")]
    InvalidDigestLength { length: usize },

    /// Digest contains a character outside [0-9a-fA-F]
    #[error("Invalid hex digit '{character}' at position {position} in digest")]
    InvalidHexDigit { position: usize, character: char },

    /// Secret length given as a negative number
    #[error("Invalid secret length {secret_len}: must not be negative")]
    NegativeSecretLength { secret_len: i64 },

    /// Secret length cannot be reconciled with the padded original message
    #[error(
        "Secret length {secret_len} exceeds padded original message length of {padded_len} bytes"
    )]
    SecretLengthOutOfRange { secret_len: usize, padded_len: usize },

    /// Byte buffer cannot be split into whole 32-bit words
    #[error("Cannot decode {length} bytes into 32-bit words: length must be a multiple of 4")]
    MisalignedWords { length: usize },
}

impl InputFormatError {
    /// Create an invalid digest length error
    pub fn invalid_digest_length(length: usize) -> Self {
        Self::InvalidDigestLength { length }
    }

    /// Create an invalid hex digit error
    pub fn invalid_hex_digit(position: usize, character: char) -> Self {
        Self::InvalidHexDigit {
            position,
            character,
        }
    }

    /// Create a negative secret length error
    pub fn negative_secret_length(secret_len: i64) -> Self {
        Self::NegativeSecretLength { secret_len }
    }

    /// Create a secret length out of range error
    pub fn secret_length_out_of_range(secret_len: usize, padded_len: usize) -> Self {
        Self::SecretLengthOutOfRange {
            secret_len,
            padded_len,
        }
    }

    /// Create a misaligned words error
    pub fn misaligned_words(length: usize) -> Self {
        Self::MisalignedWords { length }
    }

    /// Check if this error concerns the digest string itself
    pub fn is_digest_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDigestLength { .. } | Self::InvalidHexDigit { .. }
        )
    }
}

impl From<hex::FromHexError> for InputFormatError {
    fn from(err: hex::FromHexError) -> Self {
        match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                Self::invalid_hex_digit(index, c)
            }
            // Length is checked before decoding, so these only show up for
            // callers decoding arbitrary strings.
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                Self::invalid_digest_length(0)
            }
        }
    }
}
