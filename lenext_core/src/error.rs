//! Error types for the MD5 length-extension core library
//!
//! Core functions only ever fail on malformed structural input. Modular
//! arithmetic is total, and a wrong secret length is not detectable here, so
//! neither has an error variant.

use thiserror::Error;

pub mod input_format;

pub use self::input_format::InputFormatError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the core library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed digest, word buffer or secret length
    #[error(transparent)]
    InputFormat(#[from] InputFormatError),
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Self::InputFormat(InputFormatError::from(err))
    }
}
