//! One-shot MD5 over a complete message

use crate::Result;
use crate::error::InputFormatError;
use crate::hashing::BLOCK_SIZE;
use crate::hashing::compress::{STATE_SIZE, State, transform};
use crate::hashing::padding::pad_and_append_length;
use log::trace;
use std::fmt;
use std::str::FromStr;

/// Length of a digest rendered as hex
pub const DIGEST_HEX_LEN: usize = STATE_SIZE * 2;

/// MD5 of the empty message
pub const EMPTY_DIGEST_HEX: &str = "d41d8cd98f00b204e9800998ecf8427e";

/// A 128-bit MD5 digest: the little-endian bytes of the final chaining state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; STATE_SIZE]);

impl Digest {
    pub fn from_bytes(bytes: [u8; STATE_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; STATE_SIZE] {
        &self.0
    }

    /// Lowercase hex rendering, always 32 characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 32-character hex digest (either case)
    ///
    /// The length is checked before any character is looked at, so a short
    /// string reports its length rather than its first bad digit.
    pub fn from_hex(digest_hex: &str) -> Result<Self> {
        if digest_hex.len() != DIGEST_HEX_LEN {
            return Err(InputFormatError::invalid_digest_length(digest_hex.len()).into());
        }

        let mut bytes = [0u8; STATE_SIZE];
        hex::decode_to_slice(digest_hex, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// The chaining state this digest was read out of
    pub fn state(&self) -> State {
        State::from_bytes(&self.0)
    }
}

impl From<State> for Digest {
    fn from(state: State) -> Self {
        Self(state.to_bytes())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// Fold whole blocks into `state`, in order
///
/// `blocks` is expected to be block-aligned (the output of padding); trailing
/// bytes that do not fill a block are not hashed.
pub fn compress_blocks(state: State, blocks: &[u8]) -> State {
    let (chunks, rest) = blocks.as_chunks::<BLOCK_SIZE>();
    debug_assert!(rest.is_empty(), "{} trailing bytes", rest.len());

    trace!("Compressing {} block(s) from {:08x?}", chunks.len(), state.words());
    chunks.iter().fold(state, |state, block| transform(state, block))
}

/// MD5 digest of a complete message
pub fn digest(message: &[u8]) -> Digest {
    let padded = pad_and_append_length(message);
    Digest::from(compress_blocks(State::INITIAL, &padded))
}

/// MD5 of a complete message as 32 lowercase hex characters
pub fn hash(message: &[u8]) -> String {
    if message.is_empty() {
        return EMPTY_DIGEST_HEX.to_string();
    }
    digest(message).to_hex()
}
