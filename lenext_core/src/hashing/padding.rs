//! MD5 message padding
//!
//! A padded message is the original bytes, a single `0x80` marker, zero fill
//! up to 56 mod 64, and the original length in bits as a little-endian `u64`.
//! Padding always adds at least the marker byte, so a message whose length is
//! already 56 mod 64 grows by a whole block.

use crate::hashing::BLOCK_SIZE;

/// Size of the bit-length trailer in bytes
pub const LENGTH_TRAILER_SIZE: usize = 8;

/// First padding byte: a single set bit followed by seven zero bits
const PADDING_MARKER: u8 = 0x80;

/// Length a message of `len` bytes is padded to before the trailer is added
///
/// This is the smallest value of at least `len + 9` that is 56 mod 64.
pub fn pad_target_length(len: usize) -> usize {
    (len + 1 + LENGTH_TRAILER_SIZE).div_ceil(BLOCK_SIZE) * BLOCK_SIZE - LENGTH_TRAILER_SIZE
}

/// The marker byte and zero fill that [`pad`] appends to a `len`-byte message
pub fn padding_bytes(len: usize) -> Vec<u8> {
    let fill = pad_target_length(len) - len;
    let mut padding = Vec::with_capacity(fill + LENGTH_TRAILER_SIZE);
    padding.push(PADDING_MARKER);
    padding.resize(fill, 0x00);
    padding
}

/// Append the marker byte and zero fill up to [`pad_target_length`]
pub fn pad(message: &[u8]) -> Vec<u8> {
    let mut padded = Vec::with_capacity(pad_target_length(message.len()) + LENGTH_TRAILER_SIZE);
    padded.extend_from_slice(message);
    padded.extend_from_slice(&padding_bytes(message.len()));
    padded
}

/// Append the bit length of a `byte_len`-byte message, wrapping modulo 2^64
pub fn append_length(mut message: Vec<u8>, byte_len: u64) -> Vec<u8> {
    let bit_len = byte_len.wrapping_mul(8);
    message.extend_from_slice(&bit_len.to_le_bytes());
    message
}

/// Pad a message and append its length, producing whole blocks
pub fn pad_and_append_length(message: &[u8]) -> Vec<u8> {
    append_length(pad(message), message.len() as u64)
}
