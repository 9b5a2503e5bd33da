//! Little-endian conversion between bytes and 32-bit words

use crate::Result;
use crate::error::InputFormatError;
use crate::hashing::BLOCK_SIZE;

/// Number of 32-bit words in one 64-byte block
pub const WORDS_PER_BLOCK: usize = BLOCK_SIZE / 4;

/// Decode a byte buffer into 32-bit words, least-significant byte first
pub fn decode_words(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.len() % 4 != 0 {
        return Err(InputFormatError::misaligned_words(bytes.len()).into());
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|word| u32::from_le_bytes([word[0], word[1], word[2], word[3]]))
        .collect())
}

/// Encode 32-bit words into bytes, least-significant byte first
pub fn encode_words(words: &[u32]) -> Vec<u8> {
    let mut output = Vec::with_capacity(words.len() * 4);
    for word in words {
        output.extend_from_slice(&word.to_le_bytes());
    }
    output
}

/// Decode one block into its 16 message words
pub fn decode_block(block: &[u8; BLOCK_SIZE]) -> [u32; WORDS_PER_BLOCK] {
    let mut words = [0u32; WORDS_PER_BLOCK];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    words
}
