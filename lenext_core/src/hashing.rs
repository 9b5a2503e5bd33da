//! MD5 implemented from first principles
//!
//! The pieces are kept separate because the length-extension forger needs
//! each of them on its own: the padding rule, the block transform and the
//! byte/word codec.

pub mod codec;
pub mod compress;
pub mod digest;
pub mod padding;

/// Size of one MD5 block in bytes
pub const BLOCK_SIZE: usize = 64;

pub use codec::{decode_block, decode_words, encode_words};
pub use compress::{State, transform};
pub use digest::{DIGEST_HEX_LEN, Digest, EMPTY_DIGEST_HEX, compress_blocks, digest, hash};
pub use padding::{append_length, pad, pad_and_append_length, pad_target_length, padding_bytes};
