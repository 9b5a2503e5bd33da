//! Length-extension forgery against `MD5(secret || message)` MACs
//!
//! An MD5 digest is the raw chaining state left after the last block, with
//! no finalization step that depends on the secret. Anyone holding
//! `MD5(secret || message)` can therefore load that state and keep hashing
//! past the original padding. The only thing the forger needs to know about
//! the secret is its length, because the glue padding and the final length
//! trailer depend on the total number of bytes hashed.
//!
//! A wrong secret length is not detected: the forgery is produced as usual
//! and simply fails to verify. Use [`forge_with_oracle`] to search over
//! candidate lengths when a verifier is available.

use crate::Result;
use crate::error::InputFormatError;
use crate::hashing::{
    Digest, State, append_length, compress_blocks, pad, pad_target_length, padding_bytes,
};
use log::{debug, trace};

/// A forged message tail together with the MAC it verifies under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forgery {
    /// Digest of `secret || message`
    pub digest: Digest,
    /// Original message, glue padding, and the extension
    pub message: Vec<u8>,
}

impl Forgery {
    pub fn digest_hex(&self) -> String {
        self.digest.to_hex()
    }
}

/// Convert a signed secret length from user input
pub fn checked_secret_len(secret_len: i64) -> Result<usize> {
    usize::try_from(secret_len)
        .map_err(|_| InputFormatError::negative_secret_length(secret_len).into())
}

/// Load the chaining state a published digest was read out of
pub fn recover_state(digest_hex: &str) -> Result<State> {
    let state = Digest::from_hex(digest_hex)?.state();
    debug!("Recovered chaining state {:08x?}", state.words());
    Ok(state)
}

/// Padding the victim's hash appended after `secret || message`
///
/// Marker byte, zero fill and the 64-bit length trailer, all determined by
/// the public total length `original_len + secret_len`.
pub fn glue_padding(original_len: usize, secret_len: usize) -> Vec<u8> {
    let total_len = original_len + secret_len;
    append_length(padding_bytes(total_len), total_len as u64)
}

/// Forge a message tail and MAC from a published `MD5(secret || original)`
///
/// Returns a message starting with `original` and ending with `extension`,
/// and the digest `MD5(secret || message)` for any secret of exactly
/// `secret_len` bytes.
///
/// # Errors
///
/// Fails with [`InputFormatError`] when `digest_hex` is not 32 hex
/// characters, or when `secret_len` is larger than the padded original
/// message. Both are checked before any block is compressed.
pub fn forge(
    digest_hex: &str,
    secret_len: usize,
    original: &[u8],
    extension: &[u8],
) -> Result<Forgery> {
    let state = recover_state(digest_hex)?;
    forge_from_state(state, secret_len, original, extension)
}

/// Try candidate secret lengths until `oracle` accepts a forgery
///
/// Candidates that fail validation are skipped. Returns the first accepted
/// length with its forgery, or `None` when every candidate was rejected.
/// A malformed digest is still an error, since no candidate could succeed.
pub fn forge_with_oracle<I, F>(
    digest_hex: &str,
    secret_lens: I,
    original: &[u8],
    extension: &[u8],
    mut oracle: F,
) -> Result<Option<(usize, Forgery)>>
where
    I: IntoIterator<Item = usize>,
    F: FnMut(&Forgery) -> bool,
{
    let state = recover_state(digest_hex)?;

    for secret_len in secret_lens {
        let forgery = match forge_from_state(state, secret_len, original, extension) {
            Ok(forgery) => forgery,
            Err(err) => {
                debug!("Skipping secret length {secret_len}: {err}");
                continue;
            }
        };

        if oracle(&forgery) {
            debug!("Oracle accepted forgery for secret length {secret_len}");
            return Ok(Some((secret_len, forgery)));
        }
        trace!("Oracle rejected forgery for secret length {secret_len}");
    }

    Ok(None)
}

fn forge_from_state(
    state: State,
    secret_len: usize,
    original: &[u8],
    extension: &[u8],
) -> Result<Forgery> {
    let padded_len = pad_target_length(original.len());
    if secret_len > padded_len {
        return Err(InputFormatError::secret_length_out_of_range(secret_len, padded_len).into());
    }

    let glue = glue_padding(original.len(), secret_len);
    let mut message = Vec::with_capacity(original.len() + glue.len() + extension.len());
    message.extend_from_slice(original);
    message.extend_from_slice(&glue);
    message.extend_from_slice(extension);

    // secret || original || glue is block-aligned, so the extension pads as
    // if it started a fresh message, except that the trailer counts every
    // byte the verifier will hash.
    let total_len = message.len() + secret_len;
    let continuation = append_length(pad(extension), total_len as u64);
    debug!(
        "Forging {} glue byte(s) and {} continuation byte(s) for secret length {secret_len}",
        glue.len(),
        continuation.len()
    );

    let digest = Digest::from(compress_blocks(state, &continuation));
    Ok(Forgery { digest, message })
}
