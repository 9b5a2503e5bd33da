//! Secret-prefix MAC oracle
//!
//! Plays the victim service: it signs and verifies messages with
//! `MD5(secret || message)` and never reveals the secret.

use lenext_core::hash;
use std::cell::Cell;

/// Keyed MAC oracle holding a secret the attacker never sees
///
/// # Examples
///
/// ```rust
/// use lenext_test_utils::KeyedMacOracle;
///
/// let oracle = KeyedMacOracle::new(b"mysecretkey");
/// let mac = oracle.sign(b"my message");
///
/// assert!(oracle.verify(b"my message", &mac));
/// assert_eq!(oracle.verification_count(), 1);
/// ```
#[derive(Debug)]
pub struct KeyedMacOracle {
    secret: Vec<u8>,
    verifications: Cell<usize>,
}

impl KeyedMacOracle {
    /// Create an oracle keyed with `secret`
    pub fn new(secret: &[u8]) -> Self {
        Self {
            secret: secret.to_vec(),
            verifications: Cell::new(0),
        }
    }

    /// Length of the secret, the one fact an attacker is assumed to guess
    pub fn secret_len(&self) -> usize {
        self.secret.len()
    }

    /// MAC of `message` as 32 lowercase hex characters
    pub fn sign(&self, message: &[u8]) -> String {
        hash(&[self.secret.as_slice(), message].concat())
    }

    /// Check a MAC, counting how many times the oracle has been queried
    pub fn verify(&self, message: &[u8], mac: &str) -> bool {
        self.verifications.set(self.verifications.get() + 1);
        self.sign(message).eq_ignore_ascii_case(mac)
    }

    /// Number of calls to [`verify`](Self::verify) so far
    pub fn verification_count(&self) -> usize {
        self.verifications.get()
    }
}
