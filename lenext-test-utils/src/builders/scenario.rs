//! Forgery scenario builder

use crate::mocks::KeyedMacOracle;

/// Inputs for one forgery attempt, plus the oracle that can check it
#[derive(Debug)]
pub struct ForgeryScenario {
    pub oracle: KeyedMacOracle,
    pub message: Vec<u8>,
    pub extension: Vec<u8>,
    /// MAC of the original message, as published by the oracle
    pub mac: String,
}

impl ForgeryScenario {
    /// The classic example: a short key and a short tampering suffix
    pub fn classic() -> Self {
        ForgeryScenarioBuilder::new().build()
    }

    pub fn secret_len(&self) -> usize {
        self.oracle.secret_len()
    }
}

/// Builder for creating forgery scenarios
pub struct ForgeryScenarioBuilder {
    secret: Option<Vec<u8>>,
    message: Option<Vec<u8>>,
    extension: Option<Vec<u8>>,
}

impl Default for ForgeryScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ForgeryScenarioBuilder {
    /// Create a new scenario builder
    pub fn new() -> Self {
        Self {
            secret: None,
            message: None,
            extension: None,
        }
    }

    /// Set the oracle's secret
    pub fn with_secret(mut self, secret: &[u8]) -> Self {
        self.secret = Some(secret.to_vec());
        self
    }

    /// Use a secret of `len` bytes with fixed filler content
    pub fn with_secret_len(mut self, len: usize) -> Self {
        self.secret = Some((0..len).map(|i| b'k' ^ (i as u8)).collect());
        self
    }

    /// Set the original message
    pub fn with_message(mut self, message: &[u8]) -> Self {
        self.message = Some(message.to_vec());
        self
    }

    /// Set the attacker's extension
    pub fn with_extension(mut self, extension: &[u8]) -> Self {
        self.extension = Some(extension.to_vec());
        self
    }

    /// Build the scenario and publish the original MAC
    pub fn build(self) -> ForgeryScenario {
        let secret = self.secret.unwrap_or_else(|| b"mysecretkey".to_vec());
        let oracle = KeyedMacOracle::new(&secret);
        let message = self.message.unwrap_or_else(|| b"my message".to_vec());
        let extension = self
            .extension
            .unwrap_or_else(|| b"this has been tampered with".to_vec());
        let mac = oracle.sign(&message);

        ForgeryScenario {
            oracle,
            message,
            extension,
            mac,
        }
    }
}
