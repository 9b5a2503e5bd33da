mod formatters;

pub use formatters::{JsonFormatter, TextFormatter};

use anyhow::Result;
use lenext_core::Forgery;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Forged MAC alone on stdout
    Text,
    /// Forged MAC, key length and forged message as a JSON object
    Json,
}

/// What a successful forgery run reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForgeryReport {
    /// Forged MAC, 32 lowercase hex characters
    pub mac: String,
    pub keylen: usize,
    /// Forged message tail, hex encoded since it contains raw padding bytes
    pub message_hex: String,
    /// File the raw forged message was written to
    pub out: PathBuf,
}

impl ForgeryReport {
    pub fn new(forgery: &Forgery, keylen: usize, out: &Path) -> Self {
        Self {
            mac: forgery.digest_hex(),
            keylen,
            message_hex: hex::encode(&forgery.message),
            out: out.to_path_buf(),
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    fn format(&self, report: &ForgeryReport) -> Result<String>;
}

/// Create a formatter based on output format
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_color)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
