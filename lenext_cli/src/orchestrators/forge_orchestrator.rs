//! Forge command orchestrator
//!
//! Turns the raw `--mac --msg --keylen --ext --out` arguments into a forged
//! message on disk and a report for the output formatters.

use crate::error::{CliError, CliResult, ErrorContext};
use crate::output::ForgeryReport;
use lenext_core::{checked_secret_len, forge};
use log::{debug, info};
use std::fs;
use std::path::PathBuf;

/// Arguments for one forgery, as given on the command line
#[derive(Debug, Clone)]
pub struct ForgeOptions {
    /// Known MAC of `secret || msg`, hex encoded
    pub mac: String,
    /// Original message as text
    pub msg: String,
    /// Guessed secret length; signed so negative input is reported, not rejected by clap
    pub keylen: i64,
    /// Text to append
    pub ext: String,
    /// Destination for the raw forged message
    pub out: PathBuf,
}

/// Forge a MAC and write the forged message to `options.out`
///
/// Nothing is written when the MAC or key length is malformed.
pub fn run_forge(options: &ForgeOptions) -> CliResult<ForgeryReport> {
    let keylen = checked_secret_len(options.keylen)?;
    debug!(
        "Forging with keylen {keylen}, {} message bytes, {} extension bytes",
        options.msg.len(),
        options.ext.len()
    );

    let forgery = forge(
        &options.mac,
        keylen,
        options.msg.as_bytes(),
        options.ext.as_bytes(),
    )?;

    let out = options.out.display().to_string();
    fs::write(&options.out, &forgery.message).map_err(|e| {
        CliError::from_io_error(e, &out).with_context("mac", &forgery.digest_hex())
    })?;
    info!("Wrote {} forged bytes to {out}", forgery.message.len());

    Ok(ForgeryReport::new(&forgery, keylen, &options.out))
}
