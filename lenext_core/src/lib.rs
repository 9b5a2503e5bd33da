//! MD5 Length-Extension Core Library
//!
//! MD5 implemented from first principles, and a length-extension forgery
//! that turns a published `MD5(secret || message)` into a valid MAC for
//! `message || glue || extension` without learning the secret.
//!
//! Every function here is pure and synchronous: output depends only on the
//! arguments, and all buffers are owned by the call.
//!
//! This is a demonstration of why secret-prefix MACs are broken. It is not
//! constant time and must not be used to protect anything.

pub mod error;
pub mod forgery;
pub mod hashing;

// Re-export main types
pub use error::{Error, InputFormatError, Result};
pub use forgery::{Forgery, checked_secret_len, forge, forge_with_oracle, glue_padding};
pub use hashing::{Digest, State, hash};
