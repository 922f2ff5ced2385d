//! Core PASETO and PASERK types and operations.
//!
//! This module provides the fundamental building blocks:
//!
//! - [`version`] - The closed set of protocol versions (v3, v4)
//! - [`error`] - Error types for token and key operations
//! - [`pae`] - Pre-Authentication Encoding
//! - [`keys`] - Key types (local, secret, public) and identifiers
//! - [`token`] - Token parsing, encryption, and signing
//! - [`paserk`] - PASERK serialization, parsing, and deserialization
//! - [`operations`] - PASERK operations (IDs, wrapping, password wrapping, sealing)

pub mod error;
pub mod keys;
pub mod operations;
pub mod pae;
pub mod paserk;
pub mod token;
pub mod version;

// Re-export commonly used items
pub use error::{PasetoError, PasetoResult};
pub use version::Version;

use rand_core::{OsRng, TryRngCore};

/// Fills a buffer from the operating system CSPRNG.
pub(crate) fn fill_random(buf: &mut [u8]) -> PasetoResult<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|_| PasetoError::Crypto)
}
