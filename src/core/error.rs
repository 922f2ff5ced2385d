//! Error types for PASETO and PASERK operations.
//!
//! This module provides a unified error type for the whole engine.
//! Messages for authentication and signature failures are intentionally
//! vague: the variant says *that* verification failed, never why.

use thiserror::Error;

/// Errors that can occur when working with PASETO tokens or PASERK keys.
#[derive(Debug, Error)]
pub enum PasetoError {
    /// A token or PASERK string is structurally malformed (field count,
    /// base64 content, padding, short or empty payload, non-UTF-8 message).
    #[error("Parse error: {0}")]
    Parse(&'static str),

    /// An underlying cryptographic primitive rejected its input.
    /// Intentionally vague for security.
    #[error("Cryptographic operation failed")]
    Crypto,

    /// Authentication tag verification failed.
    /// Intentionally vague for security.
    #[error("Invalid authentication tag")]
    InvalidAuthenticator,

    /// Signature verification failed.
    /// Intentionally vague for security.
    #[error("Invalid signature")]
    InvalidSignature,

    /// The key's version or purpose does not match the attempted operation.
    /// Raised before any secret material is touched.
    #[error("Key version or purpose does not match the operation")]
    Lucidity,

    /// A wrap, unwrap, seal, or unseal was attempted across PASERK versions,
    /// or on a key kind the operation has no PASERK type for.
    #[error("Key type does not match the wrapping operation")]
    IncorrectKeyType,

    /// Key material has an invalid shape or internal relationship
    /// (wrong length, out-of-range scalar, seed/public mismatch).
    #[error("Invalid key material")]
    InvalidKeyPair,

    /// The PASERK version tag or wrap protocol is not recognized.
    #[error("Unknown PASERK protocol: {0}")]
    UnknownProtocol(String),

    /// The PASERK string names no key-recovery operation, or the supplied
    /// credential cannot resolve one for it.
    #[error("PASERK operation cannot be resolved")]
    UnknownOperation,

    /// The token header does not map to any supported version and purpose.
    #[error("Unsupported token header: {0}")]
    UnsupportedToken(String),
}

/// Result type alias for PASETO and PASERK operations.
pub type PasetoResult<T> = Result<T, PasetoError>;
