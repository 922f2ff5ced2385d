//! Protocol versions and their primitive bindings.
//!
//! Exactly two versions exist:
//!
//! | Version | Token | PASERK | Signature | MAC | Cipher | Password KDF |
//! |---------|-------|--------|-----------|-----|--------|--------------|
//! | [`Version::V3`] | `v3` | `k3` | ECDSA P-384 | HMAC-SHA384 | AES-256-CTR | PBKDF2 |
//! | [`Version::V4`] | `v4` | `k4` | Ed25519 | keyed BLAKE2b | XChaCha20 | Argon2id |
//!
//! A `Version` is a pure lookup table: every method is a constant function
//! over the variant, and every key records its version at construction.
//! Operation modules select primitives with an exhaustive `match`, so a new
//! version is a compile error at each dispatch site until it is handled.

use core::fmt::{self, Display};

/// A PASETO/PASERK protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    /// NIST suite: P-384, HMAC-SHA384, AES-256-CTR, HKDF/PBKDF2.
    V3,
    /// Sodium suite: Ed25519/X25519, BLAKE2b, XChaCha20, Argon2id.
    V4,
}

impl Version {
    /// Token header prefix (`"v3"` or `"v4"`).
    #[must_use]
    pub const fn token_prefix(self) -> &'static str {
        match self {
            Version::V3 => "v3",
            Version::V4 => "v4",
        }
    }

    /// PASERK header prefix (`"k3"` or `"k4"`).
    #[must_use]
    pub const fn paserk_prefix(self) -> &'static str {
        match self {
            Version::V3 => "k3",
            Version::V4 => "k4",
        }
    }

    /// Serialized secret-key width: 48-byte P-384 scalar for v3, or
    /// 64-byte seed-plus-public-key pair for v4.
    #[must_use]
    pub const fn secret_key_len(self) -> usize {
        match self {
            Version::V3 => 48,
            Version::V4 => 64,
        }
    }

    /// Public-key width: 49-byte compressed SEC1 point for v3, or
    /// 32-byte Ed25519 point for v4.
    #[must_use]
    pub const fn public_key_len(self) -> usize {
        match self {
            Version::V3 => 49,
            Version::V4 => 32,
        }
    }

    /// Signature width appended to public-purpose payloads.
    #[must_use]
    pub const fn signature_len(self) -> usize {
        match self {
            Version::V3 => 96,
            Version::V4 => 64,
        }
    }

    /// Authentication tag width (HMAC-SHA384 or BLAKE2b-256).
    #[must_use]
    pub const fn tag_len(self) -> usize {
        match self {
            Version::V3 => 48,
            Version::V4 => 32,
        }
    }

    /// Nonce width for token encryption and PIE key wrapping.
    #[must_use]
    pub const fn nonce_len(self) -> usize {
        match self {
            Version::V3 | Version::V4 => 32,
        }
    }

    /// Looks up a version by its token prefix.
    pub(crate) fn from_token_prefix(prefix: &str) -> Option<Version> {
        match prefix {
            "v3" => Some(Version::V3),
            "v4" => Some(Version::V4),
            _ => None,
        }
    }

    /// Looks up a version by its PASERK prefix.
    pub(crate) fn from_paserk_prefix(prefix: &str) -> Option<Version> {
        match prefix {
            "k3" => Some(Version::V3),
            "k4" => Some(Version::V4),
            _ => None,
        }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token_prefix())
    }
}
