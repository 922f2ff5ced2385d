//! Asymmetric public keys for verifying `public` tokens.
//!
//! - v3: 49-byte compressed SEC1 P-384 point
//! - v4: 32-byte Ed25519 point
//!
//! Serialized form: `k{3,4}.public.{base64url(key)}`

use core::fmt::{self, Debug, Display};

use base64::prelude::*;

use crate::core::error::{PasetoError, PasetoResult};
use crate::core::keys::{KeyId, KeyKind};
use crate::core::paserk::Paserk;
use crate::core::version::Version;

/// A verification key for `public` tokens.
///
/// Public keys are not secret: they are not zeroized and their Debug output
/// shows the key length.
///
/// # Example
///
/// ```rust
/// use pasetok::{PublicKey, Version};
///
/// let public = PublicKey::from_paserk(
///     "k4.public.Hrnbu7wEfAP9cGBOAHHwmH4Wsot1ciXBHwBBXQ4gsaI",
/// )?;
/// assert_eq!(public.version(), Version::V4);
/// assert_eq!(public.as_bytes().len(), 32);
/// # Ok::<(), pasetok::PasetoError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    material: Vec<u8>,
    version: Version,
}

impl PublicKey {
    /// Creates a verification key from raw point bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PasetoError::InvalidKeyPair`] if the length is wrong or
    /// the bytes do not decode to a valid curve point.
    pub fn from_slice(version: Version, bytes: &[u8]) -> PasetoResult<Self> {
        match version {
            Version::V3 => {
                if bytes.len() != 49 {
                    return Err(PasetoError::InvalidKeyPair);
                }
                p384::PublicKey::from_sec1_bytes(bytes)
                    .map_err(|_| PasetoError::InvalidKeyPair)?;
            }
            Version::V4 => {
                let point: &[u8; 32] = bytes
                    .try_into()
                    .map_err(|_| PasetoError::InvalidKeyPair)?;
                ed25519_dalek::VerifyingKey::from_bytes(point)
                    .map_err(|_| PasetoError::InvalidKeyPair)?;
            }
        }
        Ok(Self {
            material: bytes.to_vec(),
            version,
        })
    }

    /// Wraps point bytes that were derived from an already validated key.
    pub(crate) fn from_raw(version: Version, material: Vec<u8>) -> Self {
        Self { material, version }
    }

    /// Parses a key from its raw PASERK form (`k{3,4}.public.{data}`).
    ///
    /// # Errors
    ///
    /// Returns [`PasetoError::Lucidity`] if the string encodes a key of a
    /// different type, or [`PasetoError::UnknownOperation`] if it encodes a
    /// wrapped, password-protected, or sealed key.
    pub fn from_paserk(paserk: &str) -> PasetoResult<Self> {
        match &paserk.parse::<Paserk>()? {
            Paserk::Raw {
                version,
                kind: KeyKind::Public,
                data,
            } => Self::from_slice(*version, data),
            Paserk::Raw { .. } => Err(PasetoError::Lucidity),
            _ => Err(PasetoError::UnknownOperation),
        }
    }

    /// The version this key belongs to.
    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// Returns the raw point bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.material
    }

    /// Serializes the key as a PASERK string.
    #[must_use]
    pub fn to_paserk(&self) -> String {
        self.to_string()
    }

    /// Computes the key's identifier (`k{3,4}.pid.{digest}`).
    #[must_use]
    pub fn id(&self) -> KeyId {
        KeyId::compute(self.version, KeyKind::Public, &self.to_paserk())
    }
}

// =============================================================================
// Display (serialization to PASERK string)
// =============================================================================

impl Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = BASE64_URL_SAFE_NO_PAD.encode(&self.material);
        write!(f, "{}.public.{}", self.version.paserk_prefix(), encoded)
    }
}

// =============================================================================
// Debug
// =============================================================================

impl Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("version", &self.version)
            .field("key_len", &self.material.len())
            .finish()
    }
}
