//! Asymmetric secret keys for signing `public` tokens.
//!
//! The stored material always carries the public half alongside the private
//! half, so [`SecretKey::public_key`] never fails:
//!
//! - v3: 48-byte P-384 scalar followed by the 49-byte compressed SEC1 point
//! - v4: 32-byte Ed25519 seed followed by the 32-byte public point
//!
//! Only the v4 public half is part of the serialized form. The v3 PASERK
//! form is the bare 48-byte scalar; the point is recomputed when parsing.
//!
//! Serialized form: `k{3,4}.secret.{base64url(key)}`

use core::fmt::{self, Debug, Display};

use base64::prelude::*;
use zeroize::Zeroize;

use crate::core::error::{PasetoError, PasetoResult};
use crate::core::keys::{KeyId, KeyKind, PublicKey};
use crate::core::paserk::Paserk;
use crate::core::version::Version;

/// A signing key for issuing `public` tokens.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - Debug output redacts the key
/// - Equality comparison uses constant-time comparison
///
/// # Example
///
/// ```rust
/// use pasetok::{SecretKey, Version};
///
/// let key = SecretKey::generate(Version::V4)?;
/// let public = key.public_key();
/// assert_eq!(public.version(), Version::V4);
/// # Ok::<(), pasetok::PasetoError>(())
/// ```
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretKey {
    /// Private half followed by public half:
    /// v3: scalar(48) || point(49), v4: seed(32) || point(32).
    material: Vec<u8>,
    #[zeroize(skip)]
    version: Version,
}

impl SecretKey {
    /// Generates a fresh signing key from the operating system CSPRNG.
    ///
    /// v3 scalars are drawn by rejection sampling until the candidate lies
    /// in the valid P-384 scalar range.
    ///
    /// # Errors
    ///
    /// Returns [`PasetoError::Crypto`] if the CSPRNG fails.
    pub fn generate(version: Version) -> PasetoResult<Self> {
        match version {
            Version::V3 => loop {
                let mut candidate = [0u8; 48];
                crate::core::fill_random(&mut candidate)?;
                if let Ok(key) = Self::from_slice(version, &candidate) {
                    candidate.zeroize();
                    return Ok(key);
                }
            },
            Version::V4 => {
                let mut seed = [0u8; 32];
                crate::core::fill_random(&mut seed)?;
                let signing_key = ed25519_dalek::SigningKey::from_bytes(&seed);

                let mut material = Vec::with_capacity(64);
                material.extend_from_slice(&seed);
                material.extend_from_slice(signing_key.verifying_key().as_bytes());
                seed.zeroize();
                Ok(Self { material, version })
            }
        }
    }

    /// Creates a signing key from its serialized bytes.
    ///
    /// Accepts the 48-byte scalar for v3 or the 64-byte seed-plus-point
    /// pair for v4. The public half is recomputed (v3) or cross-checked
    /// against the stored point (v4).
    ///
    /// # Errors
    ///
    /// Returns [`PasetoError::InvalidKeyPair`] if the length is wrong, the
    /// scalar is out of range, or the stored point does not belong to the
    /// seed.
    pub fn from_slice(version: Version, bytes: &[u8]) -> PasetoResult<Self> {
        match version {
            Version::V3 => {
                use p384::elliptic_curve::sec1::ToEncodedPoint;

                let scalar: &[u8; 48] = bytes
                    .try_into()
                    .map_err(|_| PasetoError::InvalidKeyPair)?;
                let signing_key = p384::SecretKey::from_slice(scalar)
                    .map_err(|_| PasetoError::InvalidKeyPair)?;
                let point = signing_key.public_key().to_encoded_point(true);

                let mut material = Vec::with_capacity(97);
                material.extend_from_slice(scalar);
                material.extend_from_slice(point.as_bytes());
                Ok(Self { material, version })
            }
            Version::V4 => {
                let pair: &[u8; 64] = bytes
                    .try_into()
                    .map_err(|_| PasetoError::InvalidKeyPair)?;
                let (seed, point) = pair.split_at(32);
                let seed: &[u8; 32] = seed.try_into().map_err(|_| PasetoError::InvalidKeyPair)?;

                let signing_key = ed25519_dalek::SigningKey::from_bytes(seed);
                if signing_key.verifying_key().as_bytes() != point {
                    return Err(PasetoError::InvalidKeyPair);
                }
                Ok(Self {
                    material: pair.to_vec(),
                    version,
                })
            }
        }
    }

    /// Parses a key from its raw PASERK form (`k{3,4}.secret.{data}`).
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
                kind: KeyKind::Secret,
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

    /// Returns the serialized key bytes: the 48-byte scalar (v3) or the
    /// 64-byte seed-plus-point pair (v4).
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self.version {
            Version::V3 => &self.material[..48],
            Version::V4 => &self.material,
        }
    }

    /// Returns the corresponding verification key.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        let point = match self.version {
            Version::V3 => &self.material[48..],
            Version::V4 => &self.material[32..],
        };
        PublicKey::from_raw(self.version, point.to_vec())
    }

    /// Serializes the key as a PASERK string.
    #[must_use]
    pub fn to_paserk(&self) -> String {
        self.to_string()
    }

    /// Computes the key's identifier (`k{3,4}.sid.{digest}`).
    #[must_use]
    pub fn id(&self) -> KeyId {
        KeyId::compute(self.version, KeyKind::Secret, &self.to_paserk())
    }
}

// =============================================================================
// Display (serialization to PASERK string)
// =============================================================================

impl Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = BASE64_URL_SAFE_NO_PAD.encode(self.as_bytes());
        write!(f, "{}.secret.{}", self.version.paserk_prefix(), encoded)
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("version", &self.version)
            .field("material", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.version == other.version
            && bool::from(self.material.as_slice().ct_eq(other.material.as_slice()))
    }
}

impl Eq for SecretKey {}
