//! Symmetric keys for `local` (encrypted) tokens.
//!
//! A local key is 32 bytes of uniformly random material in both versions.
//! The version recorded at construction decides which cipher suite consumes
//! it and is checked by every operation the key is handed to.
//!
//! Serialized form: `k{3,4}.local.{base64url(key)}`

use core::fmt::{self, Debug, Display};

use base64::prelude::*;
use zeroize::Zeroize;

use crate::core::error::{PasetoError, PasetoResult};
use crate::core::keys::{KeyId, KeyKind};
use crate::core::paserk::Paserk;
use crate::core::version::Version;

/// A 256-bit symmetric key for encrypting and decrypting `local` tokens.
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
/// use pasetok::{LocalKey, Version};
///
/// let key = LocalKey::from_slice(Version::V4, &[0x70; 32])?;
/// assert_eq!(key.version(), Version::V4);
/// assert!(key.to_paserk().starts_with("k4.local."));
/// # Ok::<(), pasetok::PasetoError>(())
/// ```
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct LocalKey {
    material: [u8; 32],
    #[zeroize(skip)]
    version: Version,
}

impl LocalKey {
    /// Generates a fresh key from the operating system CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`PasetoError::Crypto`] if the CSPRNG fails.
    pub fn generate(version: Version) -> PasetoResult<Self> {
        let mut material = [0u8; 32];
        crate::core::fill_random(&mut material)?;
        Ok(Self { material, version })
    }

    /// Creates a key from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PasetoError::InvalidKeyPair`] if `bytes` is not exactly
    /// 32 bytes long.
    pub fn from_slice(version: Version, bytes: &[u8]) -> PasetoResult<Self> {
        let material: [u8; 32] = bytes
            .try_into()
            .map_err(|_| PasetoError::InvalidKeyPair)?;
        Ok(Self { material, version })
    }

    /// Parses a key from its raw PASERK form (`k{3,4}.local.{data}`).
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
                kind: KeyKind::Local,
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

    /// Returns a reference to the raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.material
    }

    /// Serializes the key as a PASERK string.
    #[must_use]
    pub fn to_paserk(&self) -> String {
        self.to_string()
    }

    /// Computes the key's identifier (`k{3,4}.lid.{digest}`).
    #[must_use]
    pub fn id(&self) -> KeyId {
        KeyId::compute(self.version, KeyKind::Local, &self.to_paserk())
    }
}

// =============================================================================
// Display (serialization to PASERK string)
// =============================================================================

impl Display for LocalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = BASE64_URL_SAFE_NO_PAD.encode(self.material);
        write!(f, "{}.local.{}", self.version.paserk_prefix(), encoded)
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for LocalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalKey")
            .field("version", &self.version)
            .field("material", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl PartialEq for LocalKey {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.version == other.version && bool::from(self.material.ct_eq(&other.material))
    }
}

impl Eq for LocalKey {}
