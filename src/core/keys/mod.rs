//! Key types for PASETO tokens and PASERK serialization.
//!
//! Three concrete key types exist, each recording its [`Version`] at
//! construction:
//!
//! - [`LocalKey`] - 32-byte symmetric key for `local` tokens
//! - [`SecretKey`] - asymmetric signing key for `public` tokens
//! - [`PublicKey`] - asymmetric verification key for `public` tokens
//!
//! [`Key`] is the closed sum of the three, used wherever an operation
//! accepts or returns a key whose type is decided at runtime (key
//! wrapping, PASERK deserialization). [`KeyId`] is the hashed identifier
//! (`lid`/`pid`/`sid`) safe to log and embed in token footers.

mod local;
mod public;
mod secret;

pub use local::LocalKey;
pub use public::PublicKey;
pub use secret::SecretKey;

use core::fmt::{self, Debug, Display};
use core::str::FromStr;

use base64::prelude::*;

use crate::core::error::{PasetoError, PasetoResult};
use crate::core::operations::id::compute_id;
use crate::core::version::Version;

// =============================================================================
// KeyKind
// =============================================================================

/// The three PASERK key types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// Symmetric encryption key (`local`, identified by `lid`).
    Local,
    /// Asymmetric signing key (`secret`, identified by `sid`).
    Secret,
    /// Asymmetric verification key (`public`, identified by `pid`).
    Public,
}

impl KeyKind {
    /// The raw PASERK type tag (`"local"`, `"secret"`, `"public"`).
    #[must_use]
    pub const fn type_tag(self) -> &'static str {
        match self {
            KeyKind::Local => "local",
            KeyKind::Secret => "secret",
            KeyKind::Public => "public",
        }
    }

    /// The identifier type tag (`"lid"`, `"sid"`, `"pid"`).
    #[must_use]
    pub const fn id_tag(self) -> &'static str {
        match self {
            KeyKind::Local => "lid",
            KeyKind::Secret => "sid",
            KeyKind::Public => "pid",
        }
    }

    /// Serialized key width for this kind under `version`.
    pub(crate) const fn raw_len(self, version: Version) -> usize {
        match self {
            KeyKind::Local => 32,
            KeyKind::Secret => version.secret_key_len(),
            KeyKind::Public => version.public_key_len(),
        }
    }

    pub(crate) fn from_type_tag(tag: &str) -> Option<KeyKind> {
        match tag {
            "local" => Some(KeyKind::Local),
            "secret" => Some(KeyKind::Secret),
            "public" => Some(KeyKind::Public),
            _ => None,
        }
    }

    pub(crate) fn from_id_tag(tag: &str) -> Option<KeyKind> {
        match tag {
            "lid" => Some(KeyKind::Local),
            "sid" => Some(KeyKind::Secret),
            "pid" => Some(KeyKind::Public),
            _ => None,
        }
    }
}

// =============================================================================
// Key (closed sum of the three key types)
// =============================================================================

/// Any PASETO key, carrying its concrete type at runtime.
///
/// Produced by PASERK deserialization and consumed by key-management
/// operations that work across key types (wrapping, password wrapping).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A symmetric encryption key.
    Local(LocalKey),
    /// An asymmetric signing key.
    Secret(SecretKey),
    /// An asymmetric verification key.
    Public(PublicKey),
}

impl Key {
    /// The version this key belongs to.
    #[must_use]
    pub const fn version(&self) -> Version {
        match self {
            Key::Local(key) => key.version(),
            Key::Secret(key) => key.version(),
            Key::Public(key) => key.version(),
        }
    }

    /// The key's PASERK type.
    #[must_use]
    pub const fn kind(&self) -> KeyKind {
        match self {
            Key::Local(_) => KeyKind::Local,
            Key::Secret(_) => KeyKind::Secret,
            Key::Public(_) => KeyKind::Public,
        }
    }

    /// Serializes the key as a raw PASERK string.
    #[must_use]
    pub fn to_paserk(&self) -> String {
        match self {
            Key::Local(key) => key.to_paserk(),
            Key::Secret(key) => key.to_paserk(),
            Key::Public(key) => key.to_paserk(),
        }
    }

    /// Computes the key's identifier.
    #[must_use]
    pub fn id(&self) -> KeyId {
        match self {
            Key::Local(key) => key.id(),
            Key::Secret(key) => key.id(),
            Key::Public(key) => key.id(),
        }
    }

    /// Returns the inner local key, if this is one.
    #[must_use]
    pub const fn as_local(&self) -> Option<&LocalKey> {
        match self {
            Key::Local(key) => Some(key),
            _ => None,
        }
    }

    /// Returns the inner secret key, if this is one.
    #[must_use]
    pub const fn as_secret(&self) -> Option<&SecretKey> {
        match self {
            Key::Secret(key) => Some(key),
            _ => None,
        }
    }

    /// Returns the inner public key, if this is one.
    #[must_use]
    pub const fn as_public(&self) -> Option<&PublicKey> {
        match self {
            Key::Public(key) => Some(key),
            _ => None,
        }
    }
}

impl From<LocalKey> for Key {
    fn from(key: LocalKey) -> Self {
        Key::Local(key)
    }
}

impl From<SecretKey> for Key {
    fn from(key: SecretKey) -> Self {
        Key::Secret(key)
    }
}

impl From<PublicKey> for Key {
    fn from(key: PublicKey) -> Self {
        Key::Public(key)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_paserk())
    }
}

// =============================================================================
// KeyId
// =============================================================================

/// A hashed key identifier (`k{3,4}.{lid,pid,sid}.{base64url(digest)}`).
///
/// The digest is 33 bytes: BLAKE2b-264 for v4, truncated SHA-384 for v3,
/// computed over the identifier header concatenated with the key's full
/// PASERK string. Identifiers reveal nothing about the key material and
/// are safe to log or embed in token footers.
///
/// # Example
///
/// ```rust
/// use pasetok::{LocalKey, Version};
///
/// let key = LocalKey::from_slice(Version::V4, &[0x70; 32])?;
/// let id = key.id();
/// assert!(id.to_string().starts_with("k4.lid."));
/// # Ok::<(), pasetok::PasetoError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyId {
    version: Version,
    kind: KeyKind,
    digest: [u8; 33],
}

impl KeyId {
    pub(crate) fn compute(version: Version, kind: KeyKind, paserk: &str) -> Self {
        let header = format!("{}.{}.", version.paserk_prefix(), kind.id_tag());
        let digest = compute_id(version, &header, paserk);
        Self {
            version,
            kind,
            digest,
        }
    }

    /// The version of the identified key.
    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// The type of the identified key.
    #[must_use]
    pub const fn kind(&self) -> KeyKind {
        self.kind
    }

    /// The raw 33-byte digest.
    #[must_use]
    pub const fn digest(&self) -> &[u8; 33] {
        &self.digest
    }
}

impl Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = BASE64_URL_SAFE_NO_PAD.encode(self.digest);
        write!(
            f,
            "{}.{}.{}",
            self.version.paserk_prefix(),
            self.kind.id_tag(),
            encoded
        )
    }
}

impl Debug for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyId({self})")
    }
}

impl FromStr for KeyId {
    type Err = PasetoError;

    fn from_str(s: &str) -> PasetoResult<Self> {
        let mut parts = s.splitn(3, '.');
        let (Some(version_tag), Some(id_tag), Some(data)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(PasetoError::Parse("malformed PASERK identifier"));
        };

        let version = Version::from_paserk_prefix(version_tag)
            .ok_or_else(|| PasetoError::UnknownProtocol(version_tag.to_string()))?;
        let kind = KeyKind::from_id_tag(id_tag).ok_or(PasetoError::UnknownOperation)?;

        let decoded = BASE64_URL_SAFE_NO_PAD
            .decode(data)
            .map_err(|_| PasetoError::Parse("invalid base64 in PASERK identifier"))?;
        let digest: [u8; 33] = decoded
            .try_into()
            .map_err(|_| PasetoError::Parse("PASERK identifier digest must be 33 bytes"))?;

        Ok(Self {
            version,
            kind,
            digest,
        })
    }
}
