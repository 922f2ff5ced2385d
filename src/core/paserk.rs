//! PASERK string grammar, parsing, and deserialization.
//!
//! A PASERK string is dot-separated:
//!
//! ```text
//! k{3,4}.{local,public,secret}.{data}            raw key
//! k{3,4}.{local,secret}-wrap.{protocol}.{data}   key wrapped by another key
//! k{3,4}.{local,secret}-pw.{data}                key wrapped by a password
//! k{3,4}.seal.{data}                             key sealed to a public key
//! ```
//!
//! [`Paserk`] is the parsed form: the grammar is decided entirely by the
//! header, before any cryptography runs. Turning a parsed string back into
//! key material goes through [`from_paserk`] with the matching
//! [`Credential`].
//!
//! Identifier strings (`lid`/`pid`/`sid`) name keys rather than carry
//! them; feeding one to the key parser fails with
//! [`PasetoError::UnknownOperation`]. They parse via
//! [`KeyId`](crate::core::keys::KeyId) instead.

use core::fmt::{self, Debug, Display};
use core::str::FromStr;

use base64::prelude::*;
use zeroize::Zeroize;

use crate::core::error::{PasetoError, PasetoResult};
use crate::core::keys::{Key, KeyKind, LocalKey, PublicKey, SecretKey};
use crate::core::operations::{pbkw, pke, wrap};
use crate::core::version::Version;

// =============================================================================
// Grammar components
// =============================================================================

/// Key-wrapping protocols admitted in `*-wrap` strings.
///
/// PIE (PASERK Intended Encryption) is the only standardized protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapProtocol {
    /// The `pie` wrapping protocol.
    Pie,
}

impl WrapProtocol {
    /// The protocol tag used in the PASERK header.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            WrapProtocol::Pie => "pie",
        }
    }

    fn from_tag(tag: &str) -> Option<WrapProtocol> {
        match tag {
            "pie" => Some(WrapProtocol::Pie),
            _ => None,
        }
    }
}

/// Which key type a wrapped or password-protected string carries.
///
/// Only symmetric and signing keys can be wrapped; public keys are not
/// secret and have no wrapped form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapKind {
    /// A wrapped symmetric key (`local-wrap`, `local-pw`).
    Local,
    /// A wrapped signing key (`secret-wrap`, `secret-pw`).
    Secret,
}

impl WrapKind {
    /// The type tag prefix used in the PASERK header.
    #[must_use]
    pub const fn type_tag(self) -> &'static str {
        match self {
            WrapKind::Local => "local",
            WrapKind::Secret => "secret",
        }
    }
}

pub(crate) fn wrap_header(version: Version, kind: WrapKind, protocol: WrapProtocol) -> String {
    format!(
        "{}.{}-wrap.{}.",
        version.paserk_prefix(),
        kind.type_tag(),
        protocol.tag()
    )
}

pub(crate) fn pw_header(version: Version, kind: WrapKind) -> String {
    format!("{}.{}-pw.", version.paserk_prefix(), kind.type_tag())
}

pub(crate) fn seal_header(version: Version) -> String {
    format!("{}.seal.", version.paserk_prefix())
}

// =============================================================================
// Paserk (parsed string)
// =============================================================================

/// A parsed PASERK string.
///
/// Variants mirror the grammar. `data` is the decoded payload: raw key
/// material for [`Paserk::Raw`], ciphertext and associated bytes for the
/// protected forms. No cryptography has run yet; protected payloads are
/// validated when a credential is presented.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub enum Paserk {
    /// `k{3,4}.{local,public,secret}.{data}`
    Raw {
        /// The version tag.
        #[zeroize(skip)]
        version: Version,
        /// The key type.
        #[zeroize(skip)]
        kind: KeyKind,
        /// The raw key material.
        data: Vec<u8>,
    },
    /// `k{3,4}.{local,secret}-wrap.{protocol}.{data}`
    Wrapped {
        /// The version tag.
        #[zeroize(skip)]
        version: Version,
        /// The wrapped key type.
        #[zeroize(skip)]
        kind: WrapKind,
        /// The wrapping protocol.
        #[zeroize(skip)]
        protocol: WrapProtocol,
        /// Tag, nonce, and ciphertext.
        data: Vec<u8>,
    },
    /// `k{3,4}.{local,secret}-pw.{data}`
    PasswordProtected {
        /// The version tag.
        #[zeroize(skip)]
        version: Version,
        /// The wrapped key type.
        #[zeroize(skip)]
        kind: WrapKind,
        /// KDF parameters, nonce, ciphertext, and tag.
        data: Vec<u8>,
    },
    /// `k{3,4}.seal.{data}`
    Sealed {
        /// The version tag.
        #[zeroize(skip)]
        version: Version,
        /// Tag, ephemeral public key, and ciphertext.
        data: Vec<u8>,
    },
}

impl Paserk {
    /// The version tag of the parsed string.
    #[must_use]
    pub const fn version(&self) -> Version {
        match self {
            Paserk::Raw { version, .. }
            | Paserk::Wrapped { version, .. }
            | Paserk::PasswordProtected { version, .. }
            | Paserk::Sealed { version, .. } => *version,
        }
    }

    /// The full header, including the trailing dot (e.g. `"k4.local-wrap.pie."`).
    ///
    /// The header is authenticated by every protected form.
    #[must_use]
    pub fn header(&self) -> String {
        match self {
            Paserk::Raw { version, kind, .. } => {
                format!("{}.{}.", version.paserk_prefix(), kind.type_tag())
            }
            Paserk::Wrapped {
                version,
                kind,
                protocol,
                ..
            } => wrap_header(*version, *kind, *protocol),
            Paserk::PasswordProtected { version, kind, .. } => pw_header(*version, *kind),
            Paserk::Sealed { version, .. } => seal_header(*version),
        }
    }

    fn data(&self) -> &[u8] {
        match self {
            Paserk::Raw { data, .. }
            | Paserk::Wrapped { data, .. }
            | Paserk::PasswordProtected { data, .. }
            | Paserk::Sealed { data, .. } => data,
        }
    }
}

impl Display for Paserk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = BASE64_URL_SAFE_NO_PAD.encode(self.data());
        write!(f, "{}{}", self.header(), encoded)
    }
}

impl Debug for Paserk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Paserk::Raw { .. } => "Raw",
            Paserk::Wrapped { .. } => "Wrapped",
            Paserk::PasswordProtected { .. } => "PasswordProtected",
            Paserk::Sealed { .. } => "Sealed",
        };
        f.debug_struct(name)
            .field("header", &self.header())
            .field("data_len", &self.data().len())
            .finish()
    }
}

impl FromStr for Paserk {
    type Err = PasetoError;

    fn from_str(s: &str) -> PasetoResult<Self> {
        let segments: Vec<&str> = s.split('.').collect();

        let parsed = match segments.as_slice() {
            [version_tag, type_tag, data] => {
                let version = parse_version(version_tag)?;
                parse_three_part(version, type_tag, decode_data(data)?)?
            }
            [version_tag, type_tag, protocol_tag, data] => {
                let version = parse_version(version_tag)?;
                let kind = match *type_tag {
                    "local-wrap" => WrapKind::Local,
                    "secret-wrap" => WrapKind::Secret,
                    _ => return Err(PasetoError::UnknownOperation),
                };
                let protocol = WrapProtocol::from_tag(protocol_tag)
                    .ok_or_else(|| PasetoError::UnknownProtocol((*protocol_tag).to_string()))?;
                Paserk::Wrapped {
                    version,
                    kind,
                    protocol,
                    data: decode_data(data)?,
                }
            }
            _ => return Err(PasetoError::Parse("malformed PASERK string")),
        };

        Ok(parsed)
    }
}

fn parse_version(tag: &str) -> PasetoResult<Version> {
    Version::from_paserk_prefix(tag).ok_or_else(|| PasetoError::UnknownProtocol(tag.to_string()))
}

fn decode_data(data: &str) -> PasetoResult<Vec<u8>> {
    if data.is_empty() {
        return Err(PasetoError::UnknownOperation);
    }
    BASE64_URL_SAFE_NO_PAD
        .decode(data)
        .map_err(|_| PasetoError::Parse("invalid base64 in PASERK string"))
}

fn parse_three_part(version: Version, type_tag: &str, data: Vec<u8>) -> PasetoResult<Paserk> {
    if let Some(kind) = KeyKind::from_type_tag(type_tag) {
        if data.len() != kind.raw_len(version) {
            return Err(PasetoError::InvalidKeyPair);
        }
        return Ok(Paserk::Raw {
            version,
            kind,
            data,
        });
    }

    match type_tag {
        "local-pw" => Ok(Paserk::PasswordProtected {
            version,
            kind: WrapKind::Local,
            data,
        }),
        "secret-pw" => Ok(Paserk::PasswordProtected {
            version,
            kind: WrapKind::Secret,
            data,
        }),
        "seal" => Ok(Paserk::Sealed { version, data }),
        // Identifier strings name keys; they cannot be deserialized into one.
        _ => Err(PasetoError::UnknownOperation),
    }
}

// =============================================================================
// Credential and deserialization
// =============================================================================

/// The credential presented when deserializing a PASERK string.
///
/// Each protected form requires the matching credential variant; a raw
/// string requires [`Credential::None`]. A mismatch fails with
/// [`PasetoError::UnknownOperation`] before any cryptography runs.
#[derive(Clone, Copy)]
pub enum Credential<'a> {
    /// No credential; admits only raw key strings.
    None,
    /// Symmetric wrapping key for `*-wrap.pie` strings.
    WrappingKey(&'a LocalKey),
    /// Password for `*-pw` strings.
    Password(&'a [u8]),
    /// Recipient secret key for `seal` strings.
    UnsealingKey(&'a SecretKey),
}

impl Debug for Credential<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Credential::None => "None",
            Credential::WrappingKey(_) => "WrappingKey",
            Credential::Password(_) => "Password",
            Credential::UnsealingKey(_) => "UnsealingKey",
        };
        f.write_str(name)
    }
}

/// Deserializes a PASERK string into a key, using `credential` to undo
/// any protection layer.
///
/// # Arguments
///
/// * `paserk` - The PASERK string to deserialize
/// * `credential` - The credential matching the string's protection form
///
/// # Returns
///
/// The recovered key. Sealed strings always recover a local key; the other
/// forms recover whatever key type the header names.
///
/// # Errors
///
/// Parse errors from the grammar, [`PasetoError::UnknownOperation`] if the
/// credential does not match the string's form, and whatever the underlying
/// unwrap operation reports (bad tag, wrong version, malformed plaintext).
///
/// # Example
///
/// ```rust
/// use pasetok::{from_paserk, Credential, Key};
///
/// let key = from_paserk(
///     "k4.local.cHFyc3R1dnd4eXp7fH1-f4CBgoOEhYaHiImKi4yNjo8",
///     Credential::None,
/// )?;
/// assert!(matches!(key, Key::Local(_)));
/// # Ok::<(), pasetok::PasetoError>(())
/// ```
pub fn from_paserk(paserk: &str, credential: Credential<'_>) -> PasetoResult<Key> {
    let parsed: Paserk = paserk.parse()?;

    match (&parsed, credential) {
        (
            Paserk::Raw {
                version,
                kind,
                data,
            },
            Credential::None,
        ) => match kind {
            KeyKind::Local => LocalKey::from_slice(*version, data).map(Key::Local),
            KeyKind::Secret => SecretKey::from_slice(*version, data).map(Key::Secret),
            KeyKind::Public => PublicKey::from_slice(*version, data).map(Key::Public),
        },
        (Paserk::Wrapped { .. }, Credential::WrappingKey(wrapping)) => {
            wrap::pie::unwrap(wrapping, &parsed)
        }
        (Paserk::PasswordProtected { .. }, Credential::Password(password)) => {
            pbkw::unwrap(password, &parsed)
        }
        (Paserk::Sealed { .. }, Credential::UnsealingKey(secret)) => {
            pke::unseal(secret, &parsed).map(Key::Local)
        }
        _ => Err(PasetoError::UnknownOperation),
    }
}
