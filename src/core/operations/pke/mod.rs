//! Key sealing: encrypting a symmetric key to a recipient's public key.
//!
//! Sealing lets anyone holding a verification key hand its owner a fresh
//! local key. An ephemeral key exchange binds each sealed string to one
//! recipient; only the matching secret key recovers the local key.
//!
//! The sealed payload layout is `tag || epk || ciphertext`, with version
//! deciding the primitives:
//!
//! - k3: ephemeral P-384 ECDH, SHA-384 key split, AES-256-CTR,
//!   HMAC-SHA384 tag (48 bytes)
//! - k4: X25519 over the recipient's Ed25519 point, BLAKE2b key split,
//!   XChaCha20, BLAKE2b-256 tag (32 bytes)

mod seal_k3;
mod seal_k4;

use zeroize::Zeroize;

use crate::core::error::{PasetoError, PasetoResult};
use crate::core::keys::{LocalKey, PublicKey, SecretKey};
use crate::core::paserk::{seal_header, Paserk};
use crate::core::version::Version;

/// Domain separator for the encryption-key derivation.
const DOMAIN_ENCRYPT: u8 = 0x01;
/// Domain separator for the authentication-key derivation.
const DOMAIN_AUTH: u8 = 0x02;

/// Seals a local key for the holder of `recipient`'s secret key.
///
/// The recipient key and the sealed key must share a version. Each call
/// draws a fresh ephemeral key, so sealing the same key twice yields
/// different strings.
///
/// # Arguments
///
/// * `recipient` - The verification key of the intended recipient
/// * `key` - The local key to seal
///
/// # Errors
///
/// * [`PasetoError::IncorrectKeyType`] - the versions differ
/// * [`PasetoError::InvalidKeyPair`] - `recipient` does not decode to a
///   usable exchange point
/// * [`PasetoError::Crypto`] - the CSPRNG or a primitive fails
///
/// # Example
///
/// ```rust
/// use pasetok::operations::pke;
/// use pasetok::{from_paserk, Credential, Key, LocalKey, SecretKey, Version};
///
/// let recipient = SecretKey::generate(Version::V4)?;
/// let key = LocalKey::generate(Version::V4)?;
///
/// let sealed = pke::seal(&recipient.public_key(), &key)?.to_string();
/// assert!(sealed.starts_with("k4.seal."));
///
/// let recovered = from_paserk(&sealed, Credential::UnsealingKey(&recipient))?;
/// assert_eq!(recovered, Key::Local(key));
/// # Ok::<(), pasetok::PasetoError>(())
/// ```
pub fn seal(recipient: &PublicKey, key: &LocalKey) -> PasetoResult<Paserk> {
    if recipient.version() != key.version() {
        return Err(PasetoError::IncorrectKeyType);
    }

    let version = recipient.version();
    let header = seal_header(version);

    let data = match version {
        Version::V3 => seal_k3::seal(recipient.as_bytes(), key.as_bytes(), &header)?,
        Version::V4 => seal_k4::seal(recipient.as_bytes(), key.as_bytes(), &header)?,
    };

    Ok(Paserk::Sealed { version, data })
}

/// Unseals a local key sealed by [`seal`].
///
/// # Errors
///
/// * [`PasetoError::UnknownOperation`] - `paserk` is not a sealed string
/// * [`PasetoError::IncorrectKeyType`] - the secret key's version does not
///   match the string's
/// * [`PasetoError::InvalidAuthenticator`] - tag mismatch (wrong recipient
///   or tampered data)
/// * [`PasetoError::Crypto`] - the embedded ephemeral point is invalid
pub fn unseal(secret: &SecretKey, paserk: &Paserk) -> PasetoResult<LocalKey> {
    let (version, data) = match paserk {
        Paserk::Sealed { version, data } => (*version, data.as_slice()),
        _ => return Err(PasetoError::UnknownOperation),
    };
    if version != secret.version() {
        return Err(PasetoError::IncorrectKeyType);
    }

    let header = seal_header(version);
    let mut plaintext = match version {
        Version::V3 => seal_k3::unseal(secret.as_bytes(), &header, data)?,
        Version::V4 => seal_k4::unseal(secret.as_bytes(), &header, data)?,
    };

    let key = LocalKey::from_slice(version, &plaintext);
    plaintext.zeroize();
    key
}
