//! PIE key wrapping.
//!
//! The wrapped payload layout is `tag || nonce(32) || ciphertext`, with
//! version deciding the primitives:
//!
//! - k3: HMAC-SHA384 key split, AES-256-CTR, HMAC-SHA384 tag (48 bytes)
//! - k4: keyed BLAKE2b key split, XChaCha20, BLAKE2b-256 tag (32 bytes)
//!
//! Both derive an encryption key, a counter nonce, and an authentication
//! key from the wrapping key and the per-wrap nonce under the domain
//! bytes `0x80` and `0x81`, then authenticate `header || nonce ||
//! ciphertext`. Unwrapping verifies the tag before touching the
//! ciphertext.

use zeroize::Zeroize;

use crate::core::error::{PasetoError, PasetoResult};
use crate::core::keys::{Key, LocalKey, SecretKey};
use crate::core::paserk::{wrap_header, Paserk, WrapKind, WrapProtocol};
use crate::core::version::Version;

/// Domain separator for the encryption-key derivation.
const DOMAIN_ENCRYPT: &[u8] = &[0x80];
/// Domain separator for the authentication-key derivation.
const DOMAIN_AUTH: &[u8] = &[0x81];

/// Wraps a key under a symmetric wrapping key.
///
/// The wrapping key and the wrapped key must share a version. Only local
/// and secret keys have a wrapped form; public keys are not secret.
///
/// # Arguments
///
/// * `wrapping` - The symmetric key protecting the wrapped key
/// * `key` - The key to wrap
///
/// # Errors
///
/// * [`PasetoError::IncorrectKeyType`] - `key` is public, or the versions
///   differ
/// * [`PasetoError::Crypto`] - the CSPRNG or a primitive fails
///
/// # Example
///
/// ```rust
/// use pasetok::operations::wrap;
/// use pasetok::{from_paserk, Credential, Key, LocalKey, Version};
///
/// let wrapping = LocalKey::generate(Version::V4)?;
/// let key = LocalKey::generate(Version::V4)?;
///
/// let wrapped = wrap::pie::wrap(&wrapping, &Key::Local(key.clone()))?.to_string();
/// assert!(wrapped.starts_with("k4.local-wrap.pie."));
///
/// let recovered = from_paserk(&wrapped, Credential::WrappingKey(&wrapping))?;
/// assert_eq!(recovered, Key::Local(key));
/// # Ok::<(), pasetok::PasetoError>(())
/// ```
pub fn wrap(wrapping: &LocalKey, key: &Key) -> PasetoResult<Paserk> {
    let (kind, plaintext) = match key {
        Key::Local(local) => (WrapKind::Local, local.as_bytes().as_slice()),
        Key::Secret(secret) => (WrapKind::Secret, secret.as_bytes()),
        Key::Public(_) => return Err(PasetoError::IncorrectKeyType),
    };
    if key.version() != wrapping.version() {
        return Err(PasetoError::IncorrectKeyType);
    }

    let version = wrapping.version();
    let header = wrap_header(version, kind, WrapProtocol::Pie);

    let mut nonce = [0u8; 32];
    crate::core::fill_random(&mut nonce)?;

    let data = match version {
        Version::V3 => seal_v3(wrapping.as_bytes(), &nonce, &header, plaintext)?,
        Version::V4 => seal_v4(wrapping.as_bytes(), &nonce, &header, plaintext)?,
    };

    Ok(Paserk::Wrapped {
        version,
        kind,
        protocol: WrapProtocol::Pie,
        data,
    })
}

/// Unwraps a key wrapped by [`wrap`].
///
/// # Errors
///
/// * [`PasetoError::UnknownOperation`] - `paserk` is not a PIE-wrapped
///   string
/// * [`PasetoError::IncorrectKeyType`] - the wrapping key's version does
///   not match the string's
/// * [`PasetoError::InvalidAuthenticator`] - tag mismatch (wrong wrapping
///   key or tampered data)
/// * [`PasetoError::InvalidKeyPair`] - the decrypted bytes do not form a
///   valid key
pub fn unwrap(wrapping: &LocalKey, paserk: &Paserk) -> PasetoResult<Key> {
    let (version, kind, data) = match paserk {
        Paserk::Wrapped {
            version,
            kind,
            protocol: WrapProtocol::Pie,
            data,
        } => (*version, *kind, data.as_slice()),
        _ => return Err(PasetoError::UnknownOperation),
    };
    if version != wrapping.version() {
        return Err(PasetoError::IncorrectKeyType);
    }

    let header = wrap_header(version, kind, WrapProtocol::Pie);
    let mut plaintext = match version {
        Version::V3 => open_v3(wrapping.as_bytes(), &header, data)?,
        Version::V4 => open_v4(wrapping.as_bytes(), &header, data)?,
    };

    let key = match kind {
        WrapKind::Local => LocalKey::from_slice(version, &plaintext).map(Key::Local),
        WrapKind::Secret => SecretKey::from_slice(version, &plaintext).map(Key::Secret),
    };
    plaintext.zeroize();
    key
}

// =============================================================================
// k3: HMAC-SHA384 + AES-256-CTR + HMAC-SHA384
// =============================================================================

fn keys_v3(
    wrapping: &[u8; 32],
    nonce: &[u8],
) -> PasetoResult<(ctr::Ctr64BE<aes::Aes256>, hmac::Hmac<sha2::Sha384>)> {
    use ctr::cipher::KeyIvInit;
    use hmac::Mac;

    let okm = hmac::Hmac::<sha2::Sha384>::new_from_slice(wrapping)
        .map_err(|_| PasetoError::Crypto)?
        .chain_update(DOMAIN_ENCRYPT)
        .chain_update(nonce)
        .finalize()
        .into_bytes();
    let (cipher_key, counter) = okm.split_at(32);

    let auth_key = hmac::Hmac::<sha2::Sha384>::new_from_slice(wrapping)
        .map_err(|_| PasetoError::Crypto)?
        .chain_update(DOMAIN_AUTH)
        .chain_update(nonce)
        .finalize()
        .into_bytes();

    let cipher = ctr::Ctr64BE::<aes::Aes256>::new_from_slices(cipher_key, counter)
        .map_err(|_| PasetoError::Crypto)?;
    // The tag key keeps only the first half of the HMAC output.
    let mac = hmac::Hmac::<sha2::Sha384>::new_from_slice(&auth_key[..32])
        .map_err(|_| PasetoError::Crypto)?;
    Ok((cipher, mac))
}

fn seal_v3(
    wrapping: &[u8; 32],
    nonce: &[u8; 32],
    header: &str,
    plaintext: &[u8],
) -> PasetoResult<Vec<u8>> {
    use ctr::cipher::StreamCipher;
    use hmac::Mac;

    let (mut cipher, mut mac) = keys_v3(wrapping, nonce)?;

    let mut ciphertext = plaintext.to_vec();
    cipher.apply_keystream(&mut ciphertext);

    mac.update(header.as_bytes());
    mac.update(nonce);
    mac.update(&ciphertext);
    let tag = mac.finalize().into_bytes();

    let mut data = Vec::with_capacity(48 + 32 + ciphertext.len());
    data.extend_from_slice(&tag);
    data.extend_from_slice(nonce);
    data.extend_from_slice(&ciphertext);
    Ok(data)
}

fn open_v3(wrapping: &[u8; 32], header: &str, data: &[u8]) -> PasetoResult<Vec<u8>> {
    use ctr::cipher::StreamCipher;
    use hmac::Mac;

    let (tag, rest) = data
        .split_first_chunk::<48>()
        .ok_or(PasetoError::Parse("truncated wrapped key"))?;
    let (nonce, ciphertext) = rest
        .split_first_chunk::<32>()
        .ok_or(PasetoError::Parse("truncated wrapped key"))?;

    let (mut cipher, mut mac) = keys_v3(wrapping, nonce)?;

    mac.update(header.as_bytes());
    mac.update(nonce);
    mac.update(ciphertext);
    mac.verify_slice(tag)
        .map_err(|_| PasetoError::InvalidAuthenticator)?;

    let mut plaintext = ciphertext.to_vec();
    cipher.apply_keystream(&mut plaintext);
    Ok(plaintext)
}

// =============================================================================
// k4: keyed BLAKE2b + XChaCha20 + BLAKE2b-256
// =============================================================================

fn keys_v4(
    wrapping: &[u8; 32],
    nonce: &[u8],
) -> PasetoResult<(chacha20::XChaCha20, blake2::Blake2bMac<blake2::digest::consts::U32>)> {
    use blake2::digest::consts::{U32, U56};
    use blake2::digest::Mac;
    use blake2::Blake2bMac;
    use chacha20::cipher::KeyIvInit;

    let okm = Blake2bMac::<U56>::new_from_slice(wrapping)
        .map_err(|_| PasetoError::Crypto)?
        .chain_update(DOMAIN_ENCRYPT)
        .chain_update(nonce)
        .finalize()
        .into_bytes();
    let (cipher_key, counter) = okm.split_at(32);

    let auth_key = Blake2bMac::<U32>::new_from_slice(wrapping)
        .map_err(|_| PasetoError::Crypto)?
        .chain_update(DOMAIN_AUTH)
        .chain_update(nonce)
        .finalize()
        .into_bytes();

    let cipher = chacha20::XChaCha20::new_from_slices(cipher_key, counter)
        .map_err(|_| PasetoError::Crypto)?;
    let mac = Blake2bMac::<U32>::new_from_slice(&auth_key).map_err(|_| PasetoError::Crypto)?;
    Ok((cipher, mac))
}

fn seal_v4(
    wrapping: &[u8; 32],
    nonce: &[u8; 32],
    header: &str,
    plaintext: &[u8],
) -> PasetoResult<Vec<u8>> {
    use blake2::digest::Mac;
    use chacha20::cipher::StreamCipher;

    let (mut cipher, mut mac) = keys_v4(wrapping, nonce)?;

    let mut ciphertext = plaintext.to_vec();
    cipher.apply_keystream(&mut ciphertext);

    mac.update(header.as_bytes());
    mac.update(nonce);
    mac.update(&ciphertext);
    let tag = mac.finalize().into_bytes();

    let mut data = Vec::with_capacity(32 + 32 + ciphertext.len());
    data.extend_from_slice(&tag);
    data.extend_from_slice(nonce);
    data.extend_from_slice(&ciphertext);
    Ok(data)
}

fn open_v4(wrapping: &[u8; 32], header: &str, data: &[u8]) -> PasetoResult<Vec<u8>> {
    use blake2::digest::Mac;
    use chacha20::cipher::StreamCipher;

    let (tag, rest) = data
        .split_first_chunk::<32>()
        .ok_or(PasetoError::Parse("truncated wrapped key"))?;
    let (nonce, ciphertext) = rest
        .split_first_chunk::<32>()
        .ok_or(PasetoError::Parse("truncated wrapped key"))?;

    let (mut cipher, mut mac) = keys_v4(wrapping, nonce)?;

    mac.update(header.as_bytes());
    mac.update(nonce);
    mac.update(ciphertext);
    mac.verify_slice(tag)
        .map_err(|_| PasetoError::InvalidAuthenticator)?;

    let mut plaintext = ciphertext.to_vec();
    cipher.apply_keystream(&mut plaintext);
    Ok(plaintext)
}
