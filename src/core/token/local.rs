//! `local` tokens: symmetric authenticated encryption.
//!
//! The payload layout is `nonce(32) || ciphertext || tag`, with version
//! deciding the primitives:
//!
//! - v3: HKDF-SHA384 key split, AES-256-CTR, HMAC-SHA384 tag (48 bytes)
//! - v4: keyed BLAKE2b key split, XChaCha20, BLAKE2b-256 tag (32 bytes)
//!
//! Both derive a fresh encryption key, counter nonce, and authentication
//! key from the long-lived key and the per-token nonce, then authenticate
//! `PAE(header, nonce, ciphertext, footer, implicit)`. Decryption verifies
//! the tag before touching the ciphertext.

use crate::core::error::{PasetoError, PasetoResult};
use crate::core::keys::LocalKey;
use crate::core::pae::pre_auth_encode;
use crate::core::token::{header_for, Purpose, Token};
use crate::core::version::Version;

const DOMAIN_ENCRYPT: &[u8] = b"paseto-encryption-key";
const DOMAIN_AUTH: &[u8] = b"paseto-auth-key-for-aead";

/// Encrypts a message into a `local` token.
///
/// # Arguments
///
/// * `key` - The symmetric key; its version selects the cipher suite
/// * `message` - The plaintext claims, conventionally JSON
/// * `footer` - Authenticated but unencrypted trailer, empty for none
/// * `implicit` - Authenticated data not carried in the token, empty for none
///
/// # Errors
///
/// Returns [`PasetoError::Crypto`] if the CSPRNG or a primitive fails.
///
/// # Example
///
/// ```rust
/// use pasetok::{token, LocalKey, Version};
///
/// let key = LocalKey::generate(Version::V4)?;
/// let token = token::local::encrypt(&key, "{\"sub\":\"docs\"}", b"", b"")?;
/// let message = token::local::decrypt(&key, &token, b"")?;
/// assert_eq!(message, "{\"sub\":\"docs\"}");
/// # Ok::<(), pasetok::PasetoError>(())
/// ```
pub fn encrypt(
    key: &LocalKey,
    message: &str,
    footer: &[u8],
    implicit: &[u8],
) -> PasetoResult<Token> {
    let mut nonce = [0u8; 32];
    crate::core::fill_random(&mut nonce)?;
    encrypt_with_nonce(key, message, footer, implicit, &nonce)
}

/// Deterministic core of [`encrypt`], split out so known-answer tests can
/// pin the nonce.
pub(crate) fn encrypt_with_nonce(
    key: &LocalKey,
    message: &str,
    footer: &[u8],
    implicit: &[u8],
    nonce: &[u8; 32],
) -> PasetoResult<Token> {
    let header = header_for(key.version(), Purpose::Local);
    let payload = match key.version() {
        Version::V3 => seal_v3(key.as_bytes(), nonce, header, message.as_bytes(), footer, implicit)?,
        Version::V4 => seal_v4(key.as_bytes(), nonce, header, message.as_bytes(), footer, implicit)?,
    };
    Ok(Token::from_parts(
        key.version(),
        Purpose::Local,
        payload,
        footer.to_vec(),
    ))
}

/// Decrypts and authenticates a `local` token.
///
/// The token's footer participates in authentication; the caller supplies
/// only the implicit assertion used at encryption time.
///
/// # Errors
///
/// * [`PasetoError::Lucidity`] - key and token disagree on version or purpose
/// * [`PasetoError::Parse`] - payload too short, or plaintext is not UTF-8
/// * [`PasetoError::InvalidAuthenticator`] - tag mismatch (wrong key, wrong
///   implicit assertion, or tampered token)
pub fn decrypt(key: &LocalKey, token: &Token, implicit: &[u8]) -> PasetoResult<String> {
    if token.version() != key.version() || token.purpose() != Purpose::Local {
        return Err(PasetoError::Lucidity);
    }

    let footer = token.unverified_footer();
    let message = match key.version() {
        Version::V3 => open_v3(key.as_bytes(), token.header(), token.payload(), footer, implicit)?,
        Version::V4 => open_v4(key.as_bytes(), token.header(), token.payload(), footer, implicit)?,
    };

    String::from_utf8(message).map_err(|_| PasetoError::Parse("decrypted payload is not UTF-8"))
}

// =============================================================================
// v3: HKDF-SHA384 + AES-256-CTR + HMAC-SHA384
// =============================================================================

/// Derives 48 bytes from the key, the domain string, and the token nonce.
fn derive_v3(key: &[u8; 32], domain: &[u8], nonce: &[u8]) -> PasetoResult<[u8; 48]> {
    let mut okm = [0u8; 48];
    hkdf::Hkdf::<sha2::Sha384>::new(None, key)
        .expand_multi_info(&[domain, nonce], &mut okm)
        .map_err(|_| PasetoError::Crypto)?;
    Ok(okm)
}

fn keys_v3(
    key: &[u8; 32],
    nonce: &[u8],
) -> PasetoResult<(ctr::Ctr64BE<aes::Aes256>, hmac::Hmac<sha2::Sha384>)> {
    use ctr::cipher::KeyIvInit;
    use hmac::Mac;

    let okm = derive_v3(key, DOMAIN_ENCRYPT, nonce)?;
    let (cipher_key, counter) = okm.split_at(32);
    let auth_key = derive_v3(key, DOMAIN_AUTH, nonce)?;

    let cipher = ctr::Ctr64BE::<aes::Aes256>::new_from_slices(cipher_key, counter)
        .map_err(|_| PasetoError::Crypto)?;
    let mac =
        hmac::Hmac::<sha2::Sha384>::new_from_slice(&auth_key).map_err(|_| PasetoError::Crypto)?;
    Ok((cipher, mac))
}

fn seal_v3(
    key: &[u8; 32],
    nonce: &[u8; 32],
    header: &str,
    message: &[u8],
    footer: &[u8],
    implicit: &[u8],
) -> PasetoResult<Vec<u8>> {
    use ctr::cipher::StreamCipher;
    use hmac::Mac;

    let (mut cipher, mut mac) = keys_v3(key, nonce)?;

    let mut ciphertext = message.to_vec();
    cipher.apply_keystream(&mut ciphertext);

    mac.update(&pre_auth_encode(&[
        header.as_bytes(),
        nonce,
        &ciphertext,
        footer,
        implicit,
    ]));
    let tag = mac.finalize().into_bytes();

    let mut payload = Vec::with_capacity(32 + ciphertext.len() + 48);
    payload.extend_from_slice(nonce);
    payload.extend_from_slice(&ciphertext);
    payload.extend_from_slice(&tag);
    Ok(payload)
}

fn open_v3(
    key: &[u8; 32],
    header: &str,
    payload: &[u8],
    footer: &[u8],
    implicit: &[u8],
) -> PasetoResult<Vec<u8>> {
    use ctr::cipher::StreamCipher;
    use hmac::Mac;

    let (body, tag) = payload
        .split_last_chunk::<48>()
        .ok_or(PasetoError::Parse("truncated token payload"))?;
    let (nonce, ciphertext) = body
        .split_first_chunk::<32>()
        .ok_or(PasetoError::Parse("truncated token payload"))?;

    let (mut cipher, mut mac) = keys_v3(key, nonce)?;

    mac.update(&pre_auth_encode(&[
        header.as_bytes(),
        nonce,
        ciphertext,
        footer,
        implicit,
    ]));
    mac.verify_slice(tag)
        .map_err(|_| PasetoError::InvalidAuthenticator)?;

    let mut message = ciphertext.to_vec();
    cipher.apply_keystream(&mut message);
    Ok(message)
}

// =============================================================================
// v4: keyed BLAKE2b + XChaCha20 + BLAKE2b-256
// =============================================================================

fn keys_v4(
    key: &[u8; 32],
    nonce: &[u8],
) -> PasetoResult<(chacha20::XChaCha20, blake2::Blake2bMac<blake2::digest::consts::U32>)> {
    use blake2::digest::consts::{U32, U56};
    use blake2::digest::Mac;
    use blake2::Blake2bMac;
    use chacha20::cipher::KeyIvInit;

    let okm = Blake2bMac::<U56>::new_from_slice(key)
        .map_err(|_| PasetoError::Crypto)?
        .chain_update(DOMAIN_ENCRYPT)
        .chain_update(nonce)
        .finalize()
        .into_bytes();
    let (cipher_key, counter) = okm.split_at(32);

    let auth_key = Blake2bMac::<U32>::new_from_slice(key)
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
    key: &[u8; 32],
    nonce: &[u8; 32],
    header: &str,
    message: &[u8],
    footer: &[u8],
    implicit: &[u8],
) -> PasetoResult<Vec<u8>> {
    use blake2::digest::Mac;
    use chacha20::cipher::StreamCipher;

    let (mut cipher, mut mac) = keys_v4(key, nonce)?;

    let mut ciphertext = message.to_vec();
    cipher.apply_keystream(&mut ciphertext);

    mac.update(&pre_auth_encode(&[
        header.as_bytes(),
        nonce,
        &ciphertext,
        footer,
        implicit,
    ]));
    let tag = mac.finalize().into_bytes();

    let mut payload = Vec::with_capacity(32 + ciphertext.len() + 32);
    payload.extend_from_slice(nonce);
    payload.extend_from_slice(&ciphertext);
    payload.extend_from_slice(&tag);
    Ok(payload)
}

fn open_v4(
    key: &[u8; 32],
    header: &str,
    payload: &[u8],
    footer: &[u8],
    implicit: &[u8],
) -> PasetoResult<Vec<u8>> {
    use blake2::digest::Mac;
    use chacha20::cipher::StreamCipher;

    let (body, tag) = payload
        .split_last_chunk::<32>()
        .ok_or(PasetoError::Parse("truncated token payload"))?;
    let (nonce, ciphertext) = body
        .split_first_chunk::<32>()
        .ok_or(PasetoError::Parse("truncated token payload"))?;

    let (mut cipher, mut mac) = keys_v4(key, nonce)?;

    mac.update(&pre_auth_encode(&[
        header.as_bytes(),
        nonce,
        ciphertext,
        footer,
        implicit,
    ]));
    mac.verify_slice(tag)
        .map_err(|_| PasetoError::InvalidAuthenticator)?;

    let mut message = ciphertext.to_vec();
    cipher.apply_keystream(&mut message);
    Ok(message)
}
