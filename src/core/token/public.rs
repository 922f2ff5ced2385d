//! `public` tokens: asymmetric signatures over cleartext claims.
//!
//! The payload layout is `message || signature`. The message is not
//! encrypted; `public` tokens protect integrity only.
//!
//! - v3: deterministic ECDSA over P-384 with SHA-384, 96-byte `r || s`
//!   signature with low-`s` normalization. The signer's compressed public
//!   key leads the PAE input, binding each signature to one key.
//! - v4: Ed25519, 64-byte signature.

use crate::core::error::{PasetoError, PasetoResult};
use crate::core::keys::{PublicKey, SecretKey};
use crate::core::pae::pre_auth_encode;
use crate::core::token::{header_for, Purpose, Token};
use crate::core::version::Version;

/// Signs a message into a `public` token.
///
/// # Arguments
///
/// * `key` - The signing key; its version selects the signature scheme
/// * `message` - The cleartext claims, conventionally JSON
/// * `footer` - Authenticated but unsigned-in-place trailer, empty for none
/// * `implicit` - Authenticated data not carried in the token, empty for none
///
/// # Errors
///
/// Returns [`PasetoError::Crypto`] if signing fails.
///
/// # Example
///
/// ```rust
/// use pasetok::{token, SecretKey, Version};
///
/// let key = SecretKey::generate(Version::V4)?;
/// let token = token::public::sign(&key, "{\"sub\":\"docs\"}", b"", b"")?;
/// let message = token::public::verify(&key.public_key(), &token, b"")?;
/// assert_eq!(message, "{\"sub\":\"docs\"}");
/// # Ok::<(), pasetok::PasetoError>(())
/// ```
pub fn sign(
    key: &SecretKey,
    message: &str,
    footer: &[u8],
    implicit: &[u8],
) -> PasetoResult<Token> {
    let header = header_for(key.version(), Purpose::Public);
    let payload = match key.version() {
        Version::V3 => sign_v3(key, header, message.as_bytes(), footer, implicit)?,
        Version::V4 => sign_v4(key, header, message.as_bytes(), footer, implicit)?,
    };
    Ok(Token::from_parts(
        key.version(),
        Purpose::Public,
        payload,
        footer.to_vec(),
    ))
}

/// Verifies a `public` token and returns its message.
///
/// # Errors
///
/// * [`PasetoError::Lucidity`] - key and token disagree on version or purpose
/// * [`PasetoError::Parse`] - payload shorter than a signature, or the
///   message is not UTF-8
/// * [`PasetoError::InvalidSignature`] - signature check failed (wrong key,
///   wrong implicit assertion, or tampered token)
pub fn verify(key: &PublicKey, token: &Token, implicit: &[u8]) -> PasetoResult<String> {
    if token.version() != key.version() || token.purpose() != Purpose::Public {
        return Err(PasetoError::Lucidity);
    }

    let footer = token.unverified_footer();
    let message = match key.version() {
        Version::V3 => verify_v3(key, token.header(), token.payload(), footer, implicit)?,
        Version::V4 => verify_v4(key, token.header(), token.payload(), footer, implicit)?,
    };

    String::from_utf8(message).map_err(|_| PasetoError::Parse("signed payload is not UTF-8"))
}

// =============================================================================
// v3: deterministic ECDSA P-384 with SHA-384
// =============================================================================

fn sign_v3(
    key: &SecretKey,
    header: &str,
    message: &[u8],
    footer: &[u8],
    implicit: &[u8],
) -> PasetoResult<Vec<u8>> {
    use p384::ecdsa::signature::DigestSigner;
    use p384::ecdsa::{Signature, SigningKey};
    use sha2::{Digest, Sha384};

    let signing_key =
        SigningKey::from_slice(key.as_bytes()).map_err(|_| PasetoError::InvalidKeyPair)?;
    let public_key = key.public_key();

    let digest = Sha384::new_with_prefix(pre_auth_encode(&[
        public_key.as_bytes(),
        header.as_bytes(),
        message,
        footer,
        implicit,
    ]));
    let signature: Signature = signing_key
        .try_sign_digest(digest)
        .map_err(|_| PasetoError::Crypto)?;
    let signature = signature.normalize_s().unwrap_or(signature);

    let mut payload = Vec::with_capacity(message.len() + 96);
    payload.extend_from_slice(message);
    payload.extend_from_slice(&signature.to_bytes());
    Ok(payload)
}

fn verify_v3(
    key: &PublicKey,
    header: &str,
    payload: &[u8],
    footer: &[u8],
    implicit: &[u8],
) -> PasetoResult<Vec<u8>> {
    use p384::ecdsa::signature::DigestVerifier;
    use p384::ecdsa::{Signature, VerifyingKey};
    use sha2::{Digest, Sha384};

    let (message, sig_bytes) = payload
        .split_last_chunk::<96>()
        .ok_or(PasetoError::Parse("truncated token payload"))?;

    let signature =
        Signature::from_slice(sig_bytes).map_err(|_| PasetoError::InvalidSignature)?;
    let verifying_key =
        VerifyingKey::from_sec1_bytes(key.as_bytes()).map_err(|_| PasetoError::Crypto)?;

    let digest = Sha384::new_with_prefix(pre_auth_encode(&[
        key.as_bytes(),
        header.as_bytes(),
        message,
        footer,
        implicit,
    ]));
    verifying_key
        .verify_digest(digest, &signature)
        .map_err(|_| PasetoError::InvalidSignature)?;

    Ok(message.to_vec())
}

// =============================================================================
// v4: Ed25519
// =============================================================================

fn sign_v4(
    key: &SecretKey,
    header: &str,
    message: &[u8],
    footer: &[u8],
    implicit: &[u8],
) -> PasetoResult<Vec<u8>> {
    use ed25519_dalek::{Signer, SigningKey};

    let seed: &[u8; 32] = key.as_bytes()[..32]
        .try_into()
        .map_err(|_| PasetoError::InvalidKeyPair)?;
    let signing_key = SigningKey::from_bytes(seed);

    let pre_auth = pre_auth_encode(&[header.as_bytes(), message, footer, implicit]);
    let signature = signing_key
        .try_sign(&pre_auth)
        .map_err(|_| PasetoError::Crypto)?;

    let mut payload = Vec::with_capacity(message.len() + 64);
    payload.extend_from_slice(message);
    payload.extend_from_slice(&signature.to_bytes());
    Ok(payload)
}

fn verify_v4(
    key: &PublicKey,
    header: &str,
    payload: &[u8],
    footer: &[u8],
    implicit: &[u8],
) -> PasetoResult<Vec<u8>> {
    use ed25519_dalek::{Signature, Verifier, VerifyingKey};

    let (message, sig_bytes) = payload
        .split_last_chunk::<64>()
        .ok_or(PasetoError::Parse("truncated token payload"))?;

    let signature = Signature::from_bytes(sig_bytes);
    let point: &[u8; 32] = key
        .as_bytes()
        .try_into()
        .map_err(|_| PasetoError::InvalidKeyPair)?;
    let verifying_key = VerifyingKey::from_bytes(point).map_err(|_| PasetoError::Crypto)?;

    let pre_auth = pre_auth_encode(&[header.as_bytes(), message, footer, implicit]);
    verifying_key
        .verify(&pre_auth, &signature)
        .map_err(|_| PasetoError::InvalidSignature)?;

    Ok(message.to_vec())
}
