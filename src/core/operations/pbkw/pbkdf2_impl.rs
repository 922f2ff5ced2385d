//! PBKDF2-SHA384 password wrapping for v3 strings.
//!
//! Wire layout: `salt(32) || iterations(4, BE) || nonce(16) || edk ||
//! tag(48)`.

use crate::core::error::{PasetoError, PasetoResult};

use super::{DOMAIN_AUTH, DOMAIN_ENCRYPT};

const SALT_LEN: usize = 32;
const NONCE_LEN: usize = 16;
const TAG_LEN: usize = 48;

pub(crate) fn wrap(
    password: &[u8],
    header: &str,
    iterations: u32,
    plaintext: &[u8],
) -> PasetoResult<Vec<u8>> {
    use ctr::cipher::StreamCipher;
    use hmac::Mac;

    let mut salt = [0u8; SALT_LEN];
    crate::core::fill_random(&mut salt)?;
    let mut nonce = [0u8; NONCE_LEN];
    crate::core::fill_random(&mut nonce)?;

    let (mut cipher, mut mac) = keys(password, &salt, iterations, &nonce)?;

    let mut ciphertext = plaintext.to_vec();
    cipher.apply_keystream(&mut ciphertext);

    mac.update(header.as_bytes());
    mac.update(&salt);
    mac.update(&iterations.to_be_bytes());
    mac.update(&nonce);
    mac.update(&ciphertext);
    let tag = mac.finalize().into_bytes();

    let mut data = Vec::with_capacity(SALT_LEN + 4 + NONCE_LEN + ciphertext.len() + TAG_LEN);
    data.extend_from_slice(&salt);
    data.extend_from_slice(&iterations.to_be_bytes());
    data.extend_from_slice(&nonce);
    data.extend_from_slice(&ciphertext);
    data.extend_from_slice(&tag);
    Ok(data)
}

pub(crate) fn unwrap(password: &[u8], header: &str, data: &[u8]) -> PasetoResult<Vec<u8>> {
    use ctr::cipher::StreamCipher;
    use hmac::Mac;

    let (salt, rest) = data
        .split_first_chunk::<SALT_LEN>()
        .ok_or(PasetoError::Parse("truncated password-wrapped key"))?;
    let (iterations_be, rest) = rest
        .split_first_chunk::<4>()
        .ok_or(PasetoError::Parse("truncated password-wrapped key"))?;
    let (nonce, rest) = rest
        .split_first_chunk::<NONCE_LEN>()
        .ok_or(PasetoError::Parse("truncated password-wrapped key"))?;
    let (ciphertext, tag) = rest
        .split_last_chunk::<TAG_LEN>()
        .ok_or(PasetoError::Parse("truncated password-wrapped key"))?;

    let iterations = u32::from_be_bytes(*iterations_be);
    let (mut cipher, mut mac) = keys(password, salt, iterations, nonce)?;

    mac.update(header.as_bytes());
    mac.update(salt);
    mac.update(iterations_be);
    mac.update(nonce);
    mac.update(ciphertext);
    mac.verify_slice(tag)
        .map_err(|_| PasetoError::InvalidAuthenticator)?;

    let mut plaintext = ciphertext.to_vec();
    cipher.apply_keystream(&mut plaintext);
    Ok(plaintext)
}

fn keys(
    password: &[u8],
    salt: &[u8; SALT_LEN],
    iterations: u32,
    nonce: &[u8; NONCE_LEN],
) -> PasetoResult<(ctr::Ctr64BE<aes::Aes256>, hmac::Hmac<sha2::Sha384>)> {
    use ctr::cipher::KeyIvInit;
    use hmac::Mac;
    use sha2::{Digest, Sha384};
    use zeroize::Zeroize;

    let mut pre_key = [0u8; 32];
    pbkdf2::pbkdf2::<hmac::Hmac<Sha384>>(password, salt, iterations, &mut pre_key)
        .map_err(|_| PasetoError::Crypto)?;

    let cipher_key = Sha384::new()
        .chain_update([DOMAIN_ENCRYPT])
        .chain_update(pre_key)
        .finalize();
    let auth_key = Sha384::new()
        .chain_update([DOMAIN_AUTH])
        .chain_update(pre_key)
        .finalize();
    pre_key.zeroize();

    // The cipher key keeps only the first half of the digest.
    let cipher = ctr::Ctr64BE::<aes::Aes256>::new_from_slices(&cipher_key[..32], nonce)
        .map_err(|_| PasetoError::Crypto)?;
    let mac =
        hmac::Hmac::<sha2::Sha384>::new_from_slice(&auth_key).map_err(|_| PasetoError::Crypto)?;
    Ok((cipher, mac))
}
