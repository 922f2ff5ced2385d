//! Argon2id password wrapping for v4 strings.
//!
//! Wire layout: `salt(16) || memory-bytes(8, BE) || passes(4, BE) ||
//! parallelism(4, BE) || nonce(24) || edk || tag(32)`.

use crate::core::error::{PasetoError, PasetoResult};

use super::{DOMAIN_AUTH, DOMAIN_ENCRYPT};

const SALT_LEN: usize = 16;
const NONCE_LEN: usize = 24;
const TAG_LEN: usize = 32;
/// Size of the encoded cost fields.
const PARAMS_LEN: usize = 8 + 4 + 4;

pub(crate) fn wrap(
    password: &[u8],
    header: &str,
    memory_kib: u32,
    iterations: u32,
    parallelism: u32,
    plaintext: &[u8],
) -> PasetoResult<Vec<u8>> {
    use blake2::digest::Mac;
    use chacha20::cipher::StreamCipher;

    let mut salt = [0u8; SALT_LEN];
    crate::core::fill_random(&mut salt)?;
    let mut nonce = [0u8; NONCE_LEN];
    crate::core::fill_random(&mut nonce)?;

    // The wire carries the memory cost in bytes; Argon2 counts KiB.
    let memory_bytes = u64::from(memory_kib) * 1024;

    let (mut cipher, mut mac) = keys(password, &salt, memory_kib, iterations, parallelism, &nonce)?;

    let mut ciphertext = plaintext.to_vec();
    cipher.apply_keystream(&mut ciphertext);

    mac.update(header.as_bytes());
    mac.update(&salt);
    mac.update(&memory_bytes.to_be_bytes());
    mac.update(&iterations.to_be_bytes());
    mac.update(&parallelism.to_be_bytes());
    mac.update(&nonce);
    mac.update(&ciphertext);
    let tag = mac.finalize().into_bytes();

    let mut data =
        Vec::with_capacity(SALT_LEN + PARAMS_LEN + NONCE_LEN + ciphertext.len() + TAG_LEN);
    data.extend_from_slice(&salt);
    data.extend_from_slice(&memory_bytes.to_be_bytes());
    data.extend_from_slice(&iterations.to_be_bytes());
    data.extend_from_slice(&parallelism.to_be_bytes());
    data.extend_from_slice(&nonce);
    data.extend_from_slice(&ciphertext);
    data.extend_from_slice(&tag);
    Ok(data)
}

pub(crate) fn unwrap(password: &[u8], header: &str, data: &[u8]) -> PasetoResult<Vec<u8>> {
    use blake2::digest::Mac;
    use chacha20::cipher::StreamCipher;

    let (salt, rest) = data
        .split_first_chunk::<SALT_LEN>()
        .ok_or(PasetoError::Parse("truncated password-wrapped key"))?;
    let (memory_be, rest) = rest
        .split_first_chunk::<8>()
        .ok_or(PasetoError::Parse("truncated password-wrapped key"))?;
    let (iterations_be, rest) = rest
        .split_first_chunk::<4>()
        .ok_or(PasetoError::Parse("truncated password-wrapped key"))?;
    let (parallelism_be, rest) = rest
        .split_first_chunk::<4>()
        .ok_or(PasetoError::Parse("truncated password-wrapped key"))?;
    let (nonce, rest) = rest
        .split_first_chunk::<NONCE_LEN>()
        .ok_or(PasetoError::Parse("truncated password-wrapped key"))?;
    let (ciphertext, tag) = rest
        .split_last_chunk::<TAG_LEN>()
        .ok_or(PasetoError::Parse("truncated password-wrapped key"))?;

    let memory_bytes = u64::from_be_bytes(*memory_be);
    if memory_bytes % 1024 != 0 {
        return Err(PasetoError::Crypto);
    }
    let memory_kib = u32::try_from(memory_bytes / 1024).map_err(|_| PasetoError::Crypto)?;
    let iterations = u32::from_be_bytes(*iterations_be);
    let parallelism = u32::from_be_bytes(*parallelism_be);

    let (mut cipher, mut mac) = keys(password, salt, memory_kib, iterations, parallelism, nonce)?;

    mac.update(header.as_bytes());
    mac.update(salt);
    mac.update(memory_be);
    mac.update(iterations_be);
    mac.update(parallelism_be);
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
    memory_kib: u32,
    iterations: u32,
    parallelism: u32,
    nonce: &[u8; NONCE_LEN],
) -> PasetoResult<(chacha20::XChaCha20, blake2::Blake2bMac<blake2::digest::consts::U32>)> {
    use argon2::{Algorithm, Argon2, ParamsBuilder, Version};
    use blake2::digest::consts::U32;
    use blake2::digest::{Digest, Mac};
    use blake2::{Blake2b, Blake2bMac};
    use chacha20::cipher::KeyIvInit;
    use zeroize::Zeroize;

    let params = ParamsBuilder::new()
        .m_cost(memory_kib)
        .t_cost(iterations)
        .p_cost(parallelism)
        .build()
        .map_err(|_| PasetoError::Crypto)?;
    let kdf = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut pre_key = [0u8; 32];
    kdf.hash_password_into(password, salt, &mut pre_key)
        .map_err(|_| PasetoError::Crypto)?;

    let cipher_key = Blake2b::<U32>::new()
        .chain_update([DOMAIN_ENCRYPT])
        .chain_update(pre_key)
        .finalize();
    let auth_key = Blake2b::<U32>::new()
        .chain_update([DOMAIN_AUTH])
        .chain_update(pre_key)
        .finalize();
    pre_key.zeroize();

    let cipher = chacha20::XChaCha20::new_from_slices(&cipher_key, nonce)
        .map_err(|_| PasetoError::Crypto)?;
    let mac = Blake2bMac::<U32>::new_from_slice(&auth_key).map_err(|_| PasetoError::Crypto)?;
    Ok((cipher, mac))
}
