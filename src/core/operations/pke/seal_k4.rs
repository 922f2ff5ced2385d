//! X25519 sealing.
//!
//! The recipient's Ed25519 point maps to its birational X25519 form and
//! an ephemeral exchange against it feeds BLAKE2b key derivation. The
//! encryption and authentication keys hash the domain byte, the header,
//! the shared point, and both exchange points; the XChaCha20 nonce hashes
//! the two exchange points alone. A keyed BLAKE2b-256 tag covers
//! `header || epk || ciphertext`.

use zeroize::Zeroize;

use crate::core::error::{PasetoError, PasetoResult};

use super::{DOMAIN_AUTH, DOMAIN_ENCRYPT};

const TAG_LEN: usize = 32;
const EPK_LEN: usize = 32;

pub(super) fn seal(recipient: &[u8], key: &[u8; 32], header: &str) -> PasetoResult<Vec<u8>> {
    use blake2::digest::consts::{U24, U32};
    use blake2::digest::{Digest, Mac};
    use blake2::{Blake2b, Blake2bMac};
    use chacha20::cipher::{KeyIvInit, StreamCipher};
    use curve25519_dalek::scalar::{clamp_integer, Scalar};
    use curve25519_dalek::EdwardsPoint;

    let point: &[u8; 32] = recipient
        .try_into()
        .map_err(|_| PasetoError::InvalidKeyPair)?;
    let xpk = ed25519_dalek::VerifyingKey::from_bytes(point)
        .map_err(|_| PasetoError::InvalidKeyPair)?
        .to_montgomery();

    let mut seed = [0u8; 32];
    crate::core::fill_random(&mut seed)?;
    let esk = Scalar::from_bytes_mod_order(clamp_integer(seed));
    seed.zeroize();
    let epk = EdwardsPoint::mul_base(&esk).to_montgomery();
    let xk = esk * xpk;

    let nonce = Blake2b::<U24>::new()
        .chain_update(epk.as_bytes())
        .chain_update(xpk.as_bytes())
        .finalize();

    let cipher_key = Blake2b::<U32>::new()
        .chain_update([DOMAIN_ENCRYPT])
        .chain_update(header.as_bytes())
        .chain_update(xk.as_bytes())
        .chain_update(epk.as_bytes())
        .chain_update(xpk.as_bytes())
        .finalize();

    let auth_key = Blake2b::<U32>::new()
        .chain_update([DOMAIN_AUTH])
        .chain_update(header.as_bytes())
        .chain_update(xk.as_bytes())
        .chain_update(epk.as_bytes())
        .chain_update(xpk.as_bytes())
        .finalize();

    let mut edk = *key;
    chacha20::XChaCha20::new_from_slices(&cipher_key, &nonce)
        .map_err(|_| PasetoError::Crypto)?
        .apply_keystream(&mut edk);

    let tag = Blake2bMac::<U32>::new_from_slice(&auth_key)
        .map_err(|_| PasetoError::Crypto)?
        .chain_update(header.as_bytes())
        .chain_update(epk.as_bytes())
        .chain_update(edk)
        .finalize()
        .into_bytes();

    let mut data = Vec::with_capacity(TAG_LEN + EPK_LEN + edk.len());
    data.extend_from_slice(&tag);
    data.extend_from_slice(epk.as_bytes());
    data.extend_from_slice(&edk);
    Ok(data)
}

pub(super) fn unseal(secret: &[u8], header: &str, data: &[u8]) -> PasetoResult<[u8; 32]> {
    use blake2::digest::consts::{U24, U32};
    use blake2::digest::{Digest, Mac};
    use blake2::{Blake2b, Blake2bMac};
    use chacha20::cipher::{KeyIvInit, StreamCipher};
    use curve25519_dalek::{EdwardsPoint, MontgomeryPoint, Scalar};

    let (tag, rest) = data
        .split_first_chunk::<TAG_LEN>()
        .ok_or(PasetoError::Parse("truncated sealed key"))?;
    let (epk, edk) = rest
        .split_first_chunk::<EPK_LEN>()
        .ok_or(PasetoError::Parse("truncated sealed key"))?;
    let edk: &[u8; 32] = edk
        .try_into()
        .map_err(|_| PasetoError::Parse("sealed key length mismatch"))?;

    let (seed, _) = secret
        .split_first_chunk::<32>()
        .ok_or(PasetoError::InvalidKeyPair)?;
    let signing_key = ed25519_dalek::SigningKey::from_bytes(seed);
    let scalar = Scalar::from_bytes_mod_order(signing_key.to_scalar_bytes());
    let xpk = EdwardsPoint::mul_base(&scalar).to_montgomery();
    let xk = scalar * MontgomeryPoint(*epk);

    let auth_key = Blake2b::<U32>::new()
        .chain_update([DOMAIN_AUTH])
        .chain_update(header.as_bytes())
        .chain_update(xk.as_bytes())
        .chain_update(epk)
        .chain_update(xpk.as_bytes())
        .finalize();

    Blake2bMac::<U32>::new_from_slice(&auth_key)
        .map_err(|_| PasetoError::Crypto)?
        .chain_update(header.as_bytes())
        .chain_update(epk)
        .chain_update(edk)
        .verify_slice(tag)
        .map_err(|_| PasetoError::InvalidAuthenticator)?;

    let cipher_key = Blake2b::<U32>::new()
        .chain_update([DOMAIN_ENCRYPT])
        .chain_update(header.as_bytes())
        .chain_update(xk.as_bytes())
        .chain_update(epk)
        .chain_update(xpk.as_bytes())
        .finalize();
    let nonce = Blake2b::<U24>::new()
        .chain_update(epk)
        .chain_update(xpk.as_bytes())
        .finalize();

    let mut plaintext = *edk;
    chacha20::XChaCha20::new_from_slices(&cipher_key, &nonce)
        .map_err(|_| PasetoError::Crypto)?
        .apply_keystream(&mut plaintext);
    Ok(plaintext)
}
