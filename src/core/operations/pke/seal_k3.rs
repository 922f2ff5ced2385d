//! P-384 sealing.
//!
//! An ephemeral ECDH exchange against the recipient's point feeds SHA-384
//! key derivation. The digest input is the domain byte, the header, the
//! raw shared x coordinate, and both compressed points; the encryption
//! digest splits into an AES-256 key and counter, the authentication
//! digest keys an HMAC-SHA384 tag over `header || epk || ciphertext`.

use zeroize::Zeroize;

use crate::core::error::{PasetoError, PasetoResult};

use super::{DOMAIN_AUTH, DOMAIN_ENCRYPT};

const TAG_LEN: usize = 48;
const EPK_LEN: usize = 49;

pub(super) fn seal(recipient: &[u8], key: &[u8; 32], header: &str) -> PasetoResult<Vec<u8>> {
    use ctr::cipher::{KeyIvInit, StreamCipher};
    use hmac::Mac;
    use p384::elliptic_curve::sec1::ToEncodedPoint;
    use sha2::Digest;

    let recipient_key =
        p384::PublicKey::from_sec1_bytes(recipient).map_err(|_| PasetoError::InvalidKeyPair)?;

    let ephemeral = ephemeral_secret()?;
    let epk = ephemeral.public_key().to_encoded_point(true);
    let shared =
        p384::ecdh::diffie_hellman(ephemeral.to_nonzero_scalar(), recipient_key.as_affine());

    let okm = sha2::Sha384::new()
        .chain_update([DOMAIN_ENCRYPT])
        .chain_update(header.as_bytes())
        .chain_update(shared.raw_secret_bytes())
        .chain_update(epk.as_bytes())
        .chain_update(recipient)
        .finalize();
    let (cipher_key, counter) = okm.split_at(32);

    let auth_key = sha2::Sha384::new()
        .chain_update([DOMAIN_AUTH])
        .chain_update(header.as_bytes())
        .chain_update(shared.raw_secret_bytes())
        .chain_update(epk.as_bytes())
        .chain_update(recipient)
        .finalize();

    let mut edk = *key;
    ctr::Ctr64BE::<aes::Aes256>::new_from_slices(cipher_key, counter)
        .map_err(|_| PasetoError::Crypto)?
        .apply_keystream(&mut edk);

    let tag = hmac::Hmac::<sha2::Sha384>::new_from_slice(&auth_key)
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
    use ctr::cipher::{KeyIvInit, StreamCipher};
    use hmac::Mac;
    use p384::elliptic_curve::sec1::ToEncodedPoint;
    use sha2::Digest;

    let (tag, rest) = data
        .split_first_chunk::<TAG_LEN>()
        .ok_or(PasetoError::Parse("truncated sealed key"))?;
    let (epk, edk) = rest
        .split_first_chunk::<EPK_LEN>()
        .ok_or(PasetoError::Parse("truncated sealed key"))?;
    let edk: &[u8; 32] = edk
        .try_into()
        .map_err(|_| PasetoError::Parse("sealed key length mismatch"))?;

    let secret_key =
        p384::SecretKey::from_slice(secret).map_err(|_| PasetoError::InvalidKeyPair)?;
    let recipient = secret_key.public_key().to_encoded_point(true);

    let epk_key =
        p384::PublicKey::from_sec1_bytes(epk).map_err(|_| PasetoError::Crypto)?;
    let shared = p384::ecdh::diffie_hellman(secret_key.to_nonzero_scalar(), epk_key.as_affine());

    let auth_key = sha2::Sha384::new()
        .chain_update([DOMAIN_AUTH])
        .chain_update(header.as_bytes())
        .chain_update(shared.raw_secret_bytes())
        .chain_update(epk)
        .chain_update(recipient.as_bytes())
        .finalize();

    hmac::Hmac::<sha2::Sha384>::new_from_slice(&auth_key)
        .map_err(|_| PasetoError::Crypto)?
        .chain_update(header.as_bytes())
        .chain_update(epk)
        .chain_update(edk)
        .verify_slice(tag)
        .map_err(|_| PasetoError::InvalidAuthenticator)?;

    let okm = sha2::Sha384::new()
        .chain_update([DOMAIN_ENCRYPT])
        .chain_update(header.as_bytes())
        .chain_update(shared.raw_secret_bytes())
        .chain_update(epk)
        .chain_update(recipient.as_bytes())
        .finalize();
    let (cipher_key, counter) = okm.split_at(32);

    let mut plaintext = *edk;
    ctr::Ctr64BE::<aes::Aes256>::new_from_slices(cipher_key, counter)
        .map_err(|_| PasetoError::Crypto)?
        .apply_keystream(&mut plaintext);
    Ok(plaintext)
}

/// Draws P-384 scalars until one lands in the valid range.
fn ephemeral_secret() -> PasetoResult<p384::SecretKey> {
    loop {
        let mut candidate = [0u8; 48];
        crate::core::fill_random(&mut candidate)?;
        if let Ok(secret) = p384::SecretKey::from_slice(&candidate) {
            candidate.zeroize();
            return Ok(secret);
        }
    }
}
