//! Key identifier digests.
//!
//! An identifier is a 264-bit (33-byte) digest over the identifier header
//! and the full PASERK string of the key:
//!
//! - v3: SHA-384(header || paserk), truncated to 33 bytes
//! - v4: BLAKE2b-264(header || paserk)
//!
//! 264 bits keeps the encoded form 44 base64url characters with no
//! trailing padding bits.

use crate::core::version::Version;

/// ID digest size (33 bytes = 264 bits).
pub(crate) const ID_DIGEST_LEN: usize = 33;

/// Computes the identifier digest for a key.
///
/// `header` is the identifier header (e.g. `"k4.lid."`) and `paserk` the
/// full PASERK string of the key being identified.
#[must_use]
pub(crate) fn compute_id(version: Version, header: &str, paserk: &str) -> [u8; ID_DIGEST_LEN] {
    match version {
        Version::V3 => {
            use sha2::{Digest, Sha384};

            let digest = Sha384::new()
                .chain_update(header.as_bytes())
                .chain_update(paserk.as_bytes())
                .finalize();

            let mut out = [0u8; ID_DIGEST_LEN];
            out.copy_from_slice(&digest[..ID_DIGEST_LEN]);
            out
        }
        Version::V4 => {
            use blake2::digest::consts::U33;
            use blake2::{Blake2b, Digest};

            type Blake2b264 = Blake2b<U33>;

            let digest = Blake2b264::new()
                .chain_update(header.as_bytes())
                .chain_update(paserk.as_bytes())
                .finalize();

            let mut out = [0u8; ID_DIGEST_LEN];
            out.copy_from_slice(&digest);
            out
        }
    }
}
