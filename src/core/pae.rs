//! Pre-Authentication Encoding (PAE).
//!
//! Every authenticated byte string in PASETO runs through PAE before it
//! reaches a MAC or signature. The encoding is an unambiguous, injective
//! flattening of a list of byte strings:
//!
//! ```text
//! PAE(pieces) = LE64(count) || LE64(len(p1)) || p1 || LE64(len(p2)) || p2 || ...
//! ```
//!
//! Length prefixes make the encoding prefix-free, so no two distinct piece
//! lists can collide under concatenation.

/// Encodes a list of byte strings for authentication.
///
/// # Arguments
///
/// * `pieces` - The byte strings to encode, in order
///
/// # Returns
///
/// The encoded buffer: an 8-byte little-endian piece count followed by each
/// piece prefixed with its 8-byte little-endian length.
///
/// # Example
///
/// ```
/// use pasetok::pre_auth_encode;
///
/// let encoded = pre_auth_encode(&[b"test"]);
/// assert_eq!(
///     encoded,
///     b"\x01\x00\x00\x00\x00\x00\x00\x00\x04\x00\x00\x00\x00\x00\x00\x00test"
/// );
/// ```
#[must_use]
pub fn pre_auth_encode(pieces: &[&[u8]]) -> Vec<u8> {
    let total: usize = pieces.iter().map(|p| p.len()).sum();
    let mut out = Vec::with_capacity(8 + 8 * pieces.len() + total);

    out.extend_from_slice(&(pieces.len() as u64).to_le_bytes());
    for piece in pieces {
        out.extend_from_slice(&(piece.len() as u64).to_le_bytes());
        out.extend_from_slice(piece);
    }
    out
}
