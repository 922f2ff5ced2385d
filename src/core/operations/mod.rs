//! Key-management operations over PASERK strings.
//!
//! - [`wrap`] - key wrapping under a symmetric key (PIE protocol)
//! - [`pbkw`] - password-based key wrapping (PBKDF2 / Argon2id)
//! - [`pke`] - sealing a local key to a public key
//!
//! The `id` module backs [`KeyId`](crate::core::keys::KeyId) computation
//! and has no public surface of its own.

pub(crate) mod id;

pub mod pbkw;
pub mod pke;
pub mod wrap;
