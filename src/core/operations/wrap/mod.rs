//! Key wrapping: protecting one key with another symmetric key.
//!
//! The only standardized protocol is PIE, covering the `local-wrap.pie`
//! and `secret-wrap.pie` PASERK types.

pub mod pie;
