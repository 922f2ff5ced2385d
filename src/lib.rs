//! PASETO tokens and PASERK key management for versions 3 and 4.
//!
//! PASETO (Platform-Agnostic Security Tokens) is a fixed-suite alternative
//! to JOSE: each protocol version names exactly one cipher suite, and a
//! token is either `local` (encrypted) or `public` (signed), with nothing
//! negotiable at runtime. PASERK is the companion key-serialization
//! format, covering raw keys, hashed identifiers, and three ways of
//! protecting a key at rest.
//!
//! # Quick Start
//!
//! ```rust
//! use pasetok::{token, LocalKey, Version};
//!
//! let key = LocalKey::generate(Version::V4)?;
//!
//! let token = token::local::encrypt(&key, "{\"sub\":\"quickstart\"}", b"", b"")?;
//! let message = token::local::decrypt(&key, &token, b"")?;
//! assert_eq!(message, "{\"sub\":\"quickstart\"}");
//! # Ok::<(), pasetok::PasetoError>(())
//! ```
//!
//! # Versions
//!
//! | Version | Suite | `local` tokens | `public` tokens |
//! |---------|-------|----------------|-----------------|
//! | v3 | NIST Modern | AES-256-CTR + HMAC-SHA384 | ECDSA over P-384 |
//! | v4 | Sodium Modern (recommended) | XChaCha20 + BLAKE2b | Ed25519 |
//!
//! # PASERK forms
//!
//! | Form | Format | Recovered with |
//! |------|--------|----------------|
//! | raw | `k{3,4}.{local,secret,public}.{data}` | nothing |
//! | identifier | `k{3,4}.{lid,sid,pid}.{digest}` | (names a key, holds none) |
//! | wrapped | `k{3,4}.{local,secret}-wrap.pie.{data}` | another local key |
//! | password | `k{3,4}.{local,secret}-pw.{data}` | a password |
//! | sealed | `k{3,4}.seal.{data}` | the recipient's secret key |
//!
//! [`from_paserk`] deserializes any protected form given the matching
//! [`Credential`]; the raw key types parse their own strings via
//! `from_paserk` constructors and serialize with `to_paserk`.
//!
//! # Security
//!
//! - Secret key material is zeroized on drop and redacted from Debug output
//! - Tags and signatures are verified before anything is decrypted or trusted
//! - Secret comparisons are constant-time
//!
//! # Modules
//!
//! - [`token`] - encrypt/decrypt and sign/verify for tokens
//! - [`operations`] - key wrapping, password wrapping, and sealing
//! - [`core`] - the full set of types behind the re-exports
//! - [`prelude`] - one-line import of the common surface

pub mod core;
pub mod prelude;

// Re-export commonly used items at crate root
pub use core::error::{PasetoError, PasetoResult};
pub use core::keys::{Key, KeyId, KeyKind, LocalKey, PublicKey, SecretKey};
pub use core::pae::pre_auth_encode;
pub use core::paserk::{from_paserk, Credential, Paserk, WrapKind, WrapProtocol};
pub use core::token::{Purpose, Token, TokenIssuer, TokenOpener};
pub use core::version::Version;
pub use core::{operations, token};
