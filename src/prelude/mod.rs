//! One-line import of the common surface.
//!
//! # Usage
//!
//! ```rust
//! use pasetok::prelude::*;
//!
//! let key = LocalKey::generate(Version::V4)?;
//! assert_eq!(key.id().kind(), KeyKind::Local);
//! # Ok::<(), PasetoError>(())
//! ```

pub use crate::core::error::{PasetoError, PasetoResult};
pub use crate::core::keys::{Key, KeyId, KeyKind, LocalKey, PublicKey, SecretKey};
pub use crate::core::operations::pbkw::PbkwParams;
pub use crate::core::paserk::{from_paserk, Credential, Paserk};
pub use crate::core::token::{Purpose, Token, TokenIssuer, TokenOpener};
pub use crate::core::version::Version;
