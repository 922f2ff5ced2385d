//! Token structure, parsing, and serialization.
//!
//! A token is dot-separated text:
//!
//! ```text
//! v{3,4}.{local,public}.{payload}[.{footer}]
//! ```
//!
//! Parsing is purely structural. The header is matched against the
//! supported version/purpose pairs before the payload is even decoded, so
//! `v2.local.…` fails with [`PasetoError::UnsupportedToken`] rather than a
//! payload error. Cryptographic validation happens later, in
//! [`decrypt`](crate::core::token::local::decrypt) or
//! [`verify`](crate::core::token::public::verify).

pub mod local;
pub mod public;

use core::fmt::{self, Display};
use core::str::FromStr;

use base64::prelude::*;

use crate::core::error::{PasetoError, PasetoResult};
use crate::core::keys::{LocalKey, PublicKey, SecretKey};
use crate::core::version::Version;

// =============================================================================
// Purpose
// =============================================================================

/// What a token's payload protects: confidentiality or authenticity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    /// Symmetric encryption (`local`).
    Local,
    /// Asymmetric signing (`public`).
    Public,
}

impl Purpose {
    /// The purpose tag used in the token header.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Purpose::Local => "local",
            Purpose::Public => "public",
        }
    }

    fn from_tag(tag: &str) -> Option<Purpose> {
        match tag {
            "local" => Some(Purpose::Local),
            "public" => Some(Purpose::Public),
            _ => None,
        }
    }
}

// =============================================================================
// Token
// =============================================================================

/// A structurally valid PASETO token.
///
/// Holds the decoded payload and footer. Nothing about the token is
/// authenticated until it is opened with the matching key; in particular
/// [`Token::unverified_footer`] is attacker-controlled data until then.
///
/// # Example
///
/// ```rust
/// use pasetok::{Purpose, Token, Version};
///
/// let token: Token = "v4.local.AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAQAr68PS4AXe7If_ZgesdkUMvSwscFlAl1pk5HC0e8kApeaqMfGo_7OpBnwJOAbY9V7WU6abu74MmcUE8YWAiaArVI8XJ5hOb_4v9RmDkneN0S92dx0OW4pgy7omxgf3S8c3LlQg".parse()?;
/// assert_eq!(token.version(), Version::V4);
/// assert_eq!(token.purpose(), Purpose::Local);
/// # Ok::<(), pasetok::PasetoError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    version: Version,
    purpose: Purpose,
    payload: Vec<u8>,
    footer: Vec<u8>,
}

impl Token {
    pub(crate) fn from_parts(
        version: Version,
        purpose: Purpose,
        payload: Vec<u8>,
        footer: Vec<u8>,
    ) -> Self {
        Self {
            version,
            purpose,
            payload,
            footer,
        }
    }

    /// The token's version.
    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// The token's purpose.
    #[must_use]
    pub const fn purpose(&self) -> Purpose {
        self.purpose
    }

    /// The dotted header authenticated by every operation (e.g. `"v4.local."`).
    #[must_use]
    pub const fn header(&self) -> &'static str {
        header_for(self.version, self.purpose)
    }

    /// The decoded payload: ciphertext for `local`, message plus signature
    /// for `public`.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The decoded footer, empty if the token has none.
    ///
    /// The footer is only authenticated once the token is successfully
    /// opened; treat it as untrusted before that.
    #[must_use]
    pub fn unverified_footer(&self) -> &[u8] {
        &self.footer
    }
}

/// The dotted header for a version/purpose pair, fed into PAE by every
/// token operation.
pub(crate) const fn header_for(version: Version, purpose: Purpose) -> &'static str {
    match (version, purpose) {
        (Version::V3, Purpose::Local) => "v3.local.",
        (Version::V3, Purpose::Public) => "v3.public.",
        (Version::V4, Purpose::Local) => "v4.local.",
        (Version::V4, Purpose::Public) => "v4.public.",
    }
}

// =============================================================================
// Capability traits
// =============================================================================

/// A key that can issue tokens: a [`LocalKey`] by encrypting, a
/// [`SecretKey`] by signing.
///
/// The free functions in [`local`] and [`public`] are the usual entry
/// points. This trait is the seam for callers that are generic over how
/// their tokens are protected.
///
/// ```rust
/// use pasetok::{LocalKey, TokenIssuer, Version};
///
/// fn stamp(issuer: &dyn TokenIssuer) -> Result<String, pasetok::PasetoError> {
///     Ok(issuer.issue("{\"ok\":true}", b"", b"")?.to_string())
/// }
///
/// let key = LocalKey::generate(Version::V4)?;
/// assert!(stamp(&key)?.starts_with("v4.local."));
/// # Ok::<(), pasetok::PasetoError>(())
/// ```
pub trait TokenIssuer {
    /// The header of every token this key issues.
    fn issuing_header(&self) -> &'static str;

    /// Protects `message` in a new token.
    ///
    /// # Errors
    ///
    /// Returns [`PasetoError::Crypto`] if the underlying primitive fails.
    fn issue(&self, message: &str, footer: &[u8], implicit: &[u8]) -> PasetoResult<Token>;
}

/// A key that can open tokens: a [`LocalKey`] by decrypting, a
/// [`PublicKey`] by verifying.
pub trait TokenOpener {
    /// The header of every token this key accepts.
    fn opening_header(&self) -> &'static str;

    /// Recovers the message from `token`.
    ///
    /// # Errors
    ///
    /// Fails with the same errors as [`local::decrypt`] or
    /// [`public::verify`], notably [`PasetoError::Lucidity`] when the
    /// token's header does not match [`Self::opening_header`].
    fn open(&self, token: &Token, implicit: &[u8]) -> PasetoResult<String>;
}

impl TokenIssuer for LocalKey {
    fn issuing_header(&self) -> &'static str {
        header_for(self.version(), Purpose::Local)
    }

    fn issue(&self, message: &str, footer: &[u8], implicit: &[u8]) -> PasetoResult<Token> {
        local::encrypt(self, message, footer, implicit)
    }
}

impl TokenIssuer for SecretKey {
    fn issuing_header(&self) -> &'static str {
        header_for(self.version(), Purpose::Public)
    }

    fn issue(&self, message: &str, footer: &[u8], implicit: &[u8]) -> PasetoResult<Token> {
        public::sign(self, message, footer, implicit)
    }
}

impl TokenOpener for LocalKey {
    fn opening_header(&self) -> &'static str {
        header_for(self.version(), Purpose::Local)
    }

    fn open(&self, token: &Token, implicit: &[u8]) -> PasetoResult<String> {
        local::decrypt(self, token, implicit)
    }
}

impl TokenOpener for PublicKey {
    fn opening_header(&self) -> &'static str {
        header_for(self.version(), Purpose::Public)
    }

    fn open(&self, token: &Token, implicit: &[u8]) -> PasetoResult<String> {
        public::verify(self, token, implicit)
    }
}

impl FromStr for Token {
    type Err = PasetoError;

    fn from_str(s: &str) -> PasetoResult<Self> {
        let segments: Vec<&str> = s.split('.').collect();
        let (version_tag, purpose_tag, payload, footer) = match segments.as_slice() {
            [version, purpose, payload] => (*version, *purpose, *payload, None),
            [version, purpose, payload, footer] => (*version, *purpose, *payload, Some(*footer)),
            _ => return Err(PasetoError::Parse("malformed token")),
        };

        // Reject unsupported headers before looking at the payload.
        let (Some(version), Some(purpose)) = (
            Version::from_token_prefix(version_tag),
            Purpose::from_tag(purpose_tag),
        ) else {
            return Err(PasetoError::UnsupportedToken(format!(
                "{version_tag}.{purpose_tag}"
            )));
        };

        if payload.is_empty() {
            return Err(PasetoError::Parse("empty token payload"));
        }
        let payload = BASE64_URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| PasetoError::Parse("invalid base64 in token payload"))?;

        let footer = match footer {
            None | Some("") => Vec::new(),
            Some(footer) => BASE64_URL_SAFE_NO_PAD
                .decode(footer)
                .map_err(|_| PasetoError::Parse("invalid base64 in token footer"))?,
        };

        Ok(Self {
            version,
            purpose,
            payload,
            footer,
        })
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.header(),
            BASE64_URL_SAFE_NO_PAD.encode(&self.payload)
        )?;
        if !self.footer.is_empty() {
            write!(f, ".{}", BASE64_URL_SAFE_NO_PAD.encode(&self.footer))?;
        }
        Ok(())
    }
}
