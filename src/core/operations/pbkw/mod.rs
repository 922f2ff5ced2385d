//! Password-based key wrapping (`local-pw`, `secret-pw`).
//!
//! The password is stretched into a 32-byte pre-key (v3: PBKDF2-SHA384;
//! v4: Argon2id), which a short digest splits into an encryption key and
//! an authentication key under the domain bytes `0xFF` and `0xFE`. Cost
//! parameters travel inside the wrapped data, so unwrapping needs only
//! the password.

mod argon2_impl;
mod pbkdf2_impl;

use zeroize::Zeroize;

use crate::core::error::{PasetoError, PasetoResult};
use crate::core::keys::{Key, LocalKey, SecretKey};
use crate::core::paserk::{pw_header, Paserk, WrapKind};
use crate::core::version::Version;

/// Domain separator for the encryption-key digest.
const DOMAIN_ENCRYPT: u8 = 0xFF;
/// Domain separator for the authentication-key digest.
const DOMAIN_AUTH: u8 = 0xFE;

/// Cost parameters for the password stretch.
///
/// The variant decides the KDF and must match the wrapped key's version:
/// PBKDF2-SHA384 for v3, Argon2id for v4. The presets trade wrap time
/// against brute-force resistance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PbkwParams {
    /// PBKDF2-SHA384 cost (v3).
    Pbkdf2 {
        /// Number of PBKDF2 iterations.
        iterations: u32,
    },
    /// Argon2id cost (v4).
    Argon2id {
        /// Memory cost in KiB.
        memory_kib: u32,
        /// Number of passes.
        iterations: u32,
        /// Degree of parallelism.
        parallelism: u32,
    },
}

impl PbkwParams {
    /// Fast profile, suitable for interactive logins.
    ///
    /// v3: 100,000 iterations. v4: 64 MiB, 2 passes.
    #[must_use]
    pub const fn interactive(version: Version) -> Self {
        match version {
            Version::V3 => PbkwParams::Pbkdf2 {
                iterations: 100_000,
            },
            Version::V4 => PbkwParams::Argon2id {
                memory_kib: 64 * 1024,
                iterations: 2,
                parallelism: 1,
            },
        }
    }

    /// Balanced profile for most applications.
    ///
    /// v3: 310,000 iterations. v4: 256 MiB, 3 passes.
    #[must_use]
    pub const fn moderate(version: Version) -> Self {
        match version {
            Version::V3 => PbkwParams::Pbkdf2 {
                iterations: 310_000,
            },
            Version::V4 => PbkwParams::Argon2id {
                memory_kib: 256 * 1024,
                iterations: 3,
                parallelism: 1,
            },
        }
    }

    /// Slow profile for long-term key storage.
    ///
    /// v3: 600,000 iterations. v4: 1 GiB, 4 passes.
    #[must_use]
    pub const fn sensitive(version: Version) -> Self {
        match version {
            Version::V3 => PbkwParams::Pbkdf2 {
                iterations: 600_000,
            },
            Version::V4 => PbkwParams::Argon2id {
                memory_kib: 1024 * 1024,
                iterations: 4,
                parallelism: 1,
            },
        }
    }

    /// The version whose KDF this variant selects.
    #[must_use]
    pub const fn version(&self) -> Version {
        match self {
            PbkwParams::Pbkdf2 { .. } => Version::V3,
            PbkwParams::Argon2id { .. } => Version::V4,
        }
    }
}

/// Wraps a key under a password.
///
/// The params variant must match the key's version. Only local and secret
/// keys have a password-protected form.
///
/// # Arguments
///
/// * `password` - The password protecting the key
/// * `key` - The key to wrap
/// * `params` - KDF cost parameters, carried inside the wrapped data
///
/// # Errors
///
/// * [`PasetoError::IncorrectKeyType`] - `key` is public
/// * [`PasetoError::Lucidity`] - params variant and key version disagree
/// * [`PasetoError::Crypto`] - the CSPRNG, the KDF, or a primitive fails
///
/// # Example
///
/// ```rust
/// use pasetok::operations::pbkw::{self, PbkwParams};
/// use pasetok::{from_paserk, Credential, Key, LocalKey, Version};
///
/// let key = LocalKey::generate(Version::V4)?;
/// let params = PbkwParams::Argon2id {
///     memory_kib: 8,
///     iterations: 1,
///     parallelism: 1,
/// };
///
/// let wrapped = pbkw::wrap(b"hunter2", &Key::Local(key.clone()), &params)?.to_string();
/// assert!(wrapped.starts_with("k4.local-pw."));
///
/// let recovered = from_paserk(&wrapped, Credential::Password(b"hunter2"))?;
/// assert_eq!(recovered, Key::Local(key));
/// # Ok::<(), pasetok::PasetoError>(())
/// ```
pub fn wrap(password: &[u8], key: &Key, params: &PbkwParams) -> PasetoResult<Paserk> {
    let (kind, plaintext) = match key {
        Key::Local(local) => (WrapKind::Local, local.as_bytes().as_slice()),
        Key::Secret(secret) => (WrapKind::Secret, secret.as_bytes()),
        Key::Public(_) => return Err(PasetoError::IncorrectKeyType),
    };
    if params.version() != key.version() {
        return Err(PasetoError::Lucidity);
    }

    let version = key.version();
    let header = pw_header(version, kind);

    let data = match *params {
        PbkwParams::Pbkdf2 { iterations } => {
            pbkdf2_impl::wrap(password, &header, iterations, plaintext)?
        }
        PbkwParams::Argon2id {
            memory_kib,
            iterations,
            parallelism,
        } => argon2_impl::wrap(password, &header, memory_kib, iterations, parallelism, plaintext)?,
    };

    Ok(Paserk::PasswordProtected {
        version,
        kind,
        data,
    })
}

/// Unwraps a key wrapped by [`wrap`].
///
/// Cost parameters are read back from the wrapped data; only the password
/// is supplied.
///
/// # Errors
///
/// * [`PasetoError::UnknownOperation`] - `paserk` is not a
///   password-protected string
/// * [`PasetoError::Parse`] - the data is too short for its fields
/// * [`PasetoError::Crypto`] - the inline cost parameters are unusable
/// * [`PasetoError::InvalidAuthenticator`] - tag mismatch (wrong password
///   or tampered data)
/// * [`PasetoError::InvalidKeyPair`] - the decrypted bytes do not form a
///   valid key
pub fn unwrap(password: &[u8], paserk: &Paserk) -> PasetoResult<Key> {
    let (version, kind, data) = match paserk {
        Paserk::PasswordProtected {
            version,
            kind,
            data,
        } => (*version, *kind, data.as_slice()),
        _ => return Err(PasetoError::UnknownOperation),
    };

    let header = pw_header(version, kind);
    let mut plaintext = match version {
        Version::V3 => pbkdf2_impl::unwrap(password, &header, data)?,
        Version::V4 => argon2_impl::unwrap(password, &header, data)?,
    };

    let key = match kind {
        WrapKind::Local => LocalKey::from_slice(version, &plaintext).map(Key::Local),
        WrapKind::Secret => SecretKey::from_slice(version, &plaintext).map(Key::Secret),
    };
    plaintext.zeroize();
    key
}
