//! Known-answer vectors and end-to-end flows over the public API.
//!
//! Token and key vectors live in [`vectors`] as embedded JSON. Operations
//! with randomized output (wrapping, password wrapping, sealing) are
//! exercised as serialize-parse-recover roundtrips instead.

mod vectors;

use pasetok::operations::pbkw::{self, PbkwParams};
use pasetok::operations::{pke, wrap};
use pasetok::{
    from_paserk, token, Credential, Key, KeyId, KeyKind, LocalKey, PasetoError, PasetoResult,
    PublicKey, SecretKey, Token, Version,
};
use vectors::{hex_decode, load, KeyVector, TestVectorSuite, TokenVector};

const MESSAGE: &str = "{\"data\":\"this is a secret message\",\"exp\":\"2022-01-01T00:00:00+00:00\"}";
const FOOTER: &[u8] = b"{\"kid\":\"zVhMiPBP9fRf2snEcT7gFTioeA9COcNy9DfgL1W60haN\"}";
const IMPLICIT: &[u8] = b"{\"scope\":\"integration\"}";
const PASSWORD: &[u8] = b"correct horse battery staple";

// Costs far below the presets so the suite stays quick.
fn fast_params(version: Version) -> PbkwParams {
    match version {
        Version::V3 => PbkwParams::Pbkdf2 { iterations: 1_000 },
        Version::V4 => PbkwParams::Argon2id {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        },
    }
}

// =============================================================================
// Token vectors
// =============================================================================

#[test]
fn test_v4_local_token_vectors() {
    let suite: TestVectorSuite<TokenVector> = load(vectors::V4_LOCAL_TOKENS);
    for vector in &suite.tests {
        let label = format!("{}/{}", suite.name, vector.name);
        let key = LocalKey::from_slice(Version::V4, &hex_decode(&vector.key))
            .unwrap_or_else(|e| panic!("{label}: bad key material: {e}"));
        let token: Token = vector
            .token
            .parse()
            .unwrap_or_else(|e| panic!("{label}: token failed to parse: {e}"));

        let result = token::local::decrypt(&key, &token, vector.implicit_assertion.as_bytes());
        if vector.expect_fail {
            assert!(
                matches!(result, Err(PasetoError::InvalidAuthenticator)),
                "{label}: forged token was accepted",
            );
        } else {
            let message = result.unwrap_or_else(|e| panic!("{label}: decrypt failed: {e}"));
            assert_eq!(Some(message.as_str()), vector.payload.as_deref(), "{label}");
            assert_eq!(token.unverified_footer(), vector.footer.as_bytes(), "{label}");
        }
    }
}

#[test]
fn test_v4_public_token_vectors() {
    let suite: TestVectorSuite<TokenVector> = load(vectors::V4_PUBLIC_TOKENS);
    for vector in &suite.tests {
        let label = format!("{}/{}", suite.name, vector.name);
        let key = PublicKey::from_slice(Version::V4, &hex_decode(&vector.key))
            .unwrap_or_else(|e| panic!("{label}: bad key material: {e}"));
        let token: Token = vector
            .token
            .parse()
            .unwrap_or_else(|e| panic!("{label}: token failed to parse: {e}"));

        let result = token::public::verify(&key, &token, vector.implicit_assertion.as_bytes());
        if vector.expect_fail {
            assert!(
                matches!(result, Err(PasetoError::InvalidSignature)),
                "{label}: forged token was accepted",
            );
        } else {
            let message = result.unwrap_or_else(|e| panic!("{label}: verify failed: {e}"));
            assert_eq!(Some(message.as_str()), vector.payload.as_deref(), "{label}");
            assert_eq!(token.unverified_footer(), vector.footer.as_bytes(), "{label}");
        }
    }
}

// =============================================================================
// Key vectors
// =============================================================================

fn check_key_vectors(version: Version, json: &'static str) {
    let suite: TestVectorSuite<KeyVector> = load(json);
    for vector in &suite.tests {
        let label = format!("{}/{}", suite.name, vector.name);
        let bytes = hex_decode(&vector.key);
        let key = match vector.kind.as_str() {
            "local" => LocalKey::from_slice(version, &bytes).map(Key::Local),
            "secret" => SecretKey::from_slice(version, &bytes).map(Key::Secret),
            "public" => PublicKey::from_slice(version, &bytes).map(Key::Public),
            other => panic!("{label}: unknown key kind {other:?}"),
        }
        .unwrap_or_else(|e| panic!("{label}: bad key material: {e}"));

        assert_eq!(key.to_paserk(), vector.paserk, "{label}: serialization");
        assert_eq!(key.id().to_string(), vector.id, "{label}: identifier");

        let recovered = from_paserk(&vector.paserk, Credential::None)
            .unwrap_or_else(|e| panic!("{label}: deserialization failed: {e}"));
        assert_eq!(recovered, key, "{label}: roundtrip");

        let id: KeyId = vector
            .id
            .parse()
            .unwrap_or_else(|e| panic!("{label}: identifier failed to parse: {e}"));
        assert_eq!(id, key.id(), "{label}: identifier roundtrip");
        assert_eq!(id.version(), version, "{label}");
    }
}

#[test]
fn test_k4_key_vectors() {
    check_key_vectors(Version::V4, vectors::K4_KEYS);
}

#[test]
fn test_k3_key_vectors() {
    check_key_vectors(Version::V3, vectors::K3_KEYS);
}

#[test]
fn test_secret_vectors_derive_public_vectors() {
    // Each suite's secret and public entries hold the same keypair.
    for (version, json) in [
        (Version::V3, vectors::K3_KEYS),
        (Version::V4, vectors::K4_KEYS),
    ] {
        let suite: TestVectorSuite<KeyVector> = load(json);
        let secret = suite
            .tests
            .iter()
            .find(|v| v.kind == "secret")
            .expect("suite has a secret vector");
        let public = suite
            .tests
            .iter()
            .find(|v| v.kind == "public")
            .expect("suite has a public vector");

        let key = SecretKey::from_slice(version, &hex_decode(&secret.key)).expect("secret key");
        assert_eq!(key.public_key().to_paserk(), public.paserk, "{}", suite.name);
    }
}

// =============================================================================
// End-to-end flows
// =============================================================================

#[test]
fn test_local_token_roundtrip() -> PasetoResult<()> {
    for version in [Version::V3, Version::V4] {
        let key = LocalKey::generate(version)?;
        let text = token::local::encrypt(&key, MESSAGE, FOOTER, IMPLICIT)?.to_string();

        let token: Token = text.parse()?;
        assert_eq!(token.version(), version);
        assert_eq!(token.unverified_footer(), FOOTER);
        assert_eq!(token::local::decrypt(&key, &token, IMPLICIT)?, MESSAGE);
    }
    Ok(())
}

#[test]
fn test_public_token_roundtrip() -> PasetoResult<()> {
    for version in [Version::V3, Version::V4] {
        let key = SecretKey::generate(version)?;
        let text = token::public::sign(&key, MESSAGE, FOOTER, IMPLICIT)?.to_string();

        let token: Token = text.parse()?;
        assert_eq!(token.version(), version);
        assert_eq!(
            token::public::verify(&key.public_key(), &token, IMPLICIT)?,
            MESSAGE
        );
    }
    Ok(())
}

#[test]
fn test_wrap_roundtrip_through_strings() -> PasetoResult<()> {
    for version in [Version::V3, Version::V4] {
        let prefix = match version {
            Version::V3 => "k3",
            Version::V4 => "k4",
        };
        let wrapping = LocalKey::generate(version)?;
        for key in [
            Key::Local(LocalKey::generate(version)?),
            Key::Secret(SecretKey::generate(version)?),
        ] {
            let wrapped = wrap::pie::wrap(&wrapping, &key)?;
            assert_eq!(
                wrapped.header(),
                format!("{prefix}.{}-wrap.pie.", key.kind().type_tag())
            );

            let recovered = from_paserk(&wrapped.to_string(), Credential::WrappingKey(&wrapping))?;
            assert_eq!(recovered, key);
        }
    }
    Ok(())
}

#[test]
fn test_password_roundtrip_through_strings() -> PasetoResult<()> {
    for version in [Version::V3, Version::V4] {
        let params = fast_params(version);
        for key in [
            Key::Local(LocalKey::generate(version)?),
            Key::Secret(SecretKey::generate(version)?),
        ] {
            let text = pbkw::wrap(PASSWORD, &key, &params)?.to_string();

            let recovered = from_paserk(&text, Credential::Password(PASSWORD))?;
            assert_eq!(recovered, key);

            assert!(matches!(
                from_paserk(&text, Credential::Password(b"12345")),
                Err(PasetoError::InvalidAuthenticator)
            ));
        }
    }
    Ok(())
}

#[test]
fn test_seal_roundtrip_through_strings() -> PasetoResult<()> {
    for version in [Version::V3, Version::V4] {
        let prefix = match version {
            Version::V3 => "k3.seal.",
            Version::V4 => "k4.seal.",
        };
        let recipient = SecretKey::generate(version)?;
        let key = LocalKey::generate(version)?;

        let text = pke::seal(&recipient.public_key(), &key)?.to_string();
        assert!(text.starts_with(prefix));

        let recovered = from_paserk(&text, Credential::UnsealingKey(&recipient))?;
        assert_eq!(recovered, Key::Local(key));
    }
    Ok(())
}

#[test]
fn test_key_id_footer_flow() -> PasetoResult<()> {
    // The usual key-lookup pattern: identifier in the footer, key by id.
    let key = LocalKey::generate(Version::V4)?;
    let footer = key.id().to_string();
    let text = token::local::encrypt(&key, MESSAGE, footer.as_bytes(), b"")?.to_string();

    let token: Token = text.parse()?;
    let hint = std::str::from_utf8(token.unverified_footer()).expect("footer is UTF-8");
    let id: KeyId = hint.parse()?;
    assert_eq!(id, key.id());
    assert_eq!(id.kind(), KeyKind::Local);

    assert_eq!(token::local::decrypt(&key, &token, b"")?, MESSAGE);
    Ok(())
}

// =============================================================================
// Rejection paths
// =============================================================================

#[test]
fn test_token_version_mismatch_is_rejected() -> PasetoResult<()> {
    let bytes = [0x42u8; 32];
    let v4_key = LocalKey::from_slice(Version::V4, &bytes)?;
    let v3_key = LocalKey::from_slice(Version::V3, &bytes)?;

    let token = token::local::encrypt(&v4_key, MESSAGE, b"", b"")?;
    assert!(matches!(
        token::local::decrypt(&v3_key, &token, b""),
        Err(PasetoError::Lucidity)
    ));
    Ok(())
}

#[test]
fn test_unsupported_token_headers() {
    for (input, header) in [("v0.public.x", "v0.public"), ("v2.local.AAAAAAAA", "v2.local")] {
        assert!(
            matches!(
                input.parse::<Token>(),
                Err(PasetoError::UnsupportedToken(h)) if h == header
            ),
            "{input} was not rejected as unsupported",
        );
    }
}

#[test]
fn test_credential_mismatch_is_rejected() -> PasetoResult<()> {
    let key = LocalKey::generate(Version::V4)?;
    let wrapping = LocalKey::generate(Version::V4)?;
    let wrapped = wrap::pie::wrap(&wrapping, &Key::Local(key.clone()))?.to_string();

    // A wrapped string presented with a password.
    assert!(matches!(
        from_paserk(&wrapped, Credential::Password(PASSWORD)),
        Err(PasetoError::UnknownOperation)
    ));
    // A raw string presented with a wrapping key.
    assert!(matches!(
        from_paserk(&key.to_paserk(), Credential::WrappingKey(&wrapping)),
        Err(PasetoError::UnknownOperation)
    ));
    // Identifiers name keys; they never carry key material.
    assert!(matches!(
        from_paserk(&key.id().to_string(), Credential::None),
        Err(PasetoError::UnknownOperation)
    ));
    Ok(())
}

#[test]
fn test_unseal_with_wrong_version_secret() -> PasetoResult<()> {
    let recipient = SecretKey::generate(Version::V4)?;
    let sealed = pke::seal(&recipient.public_key(), &LocalKey::generate(Version::V4)?)?;

    let v3_secret = SecretKey::generate(Version::V3)?;
    assert!(matches!(
        from_paserk(&sealed.to_string(), Credential::UnsealingKey(&v3_secret)),
        Err(PasetoError::IncorrectKeyType)
    ));
    Ok(())
}

#[test]
fn test_prelude_covers_common_surface() {
    use pasetok::prelude::*;

    let key = LocalKey::generate(Version::V4).unwrap();
    let id: KeyId = key.id();
    assert_eq!(id.kind(), KeyKind::Local);

    // The capability traits come along, so trait methods resolve.
    let token = key.issue("{\"via\":\"prelude\"}", b"", b"").unwrap();
    assert_eq!(key.opening_header(), "v4.local.");
    assert_eq!(key.open(&token, b"").unwrap(), "{\"via\":\"prelude\"}");
}
