#![no_main]

use libfuzzer_sys::fuzz_target;
use pasetok::{from_paserk, Credential, LocalKey, SecretKey, Version};

fuzz_target!(|data: &str| {
    // Deserializing attacker-shaped strings should fail cleanly, never
    // panic. Password strings carry their own KDF cost, so that credential
    // stays out of the fuzz loop.
    let Ok(wrapping) = LocalKey::from_slice(Version::V4, &[0x42; 32]) else {
        return;
    };
    let Ok(secret) = SecretKey::generate(Version::V4) else {
        return;
    };
    let _ = from_paserk(data, Credential::None);
    let _ = from_paserk(data, Credential::WrappingKey(&wrapping));
    let _ = from_paserk(data, Credential::UnsealingKey(&secret));
});
