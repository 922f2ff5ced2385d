#![no_main]

use libfuzzer_sys::fuzz_target;
use pasetok::{KeyId, Paserk};

fuzz_target!(|data: &str| {
    // PASERK grammar should never panic, key string or identifier.
    if let Ok(paserk) = data.parse::<Paserk>() {
        let _ = paserk.to_string();
    }
    let _ = data.parse::<KeyId>();
});
