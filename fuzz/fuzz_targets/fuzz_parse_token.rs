#![no_main]

use libfuzzer_sys::fuzz_target;
use pasetok::Token;

fuzz_target!(|data: &str| {
    // Structural token parsing should never panic.
    if let Ok(token) = data.parse::<Token>() {
        let _ = token.to_string();
    }
});
