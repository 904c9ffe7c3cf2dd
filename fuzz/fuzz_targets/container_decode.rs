#![no_main]
use huffpack::{container, decompress};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes through the full decode path: parse failures and
    // decode failures are fine, panics are not.
    if let Ok(payload) = container::from_bytes(data) {
        let _ = decompress(&payload);
    }
});
