#![no_main]
use jscan::fuzz_helpers;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = fuzz_helpers::skip_whitespace(data, 0);
    for offset in [1, 7, 8, 15, 16, 31, 32] {
        if offset < data.len() {
            let _ = fuzz_helpers::skip_whitespace(data, offset);
        }
    }
});
