#![no_main]
use jscan::fuzz_helpers;
use libfuzzer_sys::fuzz_target;

// Exercises the fast skip-one dispatcher: literal/number/string/container
// routing and bracket/quote balance tracking.
fuzz_target!(|data: &[u8]| {
    let _ = fuzz_helpers::skip_one(data, 0);
});
