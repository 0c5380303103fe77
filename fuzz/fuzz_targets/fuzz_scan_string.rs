#![no_main]
use jscan::fuzz_helpers;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = fuzz_helpers::scan_string(data, 0);
});
