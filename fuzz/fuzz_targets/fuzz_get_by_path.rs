#![no_main]
use jscan::{get_by_path_with, GrammarValidator, Path, ScanConfig};
use libfuzzer_sys::fuzz_target;

// The first NUL-terminated segment of the input is interpreted as a dotted
// path, the remainder as the JSON document. Exercises the validating
// descent end-to-end: path parsing, object/array descent, and full
// recursive grammar checking of the destination value.
fuzz_target!(|data: &[u8]| {
    let split = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    let (path_bytes, rest) = data.split_at(split);
    let json = if rest.is_empty() { rest } else { &rest[1..] };

    let Ok(path_str) = std::str::from_utf8(path_bytes) else {
        return;
    };
    let Ok(path) = Path::parse(path_str) else {
        return;
    };

    let mut sm = GrammarValidator::new(ScanConfig::default());
    let _ = get_by_path_with(json, &path, &mut sm);
});
