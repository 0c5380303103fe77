#![no_main]
use jscan::{parse_lazy, Path, VecTape};
use libfuzzer_sys::fuzz_target;

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

    let mut tape = VecTape::new();
    let _ = parse_lazy(json, &path, &mut tape);
});
