//! Byte primitives: whitespace skipping and literal matching.
//!
//! Grounded in the teacher crate's `DirectParser::skip_whitespace`
//! (`direct_decode.rs`) and the original `advance_ns` from
//! `spacewander/sonic`'s `get_by_path.c` / `parse_lazy.c`.

use crate::error::{ErrorCode, ScanError};

#[inline]
fn is_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Advance `*pos` past ASCII whitespace and return the first non-whitespace
/// byte, leaving `*pos` one past it. Returns `0` (NUL) on EOF; callers must
/// check for that sentinel themselves (it mirrors the original C contract,
/// where `0` can never be a legal JSON byte at a value-starting position).
#[inline]
pub fn advance_ns(src: &[u8], pos: &mut usize) -> u8 {
    let mut i = *pos;
    while i < src.len() && is_ws(src[i]) {
        i += 1;
    }
    if i >= src.len() {
        *pos = i;
        return 0;
    }
    let c = src[i];
    *pos = i + 1;
    c
}

/// Skip ASCII whitespace without consuming the non-whitespace byte found.
#[inline]
pub fn skip_whitespace(src: &[u8], pos: &mut usize) {
    while *pos < src.len() && is_ws(src[*pos]) {
        *pos += 1;
    }
}

/// Match a 4-or-5-byte literal (`true`, `false`, `null`) whose first byte
/// (`t`/`f`/`n`) was already consumed at `*pos - 1`. `tail` is the
/// remainder to match (`"rue"`, `"alse"`, `"ull"`). On success `*pos` is
/// advanced past the whole literal and the function returns its start
/// offset; on mismatch or truncation, returns an error with `*pos` rewound
/// to the offending byte.
#[inline]
pub fn match_literal_tail(src: &[u8], pos: &mut usize, tail: &[u8]) -> Result<usize, ScanError> {
    let start = *pos - 1;
    let literal_len = tail.len() + 1;
    if start + literal_len > src.len() {
        *pos = src.len();
        return Err(ScanError::new(ErrorCode::Eof, src.len()));
    }
    if &src[start + 1..start + literal_len] == tail {
        *pos = start + literal_len;
        Ok(start)
    } else {
        *pos = start;
        Err(ScanError::new(ErrorCode::Inval, start))
    }
}
