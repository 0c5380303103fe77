//! The skip-one dispatcher: given a value-starting position, skip exactly
//! one JSON value, either trusting bracket/quote balance (fast path) or
//! driving a [`StateMachine`] over the full recursive grammar (validating
//! path).
//!
//! Grounded in `skip_one_fast_1` / `skip_one_1` from `spacewander/sonic`'s
//! `get_by_path.c` and `parse_lazy.c`: both dispatch on the first
//! non-whitespace byte to a literal, number, string, or container skipper,
//! and both are called only at the path descender's terminal position
//! (§4.7) — sibling values encountered while searching for a key are
//! always skipped with the fast path (see `SPEC_FULL.md` §9, resolved
//! Open Question 2).

use crate::bytes::{advance_ns, match_literal_tail};
use crate::container::skip_container_fast;
use crate::error::{ErrorCode, ScanError};
use crate::number::skip_number_fast;
use crate::string::skip_string_escaped;
use crate::validator::StateMachine;

/// Skip one JSON value starting at `*pos`, trusting bracket/quote balance
/// for container interiors (does not recursively validate nested scalars).
/// Returns the start offset of the value.
#[inline]
pub fn skip_one_fast(src: &[u8], pos: &mut usize) -> Result<usize, ScanError> {
    let c = advance_ns(src, pos);
    match c {
        0 => Err(ScanError::new(ErrorCode::Eof, src.len())),
        b't' => match_literal_tail(src, pos, b"rue"),
        b'f' => match_literal_tail(src, pos, b"alse"),
        b'n' => match_literal_tail(src, pos, b"ull"),
        b'-' | b'0'..=b'9' => {
            *pos -= 1;
            skip_number_fast(src, pos)
        }
        b'"' => {
            let mut esc = false;
            skip_string_escaped(src, pos, &mut esc)
        }
        b'{' => skip_container_fast(src, pos, b'{', b'}'),
        b'[' => skip_container_fast(src, pos, b'[', b']'),
        _ => Err(ScanError::new(ErrorCode::Inval, *pos - 1)),
    }
}

/// Skip one JSON value starting at `*pos`, driving `sm` over the full
/// recursive grammar instead of trusting bracket balance. Returns the
/// start offset of the value on success (after skipping any leading
/// whitespace, matching `skip_one_fast`'s contract — not the pre-whitespace
/// cursor `sm` was entered with).
#[inline]
pub fn skip_one(
    src: &[u8],
    pos: &mut usize,
    sm: &mut dyn StateMachine,
) -> Result<usize, ScanError> {
    sm.reset();
    let start = sm.step(src, pos)?;
    debug_assert!(sm.done());
    Ok(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use crate::validator::GrammarValidator;

    #[test]
    fn fast_skips_literal() {
        let src = b"null,rest";
        let mut p = 0;
        skip_one_fast(src, &mut p).unwrap();
        assert_eq!(p, 4);
    }

    #[test]
    fn fast_skips_nested_container() {
        let src = br#"{"a":[1,2]} rest"#;
        let mut p = 0;
        skip_one_fast(src, &mut p).unwrap();
        assert_eq!(p, 11);
    }

    #[test]
    fn fast_leading_whitespace_is_skipped() {
        let src = b"   42,";
        let mut p = 0;
        let start = skip_one_fast(src, &mut p).unwrap();
        assert_eq!(start, 3);
        assert_eq!(p, 5);
    }

    #[test]
    fn fast_does_not_catch_malformed_nested_scalar() {
        // fast-skip only balances brackets; it does not notice "1x2" is
        // not a valid number.
        let src = br#"{"a":1x2}"#;
        let mut p = 0;
        let start = skip_one_fast(src, &mut p).unwrap();
        assert_eq!(start, 0);
        assert_eq!(p, src.len());
    }

    #[test]
    fn validating_catches_what_fast_misses() {
        let src = br#"{"a":1x2}"#;
        let mut sm = GrammarValidator::new(ScanConfig::default());
        let mut p = 0;
        let err = skip_one(src, &mut p, &mut sm).unwrap_err();
        assert_eq!(err.code, ErrorCode::Inval);
    }

    #[test]
    fn validating_accepts_valid_document() {
        let src = br#"{"a":[1,2,3]}"#;
        let mut sm = GrammarValidator::new(ScanConfig::default());
        let mut p = 0;
        skip_one(src, &mut p, &mut sm).unwrap();
        assert_eq!(p, src.len());
    }

    #[test]
    fn validating_start_offset_skips_leading_whitespace() {
        // skip_one must report the post-whitespace start, same as
        // skip_one_fast, not the cursor it was entered with.
        let src = b"   42,";
        let mut sm = GrammarValidator::new(ScanConfig::default());
        let mut p = 0;
        let start = skip_one(src, &mut p, &mut sm).unwrap();
        assert_eq!(start, 3);
        assert_eq!(p, 5);
    }
}
