//! Object key matching.
//!
//! Grounded in `skip_one_1`'s key-comparison branch in `spacewander/sonic`'s
//! `get_by_path.c` (the `strncmp`-then-skip pattern) and in the teacher
//! crate's `parse_key` (`direct_decode.rs`). The C source compares raw bytes
//! and only falls back to decoding when an escape is present; we do the
//! same rather than always decoding, since escapes are rare and decoding
//! allocates.

use crate::error::ScanError;
use crate::string::{decode_escaped, skip_string_escaped};

/// Compare the quoted key at `*pos` (which must point just past the opening
/// `"`) against `target` (an already-unescaped key string). Advances `*pos`
/// past the closing `"` regardless of whether the key matches, mirroring
/// the descender's need to keep scanning past a non-matching key.
pub fn match_key(src: &[u8], pos: &mut usize, target: &[u8]) -> Result<bool, ScanError> {
    let key_start = *pos;
    let mut esc = false;
    skip_string_escaped(src, pos, &mut esc)?;
    let raw = &src[key_start..*pos - 1];

    if !esc {
        return Ok(raw == target);
    }
    Ok(decode_escaped(raw) == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_match() {
        let src = br#""name":"#;
        let mut p = 1;
        assert!(match_key(src, &mut p, b"name").unwrap());
        assert_eq!(p, 6);
    }

    #[test]
    fn plain_mismatch() {
        let src = br#""name":"#;
        let mut p = 1;
        assert!(!match_key(src, &mut p, b"nam").unwrap());
    }

    #[test]
    fn escaped_key_matches_decoded_target() {
        let src = b"\"na\\u006de\":";
        let mut p = 1;
        assert!(match_key(src, &mut p, b"name").unwrap());
    }

    #[test]
    fn escaped_key_mismatch() {
        let src = b"\"na\\u006de\":";
        let mut p = 1;
        assert!(!match_key(src, &mut p, b"namex").unwrap());
    }
}
