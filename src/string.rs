//! String scanning: skip a quoted JSON string and flag whether it contains
//! escapes, without decoding them.
//!
//! Grounded in the teacher crate's `parse_string_impl` (`direct_decode.rs`),
//! stripped of term construction and UTF-8 content validation (both out of
//! scope here — see `SPEC_FULL.md` §1).

use crate::error::{ErrorCode, ScanError};

/// Skip a quoted string. `*pos` must point just past the opening `"`.
/// Advances `*pos` to just past the closing `"` and sets `*out_esc` to
/// `true` iff at least one backslash escape was seen (conservative: never
/// a false negative, may over-report on malformed escapes that are
/// rejected anyway). Returns the offset of the opening quote.
#[inline]
pub fn skip_string_escaped(
    src: &[u8],
    pos: &mut usize,
    out_esc: &mut bool,
) -> Result<usize, ScanError> {
    let quote_at = *pos - 1;
    let mut i = *pos;
    loop {
        if i >= src.len() {
            *pos = src.len();
            return Err(ScanError::new(ErrorCode::Eof, src.len()));
        }
        match src[i] {
            b'"' => {
                *pos = i + 1;
                return Ok(quote_at);
            }
            b'\\' => {
                *out_esc = true;
                i += 1;
                if i >= src.len() {
                    *pos = src.len();
                    return Err(ScanError::new(ErrorCode::Eof, src.len()));
                }
                match src[i] {
                    b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => {
                        i += 1;
                    }
                    b'u' => {
                        if i + 4 >= src.len() {
                            *pos = src.len();
                            return Err(ScanError::new(ErrorCode::Eof, src.len()));
                        }
                        if !src[i + 1..i + 5].iter().all(u8::is_ascii_hexdigit) {
                            *pos = i + 1;
                            return Err(ScanError::new(ErrorCode::Inval, i + 1));
                        }
                        i += 5;
                    }
                    _ => {
                        *pos = i;
                        return Err(ScanError::new(ErrorCode::Inval, i));
                    }
                }
            }
            0x00..=0x1F => {
                *pos = i;
                return Err(ScanError::new(ErrorCode::Inval, i));
            }
            _ => i += 1,
        }
    }
}

/// Decode the escape sequences in `raw` (the bytes strictly between the
/// quotes of a string already validated by [`skip_string_escaped`]).
/// Grounded in the teacher crate's `decode_escaped_string`
/// (`direct_decode.rs`), trimmed to what the key matcher needs: this crate
/// never surfaces decoded string *values* to callers (content decoding is
/// out of scope — see `SPEC_FULL.md` §1), only uses decoding internally to
/// compare an escaped key against a target.
pub(crate) fn decode_escaped(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        if raw[i] == b'\\' && i + 1 < raw.len() {
            i += 1;
            match raw[i] {
                b'"' => out.push(b'"'),
                b'\\' => out.push(b'\\'),
                b'/' => out.push(b'/'),
                b'b' => out.push(0x08),
                b'f' => out.push(0x0C),
                b'n' => out.push(b'\n'),
                b'r' => out.push(b'\r'),
                b't' => out.push(b'\t'),
                b'u' => {
                    if i + 4 < raw.len() {
                        if let Ok(hex) = std::str::from_utf8(&raw[i + 1..i + 5]) {
                            if let Ok(cp) = u16::from_str_radix(hex, 16) {
                                if let Some(c) = char::from_u32(cp as u32) {
                                    let mut buf = [0u8; 4];
                                    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                                }
                            }
                        }
                    }
                    i += 4;
                }
                other => out.push(other),
            }
            i += 1;
        } else {
            out.push(raw[i]);
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_string() {
        let src = br#""hello""#;
        let mut p = 1;
        let mut esc = false;
        let q = skip_string_escaped(src, &mut p, &mut esc).unwrap();
        assert_eq!(q, 0);
        assert_eq!(p, src.len());
        assert!(!esc);
    }

    #[test]
    fn escaped_quote() {
        let src = br#""v\"x""#;
        let mut p = 1;
        let mut esc = false;
        skip_string_escaped(src, &mut p, &mut esc).unwrap();
        assert!(esc);
        assert_eq!(p, src.len());
    }

    #[test]
    fn unicode_escape() {
        let src = b"\"\\u00e9\"";
        let mut p = 1;
        let mut esc = false;
        skip_string_escaped(src, &mut p, &mut esc).unwrap();
        assert!(esc);
        assert_eq!(p, src.len());
    }

    #[test]
    fn literal_utf8_content_is_not_an_escape() {
        let src = "\"é\"".as_bytes();
        let mut p = 1;
        let mut esc = false;
        skip_string_escaped(src, &mut p, &mut esc).unwrap();
        assert!(!esc);
        assert_eq!(p, src.len());
    }

    #[test]
    fn truncated_unicode_escape_is_eof() {
        let src = br#""\u00"#;
        let mut p = 1;
        let mut esc = false;
        let err = skip_string_escaped(src, &mut p, &mut esc).unwrap_err();
        assert_eq!(err.code, ErrorCode::Eof);
    }

    #[test]
    fn control_byte_rejected() {
        let src = b"\"a\x01b\"";
        let mut p = 1;
        let mut esc = false;
        let err = skip_string_escaped(src, &mut p, &mut esc).unwrap_err();
        assert_eq!(err.code, ErrorCode::Inval);
    }

    #[test]
    fn unterminated_is_eof() {
        let src = b"\"abc";
        let mut p = 1;
        let mut esc = false;
        let err = skip_string_escaped(src, &mut p, &mut esc).unwrap_err();
        assert_eq!(err.code, ErrorCode::Eof);
    }

    #[test]
    fn invalid_escape_is_inval() {
        let src = br#""a\qb""#;
        let mut p = 1;
        let mut esc = false;
        let err = skip_string_escaped(src, &mut p, &mut esc).unwrap_err();
        assert_eq!(err.code, ErrorCode::Inval);
    }
}
