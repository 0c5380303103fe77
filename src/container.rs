//! Container scanning: skip a balanced `{...}` or `[...]` by bracket
//! counting, respecting string interiors.
//!
//! Grounded in `skip_container_fast` from `spacewander/sonic`'s
//! `parse_lazy.c`, and in the teacher crate's `StructuralIndex` bracket
//! depth tracking (`direct_decode.rs`) minus the structural-index
//! pre-scan (out of proportion to this crate's budget — see `DESIGN.md`).

use crate::error::{ErrorCode, ScanError};

/// Skip a container. `*pos` must point just past `open`. Maintains a depth
/// counter starting at 1, treats any unescaped `"` as entering/leaving a
/// string (during which bracket-like bytes are ignored), and returns when
/// depth reaches zero. Leaves `*pos` one past the matching `close`.
/// Returns the offset of `open`.
#[inline]
pub fn skip_container_fast(
    src: &[u8],
    pos: &mut usize,
    open: u8,
    close: u8,
) -> Result<usize, ScanError> {
    let open_at = *pos - 1;
    let mut depth: u32 = 1;
    let mut i = *pos;
    let len = src.len();

    while i < len {
        let b = src[i];
        if b == b'"' {
            i += 1;
            // Scan through the string, skipping escaped bytes, without
            // validating escape grammar — fast-skip fidelity (§4.4/§6.4).
            while i < len && src[i] != b'"' {
                if src[i] == b'\\' {
                    i += 1;
                }
                i += 1;
            }
            if i >= len {
                *pos = len;
                return Err(ScanError::new(ErrorCode::Eof, len));
            }
            i += 1; // past closing quote
            continue;
        }
        if b == open {
            depth += 1;
        } else if b == close {
            depth -= 1;
            if depth == 0 {
                *pos = i + 1;
                return Ok(open_at);
            }
        }
        i += 1;
    }

    *pos = len;
    Err(ScanError::new(ErrorCode::Eof, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_object() {
        let src = br#"{"a":1}rest"#;
        let mut p = 1;
        let start = skip_container_fast(src, &mut p, b'{', b'}').unwrap();
        assert_eq!(start, 0);
        assert_eq!(p, 7);
    }

    #[test]
    fn nested_arrays() {
        let src = b"[1,[2,3],4]";
        let mut p = 1;
        skip_container_fast(src, &mut p, b'[', b']').unwrap();
        assert_eq!(p, src.len());
    }

    #[test]
    fn brackets_inside_strings_are_ignored() {
        let src = br#"{"a":"}][{"}"#;
        let mut p = 1;
        skip_container_fast(src, &mut p, b'{', b'}').unwrap();
        assert_eq!(p, src.len());
    }

    #[test]
    fn escaped_quote_inside_string_does_not_end_it_early() {
        let src = br#"["a\"]"]"#;
        let mut p = 1;
        skip_container_fast(src, &mut p, b'[', b']').unwrap();
        assert_eq!(p, src.len());
    }

    #[test]
    fn unterminated_container_is_eof() {
        let src = b"{\"a\":1";
        let mut p = 1;
        let err = skip_container_fast(src, &mut p, b'{', b'}').unwrap_err();
        assert_eq!(err.code, ErrorCode::Eof);
    }
}
