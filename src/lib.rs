//! A lazy, path-directed JSON scanner.
//!
//! Given a path (`a.b[2].c`) and a byte slice, [`get_by_path`] returns the
//! byte offset of the named value without materializing anything else in
//! the document. [`parse_lazy`] goes one step further: it locates the
//! value and tokenizes its immediate children onto a [`TapeSink`], leaving
//! any nested containers as unexamined spans to be scanned further only if
//! a caller actually asks for them.
//!
//! Grounded throughout in the teacher crate's `direct_decode.rs` (cursor
//! style, `MAX_DEPTH` guard) and in `spacewander/sonic`'s `get_by_path.c` /
//! `parse_lazy.c` (the state machines this crate's [`descend`] and
//! [`lazy`] modules translate out of `goto`-driven C control flow). See
//! `DESIGN.md` for the full grounding ledger.

mod bytes;
mod config;
mod container;
mod descend;
mod error;
mod key;
mod lazy;
mod number;
mod path;
mod skip;
mod string;
mod tape;
mod validator;

pub use config::{ScanConfig, DEFAULT_MAX_DEPTH};
pub use descend::{get_by_path, get_by_path_with, GetResult};
pub use error::{ErrorCode, ScanError, ScanResult};
pub use lazy::{load_lazy, parse_lazy, Node};
pub use path::{Path, PathStep};
pub use tape::{Kind, SliceTape, TapeSink, Token, VecTape};
pub use validator::{GrammarValidator, NoopValidator, StateMachine};

/// Thin wrappers over the internal byte-level primitives, exposed only so
/// the fuzz targets under `fuzz/` can drive each scanning stage in
/// isolation. Mirrors the teacher crate's own `bench_helpers` module
/// (`direct_decode.rs`); not part of this crate's stable API.
pub mod fuzz_helpers {
    use crate::error::ScanError;

    pub fn skip_whitespace(src: &[u8], mut pos: usize) -> usize {
        crate::bytes::skip_whitespace(src, &mut pos);
        pos
    }

    pub fn scan_string(src: &[u8], pos: usize) -> Result<(usize, bool), ScanError> {
        if pos >= src.len() || src[pos] != b'"' {
            return Err(ScanError::new(crate::error::ErrorCode::Inval, pos));
        }
        let mut p = pos + 1;
        let mut esc = false;
        crate::string::skip_string_escaped(src, &mut p, &mut esc)?;
        Ok((p, esc))
    }

    pub fn scan_number(src: &[u8], pos: usize) -> Result<usize, ScanError> {
        let mut p = pos;
        crate::number::skip_number(src, &mut p)?;
        Ok(p)
    }

    pub fn skip_one(src: &[u8], pos: usize) -> Result<usize, ScanError> {
        let mut p = pos;
        crate::skip::skip_one_fast(src, &mut p)?;
        Ok(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_flat_object() {
        let _ = env_logger::try_init();
        let src = br#"{"name":"ferris","age":10}"#;
        let path = Path::parse("age").unwrap();
        let r = get_by_path(src, &path).unwrap();
        assert_eq!(&src[r.start..r.start + 2], b"10");
    }

    #[test]
    fn end_to_end_validating_rejects_malformed_destination() {
        let src = br#"{"a":1x2}"#;
        let path = Path::parse("a").unwrap();
        let mut sm = GrammarValidator::new(ScanConfig::default());
        let err = get_by_path_with(src, &path, &mut sm).unwrap_err();
        assert_eq!(err.code, ErrorCode::Inval);
    }

    #[test]
    fn end_to_end_parse_lazy_array_of_objects() {
        let src = br#"{"items":[{"id":1},{"id":2},{"id":3}]}"#;
        let path = Path::parse("items[1]").unwrap();
        let mut tape = VecTape::new();
        let node = parse_lazy(src, &path, &mut tape).unwrap();
        assert_eq!(node.kind, Kind::Object);
        assert_eq!(node.tape_len, 2);
        assert_eq!(&src[node.json_start..node.json_end], br#"{"id":2}"#);
    }

    #[test]
    fn end_to_end_not_found() {
        let src = br#"{"a":1}"#;
        let path = Path::parse("missing").unwrap();
        let err = get_by_path(src, &path).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
