//! The pluggable grammar validator driven by the validating skip-one
//! dispatcher ([`crate::skip::skip_one`]).
//!
//! The base design notes describe this capability as an opaque
//! `{reset(), step(byte) -> ok|err, done() -> bool}` state machine, framed
//! as byte-at-a-time push parsing. A pure byte push cannot decide where a
//! bare number or literal ends without seeing (and not consuming) the byte
//! that follows it — and since this crate's data model requires the full
//! input to be addressable as a slice (no streaming, see `SPEC_FULL.md`
//! §3 Non-goals), there is no reason to pretend otherwise: `step` here
//! takes the slice and a cursor instead of one byte, which removes the
//! lookahead problem while keeping the same three-method shape and the
//! same contract (a pluggable, opaque recursive grammar check). See
//! `DESIGN.md` for the rationale.

use crate::bytes::advance_ns;
use crate::config::ScanConfig;
use crate::error::{ErrorCode, ScanError};
use crate::number::skip_number;
use crate::string::skip_string_escaped;

/// A pluggable grammar checker consumed only by the validating skip-one
/// dispatcher. Implementations verify the full recursive JSON grammar of
/// the value they are driven over, not just bracket/quote balance.
pub trait StateMachine {
    /// Reset any internal state before validating a new value.
    fn reset(&mut self);

    /// Validate and consume exactly one JSON value starting at `src[*pos]`,
    /// advancing `*pos` past it on success. Returns the start offset of the
    /// value actually found (i.e. after skipping any leading whitespace),
    /// matching the fast-skip dispatcher's contract.
    fn step(&mut self, src: &[u8], pos: &mut usize) -> Result<usize, ScanError>;

    /// Whether the last successful `step` consumed a complete top-level
    /// value. Always `true` in this crate's own usage (one value per call);
    /// kept distinct from `step`'s `Ok(())` so implementations that
    /// validate incrementally remain expressible.
    fn done(&self) -> bool;
}

/// A validator that performs no grammar checking: delegates entirely to
/// [`crate::skip::skip_one_fast`]. Equivalent to calling `get_by_path` /
/// `parse_lazy` with no validator at all; exists so call sites that always
/// thread a `&mut dyn StateMachine` don't need a separate no-validator path.
#[derive(Debug, Default)]
pub struct NoopValidator {
    done: bool,
}

impl StateMachine for NoopValidator {
    fn reset(&mut self) {
        self.done = false;
    }

    fn step(&mut self, src: &[u8], pos: &mut usize) -> Result<usize, ScanError> {
        let start = crate::skip::skip_one_fast(src, pos)?;
        self.done = true;
        Ok(start)
    }

    fn done(&self) -> bool {
        self.done
    }
}

/// A validator that recursively checks the full JSON grammar of the value
/// it is driven over, catching malformed nested scalars that the fast-skip
/// bracket counter would silently step over (e.g. `{"a":1x2}` — bracket
/// balanced, not valid JSON). Recursion depth is bounded by
/// [`ScanConfig::max_depth`], matching the teacher crate's `MAX_DEPTH`
/// guard on its own recursive descent (`direct_decode.rs`).
#[derive(Debug)]
pub struct GrammarValidator {
    config: ScanConfig,
    done: bool,
}

impl GrammarValidator {
    pub fn new(config: ScanConfig) -> Self {
        Self { config, done: false }
    }

    fn validate_value(&self, src: &[u8], pos: &mut usize, depth: usize) -> Result<usize, ScanError> {
        if depth > self.config.max_depth {
            return Err(ScanError::new(ErrorCode::Inval, *pos));
        }
        let c = advance_ns(src, pos);
        if c == 0 {
            return Err(ScanError::new(ErrorCode::Eof, src.len()));
        }
        let start = *pos - 1;
        match c {
            b't' => crate::bytes::match_literal_tail(src, pos, b"rue").map(|_| start),
            b'f' => crate::bytes::match_literal_tail(src, pos, b"alse").map(|_| start),
            b'n' => crate::bytes::match_literal_tail(src, pos, b"ull").map(|_| start),
            b'-' | b'0'..=b'9' => {
                *pos -= 1;
                skip_number(src, pos).map(|_| start)
            }
            b'"' => {
                let mut esc = false;
                skip_string_escaped(src, pos, &mut esc).map(|_| start)
            }
            b'{' => self.validate_object(src, pos, depth).map(|_| start),
            b'[' => self.validate_array(src, pos, depth).map(|_| start),
            _ => Err(ScanError::new(ErrorCode::Inval, *pos - 1)),
        }
    }

    fn validate_object(&self, src: &[u8], pos: &mut usize, depth: usize) -> Result<(), ScanError> {
        let mut c = advance_ns(src, pos);
        if c == b'}' {
            return Ok(());
        }
        loop {
            if c != b'"' {
                return Err(ScanError::new(ErrorCode::Inval, *pos - 1));
            }
            let mut esc = false;
            skip_string_escaped(src, pos, &mut esc)?;
            if advance_ns(src, pos) != b':' {
                return Err(ScanError::new(ErrorCode::Inval, *pos - 1));
            }
            self.validate_value(src, pos, depth + 1)?;
            c = advance_ns(src, pos);
            match c {
                b',' => {
                    c = advance_ns(src, pos);
                    continue;
                }
                b'}' => return Ok(()),
                _ => return Err(ScanError::new(ErrorCode::Inval, *pos - 1)),
            }
        }
    }

    fn validate_array(&self, src: &[u8], pos: &mut usize, depth: usize) -> Result<(), ScanError> {
        let save = *pos;
        if advance_ns(src, pos) == b']' {
            return Ok(());
        }
        *pos = save;
        loop {
            self.validate_value(src, pos, depth + 1)?;
            match advance_ns(src, pos) {
                b',' => continue,
                b']' => return Ok(()),
                _ => return Err(ScanError::new(ErrorCode::Inval, *pos - 1)),
            }
        }
    }
}

impl StateMachine for GrammarValidator {
    fn reset(&mut self) {
        self.done = false;
    }

    fn step(&mut self, src: &[u8], pos: &mut usize) -> Result<usize, ScanError> {
        let start = self.validate_value(src, pos, 0)?;
        self.done = true;
        Ok(start)
    }

    fn done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(src: &[u8]) -> Result<usize, ScanError> {
        let mut v = GrammarValidator::new(ScanConfig::default());
        let mut p = 0;
        v.step(src, &mut p)?;
        assert!(v.done());
        Ok(p)
    }

    #[test]
    fn valid_nested_document() {
        let p = run(br#"{"a":[1,2,{"b":true}],"c":null}"#).unwrap();
        assert_eq!(p, br#"{"a":[1,2,{"b":true}],"c":null}"#.len());
    }

    #[test]
    fn catches_malformed_nested_scalar_past_bracket_balance() {
        // bracket-balanced but "1x2" is not a valid JSON number.
        let err = run(br#"{"a":1x2}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::Inval);
    }

    #[test]
    fn catches_trailing_comma() {
        let err = run(br#"{"a":1,}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::Inval);
    }

    #[test]
    fn catches_double_comma_in_array() {
        let err = run(b"[1,,2]").unwrap_err();
        assert_eq!(err.code, ErrorCode::Inval);
    }

    #[test]
    fn empty_object_and_array() {
        run(b"{}").unwrap();
        run(b"[]").unwrap();
    }

    #[test]
    fn depth_limit_enforced() {
        let mut config = ScanConfig::default();
        config.max_depth = 4;
        let nested = "[[[[[1]]]]]";
        let mut v = GrammarValidator::new(config);
        let mut p = 0;
        let err = v.step(nested.as_bytes(), &mut p).unwrap_err();
        assert_eq!(err.code, ErrorCode::Inval);
    }
}
