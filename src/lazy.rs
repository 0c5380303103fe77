//! One-level lazy tokenization: locate a value by path, then tokenize its
//! immediate children onto a [`TapeSink`] without recursing into their
//! interiors.
//!
//! Grounded in `load_lazy` / `parse_lazy` from `spacewander/sonic`'s
//! `parse_lazy.c`: the main loop re-reads the current byte at the top of
//! each iteration (`SPEC_FULL.md` §9, resolved Open Question 1) and
//! dispatches on it to a literal, number, string, or container skip,
//! pushing one [`Token`] per immediate child — object children push a key
//! token followed by a value token, preserving the even/odd parity the
//! base specification's data model requires. Container children are
//! tokenized by span only; their own interior is left for a subsequent
//! `parse_lazy` call, which is what keeps this "lazy" rather than a full
//! recursive decode.

use crate::bytes::advance_ns;
use crate::descend::get_by_path;
use crate::error::{ErrorCode, ScanError};
use crate::path::Path;
use crate::string::skip_string_escaped;
use crate::tape::{Kind, TapeSink, Token};

/// The destination value found by [`parse_lazy`]: its kind, its full JSON
/// span, and (for `Object`/`Array`) the range of immediate-child tokens
/// pushed onto the tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub kind: Kind,
    pub esc: bool,
    pub json_start: usize,
    pub json_end: usize,
    pub tape_start: usize,
    pub tape_len: usize,
}

/// Tokenize one level starting at `*pos` (a value-starting position),
/// pushing immediate children onto `tape`. Returns the [`Node`] describing
/// the value found there.
pub fn load_lazy<T: TapeSink>(
    src: &[u8],
    pos: &mut usize,
    tape: &mut T,
) -> Result<Node, ScanError> {
    let c = advance_ns(src, pos);
    let value_start = *pos - 1;

    match c {
        0 => Err(ScanError::new(ErrorCode::Eof, src.len())),
        b't' => {
            crate::bytes::match_literal_tail(src, pos, b"rue")?;
            Ok(Node {
                kind: Kind::True,
                esc: false,
                json_start: value_start,
                json_end: *pos,
                tape_start: tape.len(),
                tape_len: 0,
            })
        }
        b'f' => {
            crate::bytes::match_literal_tail(src, pos, b"alse")?;
            Ok(Node {
                kind: Kind::False,
                esc: false,
                json_start: value_start,
                json_end: *pos,
                tape_start: tape.len(),
                tape_len: 0,
            })
        }
        b'n' => {
            crate::bytes::match_literal_tail(src, pos, b"ull")?;
            Ok(Node {
                kind: Kind::Null,
                esc: false,
                json_start: value_start,
                json_end: *pos,
                tape_start: tape.len(),
                tape_len: 0,
            })
        }
        b'-' | b'0'..=b'9' => {
            *pos -= 1;
            crate::number::skip_number_fast(src, pos)?;
            Ok(Node {
                kind: Kind::Number,
                esc: false,
                json_start: value_start,
                json_end: *pos,
                tape_start: tape.len(),
                tape_len: 0,
            })
        }
        b'"' => {
            let mut esc = false;
            skip_string_escaped(src, pos, &mut esc)?;
            Ok(Node {
                kind: Kind::String,
                esc,
                json_start: value_start,
                json_end: *pos,
                tape_start: tape.len(),
                tape_len: 0,
            })
        }
        b'{' => load_object(src, pos, tape, value_start),
        b'[' => load_array(src, pos, tape, value_start),
        _ => Err(ScanError::new(ErrorCode::Inval, value_start)),
    }
}

fn child_token(src: &[u8], pos: &mut usize) -> Result<Token, ScanError> {
    let start = advance_start(src, pos)?;
    let c = src[start];
    match c {
        b't' => {
            *pos = start + 1;
            crate::bytes::match_literal_tail(src, pos, b"rue")?;
            Ok(Token {
                kind: Kind::True,
                esc: false,
                start,
                len: *pos - start,
            })
        }
        b'f' => {
            *pos = start + 1;
            crate::bytes::match_literal_tail(src, pos, b"alse")?;
            Ok(Token {
                kind: Kind::False,
                esc: false,
                start,
                len: *pos - start,
            })
        }
        b'n' => {
            *pos = start + 1;
            crate::bytes::match_literal_tail(src, pos, b"ull")?;
            Ok(Token {
                kind: Kind::Null,
                esc: false,
                start,
                len: *pos - start,
            })
        }
        b'-' | b'0'..=b'9' => {
            *pos = start;
            crate::number::skip_number_fast(src, pos)?;
            Ok(Token {
                kind: Kind::Number,
                esc: false,
                start,
                len: *pos - start,
            })
        }
        b'"' => {
            *pos = start + 1;
            let mut esc = false;
            skip_string_escaped(src, pos, &mut esc)?;
            Ok(Token {
                kind: Kind::String,
                esc,
                start,
                len: *pos - start,
            })
        }
        b'{' => {
            *pos = start + 1;
            crate::container::skip_container_fast(src, pos, b'{', b'}')?;
            Ok(Token {
                kind: Kind::Object,
                esc: false,
                start,
                len: *pos - start,
            })
        }
        b'[' => {
            *pos = start + 1;
            crate::container::skip_container_fast(src, pos, b'[', b']')?;
            Ok(Token {
                kind: Kind::Array,
                esc: false,
                start,
                len: *pos - start,
            })
        }
        _ => Err(ScanError::new(ErrorCode::Inval, start)),
    }
}

fn advance_start(src: &[u8], pos: &mut usize) -> Result<usize, ScanError> {
    let c = advance_ns(src, pos);
    if c == 0 {
        return Err(ScanError::new(ErrorCode::Eof, src.len()));
    }
    Ok(*pos - 1)
}

fn load_object<T: TapeSink>(
    src: &[u8],
    pos: &mut usize,
    tape: &mut T,
    value_start: usize,
) -> Result<Node, ScanError> {
    let tape_start = tape.len();
    let mut c = advance_ns(src, pos);
    if c == b'}' {
        return Ok(Node {
            kind: Kind::Object,
            esc: false,
            json_start: value_start,
            json_end: *pos,
            tape_start,
            tape_len: 0,
        });
    }
    loop {
        if c != b'"' {
            return Err(ScanError::new(ErrorCode::Inval, *pos - 1));
        }
        let key_start = *pos - 1;
        let mut key_esc = false;
        skip_string_escaped(src, pos, &mut key_esc)?;
        tape.push(Token {
            kind: Kind::String,
            esc: key_esc,
            start: key_start,
            len: *pos - key_start,
        })?;
        if advance_ns(src, pos) != b':' {
            return Err(ScanError::new(ErrorCode::Inval, *pos - 1));
        }
        let value = child_token(src, pos)?;
        tape.push(value)?;

        c = advance_ns(src, pos);
        match c {
            b',' => {
                c = advance_ns(src, pos);
                continue;
            }
            b'}' => break,
            _ => return Err(ScanError::new(ErrorCode::Inval, *pos - 1)),
        }
    }
    Ok(Node {
        kind: Kind::Object,
        esc: false,
        json_start: value_start,
        json_end: *pos,
        tape_start,
        tape_len: tape.len() - tape_start,
    })
}

fn load_array<T: TapeSink>(
    src: &[u8],
    pos: &mut usize,
    tape: &mut T,
    value_start: usize,
) -> Result<Node, ScanError> {
    let tape_start = tape.len();
    let save = *pos;
    if advance_ns(src, pos) == b']' {
        return Ok(Node {
            kind: Kind::Array,
            esc: false,
            json_start: value_start,
            json_end: *pos,
            tape_start,
            tape_len: 0,
        });
    }
    *pos = save;
    loop {
        let value = child_token(src, pos)?;
        tape.push(value)?;
        match advance_ns(src, pos) {
            b',' => continue,
            b']' => break,
            _ => return Err(ScanError::new(ErrorCode::Inval, *pos - 1)),
        }
    }
    Ok(Node {
        kind: Kind::Array,
        esc: false,
        json_start: value_start,
        json_end: *pos,
        tape_start,
        tape_len: tape.len() - tape_start,
    })
}

/// Descend `path` into `src` (as [`get_by_path`]), then tokenize the
/// destination value's immediate children onto `tape`.
pub fn parse_lazy<'a, T: TapeSink>(
    src: &[u8],
    path: &Path<'a>,
    tape: &mut T,
) -> Result<Node, ScanError> {
    let result = get_by_path(src, path)?;
    let mut pos = result.start;
    load_lazy(src, &mut pos, tape)
}
