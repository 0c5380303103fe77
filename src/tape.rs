//! The tape: a flat buffer of [`Token`]s produced by one level of
//! [`crate::lazy::parse_lazy`] tokenization.
//!
//! Grounded in the `Token` / `Tape` structs of `spacewander/sonic`'s
//! `parse_lazy.c` (`T_NULL`..`T_NUMBER` kind constants, the `F_ESC` flag),
//! carried over as a Rust enum/struct pair. The C `MUST_RETRY` sentinel on
//! a full tape is replaced by the [`TapeSink`] trait (`SliceTape` returns
//! `ErrorCode::TapeFull`, `VecTape` never does) per the base
//! specification's own Design Notes §9 suggestion.

use crate::error::{ErrorCode, ScanError};

/// The kind of value a [`Token`] (or [`crate::lazy::Node`]) describes.
/// Values match the original tape's kind constants for traceability, not
/// because any wire compatibility is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Kind {
    Null = 2,
    True = 3,
    False = 4,
    Array = 5,
    Object = 6,
    String = 7,
    Number = 8,
}

/// A single tape record: the kind of one immediate child of a tokenized
/// container, an escape flag (meaningful only for `Kind::String`, and only
/// when that string is an object key — object values that are themselves
/// strings also use it), and the byte span of its raw JSON text in the
/// original input (the span still includes the surrounding quotes for
/// strings, matching [`crate::string::skip_string_escaped`]'s contract).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: Kind,
    pub esc: bool,
    pub start: usize,
    pub len: usize,
}

impl Token {
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Where [`crate::lazy::load_lazy`] writes the tokens it produces for one
/// container level. `push` returning `Err` signals the tape is full; the
/// caller must either retry with a sink that has room (property P8) or
/// give up on this parse.
pub trait TapeSink {
    fn push(&mut self, token: Token) -> Result<(), ScanError>;
    fn len(&self) -> usize;
    fn get(&self, idx: usize) -> Option<Token>;
    fn clear(&mut self);
}

/// A growable tape. `push` never fails.
#[derive(Debug, Default, Clone)]
pub struct VecTape(Vec<Token>);

impl VecTape {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        Self(Vec::with_capacity(cap))
    }
}

impl TapeSink for VecTape {
    fn push(&mut self, token: Token) -> Result<(), ScanError> {
        self.0.push(token);
        Ok(())
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, idx: usize) -> Option<Token> {
        self.0.get(idx).copied()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// A fixed-capacity tape over caller-owned storage. `push` fails with
/// [`ErrorCode::TapeFull`] once `buf` is exhausted, mirroring the original
/// source's `MUST_RETRY` signal without a magic numeric sentinel.
#[derive(Debug)]
pub struct SliceTape<'a> {
    buf: &'a mut [Token],
    len: usize,
}

impl<'a> SliceTape<'a> {
    #[must_use]
    pub fn new(buf: &'a mut [Token]) -> Self {
        Self { buf, len: 0 }
    }
}

impl<'a> TapeSink for SliceTape<'a> {
    fn push(&mut self, token: Token) -> Result<(), ScanError> {
        if self.len >= self.buf.len() {
            log::debug!("tape full at {} tokens, caller must retry with more room", self.len);
            return Err(ScanError::new(ErrorCode::TapeFull, self.len));
        }
        self.buf[self.len] = token;
        self.len += 1;
        Ok(())
    }

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, idx: usize) -> Option<Token> {
        if idx < self.len {
            Some(self.buf[idx])
        } else {
            None
        }
    }

    fn clear(&mut self) {
        self.len = 0;
    }
}
