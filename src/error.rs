//! Typed error surface for the scanner.
//!
//! The scanner itself only ever produces one of a handful of causes; see
//! [`ErrorCode`]. `Display` renders a fixed phrase per code plus the byte
//! position, but callers are expected to match on `code`, not on the
//! rendered text — the text carries no information `code` doesn't.

use std::fmt;

/// The complete error taxonomy of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorCode {
    /// Unexpected end of input.
    #[error("unexpected end of input")]
    Eof,
    /// Malformed JSON at the current position.
    #[error("malformed JSON")]
    Inval,
    /// A path key or index was not present in the document.
    #[error("path not found")]
    NotFound,
    /// A path step's shape didn't match the document (string key against an
    /// array, or vice versa).
    #[error("path step type mismatch")]
    UnsupportedType,
    /// A path step itself was malformed (e.g. a negative array index).
    #[error("malformed path step")]
    PathError,
    /// The caller-provided [`crate::tape::SliceTape`] ran out of capacity.
    /// Never produced by [`crate::tape::VecTape`].
    #[error("tape capacity exhausted")]
    TapeFull,
}

/// A scan failure: a cause plus the byte offset at which it was detected.
///
/// Per the rewind convention used throughout this crate, `pos` always points
/// at the offending byte (or at `src.len()` on EOF), never one past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanError {
    pub code: ErrorCode,
    pub pos: usize,
}

impl ScanError {
    #[must_use]
    pub fn new(code: ErrorCode, pos: usize) -> Self {
        Self { code, pos }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.code, self.pos)
    }
}

impl std::error::Error for ScanError {}

pub type ScanResult<T> = Result<T, ScanError>;
