//! The path descender: walks a [`Path`] through `src`, returning the byte
//! offset of the value it names.
//!
//! Grounded directly in the `query` / `skip_in_obj` / `skip_in_arr` labels
//! of `spacewander/sonic`'s `get_by_path.c`, translated from `goto`-driven
//! control flow into an explicit loop over path steps — each iteration of
//! the outer loop is one descent into an object or array, matching one
//! pass through the C state machine between labels.
//!
//! Resolves `SPEC_FULL.md` §9 Open Question 2: `last_key` is captured only
//! for the key that actually matched the current step, not for every
//! candidate key inspected while scanning an object (the original C
//! source captures on every candidate; the base specification's own
//! Design Notes flag that as likely a bug, and this crate follows the fix).

use crate::bytes::{advance_ns, skip_whitespace};
use crate::error::{ErrorCode, ScanError};
use crate::key::match_key;
use crate::path::{Path, PathStep};
use crate::skip::{skip_one, skip_one_fast};
use crate::validator::{NoopValidator, StateMachine};

/// The result of a successful descent: the byte offset at which the named
/// value starts, and the offset of the last path step that named a
/// position directly — the opening quote of the matching key if the final
/// step was a `Key`, or the element's first byte if the final step was an
/// `Index` — mirroring `get_by_path.c`'s `last_key` (a byte offset in both
/// cases, not a copy of the key's bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetResult {
    pub start: usize,
    pub last_key: Option<usize>,
}

/// Locate the value named by `path` in `src`, fast-skipping it (trusting
/// bracket/quote balance, not recursively validating its grammar).
pub fn get_by_path(src: &[u8], path: &Path) -> Result<GetResult, ScanError> {
    let mut sm = NoopValidator::default();
    get_by_path_with(src, path, &mut sm)
}

/// Locate the value named by `path` in `src`, validating the destination
/// value's full recursive grammar via `sm` (siblings skipped while
/// searching are always fast-skipped, matching the original source).
pub fn get_by_path_with(
    src: &[u8],
    path: &Path,
    sm: &mut dyn StateMachine,
) -> Result<GetResult, ScanError> {
    let steps = path.steps();
    let mut pos = 0usize;
    let mut step_idx = 0usize;
    let mut last_key: Option<usize> = None;

    loop {
        if step_idx == steps.len() {
            let start = skip_one(src, &mut pos, sm)?;
            log::debug!("descent resolved to byte {start}");
            return Ok(GetResult { start, last_key });
        }

        match steps[step_idx] {
            PathStep::Key(target) => {
                let c = advance_ns(src, &mut pos);
                if c != b'{' {
                    return Err(ScanError::new(ErrorCode::UnsupportedType, pos.max(1) - 1));
                }
                loop {
                    let c2 = advance_ns(src, &mut pos);
                    match c2 {
                        b'}' => return Err(ScanError::new(ErrorCode::NotFound, pos - 1)),
                        b'"' => {
                            let quote_at = pos - 1;
                            let matched = match_key(src, &mut pos, target)?;
                            if advance_ns(src, &mut pos) != b':' {
                                return Err(ScanError::new(ErrorCode::Inval, pos - 1));
                            }
                            if matched {
                                log::trace!(
                                    "step {}: key {:?} matched at byte {}",
                                    step_idx,
                                    String::from_utf8_lossy(target),
                                    pos
                                );
                                last_key = Some(quote_at);
                                step_idx += 1;
                                break;
                            }
                            skip_one_fast(src, &mut pos)?;
                            match advance_ns(src, &mut pos) {
                                b',' => continue,
                                b'}' => return Err(ScanError::new(ErrorCode::NotFound, pos - 1)),
                                _ => return Err(ScanError::new(ErrorCode::Inval, pos - 1)),
                            }
                        }
                        _ => return Err(ScanError::new(ErrorCode::Inval, pos - 1)),
                    }
                }
            }
            PathStep::Index(target_idx) => {
                let c = advance_ns(src, &mut pos);
                if c != b'[' {
                    return Err(ScanError::new(ErrorCode::UnsupportedType, pos.max(1) - 1));
                }
                let save = pos;
                if advance_ns(src, &mut pos) == b']' {
                    return Err(ScanError::new(ErrorCode::NotFound, pos - 1));
                }
                pos = save;

                let mut idx = 0u64;
                loop {
                    if idx == target_idx {
                        let mut element_start = pos;
                        skip_whitespace(src, &mut element_start);
                        last_key = Some(element_start);
                        step_idx += 1;
                        break;
                    }
                    skip_one_fast(src, &mut pos)?;
                    match advance_ns(src, &mut pos) {
                        b',' => {
                            idx += 1;
                        }
                        b']' => return Err(ScanError::new(ErrorCode::NotFound, pos - 1)),
                        _ => return Err(ScanError::new(ErrorCode::Inval, pos - 1)),
                    }
                }
            }
        }
    }
}
