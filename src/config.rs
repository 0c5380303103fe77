//! Limits consulted by the path descender and tape builder.
//!
//! Mirrors the posture of the teacher crate's `MAX_DEPTH` guard
//! (`direct_decode.rs`): bounding recursion is a DoS precaution, not a
//! grammar rule, so hitting the limit is reported the same way any other
//! malformed input is.

/// Maximum nesting depth, matching the teacher crate's `MAX_DEPTH`.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Caller-supplied limits for a scan.
#[derive(Debug, Clone, Copy)]
pub struct ScanConfig {
    /// Maximum container/path nesting depth before `ErrorCode::Inval`.
    pub max_depth: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
