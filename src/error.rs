// =============================================================================
// Error taxonomy
// =============================================================================
//
// Only genuinely malformed calls are errors: empty input, degenerate
// parameters, or series whose lengths disagree.  Insufficient history and
// numeric edge cases are *not* errors — each indicator documents a fallback
// (NaN padding or a neutral constant series) so chart rendering stays stable.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("input series is empty")]
    EmptyInput,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("series length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
