// =============================================================================
// On-Balance Volume (OBV)
// =============================================================================
//
// Running signed-volume total starting at 0: add the bar's volume after an
// up close, subtract it after a down close, carry it unchanged when the
// close is flat.  Defined from index 0 — no NaN padding.

use crate::error::IndicatorError;
use crate::types::Bar;

/// Compute the OBV series for `bars`.
///
/// # Errors
/// - [`IndicatorError::EmptyInput`] when `bars` is empty.
pub fn calculate_obv(bars: &[Bar]) -> Result<Vec<f64>, IndicatorError> {
    if bars.is_empty() {
        return Err(IndicatorError::EmptyInput);
    }

    let mut out = Vec::with_capacity(bars.len());
    out.push(0.0);

    for i in 1..bars.len() {
        let prev = out[i - 1];
        let next = if bars[i].close > bars[i - 1].close {
            prev + bars[i].volume
        } else if bars[i].close < bars[i - 1].close {
            prev - bars[i].volume
        } else {
            prev
        };
        out.push(next);
    }

    Ok(out)
}
