// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Arithmetic mean of the trailing `period` values ending at each index.
// The output has the same length as the input; indices 0..period-1 hold NaN
// because the window is not yet full.

use crate::error::IndicatorError;

/// Compute the SMA series for `values` with the given look-back `period`.
///
/// The result is positionally aligned with the input: `out[i]` is the mean
/// of `values[i-period+1..=i]`, or NaN while the window is filling.
///
/// # Errors
/// - [`IndicatorError::EmptyInput`] when `values` is empty.
/// - [`IndicatorError::InvalidParameter`] when `period` is zero.
pub fn calculate_sma(values: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    if values.is_empty() {
        return Err(IndicatorError::EmptyInput);
    }
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "SMA period must be at least 1".to_string(),
        ));
    }

    let mut out = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        if i + 1 < period {
            out.push(f64::NAN);
            continue;
        }
        let window = &values[i + 1 - period..=i];
        out.push(window.iter().sum::<f64>() / period as f64);
    }

    Ok(out)
}
