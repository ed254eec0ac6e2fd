// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent values than the SMA.
//
// Formula:
//   k     = 2 / (period + 1)
//   EMA_t = value_t * k + EMA_{t-1} * (1 - k)
//
// The first EMA value is seeded with the *plain* SMA of the first `period`
// values and lands at index `period - 1`.  Earlier positions are NaN.  The
// SMA seed (not a partial EMA) is load-bearing: downstream MACD parity
// depends on it.

use crate::error::IndicatorError;

/// Compute the EMA series for `values` with the given look-back `period`.
///
/// The output has the same length as the input.  When the input is shorter
/// than `period` the whole series is NaN (the seed window never fills).
///
/// # Errors
/// - [`IndicatorError::EmptyInput`] when `values` is empty.
/// - [`IndicatorError::InvalidParameter`] when `period` is zero.
pub fn calculate_ema(values: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    if values.is_empty() {
        return Err(IndicatorError::EmptyInput);
    }
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "EMA period must be at least 1".to_string(),
        ));
    }

    let n = values.len();
    if n < period {
        return Ok(vec![f64::NAN; n]);
    }

    let k = 2.0 / (period as f64 + 1.0);

    let mut out = vec![f64::NAN; period - 1];
    let seed = values[..period].iter().sum::<f64>() / period as f64;
    out.push(seed);

    let mut prev = seed;
    for &v in &values[period..] {
        let ema = v * k + prev * (1.0 - k);
        out.push(ema);
        prev = ema;
    }

    Ok(out)
}
