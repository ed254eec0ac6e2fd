// =============================================================================
// Average True Range (ATR)
// =============================================================================
//
// True Range per bar: max(high - low, |high - prev_close|, |low - prev_close|).
// The first ATR value is the plain mean of the first `period` true ranges;
// later values use Wilder's smoothing:
//
//   ATR_t = (ATR_{t-1} * (period - 1) + TR_t) / period

use crate::error::IndicatorError;
use crate::types::Bar;

/// Compute the ATR series for `bars` with the given look-back `period`.
///
/// The output has the same length as the input; the first `period` positions
/// are NaN (one bar is consumed by the first true range, `period - 1` more by
/// the seed mean).  When the input has no more than `period` bars the whole
/// series is NaN.
///
/// # Errors
/// - [`IndicatorError::EmptyInput`] when `bars` is empty.
/// - [`IndicatorError::InvalidParameter`] when `period` is zero.
pub fn calculate_atr(bars: &[Bar], period: usize) -> Result<Vec<f64>, IndicatorError> {
    if bars.is_empty() {
        return Err(IndicatorError::EmptyInput);
    }
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "ATR period must be at least 1".to_string(),
        ));
    }

    let n = bars.len();
    if n <= period {
        return Ok(vec![f64::NAN; n]);
    }

    let mut true_ranges = Vec::with_capacity(n - 1);
    for i in 1..n {
        let tr = (bars[i].high - bars[i].low)
            .max((bars[i].high - bars[i - 1].close).abs())
            .max((bars[i].low - bars[i - 1].close).abs());
        true_ranges.push(tr);
    }

    let period_f = period as f64;
    let mut atr_val = true_ranges[..period].iter().sum::<f64>() / period_f;

    let mut out = vec![f64::NAN; period];
    out.push(atr_val);

    for &tr in &true_ranges[period..] {
        atr_val = (atr_val * (period_f - 1.0) + tr) / period_f;
        out.push(atr_val);
    }

    Ok(out)
}
