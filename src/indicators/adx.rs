// =============================================================================
// Average Directional Index (ADX) / Directional Movement Indicators (DMI)
// =============================================================================
//
// ADX quantifies trend strength regardless of direction.
//
// Pipeline:
//   1. Per bar: True Range and directional movement.  +DM counts only when
//      the upward move exceeds the downward move (and vice versa for -DM).
//   2. Seed smoothed TR/+DM/-DM as *sums* (not means) of the first `period`
//      values, then continue with Wilder's running smoothing.
//   3. +DI = 100 * smoothed(+DM) / smoothed(TR), -DI symmetric.
//   4. DX  = 100 * |+DI - -DI| / (+DI + -DI).
//   5. ADX = Wilder-smoothed DX, seeded with the plain mean of the first
//      `period` DX values.
//
// All three outputs are left-padded with `period + 1` NaNs and resized to
// the input length so they stay positionally aligned with the bars.
// Zero-range windows resolve DI and DX to 0 instead of propagating NaN.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IndicatorError;
use crate::types::Bar;

/// ADX, +DI, and -DI series, each the same length as the input bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdxResult {
    pub adx: Vec<f64>,
    pub di_plus: Vec<f64>,
    pub di_minus: Vec<f64>,
}

/// Compute the ADX/DMI series for `bars` with the given look-back `period`.
///
/// Fewer than `period + 2` bars cannot seed the smoothing, so all three
/// outputs fall back to a constant-25 series of input length (a weak/neutral
/// reading that keeps chart rendering stable).
///
/// # Errors
/// - [`IndicatorError::EmptyInput`] when `bars` is empty.
/// - [`IndicatorError::InvalidParameter`] when `period` is zero.
pub fn calculate_adx(bars: &[Bar], period: usize) -> Result<AdxResult, IndicatorError> {
    if bars.is_empty() {
        return Err(IndicatorError::EmptyInput);
    }
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "ADX period must be at least 1".to_string(),
        ));
    }

    let n = bars.len();
    if n <= period + 1 {
        debug!(bars = n, period, "ADX: insufficient history, returning neutral series");
        return Ok(AdxResult {
            adx: vec![25.0; n],
            di_plus: vec![25.0; n],
            di_minus: vec![25.0; n],
        });
    }

    let period_f = period as f64;

    // --- True Range and directional movement per bar-to-bar transition ----
    let mut tr_vals = Vec::with_capacity(n - 1);
    let mut plus_dm = Vec::with_capacity(n - 1);
    let mut minus_dm = Vec::with_capacity(n - 1);

    for i in 1..n {
        let high = bars[i].high;
        let low = bars[i].low;
        let prev_high = bars[i - 1].high;
        let prev_low = bars[i - 1].low;
        let prev_close = bars[i - 1].close;

        let tr = (high - low)
            .max((high - prev_close).abs())
            .max((low - prev_close).abs());

        let up_move = high - prev_high;
        let down_move = prev_low - low;

        tr_vals.push(tr);
        plus_dm.push(if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        });
        minus_dm.push(if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        });
    }

    // --- Wilder smoothing, seeded with sums of the first `period` values --
    let mut smooth_tr: f64 = tr_vals[..period].iter().sum();
    let mut smooth_plus: f64 = plus_dm[..period].iter().sum();
    let mut smooth_minus: f64 = minus_dm[..period].iter().sum();

    let mut di_plus = Vec::with_capacity(tr_vals.len() - period + 1);
    let mut di_minus = Vec::with_capacity(tr_vals.len() - period + 1);
    let mut dx_vals = Vec::with_capacity(tr_vals.len() - period + 1);

    let (dp, dm, dx) = directional_indexes(smooth_plus, smooth_minus, smooth_tr);
    di_plus.push(dp);
    di_minus.push(dm);
    dx_vals.push(dx);

    for i in period..tr_vals.len() {
        smooth_tr = smooth_tr - smooth_tr / period_f + tr_vals[i];
        smooth_plus = smooth_plus - smooth_plus / period_f + plus_dm[i];
        smooth_minus = smooth_minus - smooth_minus / period_f + minus_dm[i];

        let (dp, dm, dx) = directional_indexes(smooth_plus, smooth_minus, smooth_tr);
        di_plus.push(dp);
        di_minus.push(dm);
        dx_vals.push(dx);
    }

    // --- ADX: Wilder-smoothed DX, mean-seeded ----------------------------
    let mut adx_val = dx_vals.iter().take(period).sum::<f64>() / period_f;
    let mut adx = vec![adx_val];
    if dx_vals.len() >= period {
        for i in 1..=(dx_vals.len() - period) {
            adx_val = (adx_val * (period_f - 1.0) + dx_vals[i + period - 1]) / period_f;
            adx.push(adx_val);
        }
    }

    let pad = period + 1;
    Ok(AdxResult {
        adx: pad_to_length(adx, pad, n),
        di_plus: pad_to_length(di_plus, pad, n),
        di_minus: pad_to_length(di_minus, pad, n),
    })
}

/// Derive +DI, -DI, and DX from smoothed values, resolving zero-range
/// denominators to 0 rather than NaN.
fn directional_indexes(smooth_plus: f64, smooth_minus: f64, smooth_tr: f64) -> (f64, f64, f64) {
    if smooth_tr == 0.0 {
        return (0.0, 0.0, 0.0);
    }

    let di_plus = 100.0 * smooth_plus / smooth_tr;
    let di_minus = 100.0 * smooth_minus / smooth_tr;

    let di_sum = di_plus + di_minus;
    let dx = if di_sum == 0.0 {
        0.0 // No directional movement at all.
    } else {
        100.0 * (di_plus - di_minus).abs() / di_sum
    };

    (di_plus, di_minus, dx)
}

/// Left-pad with NaN and resize to the input length, so every output series
/// stays positionally aligned regardless of how many values were produced.
fn pad_to_length(values: Vec<f64>, pad: usize, len: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; pad];
    out.extend(values);
    out.resize(len, f64::NAN);
    out
}
