// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// Step 1 — Seed average gain / average loss with the plain mean of the first
//          `period` close-to-close changes.
// Step 2 — Apply Wilder's smoothing for every later bar:
//            avg_gain = (avg_gain * (period - 1) + gain) / period
//            avg_loss = (avg_loss * (period - 1) + loss) / period
// Step 3 — RS = avg_gain / avg_loss,  RSI = 100 - 100 / (1 + RS)
//
// Conventions:
//   - avg_loss == 0 and avg_gain > 0  => RSI saturates at 100.
//   - avg_loss == 0 and avg_gain == 0 => RSI is 50 (flat window, the 0/0
//     ratio is resolved to neutral).
//   - Fewer than `period + 1` bars    => constant-50 series of input length,
//     so the chart renders a stable neutral line instead of failing.

use tracing::debug;

use crate::error::IndicatorError;
use crate::types::Bar;

/// Compute the RSI series for `bars` with the given look-back `period`.
///
/// The output has the same length as the input.  The first `period`
/// positions are NaN; the first real value lands at index `period`.
///
/// # Errors
/// - [`IndicatorError::EmptyInput`] when `bars` is empty.
/// - [`IndicatorError::InvalidParameter`] when `period` is zero.
pub fn calculate_rsi(bars: &[Bar], period: usize) -> Result<Vec<f64>, IndicatorError> {
    if bars.is_empty() {
        return Err(IndicatorError::EmptyInput);
    }
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "RSI period must be at least 1".to_string(),
        ));
    }

    let n = bars.len();
    if n <= period {
        debug!(bars = n, period, "RSI: insufficient history, returning neutral series");
        return Ok(vec![50.0; n]);
    }

    let period_f = period as f64;

    // Seed: plain mean of the first `period` changes.
    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in 1..=period {
        let change = bars[i].close - bars[i - 1].close;
        if change >= 0.0 {
            gains += change;
        } else {
            losses -= change;
        }
    }

    let mut avg_gain = gains / period_f;
    let mut avg_loss = losses / period_f;

    let mut out = vec![f64::NAN; period];
    out.push(rsi_from_averages(avg_gain, avg_loss));

    // Wilder's smoothing for the rest of the series.
    for i in period + 1..n {
        let change = bars[i].close - bars[i - 1].close;
        let (gain, loss) = if change >= 0.0 {
            (change, 0.0)
        } else {
            (0.0, -change)
        };

        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;

        out.push(rsi_from_averages(avg_gain, avg_loss));
    }

    Ok(out)
}

/// Convert average gain / average loss into an RSI value in [0, 100].
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0 // Flat window — neutral.
    } else if avg_loss == 0.0 {
        100.0 // Only gains — saturate.
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
