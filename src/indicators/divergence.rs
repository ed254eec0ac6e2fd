// =============================================================================
// RSI Divergence Detection
// =============================================================================
//
// A divergence is a disagreement between the price trend and the RSI trend,
// read as a potential reversal signal:
//
//   Bullish — price prints a lower swing low while RSI prints a higher low.
//   Bearish — price prints a higher swing high while RSI prints a lower high.
//
// Swing points use a 5-bar strict symmetric window, and only *successive*
// swing pairs are compared.  Each event is anchored at the second swing.

use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::indicators::util::{swing_highs, swing_lows};
use crate::types::Bar;

/// A single divergence occurrence, anchored at the second swing point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivergenceEvent {
    /// Timestamp of the bar where the divergence completed.
    pub time: i64,
    /// The swing price (low for bullish, high for bearish).
    pub price: f64,
    /// RSI value at the completing swing.
    pub rsi: f64,
}

/// Bullish and bearish divergences found in a series, each in time order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RsiDivergences {
    pub bullish: Vec<DivergenceEvent>,
    pub bearish: Vec<DivergenceEvent>,
}

/// Scan `bars` and a positionally aligned RSI series for divergences.
///
/// Swing points whose RSI is still NaN (inside the warm-up window) never
/// produce events.
///
/// # Errors
/// - [`IndicatorError::EmptyInput`] when `bars` is empty.
/// - [`IndicatorError::LengthMismatch`] when `rsi` is not aligned with
///   `bars`.
pub fn find_rsi_divergences(
    bars: &[Bar],
    rsi: &[f64],
) -> Result<RsiDivergences, IndicatorError> {
    if bars.is_empty() {
        return Err(IndicatorError::EmptyInput);
    }
    if rsi.len() != bars.len() {
        return Err(IndicatorError::LengthMismatch {
            expected: bars.len(),
            actual: rsi.len(),
        });
    }

    let mut result = RsiDivergences::default();

    let minima = swing_lows(bars, 0, bars.len());
    for pair in minima.windows(2) {
        let (first, second) = (pair[0], pair[1]);
        if bars[second].low < bars[first].low
            && rsi[second] > rsi[first]
            && !rsi[first].is_nan()
            && !rsi[second].is_nan()
        {
            result.bullish.push(DivergenceEvent {
                time: bars[second].time,
                price: bars[second].low,
                rsi: rsi[second],
            });
        }
    }

    let maxima = swing_highs(bars, 0, bars.len());
    for pair in maxima.windows(2) {
        let (first, second) = (pair[0], pair[1]);
        if bars[second].high > bars[first].high
            && rsi[second] < rsi[first]
            && !rsi[first].is_nan()
            && !rsi[second].is_nan()
        {
            result.bearish.push(DivergenceEvent {
                time: bars[second].time,
                price: bars[second].high,
                rsi: rsi[second],
            });
        }
    }

    Ok(result)
}
