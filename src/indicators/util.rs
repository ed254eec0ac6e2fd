// =============================================================================
// Shared helpers for windowed scans and swing-point detection
// =============================================================================

use crate::types::Bar;

/// Highest high over a window of bars.
pub(crate) fn highest_high(bars: &[Bar]) -> f64 {
    bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max)
}

/// Lowest low over a window of bars.
pub(crate) fn lowest_low(bars: &[Bar]) -> f64 {
    bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min)
}

/// Indices in `start..end` whose high strictly exceeds the two bars on each
/// side (5-bar symmetric window).  Candidates without two neighbours on both
/// sides are skipped.  Results are in ascending index order.
pub(crate) fn swing_highs(bars: &[Bar], start: usize, end: usize) -> Vec<usize> {
    let mut out = Vec::new();
    for i in start..end.min(bars.len()) {
        if i < 2 || i + 2 >= bars.len() {
            continue;
        }
        let h = bars[i].high;
        if h > bars[i - 1].high
            && h > bars[i - 2].high
            && h > bars[i + 1].high
            && h > bars[i + 2].high
        {
            out.push(i);
        }
    }
    out
}

/// Indices in `start..end` whose low is strictly below the two bars on each
/// side (5-bar symmetric window).  Results are in ascending index order.
pub(crate) fn swing_lows(bars: &[Bar], start: usize, end: usize) -> Vec<usize> {
    let mut out = Vec::new();
    for i in start..end.min(bars.len()) {
        if i < 2 || i + 2 >= bars.len() {
            continue;
        }
        let l = bars[i].low;
        if l < bars[i - 1].low && l < bars[i - 2].low && l < bars[i + 1].low && l < bars[i + 2].low
        {
            out.push(i);
        }
    }
    out
}
