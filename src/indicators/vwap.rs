// =============================================================================
// Volume-Weighted Average Price (VWAP)
// =============================================================================
//
// Typical price TP = (high + low + close) / 3.
//
//   Cumulative mode — VWAP[i] = Σ(TP*vol) / Σ(vol) over bars 0..=i.
//   Rolling mode    — the same ratio over a sliding `period`-bar window,
//                     maintained incrementally (add newest, drop oldest);
//                     NaN until the window fills.
//
// Zero total volume degenerates to 0/0 = NaN (IEEE semantics).

use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::types::Bar;

/// VWAP accumulation mode.  `Cumulative` is the session-style default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VwapMode {
    #[default]
    Cumulative,
    Rolling(usize),
}

/// Compute the VWAP series for `bars` in the given mode.
///
/// # Errors
/// - [`IndicatorError::EmptyInput`] when `bars` is empty.
/// - [`IndicatorError::InvalidParameter`] for `Rolling(0)`.
pub fn calculate_vwap(bars: &[Bar], mode: VwapMode) -> Result<Vec<f64>, IndicatorError> {
    if bars.is_empty() {
        return Err(IndicatorError::EmptyInput);
    }

    match mode {
        VwapMode::Cumulative => Ok(cumulative_vwap(bars)),
        VwapMode::Rolling(0) => Err(IndicatorError::InvalidParameter(
            "rolling VWAP period must be at least 1".to_string(),
        )),
        VwapMode::Rolling(period) => Ok(rolling_vwap(bars, period)),
    }
}

fn cumulative_vwap(bars: &[Bar]) -> Vec<f64> {
    let mut tpv_sum = 0.0;
    let mut vol_sum = 0.0;
    let mut out = Vec::with_capacity(bars.len());

    for bar in bars {
        tpv_sum += bar.typical_price() * bar.volume;
        vol_sum += bar.volume;
        out.push(tpv_sum / vol_sum);
    }

    out
}

fn rolling_vwap(bars: &[Bar], period: usize) -> Vec<f64> {
    let n = bars.len();
    let mut out = Vec::with_capacity(n);
    let mut tpv_sum = 0.0;
    let mut vol_sum = 0.0;

    for i in 0..n {
        tpv_sum += bars[i].typical_price() * bars[i].volume;
        vol_sum += bars[i].volume;

        if i + 1 < period {
            out.push(f64::NAN);
            continue;
        }
        if i >= period {
            // Drop the bar that slid out of the window.
            let old = &bars[i - period];
            tpv_sum -= old.typical_price() * old.volume;
            vol_sum -= old.volume;
        }
        out.push(tpv_sum / vol_sum);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(high: f64, low: f64, close: f64, volume: f64) -> Bar {
        Bar {
            time: 0,
            open: close,
            high,
            low,
            close,
            volume,
        }
    }

    #[test]
    fn vwap_empty_input() {
        assert_eq!(
            calculate_vwap(&[], VwapMode::Cumulative),
            Err(IndicatorError::EmptyInput)
        );
    }

    #[test]
    fn vwap_rolling_zero_period_rejected() {
        let bars = vec![bar(10.0, 9.0, 9.5, 1.0); 5];
        assert!(matches!(
            calculate_vwap(&bars, VwapMode::Rolling(0)),
            Err(IndicatorError::InvalidParameter(_))
        ));
    }

    #[test]
    fn vwap_cumulative_first_value_is_typical_price() {
        let bars = vec![bar(12.0, 9.0, 10.5, 300.0), bar(13.0, 10.0, 12.0, 100.0)];
        let vwap = calculate_vwap(&bars, VwapMode::Cumulative).unwrap();
        assert!((vwap[0] - bars[0].typical_price()).abs() < 1e-12);

        let expected = (bars[0].typical_price() * 300.0 + bars[1].typical_price() * 100.0) / 400.0;
        assert!((vwap[1] - expected).abs() < 1e-12);
    }

    #[test]
    fn vwap_constant_price_equals_price() {
        let bars: Vec<Bar> = (1..=30).map(|i| bar(100.0, 100.0, 100.0, i as f64)).collect();
        let vwap = calculate_vwap(&bars, VwapMode::Cumulative).unwrap();
        for &v in &vwap {
            assert!((v - 100.0).abs() < 1e-10);
        }
    }

    #[test]
    fn vwap_rolling_nan_until_window_fills() {
        let bars: Vec<Bar> = (0..10)
            .map(|i| bar(101.0 + i as f64, 99.0 + i as f64, 100.0 + i as f64, 10.0))
            .collect();
        let vwap = calculate_vwap(&bars, VwapMode::Rolling(4)).unwrap();
        assert_eq!(vwap.len(), 10);
        assert!(vwap[..3].iter().all(|v| v.is_nan()));
        assert!(vwap[3..].iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn vwap_rolling_matches_direct_window_sum() {
        let bars: Vec<Bar> = (0..12)
            .map(|i| {
                let base = 100.0 + (i as f64 * 0.9).sin() * 6.0;
                bar(base + 1.0, base - 1.0, base, 50.0 + (i % 4) as f64 * 10.0)
            })
            .collect();
        let period = 5;
        let vwap = calculate_vwap(&bars, VwapMode::Rolling(period)).unwrap();

        for i in period - 1..bars.len() {
            let window = &bars[i + 1 - period..=i];
            let tpv: f64 = window.iter().map(|b| b.typical_price() * b.volume).sum();
            let vol: f64 = window.iter().map(|b| b.volume).sum();
            assert!((vwap[i] - tpv / vol).abs() < 1e-9, "mismatch at {i}");
        }
    }

    #[test]
    fn vwap_leans_toward_heavy_volume() {
        // One very heavy bar at price 200 should pull the cumulative VWAP
        // far above the light bars at 100.
        let bars = vec![
            bar(100.0, 100.0, 100.0, 1.0),
            bar(200.0, 200.0, 200.0, 99.0),
        ];
        let vwap = calculate_vwap(&bars, VwapMode::Cumulative).unwrap();
        assert!(vwap[1] > 195.0);
    }
}
