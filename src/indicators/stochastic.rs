// =============================================================================
// Stochastic Oscillator
// =============================================================================
//
//   %K = 100 * (close - lowest_low(k)) / (highest_high(k) - lowest_low(k))
//   %D = SMA(%K, d)
//
// A zero-range window (flat market) resolves %K to 50 instead of dividing
// by zero.  %D becomes defined once it has `d` real %K values, i.e. from
// index k + d - 2.

use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::indicators::util::{highest_high, lowest_low};
use crate::types::Bar;

fn default_k_period() -> usize {
    14
}

fn default_d_period() -> usize {
    3
}

/// Stochastic parameters.  Defaults to %K over 14 bars smoothed by a 3-bar
/// %D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StochasticConfig {
    #[serde(default = "default_k_period")]
    pub k_period: usize,
    #[serde(default = "default_d_period")]
    pub d_period: usize,
}

impl Default for StochasticConfig {
    fn default() -> Self {
        Self {
            k_period: default_k_period(),
            d_period: default_d_period(),
        }
    }
}

/// %K and %D series, each the same length as the input bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StochasticResult {
    pub k: Vec<f64>,
    pub d: Vec<f64>,
}

/// Compute the stochastic oscillator for `bars`.
///
/// # Errors
/// - [`IndicatorError::EmptyInput`] when `bars` is empty.
/// - [`IndicatorError::InvalidParameter`] when either period is zero.
pub fn calculate_stochastic(
    bars: &[Bar],
    config: &StochasticConfig,
) -> Result<StochasticResult, IndicatorError> {
    if bars.is_empty() {
        return Err(IndicatorError::EmptyInput);
    }
    if config.k_period == 0 || config.d_period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "stochastic periods must be at least 1".to_string(),
        ));
    }

    let n = bars.len();
    let k_period = config.k_period;
    let d_period = config.d_period;

    let mut k = Vec::with_capacity(n);
    for i in 0..n {
        if i + 1 < k_period {
            k.push(f64::NAN);
            continue;
        }

        let window = &bars[i + 1 - k_period..=i];
        let hh = highest_high(window);
        let ll = lowest_low(window);
        let range = hh - ll;

        k.push(if range == 0.0 {
            50.0 // Flat window — neutral.
        } else {
            100.0 * (bars[i].close - ll) / range
        });
    }

    let mut d = Vec::with_capacity(n);
    for i in 0..n {
        if i + 2 < k_period + d_period {
            d.push(f64::NAN);
            continue;
        }
        let window = &k[i + 1 - d_period..=i];
        d.push(window.iter().sum::<f64>() / d_period as f64);
    }

    Ok(StochasticResult { k, d })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(high: f64, low: f64, close: f64) -> Bar {
        Bar {
            time: 0,
            open: close,
            high,
            low,
            close,
            volume: 1.0,
        }
    }

    #[test]
    fn stochastic_empty_input() {
        assert_eq!(
            calculate_stochastic(&[], &StochasticConfig::default()),
            Err(IndicatorError::EmptyInput)
        );
    }

    #[test]
    fn stochastic_zero_period_rejected() {
        let bars = vec![candle(10.0, 9.0, 9.5); 20];
        let config = StochasticConfig {
            k_period: 0,
            d_period: 3,
        };
        assert!(matches!(
            calculate_stochastic(&bars, &config),
            Err(IndicatorError::InvalidParameter(_))
        ));
    }

    #[test]
    fn stochastic_lengths_and_nan_layout() {
        let bars: Vec<Bar> = (0..40)
            .map(|i| {
                let base = 100.0 + (i as f64 * 0.6).sin() * 5.0;
                candle(base + 1.0, base - 1.0, base)
            })
            .collect();
        let result = calculate_stochastic(&bars, &StochasticConfig::default()).unwrap();
        assert_eq!(result.k.len(), 40);
        assert_eq!(result.d.len(), 40);
        assert!(result.k[..13].iter().all(|v| v.is_nan()));
        assert!(!result.k[13].is_nan());
        // %D needs k_period - 1 + d_period - 1 = 15 warm-up positions.
        assert!(result.d[..15].iter().all(|v| v.is_nan()));
        assert!(!result.d[15].is_nan());
    }

    #[test]
    fn stochastic_flat_market_defaults_to_50() {
        let bars = vec![candle(100.0, 100.0, 100.0); 30];
        let result = calculate_stochastic(&bars, &StochasticConfig::default()).unwrap();
        for &v in result.k.iter().filter(|v| !v.is_nan()) {
            assert!((v - 50.0).abs() < 1e-10);
        }
        for &v in result.d.iter().filter(|v| !v.is_nan()) {
            assert!((v - 50.0).abs() < 1e-10);
        }
    }

    #[test]
    fn stochastic_known_values() {
        // Rising staircase: high = i + 12, low = high - 4, close = high - 1.
        // Every 3-bar window spans [low(i-2), high(i)] = 6 points of range
        // and the close sits 1 below the top: %K = 5/6 * 100.
        let bars: Vec<Bar> = (0..10)
            .map(|i| {
                let h = (i + 12) as f64;
                candle(h, h - 4.0, h - 1.0)
            })
            .collect();
        let config = StochasticConfig {
            k_period: 3,
            d_period: 2,
        };
        let result = calculate_stochastic(&bars, &config).unwrap();
        let expected = 500.0 / 6.0;
        for &v in result.k.iter().filter(|v| !v.is_nan()) {
            assert!((v - expected).abs() < 1e-10, "got {v}");
        }
        for &v in result.d.iter().filter(|v| !v.is_nan()) {
            assert!((v - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn stochastic_bounded_0_100() {
        let bars: Vec<Bar> = (0..80)
            .map(|i| {
                let base = 100.0 + (i as f64 * 1.3).sin() * 20.0;
                candle(base + 2.0, base - 2.0, base + (i % 3) as f64 - 1.0)
            })
            .collect();
        let result = calculate_stochastic(&bars, &StochasticConfig::default()).unwrap();
        for &v in result.k.iter().filter(|v| !v.is_nan()) {
            assert!((0.0..=100.0).contains(&v), "%K {v} out of range");
        }
    }
}
