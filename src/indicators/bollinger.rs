// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Middle band = SMA(close, period).  Upper/lower bands sit `multiplier`
// population standard deviations (divide by `period`, not `period - 1`) away
// from the middle.  Two derived series ride along:
//
//   bandwidth = (upper - lower) / middle
//   %B        = (close - lower) / (upper - lower)
//
// When the window is flat the bands collapse onto the SMA: bandwidth is 0
// and %B degenerates to 0/0 = NaN (IEEE semantics, no neutral fallback).

use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::indicators::sma::calculate_sma;
use crate::types::Bar;

fn default_period() -> usize {
    20
}

fn default_multiplier() -> f64 {
    2.0
}

/// Bollinger Band parameters.  Defaults to the conventional 20-bar window
/// with a 2-sigma multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerConfig {
    #[serde(default = "default_period")]
    pub period: usize,
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            period: default_period(),
            multiplier: default_multiplier(),
        }
    }
}

/// Band and derived series, each the same length as the input bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerResult {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
    pub bandwidth: Vec<f64>,
    pub percent_b: Vec<f64>,
}

/// Compute Bollinger Bands over the closes of `bars`.
///
/// All series are NaN before index `period - 1`.
///
/// # Errors
/// - [`IndicatorError::EmptyInput`] when `bars` is empty.
/// - [`IndicatorError::InvalidParameter`] when `period` is zero.
pub fn calculate_bollinger(
    bars: &[Bar],
    config: &BollingerConfig,
) -> Result<BollingerResult, IndicatorError> {
    if bars.is_empty() {
        return Err(IndicatorError::EmptyInput);
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let period = config.period;
    let middle = calculate_sma(&closes, period)?;

    let n = closes.len();
    let mut upper = Vec::with_capacity(n);
    let mut lower = Vec::with_capacity(n);
    let mut bandwidth = Vec::with_capacity(n);
    let mut percent_b = Vec::with_capacity(n);

    for i in 0..n {
        if i + 1 < period {
            upper.push(f64::NAN);
            lower.push(f64::NAN);
            bandwidth.push(f64::NAN);
            percent_b.push(f64::NAN);
            continue;
        }

        let window = &closes[i + 1 - period..=i];
        let variance =
            window.iter().map(|c| (c - middle[i]).powi(2)).sum::<f64>() / period as f64;
        let std_dev = variance.sqrt();

        let up = middle[i] + config.multiplier * std_dev;
        let lo = middle[i] - config.multiplier * std_dev;

        upper.push(up);
        lower.push(lo);
        bandwidth.push((up - lo) / middle[i]);
        percent_b.push((closes[i] - lo) / (up - lo));
    }

    Ok(BollingerResult {
        upper,
        middle,
        lower,
        bandwidth,
        percent_b,
    })
}
