// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
//   MACD line  = EMA(close, fast) - EMA(close, slow), defined from index
//                slow - 1.
//   Signal     = EMA over the valid MACD tail, so its total undefined prefix
//                is (slow - 1) + (signal - 1).
//   Histogram  = MACD - Signal, NaN until both are defined.

use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::indicators::ema::calculate_ema;
use crate::types::Bar;

fn default_fast_period() -> usize {
    12
}

fn default_slow_period() -> usize {
    26
}

fn default_signal_period() -> usize {
    9
}

/// MACD parameters.  Defaults to the conventional 12/26/9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdConfig {
    #[serde(default = "default_fast_period")]
    pub fast_period: usize,
    #[serde(default = "default_slow_period")]
    pub slow_period: usize,
    #[serde(default = "default_signal_period")]
    pub signal_period: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast_period: default_fast_period(),
            slow_period: default_slow_period(),
            signal_period: default_signal_period(),
        }
    }
}

impl MacdConfig {
    fn validate(&self) -> Result<(), IndicatorError> {
        if self.fast_period == 0 || self.signal_period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "MACD periods must be at least 1".to_string(),
            ));
        }
        if self.fast_period >= self.slow_period {
            return Err(IndicatorError::InvalidParameter(format!(
                "MACD fast period ({}) must be shorter than slow period ({})",
                self.fast_period, self.slow_period
            )));
        }
        Ok(())
    }
}

/// MACD, signal, and histogram series, each the same length as the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdResult {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Compute MACD for `bars` with the given configuration.
///
/// # Errors
/// - [`IndicatorError::EmptyInput`] when `bars` is empty.
/// - [`IndicatorError::InvalidParameter`] for zero periods or
///   `fast_period >= slow_period`.
pub fn calculate_macd(bars: &[Bar], config: &MacdConfig) -> Result<MacdResult, IndicatorError> {
    if bars.is_empty() {
        return Err(IndicatorError::EmptyInput);
    }
    config.validate()?;

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let n = closes.len();
    let slow = config.slow_period;
    let signal_period = config.signal_period;

    let fast_ema = calculate_ema(&closes, config.fast_period)?;
    let slow_ema = calculate_ema(&closes, slow)?;

    let mut macd = Vec::with_capacity(n);
    for i in 0..n {
        if i + 1 < slow {
            macd.push(f64::NAN);
        } else {
            macd.push(fast_ema[i] - slow_ema[i]);
        }
    }

    // Signal: EMA over the valid MACD tail, re-aligned to the full series.
    let signal = if n >= slow {
        let tail = calculate_ema(&macd[slow - 1..], signal_period)?;
        let mut full = vec![f64::NAN; slow - 1];
        full.extend(tail);
        full
    } else {
        vec![f64::NAN; n]
    };

    let undefined_prefix = slow + signal_period - 2;
    let mut histogram = Vec::with_capacity(n);
    for i in 0..n {
        if i < undefined_prefix {
            histogram.push(f64::NAN);
        } else {
            histogram.push(macd[i] - signal[i]);
        }
    }

    Ok(MacdResult {
        macd,
        signal,
        histogram,
    })
}
