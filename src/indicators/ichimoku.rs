// =============================================================================
// Ichimoku Cloud
// =============================================================================
//
//   Tenkan-sen     = (highest_high(tenkan) + lowest_low(tenkan)) / 2
//   Kijun-sen      = same midline over the kijun window
//   Senkou Span A  = (Tenkan + Kijun) / 2, defined from Kijun's validity
//   Senkou Span B  = midline over the senkou_b window
//   Chikou Span    = close lagged by the kijun period
//
// Spans are emitted at their source index (the charting layer owns any
// forward displacement).

use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::indicators::util::{highest_high, lowest_low};
use crate::types::Bar;

fn default_tenkan_period() -> usize {
    9
}

fn default_kijun_period() -> usize {
    26
}

fn default_senkou_b_period() -> usize {
    52
}

/// Ichimoku window lengths.  Defaults to the conventional 9/26/52; the
/// Chikou lag reuses the kijun period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IchimokuConfig {
    #[serde(default = "default_tenkan_period")]
    pub tenkan_period: usize,
    #[serde(default = "default_kijun_period")]
    pub kijun_period: usize,
    #[serde(default = "default_senkou_b_period")]
    pub senkou_b_period: usize,
}

impl Default for IchimokuConfig {
    fn default() -> Self {
        Self {
            tenkan_period: default_tenkan_period(),
            kijun_period: default_kijun_period(),
            senkou_b_period: default_senkou_b_period(),
        }
    }
}

/// All five Ichimoku lines, each the same length as the input bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IchimokuResult {
    pub tenkan_sen: Vec<f64>,
    pub kijun_sen: Vec<f64>,
    pub senkou_span_a: Vec<f64>,
    pub senkou_span_b: Vec<f64>,
    pub chikou_span: Vec<f64>,
}

/// Compute the Ichimoku Cloud lines for `bars`.
///
/// # Errors
/// - [`IndicatorError::EmptyInput`] when `bars` is empty.
/// - [`IndicatorError::InvalidParameter`] when any period is zero.
pub fn calculate_ichimoku(
    bars: &[Bar],
    config: &IchimokuConfig,
) -> Result<IchimokuResult, IndicatorError> {
    if bars.is_empty() {
        return Err(IndicatorError::EmptyInput);
    }
    if config.tenkan_period == 0 || config.kijun_period == 0 || config.senkou_b_period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "Ichimoku periods must be at least 1".to_string(),
        ));
    }

    let n = bars.len();
    let tenkan_sen = midline_series(bars, config.tenkan_period);
    let kijun_sen = midline_series(bars, config.kijun_period);
    let senkou_span_b = midline_series(bars, config.senkou_b_period);

    let mut senkou_span_a = Vec::with_capacity(n);
    for i in 0..n {
        if i + 1 < config.kijun_period {
            senkou_span_a.push(f64::NAN);
        } else {
            senkou_span_a.push((tenkan_sen[i] + kijun_sen[i]) / 2.0);
        }
    }

    let lag = config.kijun_period;
    let mut chikou_span = Vec::with_capacity(n);
    for i in 0..n {
        if i < lag {
            chikou_span.push(f64::NAN);
        } else {
            chikou_span.push(bars[i - lag].close);
        }
    }

    Ok(IchimokuResult {
        tenkan_sen,
        kijun_sen,
        senkou_span_a,
        senkou_span_b,
        chikou_span,
    })
}

/// Midline `(highest_high + lowest_low) / 2` over a trailing window, NaN
/// while the window is filling.
fn midline_series(bars: &[Bar], period: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(bars.len());
    for i in 0..bars.len() {
        if i + 1 < period {
            out.push(f64::NAN);
            continue;
        }
        let window = &bars[i + 1 - period..=i];
        out.push((highest_high(window) + lowest_low(window)) / 2.0);
    }
    out
}
