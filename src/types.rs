// =============================================================================
// Shared types used across the indicator engine
// =============================================================================

use serde::{Deserialize, Serialize};

/// A single OHLCV bar.
///
/// Series are ordered ascending by `time`.  The engine does not validate
/// monotonicity or fill gaps — that is the data-fetch layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar timestamp in milliseconds since the Unix epoch.
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// Typical price `(high + low + close) / 3`, used by VWAP.
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}
