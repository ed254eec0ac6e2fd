// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicators rendered by the
// dashboard.  Every public function validates its input up front and returns
// `Result`, so callers are forced to distinguish malformed calls from the
// documented insufficient-data fallbacks (NaN padding, neutral constants).

pub mod adx;
pub mod atr;
pub mod bollinger;
pub mod divergence;
pub mod ema;
pub mod ichimoku;
pub mod macd;
pub mod obv;
pub mod patterns;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod vwap;

pub(crate) mod util;
