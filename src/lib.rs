// =============================================================================
// QuantView Indicator Engine
// =============================================================================
//
// Pure, side-effect-free technical-indicator computations over ordered OHLCV
// bar series.  The dashboard backend fetches market data, hands it to this
// crate, and renders the resulting series as chart overlays.
//
// Contract shared by every series-producing function:
//   - The output has exactly the same length as the input; positions where
//     the lookback window is not yet satisfied hold `f64::NAN` so consumers
//     stay positionally aligned with the bars they plot against.
//   - Malformed input (empty series, zero period, mismatched lengths) is
//     rejected up front with an `IndicatorError`; numeric edge cases and
//     insufficient history resolve to documented fallback values instead.
//   - Everything is a pure function of its arguments.  Calling twice with
//     the same input yields bit-identical output, and concurrent callers
//     never share state.
// =============================================================================

pub mod error;
pub mod indicators;
pub mod types;

pub use error::IndicatorError;
pub use types::Bar;

pub use indicators::adx::{calculate_adx, AdxResult};
pub use indicators::atr::calculate_atr;
pub use indicators::bollinger::{calculate_bollinger, BollingerConfig, BollingerResult};
pub use indicators::divergence::{find_rsi_divergences, DivergenceEvent, RsiDivergences};
pub use indicators::ema::calculate_ema;
pub use indicators::ichimoku::{calculate_ichimoku, IchimokuConfig, IchimokuResult};
pub use indicators::macd::{calculate_macd, MacdConfig, MacdResult};
pub use indicators::obv::calculate_obv;
pub use indicators::patterns::{detect_patterns, PatternConfig, PatternMatch, PatternType};
pub use indicators::rsi::calculate_rsi;
pub use indicators::sma::calculate_sma;
pub use indicators::stochastic::{calculate_stochastic, StochasticConfig, StochasticResult};
pub use indicators::vwap::{calculate_vwap, VwapMode};
