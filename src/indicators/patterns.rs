// =============================================================================
// Chart Pattern Detection (heuristic, best-effort)
// =============================================================================
//
// Scans for three classical reversal shapes using 5-bar swing points:
//
//   Double Top      — two swing highs within `tolerance` of each other, at
//                     least `min_separation` bars apart, confirmed when the
//                     current close breaks below the intervening valley
//                     (the neckline).
//   Double Bottom   — the mirror image, confirmed by a break above the
//                     intervening peak.
//   Head & Shoulders — three swing highs where the middle one exceeds both
//                     flanking shoulders (which match within `tolerance`),
//                     confirmed by a close below the average of the two
//                     intervening troughs.
//
// Every threshold is a named config field, not a tuned constant: the
// defaults (3% tolerance, significance 80/85) are display heuristics for
// the dashboard, and callers are free to override them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IndicatorError;
use crate::indicators::util::{swing_highs, swing_lows};
use crate::types::Bar;

fn default_tolerance() -> f64 {
    0.03
}

fn default_double_lookback() -> usize {
    30
}

fn default_hs_lookback() -> usize {
    40
}

fn default_min_separation() -> usize {
    5
}

fn default_double_significance() -> f64 {
    80.0
}

fn default_hs_significance() -> f64 {
    85.0
}

/// Thresholds for the pattern scanners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Relative price tolerance for "matching" peaks or troughs.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Look-back window for double top/bottom scans.
    #[serde(default = "default_double_lookback")]
    pub double_lookback: usize,
    /// Look-back window for head & shoulders scans.
    #[serde(default = "default_hs_lookback")]
    pub hs_lookback: usize,
    /// Minimum bar distance between the two extrema of a double pattern.
    #[serde(default = "default_min_separation")]
    pub min_separation: usize,
    /// Significance score assigned to confirmed double tops/bottoms.
    #[serde(default = "default_double_significance")]
    pub double_significance: f64,
    /// Significance score assigned to confirmed head & shoulders.
    #[serde(default = "default_hs_significance")]
    pub hs_significance: f64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            double_lookback: default_double_lookback(),
            hs_lookback: default_hs_lookback(),
            min_separation: default_min_separation(),
            double_significance: default_double_significance(),
            hs_significance: default_hs_significance(),
        }
    }
}

/// The pattern shapes the scanner recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternType {
    DoubleTop,
    DoubleBottom,
    HeadAndShoulders,
}

/// A confirmed pattern occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternMatch {
    pub pattern: PatternType,
    /// Index of the first extremum participating in the pattern.
    pub start_index: usize,
    /// Index of the confirming bar (neckline break).
    pub end_index: usize,
    /// Heuristic significance score in [0, 100].
    pub significance: f64,
}

/// Scan `bars` for confirmed chart patterns.
///
/// At most one match per pattern type is reported per confirming bar.
/// Matches are ordered by pattern type, then by confirming index.
///
/// # Errors
/// - [`IndicatorError::EmptyInput`] when `bars` is empty.
pub fn detect_patterns(
    bars: &[Bar],
    config: &PatternConfig,
) -> Result<Vec<PatternMatch>, IndicatorError> {
    if bars.is_empty() {
        return Err(IndicatorError::EmptyInput);
    }
    if config.double_lookback == 0 || config.hs_lookback == 0 {
        return Err(IndicatorError::InvalidParameter(
            "pattern look-back windows must be at least 1".to_string(),
        ));
    }

    let mut matches = Vec::new();
    detect_double_tops(bars, config, &mut matches);
    detect_double_bottoms(bars, config, &mut matches);
    detect_head_and_shoulders(bars, config, &mut matches);
    Ok(matches)
}

fn detect_double_tops(bars: &[Bar], config: &PatternConfig, matches: &mut Vec<PatternMatch>) {
    for i in config.double_lookback..bars.len() {
        let peaks = lookback_swing_highs(bars, i, config.double_lookback, config.min_separation);

        for pair in peaks.windows(2) {
            let (first, second) = (pair[0], pair[1]);
            if second - first < config.min_separation {
                continue;
            }

            let diff = (bars[first].high - bars[second].high).abs() / bars[first].high;
            if diff > config.tolerance {
                continue;
            }

            // Neckline: the lowest low between the two peaks.
            let valley = bars[first..second]
                .iter()
                .map(|b| b.low)
                .fold(f64::INFINITY, f64::min);

            if bars[i].close < valley {
                debug!(start = first, end = i, "double top confirmed");
                matches.push(PatternMatch {
                    pattern: PatternType::DoubleTop,
                    start_index: first,
                    end_index: i,
                    significance: config.double_significance,
                });
                break;
            }
        }
    }
}

fn detect_double_bottoms(bars: &[Bar], config: &PatternConfig, matches: &mut Vec<PatternMatch>) {
    for i in config.double_lookback..bars.len() {
        let troughs = lookback_swing_lows(bars, i, config.double_lookback, config.min_separation);

        for pair in troughs.windows(2) {
            let (first, second) = (pair[0], pair[1]);
            if second - first < config.min_separation {
                continue;
            }

            let diff = (bars[first].low - bars[second].low).abs() / bars[first].low;
            if diff > config.tolerance {
                continue;
            }

            // Neckline: the highest high between the two troughs.
            let peak = bars[first..second]
                .iter()
                .map(|b| b.high)
                .fold(f64::NEG_INFINITY, f64::max);

            if bars[i].close > peak {
                debug!(start = first, end = i, "double bottom confirmed");
                matches.push(PatternMatch {
                    pattern: PatternType::DoubleBottom,
                    start_index: first,
                    end_index: i,
                    significance: config.double_significance,
                });
                break;
            }
        }
    }
}

fn detect_head_and_shoulders(
    bars: &[Bar],
    config: &PatternConfig,
    matches: &mut Vec<PatternMatch>,
) {
    for i in config.hs_lookback..bars.len() {
        let peaks = lookback_swing_highs(bars, i, config.hs_lookback, config.min_separation);

        for triple in peaks.windows(3) {
            let (left, head, right) = (triple[0], triple[1], triple[2]);

            // The head must stand above both shoulders.
            if bars[head].high <= bars[left].high || bars[head].high <= bars[right].high {
                continue;
            }

            let shoulder_diff = (bars[left].high - bars[right].high).abs() / bars[left].high;
            if shoulder_diff > config.tolerance {
                continue;
            }

            let left_trough = bars[left..head]
                .iter()
                .map(|b| b.low)
                .fold(f64::INFINITY, f64::min);
            let right_trough = bars[head..right]
                .iter()
                .map(|b| b.low)
                .fold(f64::INFINITY, f64::min);
            let neckline = (left_trough + right_trough) / 2.0;

            if bars[i].close < neckline {
                debug!(start = left, end = i, "head & shoulders confirmed");
                matches.push(PatternMatch {
                    pattern: PatternType::HeadAndShoulders,
                    start_index: left,
                    end_index: i,
                    significance: config.hs_significance,
                });
                break;
            }
        }
    }
}

/// Swing highs inside the look-back window ending `min_gap` bars before `i`,
/// in ascending index order.
fn lookback_swing_highs(bars: &[Bar], i: usize, lookback: usize, min_gap: usize) -> Vec<usize> {
    let start = i.saturating_sub(lookback - 1);
    let end = i.saturating_sub(min_gap) + 1;
    swing_highs(bars, start, end)
}

/// Swing lows inside the look-back window ending `min_gap` bars before `i`.
fn lookback_swing_lows(bars: &[Bar], i: usize, lookback: usize, min_gap: usize) -> Vec<usize> {
    let start = i.saturating_sub(lookback - 1);
    let end = i.saturating_sub(min_gap) + 1;
    swing_lows(bars, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(high: f64, low: f64, close: f64) -> Bar {
        Bar {
            time: 0,
            open: close,
            high,
            low,
            close,
            volume: 1.0,
        }
    }

    /// Flat tape at high 102 / low 100 / close 101 with overrides applied.
    fn tape(n: usize, f: impl Fn(usize, &mut Bar)) -> Vec<Bar> {
        (0..n)
            .map(|i| {
                let mut b = bar(102.0, 100.0, 101.0);
                f(i, &mut b);
                b
            })
            .collect()
    }

    #[test]
    fn patterns_empty_input() {
        assert_eq!(
            detect_patterns(&[], &PatternConfig::default()),
            Err(IndicatorError::EmptyInput)
        );
    }

    #[test]
    fn no_patterns_on_flat_tape() {
        let bars = tape(60, |_, _| {});
        let matches = detect_patterns(&bars, &PatternConfig::default()).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn confirmed_double_top() {
        // Peaks at 10 (110) and 20 (109), valley low 95 at 15, final closes
        // below the valley confirm the pattern.
        let bars = tape(36, |i, b| match i {
            10 => b.high = 110.0,
            20 => b.high = 109.0,
            15 => b.low = 95.0,
            28..=35 => {
                b.close = 94.0;
                b.low = 94.0;
            }
            _ => {}
        });

        let matches = detect_patterns(&bars, &PatternConfig::default()).unwrap();
        let top = matches
            .iter()
            .find(|m| m.pattern == PatternType::DoubleTop)
            .expect("double top not detected");
        assert_eq!(top.start_index, 10);
        assert!((top.significance - 80.0).abs() < 1e-12);
        assert!(top.end_index >= 30);
    }

    #[test]
    fn unconfirmed_double_top_without_neckline_break() {
        // Same peaks but the close never drops below the valley.
        let bars = tape(36, |i, b| match i {
            10 => b.high = 110.0,
            20 => b.high = 109.0,
            15 => b.low = 95.0,
            _ => {}
        });
        let matches = detect_patterns(&bars, &PatternConfig::default()).unwrap();
        assert!(!matches.iter().any(|m| m.pattern == PatternType::DoubleTop));
    }

    #[test]
    fn peaks_outside_tolerance_are_ignored() {
        // 110 vs 104 is a 5.5% gap, beyond the 3% tolerance.
        let bars = tape(36, |i, b| match i {
            10 => b.high = 110.0,
            20 => b.high = 104.0,
            15 => b.low = 95.0,
            28..=35 => {
                b.close = 94.0;
                b.low = 94.0;
            }
            _ => {}
        });
        let matches = detect_patterns(&bars, &PatternConfig::default()).unwrap();
        assert!(!matches.iter().any(|m| m.pattern == PatternType::DoubleTop));
    }

    #[test]
    fn confirmed_double_bottom() {
        let bars = tape(36, |i, b| match i {
            10 => b.low = 90.0,
            20 => b.low = 89.5,
            15 => b.high = 108.0,
            28..=35 => {
                b.close = 109.0;
                b.high = 109.0;
            }
            _ => {}
        });
        let matches = detect_patterns(&bars, &PatternConfig::default()).unwrap();
        let bottom = matches
            .iter()
            .find(|m| m.pattern == PatternType::DoubleBottom)
            .expect("double bottom not detected");
        assert_eq!(bottom.start_index, 10);
        assert!((bottom.significance - 80.0).abs() < 1e-12);
    }

    #[test]
    fn confirmed_head_and_shoulders() {
        // Shoulders at 8 and 28 (within tolerance), head at 18 above both,
        // troughs at 13 and 23 define the neckline; final closes break it.
        let bars = tape(48, |i, b| match i {
            8 => b.high = 110.0,
            18 => b.high = 118.0,
            28 => b.high = 111.0,
            13 => b.low = 96.0,
            23 => b.low = 98.0,
            40..=47 => {
                b.close = 93.0;
                b.low = 93.0;
            }
            _ => {}
        });
        let matches = detect_patterns(&bars, &PatternConfig::default()).unwrap();
        let hs = matches
            .iter()
            .find(|m| m.pattern == PatternType::HeadAndShoulders)
            .expect("head & shoulders not detected");
        assert_eq!(hs.start_index, 8);
        assert!((hs.significance - 85.0).abs() < 1e-12);
    }

    #[test]
    fn head_below_shoulders_is_not_a_pattern() {
        let bars = tape(48, |i, b| match i {
            8 => b.high = 115.0,
            18 => b.high = 110.0, // middle peak lower than the left one
            28 => b.high = 114.0,
            13 => b.low = 96.0,
            23 => b.low = 98.0,
            40..=47 => b.close = 93.0,
            _ => {}
        });
        let matches = detect_patterns(&bars, &PatternConfig::default()).unwrap();
        assert!(!matches
            .iter()
            .any(|m| m.pattern == PatternType::HeadAndShoulders));
    }

    #[test]
    fn significance_is_overridable() {
        let bars = tape(36, |i, b| match i {
            10 => b.high = 110.0,
            20 => b.high = 109.0,
            15 => b.low = 95.0,
            28..=35 => b.close = 94.0,
            _ => {}
        });
        let config = PatternConfig {
            double_significance: 42.0,
            ..PatternConfig::default()
        };
        let matches = detect_patterns(&bars, &config).unwrap();
        let top = matches
            .iter()
            .find(|m| m.pattern == PatternType::DoubleTop)
            .unwrap();
        assert!((top.significance - 42.0).abs() < 1e-12);
    }
}
