//! Best-fit variant that avoids thin slivers.
//!
//! Instead of always taking the tightest fit, every accepting bar is scored by
//! the leftover it would have after the cut:
//!
//! - base score is the negated leftover,
//! - leftovers above [`USEFUL_REMNANT`] earn [`REMNANT_BONUS`] since they can still
//!   take a later cut,
//! - leftovers below [`SLIVER_FRACTION`] of the bar length cost [`SLIVER_PENALTY`].
//!
//! This trades some minimal-waste optimality for fewer unusable offcuts and is not
//! guaranteed to beat Best-Fit-Decreasing on any given input.

use crate::config::{REMNANT_BONUS, SLIVER_FRACTION, SLIVER_PENALTY, USEFUL_REMNANT};
use crate::model::Bar;

use super::{initial_bars, place};

/// Score of a placement leaving `remaining` mm on a bar of `bar_length`.
pub fn score(remaining: f64, bar_length: f64) -> f64 {
    let mut score = -remaining;
    if remaining > USEFUL_REMNANT {
        score += REMNANT_BONUS;
    }
    if remaining < SLIVER_FRACTION * bar_length {
        score -= SLIVER_PENALTY;
    }
    score
}

/// Place each cut (longest first) on the accepting bar with the highest score.
///
/// Ties go to the earliest bar.
pub(crate) fn heuristic_fit(sorted: &[f64], bar_length: f64, kerf: f64) -> Vec<Bar> {
    let mut bars = initial_bars(bar_length);

    for &length in sorted {
        let mut best: Option<(usize, f64)> = None;
        for (idx, bar) in bars.iter().enumerate() {
            if !bar.can_fit(length, kerf) {
                continue;
            }
            let candidate = score(bar.waste_after(length, kerf), bar_length);
            if best.map_or(true, |(_, top)| candidate > top) {
                best = Some((idx, candidate));
            }
        }
        place(&mut bars, best.map(|(idx, _)| idx), length, bar_length, kerf);
    }

    bars
}
