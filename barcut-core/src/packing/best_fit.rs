//! Best-Fit-Decreasing.

use crate::model::Bar;

use super::{initial_bars, place};

/// Place each cut (longest first) on the accepting bar left with the least waste.
///
/// Ties go to the earliest bar.
pub(crate) fn best_fit_decreasing(sorted: &[f64], bar_length: f64, kerf: f64) -> Vec<Bar> {
    let mut bars = initial_bars(bar_length);

    for &length in sorted {
        let mut best: Option<(usize, f64)> = None;
        for (idx, bar) in bars.iter().enumerate() {
            if !bar.can_fit(length, kerf) {
                continue;
            }
            let remaining = bar.waste_after(length, kerf);
            if best.map_or(true, |(_, least)| remaining < least) {
                best = Some((idx, remaining));
            }
        }
        place(&mut bars, best.map(|(idx, _)| idx), length, bar_length, kerf);
    }

    bars
}
