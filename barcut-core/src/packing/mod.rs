//! Packing strategies: assign cut lengths onto fixed-length bars.
//!
//! All strategies sort the lengths in descending order, start from a single
//! empty bar and open a new bar whenever no existing one accepts the next cut.
//! They differ only in which accepting bar they choose.

mod best_fit;
mod first_fit;
mod heuristic;

use crate::config::Algorithm;
use crate::error::{PlanError, Result};
use crate::model::Bar;

pub use heuristic::score as heuristic_score;

/// Pack cut lengths onto bars with the given strategy.
///
/// `material` only labels errors. Every length must fit on an empty bar;
/// otherwise `PlanError::CutTooLong` is returned before anything is packed.
/// Empty input yields no bars.
pub fn pack(
    algorithm: Algorithm,
    material: &str,
    lengths: &[f64],
    bar_length: f64,
    kerf: f64,
) -> Result<Vec<Bar>> {
    if lengths.is_empty() {
        return Ok(Vec::new());
    }

    // NaN lengths fail this comparison as well
    if let Some(&length) = lengths.iter().find(|&&l| !(l <= bar_length)) {
        return Err(PlanError::CutTooLong {
            length,
            material: material.to_string(),
            bar_length,
        });
    }

    let sorted = sorted_descending(lengths);
    let bars = match algorithm {
        Algorithm::Ffd => first_fit::first_fit_decreasing(&sorted, bar_length, kerf),
        Algorithm::Bfd => best_fit::best_fit_decreasing(&sorted, bar_length, kerf),
        Algorithm::Heuristic => heuristic::heuristic_fit(&sorted, bar_length, kerf),
    };

    tracing::debug!(
        "{}: packed {} cut(s) of '{}' onto {} bar(s)",
        algorithm,
        lengths.len(),
        material,
        bars.len()
    );

    Ok(bars)
}

/// Copy of the lengths in descending order.
fn sorted_descending(lengths: &[f64]) -> Vec<f64> {
    let mut sorted = lengths.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    sorted
}

/// Bar list a strategy starts from.
fn initial_bars(bar_length: f64) -> Vec<Bar> {
    vec![Bar::new(1, bar_length)]
}

/// Place a cut on the bar at `index`, or on a newly opened bar if `None`.
fn place(bars: &mut Vec<Bar>, index: Option<usize>, length: f64, bar_length: f64, kerf: f64) {
    let placed = match index {
        Some(idx) => bars[idx].add_cut(length, kerf),
        None => {
            let mut bar = Bar::new(bars.len() + 1, bar_length);
            tracing::debug!("Opening bar {} for cut of {}", bar.bar_number(), length);
            let placed = bar.add_cut(length, kerf);
            bars.push(bar);
            placed
        }
    };
    debug_assert!(placed, "cut of {} did not fit its chosen bar", length);
}
