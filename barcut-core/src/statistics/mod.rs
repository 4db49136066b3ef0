//! Aggregate statistics over bars and plans.

mod summary;

pub use summary::{MaterialSummary, PlanSummary};

use serde::Serialize;

use crate::model::Bar;

/// Totals over a list of bars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub total_bars: usize,
    pub total_cuts: usize,
    pub total_length_used: f64,
    pub total_waste: f64,
    pub total_kerf_loss: f64,
    /// Unweighted mean of per-bar efficiency, 0 for no bars.
    pub average_efficiency: f64,
}

impl Statistics {
    /// Compute statistics for a bar list.
    pub fn from_bars(bars: &[Bar]) -> Self {
        if bars.is_empty() {
            return Self::default();
        }

        Self {
            total_bars: bars.len(),
            total_cuts: bars.iter().map(Bar::cut_count).sum(),
            total_length_used: bars.iter().map(Bar::total_used).sum(),
            total_waste: bars.iter().map(Bar::waste).sum(),
            total_kerf_loss: bars.iter().map(Bar::kerf_loss).sum(),
            average_efficiency: bars.iter().map(Bar::efficiency).sum::<f64>() / bars.len() as f64,
        }
    }
}
