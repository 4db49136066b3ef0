//! Run every packing strategy over the same cut list.

use serde::Serialize;

use crate::config::{Algorithm, PlanConfig};
use crate::error::Result;
use crate::model::CutRequest;
use crate::statistics::PlanSummary;

use super::optimize_by_material;

/// Outcome of one strategy in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmComparison {
    pub algorithm: Algorithm,
    pub summary: PlanSummary,
}

/// Plan the cut list once per strategy (FFD, BFD, Heuristic).
///
/// Everything but the algorithm is taken from `config`.
pub fn compare_algorithms(
    cuts: &[CutRequest],
    config: &PlanConfig,
) -> Result<Vec<AlgorithmComparison>> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let config = config.clone().with_algorithm(algorithm);
            let plan = optimize_by_material(cuts, &config)?;
            Ok(AlgorithmComparison {
                algorithm,
                summary: PlanSummary::from_plan(&plan),
            })
        })
        .collect()
}

/// Strategy with the fewest bars, then the least waste. Earlier entries win ties.
pub fn best_algorithm(comparisons: &[AlgorithmComparison]) -> Option<Algorithm> {
    let mut best: Option<&AlgorithmComparison> = None;
    for candidate in comparisons {
        let better = match best {
            None => true,
            Some(current) => {
                let (a, b) = (&candidate.summary, &current.summary);
                a.total_bars < b.total_bars
                    || (a.total_bars == b.total_bars && a.total_waste < b.total_waste)
            }
        };
        if better {
            best = Some(candidate);
        }
    }
    best.map(|c| c.algorithm)
}
