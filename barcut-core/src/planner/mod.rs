//! Material grouping and planning pipeline.

mod compare;
mod grouping;

pub use compare::{best_algorithm, compare_algorithms, AlgorithmComparison};
pub use grouping::{group_by_material, optimize_by_material, MaterialGroup};
