//! barcut-core - Core library for one-dimensional bar cutting optimization.
//!
//! This library assigns requested cut lengths, grouped by material, onto stock
//! bars of a fixed length. Three packing strategies are available
//! (First-Fit-Decreasing, Best-Fit-Decreasing and a sliver-avoiding heuristic),
//! each charging a saw kerf for every cut after the first on a bar.
//!
//! # Example
//!
//! ```
//! use barcut_core::{optimize_by_material, Algorithm, CutRequest, PlanConfig};
//!
//! let cuts = vec![
//!     CutRequest::new(2700.0, "ST37", "Stahl S235JR"),
//!     CutRequest::new(1800.0, "ST37", "Stahl S235JR"),
//!     CutRequest::new(1200.0, "ST37", "Stahl S235JR"),
//! ];
//! let config = PlanConfig::new(3000.0).with_algorithm(Algorithm::Ffd);
//! let plan = optimize_by_material(&cuts, &config).unwrap();
//! assert_eq!(plan.get("ST37").unwrap().bars.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod packing;
pub mod parser;
pub mod planner;
pub mod statistics;
pub mod validation;

// Re-exports for convenience
pub use config::{Algorithm, PlanConfig};
pub use error::{PlanError, Result};
pub use generator::{example_cut_list, generate_csv, generate_json, generate_report};
pub use model::{Bar, CutRequest, CuttingPlan, MaterialPlan};
pub use packing::pack;
pub use parser::{parse_cut_list, parse_cut_list_file, CutList, CutListParser, ParseMode};
pub use planner::{
    best_algorithm, compare_algorithms, optimize_by_material, AlgorithmComparison,
};
pub use statistics::{MaterialSummary, PlanSummary, Statistics};
pub use validation::{validate_cut_requests, verify_bars, ValidationResult};

/// Plan a cut list file.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Validate the configuration
/// 2. Parse the cut list (unusable rows are skipped)
/// 3. Validate the cut requests
/// 4. Pack each material group
///
/// Validation warnings are logged. A cut longer than the bar fails with
/// `PlanError::CutTooLong`.
pub fn plan_cut_list_file(
    input_path: &std::path::Path,
    config: &PlanConfig,
) -> Result<CuttingPlan> {
    config.validate()?;

    let list = parse_cut_list_file(input_path)?;
    tracing::info!(
        "Read {} cut(s) for {} material(s), {} row(s) skipped",
        list.len(),
        list.material_count(),
        list.skipped.len()
    );

    let validation = validate_cut_requests(&list.cuts, config);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    for error in &validation.errors {
        tracing::error!("{}", error);
    }

    optimize_by_material(&list.cuts, config)
}
