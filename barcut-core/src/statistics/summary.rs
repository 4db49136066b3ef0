//! Plan-wide and per-material summaries.

use serde::Serialize;

use super::Statistics;
use crate::model::CuttingPlan;

/// Summary figures for one material.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialSummary {
    pub code: String,
    pub name: String,
    pub statistics: Statistics,
}

/// Summary of a whole cutting plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanSummary {
    pub total_materials: usize,
    pub total_bars: usize,
    pub total_cuts: usize,
    pub total_waste: f64,
    pub total_kerf_loss: f64,
    /// Per-material figures in plan order.
    pub materials: Vec<MaterialSummary>,
}

impl PlanSummary {
    /// Summarize a plan.
    pub fn from_plan(plan: &CuttingPlan) -> Self {
        let materials: Vec<MaterialSummary> = plan
            .iter()
            .map(|m| MaterialSummary {
                code: m.code.clone(),
                name: m.name.clone(),
                statistics: Statistics::from_bars(&m.bars),
            })
            .collect();

        Self {
            total_materials: materials.len(),
            total_bars: materials.iter().map(|m| m.statistics.total_bars).sum(),
            total_cuts: materials.iter().map(|m| m.statistics.total_cuts).sum(),
            total_waste: materials.iter().map(|m| m.statistics.total_waste).sum(),
            total_kerf_loss: materials.iter().map(|m| m.statistics.total_kerf_loss).sum(),
            materials,
        }
    }
}
