//! Split cut requests by material and pack each group.

use std::collections::HashMap;

use crate::config::PlanConfig;
use crate::error::Result;
use crate::model::{CutRequest, CuttingPlan, MaterialPlan};
use crate::packing::pack;

/// Cut lengths collected for one material.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialGroup {
    pub code: String,
    /// First material name seen for this code.
    pub name: String,
    /// One entry per physical cut, multiplier applied.
    pub lengths: Vec<f64>,
}

/// Partition cut requests by material code in first-seen order.
///
/// Each request contributes its length `multiplier` times.
pub fn group_by_material(cuts: &[CutRequest], multiplier: u32) -> Vec<MaterialGroup> {
    let mut groups: Vec<MaterialGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for cut in cuts {
        let idx = *index.entry(cut.material_code.as_str()).or_insert_with(|| {
            groups.push(MaterialGroup {
                code: cut.material_code.clone(),
                name: cut.material_name.clone(),
                lengths: Vec::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[idx];
        group
            .lengths
            .extend(std::iter::repeat(cut.length).take(multiplier as usize));
    }

    groups
}

/// Optimize cut requests grouped by material.
///
/// The configuration is validated first. Each material is packed independently
/// with bars numbered from 1; materials keep their first-seen order.
pub fn optimize_by_material(cuts: &[CutRequest], config: &PlanConfig) -> Result<CuttingPlan> {
    config.validate()?;

    let mut plan = CuttingPlan::new();
    for group in group_by_material(cuts, config.multiplier) {
        tracing::debug!(
            "Material {}: {} cut(s) to place",
            group.code,
            group.lengths.len()
        );

        let bars = pack(
            config.algorithm,
            &group.code,
            &group.lengths,
            config.bar_length,
            config.kerf,
        )?;
        plan.push(MaterialPlan::new(group.code, group.name, bars));
    }

    Ok(plan)
}
