//! Plain-text work plan.

use std::fmt::Write;

use crate::config::PlanConfig;
use crate::model::{CuttingPlan, MaterialPlan};
use crate::statistics::{PlanSummary, Statistics};

use super::table::format_cuts;

/// Generate a human-readable work plan, one block per material with bars.
pub fn generate_report(plan: &CuttingPlan, config: &PlanConfig) -> String {
    let mut output = String::new();

    writeln!(output, "CUTTING PLAN").unwrap();
    writeln!(
        output,
        "Bar length: {:.0} mm | Kerf: {:.1} mm | Algorithm: {} | Multiplier: {}",
        config.bar_length, config.kerf, config.algorithm, config.multiplier
    )
    .unwrap();

    for material in plan.iter().filter(|m| !m.bars.is_empty()) {
        writeln!(output).unwrap();
        write_material(&mut output, material);
    }

    let summary = PlanSummary::from_plan(plan);
    writeln!(output).unwrap();
    writeln!(
        output,
        "Total: {} material(s) | {} bar(s) | {} cut(s) | waste {:.1} mm",
        summary.total_materials, summary.total_bars, summary.total_cuts, summary.total_waste
    )
    .unwrap();

    output
}

/// Write the bar table and summary for one material.
fn write_material(output: &mut String, material: &MaterialPlan) {
    if material.name.is_empty() {
        writeln!(output, "Material: {}", material.code).unwrap();
    } else {
        writeln!(output, "Material: {} - {}", material.code, material.name).unwrap();
    }

    writeln!(
        output,
        "{:>4}  {:<32}  {:>10}  {:>10}  {:>10}",
        "Bar", "Cuts (mm)", "Used", "Rest", "Efficiency"
    )
    .unwrap();

    for bar in &material.bars {
        writeln!(
            output,
            "{:>4}  {:<32}  {:>10.1}  {:>10.1}  {:>9.1}%",
            bar.bar_number(),
            format_cuts(bar.cuts()),
            bar.total_used(),
            bar.waste(),
            bar.efficiency()
        )
        .unwrap();
    }

    let stats = Statistics::from_bars(&material.bars);
    writeln!(
        output,
        "Summary: {} bar(s) | {} cut(s) | waste {:.1} mm | kerf loss {:.1} mm | avg efficiency {:.1}%",
        stats.total_bars,
        stats.total_cuts,
        stats.total_waste,
        stats.total_kerf_loss,
        stats.average_efficiency
    )
    .unwrap();
}
