//! Tabular (CSV) and JSON export of a cutting plan.

use serde::Serialize;
use std::fmt::Write;

use crate::config::PlanConfig;
use crate::error::Result;
use crate::model::CuttingPlan;
use crate::statistics::PlanSummary;

/// CSV column headers.
const CSV_HEADER: &str = "material;name;bar;cuts;used;waste;efficiency";

/// Join cut lengths as `a / b / c` with one decimal place.
pub fn format_cuts(cuts: &[f64]) -> String {
    cuts.iter()
        .map(|c| format!("{:.1}", c))
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Generate `;`-separated rows, one per bar.
pub fn generate_csv(plan: &CuttingPlan) -> String {
    let mut output = String::new();
    writeln!(output, "{}", CSV_HEADER).unwrap();

    for material in plan {
        for bar in &material.bars {
            writeln!(
                output,
                "{};{};{};{};{:.1};{:.1};{:.1}",
                escape_field(&material.code),
                escape_field(&material.name),
                bar.bar_number(),
                format_cuts(bar.cuts()),
                bar.total_used(),
                bar.waste(),
                bar.efficiency()
            )
            .unwrap();
        }
    }

    output
}

/// Quote a field containing the delimiter, quotes or line breaks.
fn escape_field(value: &str) -> String {
    if value.contains([';', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[derive(Serialize)]
struct JsonPlan<'a> {
    config: &'a PlanConfig,
    summary: PlanSummary,
    plan: &'a CuttingPlan,
}

/// Generate a pretty-printed JSON document with configuration, summary and bars.
pub fn generate_json(plan: &CuttingPlan, config: &PlanConfig) -> Result<String> {
    let document = JsonPlan {
        config,
        summary: PlanSummary::from_plan(plan),
        plan,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Bar, MaterialPlan};

    fn sample_plan() -> CuttingPlan {
        let mut bar1 = Bar::new(1, 3000.0);
        bar1.add_cut(2700.0, 0.0);
        let mut bar2 = Bar::new(2, 3000.0);
        bar2.add_cut(1800.0, 0.0);
        bar2.add_cut(1200.0, 0.0);

        let mut plan = CuttingPlan::new();
        plan.push(MaterialPlan::new("ST37", "Stahl S235JR", vec![bar1, bar2]));
        plan
    }

    #[test]
    fn test_format_cuts() {
        assert_eq!(format_cuts(&[1800.0, 1200.5]), "1800.0 / 1200.5");
        assert_eq!(format_cuts(&[]), "");
    }

    #[test]
    fn test_generate_csv_rows() {
        let csv = generate_csv(&sample_plan());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "ST37;Stahl S235JR;1;2700.0;2700.0;300.0;90.0");
        assert_eq!(lines[2], "ST37;Stahl S235JR;2;1800.0 / 1200.0;3000.0;0.0;100.0");
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a;b"), "\"a;b\"");
        assert_eq!(escape_field("6\" tube"), "\"6\"\" tube\"");
    }

    #[test]
    fn test_generate_json() {
        let json = generate_json(&sample_plan(), &PlanConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["config"]["algorithm"], "BFD");
        assert_eq!(value["summary"]["total_bars"], 2);
        assert_eq!(value["plan"]["materials"][0]["code"], "ST37");
        assert_eq!(value["plan"]["materials"][0]["bars"][1]["waste"], 0.0);
    }
}
