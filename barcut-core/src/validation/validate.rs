//! Validation logic for cut planning.

use std::collections::HashMap;

use crate::config::float_cmp::approx_eq;
use crate::config::PlanConfig;
use crate::model::{Bar, CutRequest};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate cut requests against a configuration before planning.
pub fn validate_cut_requests(cuts: &[CutRequest], config: &PlanConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if let Err(err) = config.validate() {
        result.add_error(err.to_string());
    }

    if cuts.is_empty() {
        result.add_warning("No cuts to plan");
        return result;
    }

    let mut names: HashMap<&str, &str> = HashMap::new();

    for (idx, cut) in cuts.iter().enumerate() {
        let cut_num = idx + 1;

        if cut.material_code.trim().is_empty() {
            result.add_error(format!("Cut {}: Empty material code", cut_num));
        }

        if !cut.length.is_finite() || cut.length <= 0.0 {
            result.add_error(format!(
                "Cut {}: Invalid length {} for material {}",
                cut_num, cut.length, cut.material_code
            ));
        } else if cut.length > config.bar_length {
            result.add_error(format!(
                "Cut {}: Length {} mm for material {} exceeds bar length {} mm",
                cut_num, cut.length, cut.material_code, config.bar_length
            ));
        }

        match names.get(cut.material_code.as_str()) {
            Some(&first) if first != cut.material_name => {
                result.add_warning(format!(
                    "Cut {}: Material {} named '{}', keeping first name '{}'",
                    cut_num, cut.material_code, cut.material_name, first
                ));
            }
            Some(_) => {}
            None => {
                names.insert(&cut.material_code, &cut.material_name);
            }
        }
    }

    result
}

/// Check a produced bar list against the input lengths.
///
/// Verifies bar numbering, that no bar is over-filled, that every input length
/// was placed exactly once and that each bar's usage equals its cuts plus kerf.
pub fn verify_bars(lengths: &[f64], bars: &[Bar], bar_length: f64, kerf: f64) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (idx, bar) in bars.iter().enumerate() {
        if bar.bar_number() != idx + 1 {
            result.add_error(format!(
                "Bar at position {} is numbered {}",
                idx + 1,
                bar.bar_number()
            ));
        }

        if bar.bar_length() != bar_length {
            result.add_error(format!(
                "Bar {}: Length {} differs from configured {}",
                bar.bar_number(),
                bar.bar_length(),
                bar_length
            ));
        }

        if bar.is_empty() {
            result.add_error(format!("Bar {}: No cuts placed", bar.bar_number()));
        }

        if bar.total_used() > bar.bar_length() || bar.waste() < 0.0 {
            result.add_error(format!(
                "Bar {}: Over-filled ({} of {} mm)",
                bar.bar_number(),
                bar.total_used(),
                bar.bar_length()
            ));
        }

        let kerf_count = bar.cut_count().saturating_sub(1) as f64;
        let expected = bar.cut_length_sum() + kerf * kerf_count;
        if !approx_eq(bar.total_used(), expected) {
            result.add_error(format!(
                "Bar {}: Used length {} does not match cuts plus kerf {}",
                bar.bar_number(),
                bar.total_used(),
                expected
            ));
        }
    }

    let mut expected: Vec<f64> = lengths.to_vec();
    let mut placed: Vec<f64> = bars.iter().flat_map(|b| b.cuts().iter().copied()).collect();
    expected.sort_by(f64::total_cmp);
    placed.sort_by(f64::total_cmp);
    if expected != placed {
        result.add_error(format!(
            "Placed cuts do not match input: {} requested, {} placed",
            expected.len(),
            placed.len()
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar_with(number: usize, cuts: &[f64], kerf: f64) -> Bar {
        let mut bar = Bar::new(number, 3000.0);
        for &cut in cuts {
            bar.add_cut(cut, kerf);
        }
        bar
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_ok() {
        let result = ValidationResult::ok();
        assert!(result.passed);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validation_result_error() {
        let result = ValidationResult::error("Something went wrong");
        assert!(!result.passed);
        assert_eq!(result.errors, vec!["Something went wrong".to_string()]);
    }

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::ok();
        result1.add_warning("Warning 1");

        let mut result2 = ValidationResult::ok();
        result2.add_error("Error 1");
        result2.add_warning("Warning 2");

        result1.merge(result2);
        assert!(!result1.passed);
        assert_eq!(result1.warnings.len(), 2);
        assert_eq!(result1.errors.len(), 1);
    }

    // ==================== validate_cut_requests tests ====================

    #[test]
    fn test_validate_valid_requests() {
        let cuts = vec![
            CutRequest::new(2500.0, "ST37", "Stahl"),
            CutRequest::new(3000.0, "ST37", "Stahl"),
        ];
        let result = validate_cut_requests(&cuts, &PlanConfig::default());
        assert!(result.passed);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_empty_requests_warns() {
        let result = validate_cut_requests(&[], &PlanConfig::default());
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validate_overlong_cut() {
        let cuts = vec![CutRequest::new(3000.1, "ST37", "Stahl")];
        let result = validate_cut_requests(&cuts, &PlanConfig::default());
        assert!(!result.passed);
        assert!(result.errors[0].contains("exceeds bar length"));
    }

    #[test]
    fn test_validate_bad_length_and_code() {
        let cuts = vec![
            CutRequest::new(0.0, "A", "Alpha"),
            CutRequest::new(f64::NAN, "A", "Alpha"),
            CutRequest::new(100.0, " ", "Blank"),
        ];
        let result = validate_cut_requests(&cuts, &PlanConfig::default());
        assert_eq!(result.errors.len(), 3);
    }

    #[test]
    fn test_validate_name_mismatch_warns() {
        let cuts = vec![
            CutRequest::new(100.0, "A", "Alpha"),
            CutRequest::new(200.0, "A", "Alpha"),
            CutRequest::new(300.0, "A", "Aleph"),
        ];
        let result = validate_cut_requests(&cuts, &PlanConfig::default());
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("Aleph"));
    }

    #[test]
    fn test_validate_reports_bad_config() {
        let cuts = vec![CutRequest::new(100.0, "A", "Alpha")];
        let result = validate_cut_requests(&cuts, &PlanConfig::default().with_kerf(-1.0));
        assert!(!result.passed);
        assert!(result.errors[0].contains("kerf"));
    }

    // ==================== verify_bars tests ====================

    #[test]
    fn test_verify_bars_valid() {
        let bars = vec![
            bar_with(1, &[1500.0, 1000.0], 3.0),
            bar_with(2, &[1500.0, 1000.0], 3.0),
            bar_with(3, &[1000.0], 3.0),
        ];
        let lengths = [1500.0, 1500.0, 1000.0, 1000.0, 1000.0];
        let result = verify_bars(&lengths, &bars, 3000.0, 3.0);
        assert!(result.passed, "{:?}", result.errors);
    }

    #[test]
    fn test_verify_bars_missing_cut() {
        let bars = vec![bar_with(1, &[1500.0], 0.0)];
        let result = verify_bars(&[1500.0, 700.0], &bars, 3000.0, 0.0);
        assert!(!result.passed);
    }

    #[test]
    fn test_verify_bars_bad_numbering() {
        let bars = vec![bar_with(2, &[1500.0], 0.0)];
        let result = verify_bars(&[1500.0], &bars, 3000.0, 0.0);
        assert!(!result.passed);
    }

    #[test]
    fn test_verify_bars_kerf_mismatch() {
        let bars = vec![bar_with(1, &[1500.0, 1000.0], 0.0)];
        let result = verify_bars(&[1500.0, 1000.0], &bars, 3000.0, 3.0);
        assert!(!result.passed);
    }

    #[test]
    fn test_verify_bars_empty_bar() {
        let bars = vec![Bar::new(1, 3000.0)];
        let result = verify_bars(&[], &bars, 3000.0, 0.0);
        assert!(!result.passed);
    }
}
