//! Configuration constants and settings for cut planning.

use crate::error::{PlanError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Floating-point comparison epsilon (verification only, never used for fitting).
pub const EPS: f64 = 0.0001;

/// Default stock bar length in mm.
pub const DEFAULT_BAR_LENGTH: f64 = 3000.0;

/// Default saw kerf in mm.
pub const DEFAULT_KERF: f64 = 0.0;

/// Default cut list multiplier.
pub const DEFAULT_MULTIPLIER: u32 = 1;

/// Leftover length (mm) above which a remnant is considered reusable.
pub const USEFUL_REMNANT: f64 = 100.0;

/// Score bonus for leaving a reusable remnant.
pub const REMNANT_BONUS: f64 = 50.0;

/// Fraction of the bar length below which a leftover counts as a sliver.
pub const SLIVER_FRACTION: f64 = 0.05;

/// Score penalty for leaving a sliver.
pub const SLIVER_PENALTY: f64 = 100.0;

/// Cut list column: length (mm).
pub const COLUMN_LENGTH: usize = 0;

/// Cut list column: quantity.
pub const COLUMN_QUANTITY: usize = 1;

/// Cut list column: material code.
pub const COLUMN_MATERIAL: usize = 2;

/// Cut list column: material name.
pub const COLUMN_NAME: usize = 3;

/// Packing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Fit-Decreasing.
    #[serde(rename = "FFD")]
    Ffd,
    /// Best-Fit-Decreasing.
    #[default]
    #[serde(rename = "BFD")]
    Bfd,
    /// Best-fit variant that favors reusable remnants over slivers.
    Heuristic,
}

impl Algorithm {
    /// All strategies, in comparison order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Ffd, Algorithm::Bfd, Algorithm::Heuristic];
}

impl FromStr for Algorithm {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "ffd" | "first-fit" => Ok(Algorithm::Ffd),
            "bfd" | "best-fit" => Ok(Algorithm::Bfd),
            "heuristic" => Ok(Algorithm::Heuristic),
            _ => Err(PlanError::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Ffd => write!(f, "FFD"),
            Algorithm::Bfd => write!(f, "BFD"),
            Algorithm::Heuristic => write!(f, "Heuristic"),
        }
    }
}

/// Planning configuration for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Stock bar length in mm.
    pub bar_length: f64,
    /// Saw kerf in mm, charged for every cut after the first on a bar.
    pub kerf: f64,
    /// Packing strategy.
    pub algorithm: Algorithm,
    /// Quantity multiplier applied to every cut request.
    pub multiplier: u32,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            bar_length: DEFAULT_BAR_LENGTH,
            kerf: DEFAULT_KERF,
            algorithm: Algorithm::default(),
            multiplier: DEFAULT_MULTIPLIER,
        }
    }
}

impl PlanConfig {
    /// Create a new configuration for the given bar length.
    pub fn new(bar_length: f64) -> Self {
        Self {
            bar_length,
            ..Default::default()
        }
    }

    pub fn with_kerf(mut self, kerf: f64) -> Self {
        self.kerf = kerf;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_multiplier(mut self, multiplier: u32) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Reject values for which the packing formulas are meaningless.
    pub fn validate(&self) -> Result<()> {
        if !self.bar_length.is_finite() || self.bar_length <= 0.0 {
            return Err(PlanError::configuration(
                "bar_length",
                "a positive length",
                self.bar_length,
            ));
        }
        if !self.kerf.is_finite() || self.kerf < 0.0 {
            return Err(PlanError::configuration(
                "kerf",
                "a value >= 0",
                self.kerf,
            ));
        }
        if self.multiplier == 0 {
            return Err(PlanError::configuration(
                "multiplier",
                "a positive integer",
                self.multiplier,
            ));
        }
        Ok(())
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Algorithm tests ====================

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("FFD".parse::<Algorithm>().unwrap(), Algorithm::Ffd);
        assert_eq!("first-fit".parse::<Algorithm>().unwrap(), Algorithm::Ffd);
        assert_eq!(" bfd ".parse::<Algorithm>().unwrap(), Algorithm::Bfd);
        assert_eq!("Best-Fit".parse::<Algorithm>().unwrap(), Algorithm::Bfd);
        assert_eq!(
            "heuristic".parse::<Algorithm>().unwrap(),
            Algorithm::Heuristic
        );
    }

    #[test]
    fn test_algorithm_from_str_unknown() {
        match "worst-fit".parse::<Algorithm>() {
            Err(PlanError::UnknownAlgorithm { name }) => assert_eq!(name, "worst-fit"),
            other => panic!("Expected UnknownAlgorithm, got {:?}", other),
        }
    }

    #[test]
    fn test_algorithm_display_round_trips() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_algorithm_default_is_bfd() {
        assert_eq!(Algorithm::default(), Algorithm::Bfd);
    }

    #[test]
    fn test_algorithm_serde_names() {
        assert_eq!(serde_json::to_string(&Algorithm::Ffd).unwrap(), "\"FFD\"");
        assert_eq!(
            serde_json::to_string(&Algorithm::Heuristic).unwrap(),
            "\"Heuristic\""
        );
    }

    // ==================== PlanConfig tests ====================

    #[test]
    fn test_plan_config_defaults() {
        let config = PlanConfig::default();
        assert_eq!(config.bar_length, 3000.0);
        assert_eq!(config.kerf, 0.0);
        assert_eq!(config.algorithm, Algorithm::Bfd);
        assert_eq!(config.multiplier, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_plan_config_builder() {
        let config = PlanConfig::new(6000.0)
            .with_kerf(3.0)
            .with_algorithm(Algorithm::Heuristic)
            .with_multiplier(4);
        assert_eq!(config.bar_length, 6000.0);
        assert_eq!(config.kerf, 3.0);
        assert_eq!(config.algorithm, Algorithm::Heuristic);
        assert_eq!(config.multiplier, 4);
    }

    #[test]
    fn test_plan_config_rejects_bad_bar_length() {
        for bar_length in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let err = PlanConfig::new(bar_length).validate().unwrap_err();
            assert!(
                matches!(err, PlanError::Configuration { ref field, .. } if field == "bar_length")
            );
        }
    }

    #[test]
    fn test_plan_config_rejects_negative_kerf() {
        let err = PlanConfig::default().with_kerf(-0.5).validate().unwrap_err();
        assert!(matches!(err, PlanError::Configuration { ref field, .. } if field == "kerf"));
    }

    #[test]
    fn test_plan_config_rejects_zero_multiplier() {
        let err = PlanConfig::default()
            .with_multiplier(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, PlanError::Configuration { ref field, .. } if field == "multiplier"));
    }

    // ==================== float_cmp tests ====================

    #[test]
    fn test_approx_eq() {
        assert!(float_cmp::approx_eq(0.1 + 0.2, 0.3));
        assert!(!float_cmp::approx_eq(1.0, 1.001));
        assert!(float_cmp::approx_zero(1e-9));
    }
}
