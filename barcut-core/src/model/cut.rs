//! Cut requirement definition.

use serde::{Deserialize, Serialize};

/// A single requested piece of stock material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutRequest {
    /// Piece length in mm.
    pub length: f64,
    /// Material code used for grouping.
    pub material_code: String,
    /// Display name of the material.
    pub material_name: String,
}

impl CutRequest {
    /// Create a new cut request.
    pub fn new(
        length: f64,
        material_code: impl Into<String>,
        material_name: impl Into<String>,
    ) -> Self {
        Self {
            length,
            material_code: material_code.into(),
            material_name: material_name.into(),
        }
    }
}

impl std::fmt::Display for CutRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}mm {}", self.length, self.material_code)
    }
}
