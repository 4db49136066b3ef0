//! Per-material cutting plan.

use serde::Serialize;

use super::Bar;

/// Bars produced for one material.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialPlan {
    /// Material code.
    pub code: String,
    /// Material display name (first name seen for the code).
    pub name: String,
    /// Bars numbered 1..N in creation order.
    pub bars: Vec<Bar>,
}

impl MaterialPlan {
    pub fn new(code: impl Into<String>, name: impl Into<String>, bars: Vec<Bar>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            bars,
        }
    }
}

/// Result set: material plans in first-seen input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CuttingPlan {
    pub materials: Vec<MaterialPlan>,
}

impl CuttingPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a material plan, keeping insertion order.
    pub fn push(&mut self, material: MaterialPlan) {
        self.materials.push(material);
    }

    /// Find a material plan by code.
    pub fn get(&self, code: &str) -> Option<&MaterialPlan> {
        self.materials.iter().find(|m| m.code == code)
    }

    /// Material codes in plan order.
    pub fn material_codes(&self) -> impl Iterator<Item = &str> {
        self.materials.iter().map(|m| m.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MaterialPlan> {
        self.materials.iter()
    }

    /// Total number of bars over all materials.
    pub fn total_bars(&self) -> usize {
        self.materials.iter().map(|m| m.bars.len()).sum()
    }
}

impl<'a> IntoIterator for &'a CuttingPlan {
    type Item = &'a MaterialPlan;
    type IntoIter = std::slice::Iter<'a, MaterialPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.materials.iter()
    }
}
