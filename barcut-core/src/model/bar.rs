//! Stock bar accumulating placed cuts.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One physical piece of stock material and the cuts placed on it.
///
/// A bar only changes by accepting a cut through [`Bar::add_cut`], which
/// refuses any cut that would push `total_used` past `bar_length`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    bar_number: usize,
    cuts: Vec<f64>,
    total_used: f64,
    bar_length: f64,
}

impl Bar {
    /// Create an empty bar.
    pub fn new(bar_number: usize, bar_length: f64) -> Self {
        Self {
            bar_number,
            cuts: Vec::new(),
            total_used: 0.0,
            bar_length,
        }
    }

    /// 1-based number in creation order within a material group.
    pub fn bar_number(&self) -> usize {
        self.bar_number
    }

    /// Placed cut lengths in placement order.
    pub fn cuts(&self) -> &[f64] {
        &self.cuts
    }

    /// Length consumed by cuts and kerf.
    pub fn total_used(&self) -> f64 {
        self.total_used
    }

    /// Capacity of this bar.
    pub fn bar_length(&self) -> f64 {
        self.bar_length
    }

    /// Number of cuts placed.
    pub fn cut_count(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Unused length left on the bar.
    pub fn waste(&self) -> f64 {
        self.bar_length - self.total_used
    }

    /// Percentage of the bar consumed by cuts and kerf.
    pub fn efficiency(&self) -> f64 {
        if self.bar_length > 0.0 {
            100.0 * self.total_used / self.bar_length
        } else {
            0.0
        }
    }

    /// Sum of the placed cut lengths, without kerf.
    pub fn cut_length_sum(&self) -> f64 {
        self.cuts.iter().sum()
    }

    /// Material lost to the saw on this bar.
    pub fn kerf_loss(&self) -> f64 {
        self.total_used - self.cut_length_sum()
    }

    /// Length a cut would consume here: the first cut costs its length,
    /// every later one its length plus kerf.
    pub fn additional_length(&self, length: f64, kerf: f64) -> f64 {
        if self.cuts.is_empty() {
            length
        } else {
            length + kerf
        }
    }

    /// Waste left after placing `length`, which may be negative if it does not fit.
    pub fn waste_after(&self, length: f64, kerf: f64) -> f64 {
        self.waste() - self.additional_length(length, kerf)
    }

    /// Check if a cut fits. An exact fit is accepted.
    pub fn can_fit(&self, length: f64, kerf: f64) -> bool {
        let kerf = if self.cuts.is_empty() { 0.0 } else { kerf };
        self.total_used + length + kerf <= self.bar_length
    }

    /// Place a cut if it fits. Returns whether it was placed.
    pub fn add_cut(&mut self, length: f64, kerf: f64) -> bool {
        if !self.can_fit(length, kerf) {
            return false;
        }
        let first = self.cuts.is_empty();
        self.cuts.push(length);
        self.total_used += length;
        if !first {
            self.total_used += kerf;
        }
        true
    }
}

impl Serialize for Bar {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Bar", 6)?;
        state.serialize_field("bar_number", &self.bar_number)?;
        state.serialize_field("cuts", &self.cuts)?;
        state.serialize_field("total_used", &self.total_used)?;
        state.serialize_field("bar_length", &self.bar_length)?;
        state.serialize_field("waste", &self.waste())?;
        state.serialize_field("efficiency", &self.efficiency())?;
        state.end()
    }
}

impl std::fmt::Display for Bar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bar {}: {} cuts, {:.1}mm used, {:.1}mm waste",
            self.bar_number,
            self.cuts.len(),
            self.total_used,
            self.waste()
        )
    }
}
