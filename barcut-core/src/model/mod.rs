//! Data model types for cut planning.

mod bar;
mod cut;
mod plan;

pub use bar::Bar;
pub use cut::CutRequest;
pub use plan::{CuttingPlan, MaterialPlan};
