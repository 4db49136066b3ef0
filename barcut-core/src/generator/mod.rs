//! Output generators for cutting plans.

mod example;
mod report;
mod table;

pub use example::example_cut_list;
pub use report::generate_report;
pub use table::{format_cuts, generate_csv, generate_json};
