//! Cut list parser module.

mod cut_list;
mod fields;

pub use cut_list::{
    parse_cut_list, parse_cut_list_file, CutList, CutListParser, ParseMode, SkippedRow,
};
pub use fields::*;
