//! Delimited cut list parser.
//!
//! One row per line with the columns length, quantity, material code and
//! material name. Blank lines and `#` comments are ignored, and a leading row
//! whose length column is not numeric is taken as the header.

use std::path::Path;

use crate::config::{COLUMN_LENGTH, COLUMN_MATERIAL, COLUMN_NAME, COLUMN_QUANTITY};
use crate::error::{PlanError, Result};
use crate::model::CutRequest;

use super::fields::{detect_delimiter, parse_decimal, parse_quantity, split_fields};

/// How rows that cannot be used are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Skip the row and record it in [`CutList::skipped`].
    #[default]
    Lenient,
    /// Fail on the first unusable row.
    Strict,
}

/// A row left out of the cut list.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based line number.
    pub line: usize,
    pub reason: String,
}

/// Parsed cut list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CutList {
    /// One request per physical cut (row quantities expanded).
    pub cuts: Vec<CutRequest>,
    pub skipped: Vec<SkippedRow>,
}

impl CutList {
    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Number of distinct material codes.
    pub fn material_count(&self) -> usize {
        let mut codes: Vec<&str> = self.cuts.iter().map(|c| c.material_code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        codes.len()
    }
}

/// A usable row.
struct Row {
    length: f64,
    quantity: u32,
    material_code: String,
    material_name: String,
}

/// Cut list parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct CutListParser {
    mode: ParseMode,
}

impl CutListParser {
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// Parse cut list content.
    pub fn parse(&self, content: &str) -> Result<CutList> {
        let mut list = CutList::default();
        let mut seen_data = false;

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim().trim_start_matches('\u{feff}');
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let delimiter = detect_delimiter(line);
            let fields = split_fields(line, delimiter);

            let first_row = !seen_data;
            seen_data = true;
            if first_row && is_header(&fields, delimiter) {
                continue;
            }

            match parse_row(line_no, &fields, delimiter) {
                Ok(row) => {
                    let cut = CutRequest::new(row.length, row.material_code, row.material_name);
                    list.cuts
                        .extend(std::iter::repeat(cut).take(row.quantity as usize));
                }
                Err(err) if self.mode == ParseMode::Lenient => {
                    tracing::warn!("Skipping line {}: {}", line_no, err);
                    list.skipped.push(SkippedRow {
                        line: line_no,
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        Ok(list)
    }

    /// Parse a cut list file.
    pub fn parse_file(&self, path: &Path) -> Result<CutList> {
        if !path.exists() {
            return Err(PlanError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Err(PlanError::EmptyFile {
                path: path.to_path_buf(),
            });
        }

        self.parse(&content)
    }
}

/// Parse cut list content, skipping unusable rows.
pub fn parse_cut_list(content: &str) -> Result<CutList> {
    CutListParser::default().parse(content)
}

/// Parse a cut list file, skipping unusable rows.
pub fn parse_cut_list_file(path: &Path) -> Result<CutList> {
    CutListParser::default().parse_file(path)
}

fn is_header(fields: &[&str], delimiter: char) -> bool {
    fields
        .get(COLUMN_LENGTH)
        .map_or(true, |value| parse_decimal(value, delimiter).is_none())
}

fn parse_row(line: usize, fields: &[&str], delimiter: char) -> Result<Row> {
    let field = |column: usize, name: &str| {
        fields
            .get(column)
            .copied()
            .ok_or_else(|| PlanError::ParseError {
                line,
                message: format!("missing {} column", name),
            })
    };

    let length_str = field(COLUMN_LENGTH, "length")?;
    let length = parse_decimal(length_str, delimiter).ok_or_else(|| PlanError::InvalidNumber {
        line,
        value: length_str.to_string(),
    })?;
    if length <= 0.0 {
        return Err(PlanError::ParseError {
            line,
            message: format!("length must be positive, got {}", length),
        });
    }

    let quantity_str = field(COLUMN_QUANTITY, "quantity")?;
    let quantity = parse_quantity(quantity_str, delimiter).ok_or_else(|| {
        PlanError::InvalidNumber {
            line,
            value: quantity_str.to_string(),
        }
    })?;
    if quantity == 0 {
        return Err(PlanError::ParseError {
            line,
            message: "quantity must be positive".to_string(),
        });
    }

    let material_code = field(COLUMN_MATERIAL, "material")?;
    if material_code.is_empty() {
        return Err(PlanError::ParseError {
            line,
            message: "empty material code".to_string(),
        });
    }
    let material_name = fields.get(COLUMN_NAME).copied().unwrap_or_default();

    Ok(Row {
        length,
        quantity,
        material_code: material_code.to_string(),
        material_name: material_name.to_string(),
    })
}
