//! Field-level helpers for delimited cut list rows.

/// Pick the delimiter for a row: `;`, then tab, then `,`.
pub fn detect_delimiter(line: &str) -> char {
    if line.contains(';') {
        ';'
    } else if line.contains('\t') {
        '\t'
    } else {
        ','
    }
}

/// Split a row into trimmed fields, dropping surrounding double quotes.
pub fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter)
        .map(|field| {
            let field = field.trim();
            field
                .strip_prefix('"')
                .and_then(|f| f.strip_suffix('"'))
                .unwrap_or(field)
                .trim()
        })
        .collect()
}

/// Parse a finite decimal number.
///
/// When the row is not comma-delimited, a decimal comma is accepted (`2500,5`).
pub fn parse_decimal(value: &str, delimiter: char) -> Option<f64> {
    let value = value.trim();
    let parsed = if delimiter != ',' && value.contains(',') && !value.contains('.') {
        value.replace(',', ".").parse::<f64>().ok()?
    } else {
        value.parse::<f64>().ok()?
    };
    parsed.is_finite().then_some(parsed)
}

/// Parse a whole quantity. Spreadsheet exports like `3.0` are accepted.
pub fn parse_quantity(value: &str, delimiter: char) -> Option<u32> {
    let value = value.trim();
    if let Ok(n) = value.parse::<u32>() {
        return Some(n);
    }
    let n = parse_decimal(value, delimiter)?;
    if n >= 0.0 && n.fract() == 0.0 && n <= u32::MAX as f64 {
        Some(n as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("2500;3;ST37;Stahl"), ';');
        assert_eq!(detect_delimiter("2500\t3\tST37\tStahl"), '\t');
        assert_eq!(detect_delimiter("2500,3,ST37,Stahl"), ',');
        // semicolon wins over a decimal comma
        assert_eq!(detect_delimiter("2500,5;3;ST37"), ';');
    }

    #[test]
    fn test_split_fields() {
        assert_eq!(
            split_fields(" 2500 ; 3;\"ST37\" ; Stahl S235JR ", ';'),
            vec!["2500", "3", "ST37", "Stahl S235JR"]
        );
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("2500", ','), Some(2500.0));
        assert_eq!(parse_decimal("2500.5", ';'), Some(2500.5));
        assert_eq!(parse_decimal("2500,5", ';'), Some(2500.5));
        assert_eq!(parse_decimal("2500,5", '\t'), Some(2500.5));
        assert_eq!(parse_decimal("abc", ','), None);
        assert_eq!(parse_decimal("inf", ','), None);
        assert_eq!(parse_decimal("", ','), None);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("4", ','), Some(4));
        assert_eq!(parse_quantity("3.0", ','), Some(3));
        assert_eq!(parse_quantity("3,0", ';'), Some(3));
        assert_eq!(parse_quantity("2.5", ','), None);
        assert_eq!(parse_quantity("-1", ','), None);
        assert_eq!(parse_quantity("0", ','), Some(0));
    }
}
