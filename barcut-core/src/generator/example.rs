//! Sample cut list in the parser's format.

use std::fmt::Write;

/// Rows of the sample: length, quantity, material code, material name.
const SAMPLE_ROWS: [(f64, u32, &str, &str); 10] = [
    (2500.0, 3, "ST37", "Stahl S235JR"),
    (1800.0, 5, "ST37", "Stahl S235JR"),
    (1200.0, 4, "ST37", "Stahl S235JR"),
    (900.0, 6, "ALU", "Aluminium 6060"),
    (2400.0, 2, "ALU", "Aluminium 6060"),
    (1500.0, 4, "ALU", "Aluminium 6060"),
    (800.0, 8, "ST52", "Stahl S355J2"),
    (2200.0, 3, "ST52", "Stahl S355J2"),
    (1000.0, 5, "ST52", "Stahl S355J2"),
    (1600.0, 4, "ST52", "Stahl S355J2"),
];

/// Generate a sample cut list with a header row.
pub fn example_cut_list() -> String {
    let mut output = String::new();
    writeln!(output, "Length (mm);Quantity;Material;Material name").unwrap();
    for (length, quantity, code, name) in SAMPLE_ROWS {
        writeln!(output, "{};{};{};{}", length, quantity, code, name).unwrap();
    }
    output
}
