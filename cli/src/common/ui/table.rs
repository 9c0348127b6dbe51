//! # StockChat Table Formatting
//!
//! File: cli/src/common/ui/table.rs
//! Author: Christi Mahu
//!
//! Plain-text tables for terminal output:
//!
//! ```text
//! Symbol | Company
//! -------+-----------
//! AAPL   | Apple Inc.
//! ```
//!

/// Formats `rows` under `headers`, padding each column to its widest cell.
/// The last column is not padded. Rows shorter than `headers` get empty cells.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().take(columns).enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let format_row = |cells: Vec<&str>| -> String {
        let mut line = String::new();
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).copied().unwrap_or("");
            if i > 0 {
                line.push_str(" | ");
            }
            if i + 1 == columns {
                line.push_str(cell);
            } else {
                line.push_str(cell);
                line.push_str(&" ".repeat(width - cell.chars().count()));
            }
        }
        line
    };

    let mut out = format_row(headers.to_vec());
    out.push('\n');
    let separator: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, w)| {
            // Widen inner segments to cover the " | " padding.
            let pad = if i == 0 || i + 1 == columns { 1 } else { 2 };
            "-".repeat(w + pad)
        })
        .collect();
    out.push_str(&separator.join("+"));
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_are_aligned() {
        let rows = vec![
            vec!["AAPL".to_string(), "Apple Inc.".to_string()],
            vec!["GOOGL".to_string(), "Alphabet Inc.".to_string()],
        ];
        let table = format_table(&["Symbol", "Company"], &rows);
        let expected = "\
Symbol | Company
-------+--------------
AAPL   | Apple Inc.
GOOGL  | Alphabet Inc.
";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let rows = vec![vec!["X".to_string()]];
        let table = format_table(&["A", "B", "C"], &rows);
        assert_eq!(table.lines().nth(2), Some("X |   | "));
    }
}
