//! CSV text for table exports.
//!
//! Header cells are written as-is and body cells are always quoted.

/// Filename used when a page does not pass one.
pub const DEFAULT_EXPORT_FILENAME: &str = "export.csv";

/// Quotes a body cell and doubles embedded quotes.
pub fn quote_cell(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// Builds the CSV document from trimmed header and body texts.
///
/// Lines are joined with `\n` and there is no trailing newline.
pub fn build_csv<H, R, C>(headers: &[H], rows: &[R]) -> String
where
    H: AsRef<str>,
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| h.as_ref().trim())
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            row.as_ref()
                .iter()
                .map(|c| quote_cell(c.as_ref().trim()))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_quote_doubled_header_unquoted() {
        let csv = build_csv(&["A", "B"], &[vec!["x", "y\"z"]]);
        assert_eq!(csv, "A,B\n\"x\",\"y\"\"z\"");
    }

    #[test]
    fn test_cells_are_trimmed() {
        let csv = build_csv(&[" Name "], &[vec!["  Sugar 1kg \n"]]);
        assert_eq!(csv, "Name\n\"Sugar 1kg\"");
    }

    #[test]
    fn test_header_commas_not_escaped() {
        let csv = build_csv(&["Price, KES", "Qty"], &[vec!["1,000", "2"]]);
        assert_eq!(csv, "Price, KES,Qty\n\"1,000\",\"2\"");
    }

    #[test]
    fn test_no_rows() {
        let rows: Vec<Vec<&str>> = Vec::new();
        assert_eq!(build_csv(&["A", "B"], &rows), "A,B");
    }
}
