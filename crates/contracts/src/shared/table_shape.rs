//! Structural checks a table must pass before the table widget takes it over.

use thiserror::Error;

/// Cell counts read from a `<table>` before activation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableShape {
    /// `th` cells across all `thead tr` rows.
    pub header_cells: usize,
    /// `th` cells in the first `thead tr`.
    pub first_header_row_cells: usize,
    pub has_body: bool,
    /// `td` cells in the first `tbody tr`, 0 when the body is empty.
    pub first_body_row_cells: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("Table missing thead or tbody, skipping DataTable initialization")]
    MissingSection,
    #[error("Column mismatch: Header={header}, Body={body}")]
    ColumnMismatch { header: usize, body: usize },
}

impl TableShape {
    /// Accepts the table when header and body exist and, if the body has
    /// data, the first rows agree on column count.
    pub fn check(&self) -> Result<(), ShapeError> {
        if self.header_cells == 0 || !self.has_body {
            return Err(ShapeError::MissingSection);
        }
        if self.first_body_row_cells > 0 && self.first_header_row_cells != self.first_body_row_cells
        {
            return Err(ShapeError::ColumnMismatch {
                header: self.first_header_row_cells,
                body: self.first_body_row_cells,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(header: usize, has_body: bool, body: usize) -> TableShape {
        TableShape {
            header_cells: header,
            first_header_row_cells: header,
            has_body,
            first_body_row_cells: body,
        }
    }

    #[test]
    fn test_valid_tables() {
        assert_eq!(shape(3, true, 3).check(), Ok(()));
        assert_eq!(shape(3, true, 0).check(), Ok(()));
    }

    #[test]
    fn test_missing_sections() {
        assert_eq!(shape(0, true, 0).check(), Err(ShapeError::MissingSection));
        assert_eq!(shape(3, false, 0).check(), Err(ShapeError::MissingSection));
    }

    #[test]
    fn test_column_mismatch() {
        assert_eq!(
            shape(4, true, 3).check(),
            Err(ShapeError::ColumnMismatch { header: 4, body: 3 })
        );
        assert_eq!(
            ShapeError::ColumnMismatch { header: 4, body: 3 }.to_string(),
            "Column mismatch: Header=4, Body=3"
        );
    }
}
