//! The authoritative current row.

use isca_core::{Bit, Row, StepError};

/// Owns the current row of a run.
///
/// Sources only ever see [`snapshot_row`](Field::snapshot_row) copies; the
/// engine is the sole caller of [`replace`](Field::replace).
#[derive(Debug, Clone)]
pub struct Field {
    row: Row,
}

impl Field {
    /// A field initialized to `row`. Width is fixed from here on.
    pub fn new(row: Row) -> Self {
        Self { row }
    }

    /// Width of the field.
    pub fn size(&self) -> usize {
        self.row.len()
    }

    /// Value at `index`.
    ///
    /// Does not wrap; callers that want ring semantics wrap first.
    pub fn read(&self, index: usize) -> Result<Bit, StepError> {
        self.row.get(index).ok_or(StepError::InvalidCellIndex {
            cell: index,
            size: self.row.len(),
        })
    }

    /// A copy of the current row, safe to retain.
    pub fn snapshot_row(&self) -> Row {
        self.row.clone()
    }

    /// Borrow the current row.
    pub fn row(&self) -> &Row {
        &self.row
    }

    /// Swap in a new row of the same width.
    ///
    /// On `Err(StepError::DimensionMismatch)` the field is unchanged.
    pub fn replace(&mut self, row: Row) -> Result<(), StepError> {
        if row.len() != self.row.len() {
            return Err(StepError::DimensionMismatch {
                expected: self.row.len(),
                actual: row.len(),
            });
        }
        self.row = row;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isca_test_utils::row;

    #[test]
    fn read_in_and_out_of_range() {
        let f = Field::new(row("010"));
        assert_eq!(f.read(1).unwrap(), Bit::One);
        assert_eq!(
            f.read(3).unwrap_err(),
            StepError::InvalidCellIndex { cell: 3, size: 3 }
        );
    }

    #[test]
    fn replace_swaps_row() {
        let mut f = Field::new(row("010"));
        let before = f.snapshot_row();
        f.replace(row("111")).unwrap();
        assert_eq!(f.row(), &row("111"));
        // Earlier snapshots are unaffected.
        assert_eq!(before, row("010"));
    }

    #[test]
    fn replace_rejects_width_change() {
        let mut f = Field::new(row("010"));
        assert_eq!(
            f.replace(row("0101")).unwrap_err(),
            StepError::DimensionMismatch {
                expected: 3,
                actual: 4
            }
        );
        assert_eq!(f.row(), &row("010"));
    }
}
