//! The recorded history of a run: one row per step.
//!
//! [`Grid::hash`] uses FNV-1a for a fast, deterministic fingerprint. It is
//! not cryptographically secure and only serves to compare runs.

use isca_core::{Row, StepError};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Rows of a run in step order. Row `i` is the field at step `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    rows: Vec<Row>,
}

impl Grid {
    /// An empty grid for rows of `width` cells.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    /// An empty grid with room for `steps` rows.
    pub fn with_capacity(width: usize, steps: usize) -> Self {
        Self {
            width,
            rows: Vec::with_capacity(steps),
        }
    }

    /// Append the next row.
    pub fn push(&mut self, row: Row) -> Result<(), StepError> {
        if row.len() != self.width {
            return Err(StepError::DimensionMismatch {
                expected: self.width,
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Cells per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of recorded rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no row has been recorded.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in step order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at `step`, if recorded.
    pub fn row(&self, step: usize) -> Option<&Row> {
        self.rows.get(step)
    }

    /// The most recent row.
    pub fn last(&self) -> Option<&Row> {
        self.rows.last()
    }

    /// Total live cells across every row.
    pub fn count_ones(&self) -> usize {
        self.rows.iter().map(Row::count_ones).sum()
    }

    /// FNV-1a fingerprint over the width, then every row's cells.
    ///
    /// The row count is folded in at each row boundary so grids with the
    /// same cells split differently never collide trivially.
    pub fn hash(&self) -> u64 {
        let mut hash = fnv1a_u64(FNV_OFFSET, self.width as u64);
        for (i, row) in self.rows.iter().enumerate() {
            hash = fnv1a_u64(hash, i as u64);
            for bit in row.iter() {
                hash = fnv1a_byte(hash, bit.as_u8());
            }
        }
        hash
    }
}
