//! Immutable fixed-width rows with a periodic (ring) boundary.

use crate::bit::Bit;
use crate::error::RowError;
use crate::neighbourhood::Neighbourhood;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// One generation of a one-dimensional automaton.
///
/// A `Row` is a value type: it is built once and never edited. Cells live
/// behind an `Arc<[Bit]>`, so cloning a row (e.g. to hand a snapshot to
/// proposal sources) is O(1) and never aliases mutable state.
///
/// Neighbourhood lookup treats the row as a ring: index `-1` is the last
/// cell and index `len` is the first.
///
/// # Examples
///
/// ```
/// use isca_core::{Bit, Row};
///
/// let row: Row = "10100".parse().unwrap();
/// assert_eq!(row.len(), 5);
/// assert_eq!(row.get(2), Some(Bit::One));
///
/// // Cell 0's left neighbour wraps to cell 4.
/// assert_eq!(row.neighbourhood(0).to_string(), "010");
/// assert_eq!(row.neighbourhood(1).to_string(), "101");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Row {
    cells: Arc<[Bit]>,
}

impl Row {
    /// Build a row from owned cells.
    ///
    /// Returns `Err(RowError::EmptyRow)` if `cells` is empty.
    pub fn new(cells: Vec<Bit>) -> Result<Self, RowError> {
        if cells.is_empty() {
            return Err(RowError::EmptyRow);
        }
        Ok(Self {
            cells: cells.into(),
        })
    }

    /// A row of `len` zeros.
    pub fn zeros(len: usize) -> Result<Self, RowError> {
        Self::new(vec![Bit::Zero; len])
    }

    /// A row of `len` zeros with a single one at `len / 2`.
    pub fn single_center(len: usize) -> Result<Self, RowError> {
        let mut cells = vec![Bit::Zero; len];
        if let Some(c) = cells.get_mut(len / 2) {
            *c = Bit::One;
        }
        Self::new(cells)
    }

    /// Build a row from numeric 0/1 values.
    pub fn from_u8s(values: &[u8]) -> Result<Self, RowError> {
        let cells = values
            .iter()
            .map(|&v| Bit::try_from(v))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cells)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty rows.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Cell value at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Bit> {
        self.cells.get(index).copied()
    }

    /// All cells in index order.
    pub fn as_slice(&self) -> &[Bit] {
        &self.cells
    }

    /// Iterate over cells in index order.
    pub fn iter(&self) -> impl Iterator<Item = Bit> + '_ {
        self.cells.iter().copied()
    }

    /// The wrapping neighbourhood of `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`. Callers iterate `0..len()`.
    pub fn neighbourhood(&self, index: usize) -> Neighbourhood {
        let n = self.cells.len();
        let (left, right) = wrap_neighbours(index, n);
        Neighbourhood::new(self.cells[left], self.cells[index], self.cells[right])
    }

    /// Number of cells set to one.
    pub fn count_ones(&self) -> usize {
        self.cells.iter().filter(|b| b.is_one()).count()
    }

    /// Cells as numeric 0/1 bytes.
    pub fn to_u8s(&self) -> Vec<u8> {
        self.cells.iter().map(|b| b.as_u8()).collect()
    }
}

/// Left and right neighbour indices of `index` on a ring of `len` cells.
#[inline]
pub fn wrap_neighbours(index: usize, len: usize) -> (usize, usize) {
    let left = if index == 0 { len - 1 } else { index - 1 };
    let right = if index + 1 == len { 0 } else { index + 1 };
    (left, right)
}

impl FromStr for Row {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .map(Bit::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cells)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.cells.iter() {
            write!(f, "{b}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row({self})")
    }
}
