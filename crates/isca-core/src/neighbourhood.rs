//! Radius-1 neighbourhoods and their 3-glyph pattern form.

use crate::bit::Bit;
use crate::error::RowError;
use std::fmt;
use std::str::FromStr;

/// The three cells `(left, center, right)` around a cell.
///
/// Also serves as a neighbourhood *pattern*: parses from and displays as a
/// 3-glyph string in left-center-right order, e.g. `"101"`.
///
/// ```
/// use isca_core::{Bit, Neighbourhood};
///
/// let n: Neighbourhood = "101".parse().unwrap();
/// assert_eq!(n.left, Bit::One);
/// assert_eq!(n.center, Bit::Zero);
/// assert_eq!(n.index(), 5);
/// assert_eq!(n.to_string(), "101");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Neighbourhood {
    /// Cell at `index - 1` (wrapping).
    pub left: Bit,
    /// The cell itself.
    pub center: Bit,
    /// Cell at `index + 1` (wrapping).
    pub right: Bit,
}

impl Neighbourhood {
    /// Construct from the three cell values.
    pub const fn new(left: Bit, center: Bit, right: Bit) -> Self {
        Self {
            left,
            center,
            right,
        }
    }

    /// Position of this neighbourhood in the rule table: `left*4 + center*2 + right`.
    #[inline]
    pub const fn index(self) -> u8 {
        (self.left.as_u8() << 2) | (self.center.as_u8() << 1) | self.right.as_u8()
    }

    /// Inverse of [`index`](Self::index). Only the low three bits are used.
    pub const fn from_index(index: u8) -> Self {
        Self {
            left: Bit::from_bool(index & 0b100 != 0),
            center: Bit::from_bool(index & 0b010 != 0),
            right: Bit::from_bool(index & 0b001 != 0),
        }
    }

    /// All eight neighbourhoods in rule-table order (`000` first).
    pub fn all() -> impl Iterator<Item = Self> {
        (0u8..8).map(Self::from_index)
    }
}

impl FromStr for Neighbourhood {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let glyphs: Vec<char> = s.chars().collect();
        if glyphs.len() != 3 {
            return Err(RowError::PatternLength {
                pattern: s.to_string(),
            });
        }
        Ok(Self {
            left: Bit::try_from(glyphs[0])?,
            center: Bit::try_from(glyphs[1])?,
            right: Bit::try_from(glyphs[2])?,
        })
    }
}

impl fmt::Display for Neighbourhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.left, self.center, self.right)
    }
}
