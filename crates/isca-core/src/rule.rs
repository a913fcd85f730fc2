//! Elementary (Wolfram-numbered) rule tables.

use crate::bit::Bit;
use crate::error::RuleError;
use crate::neighbourhood::Neighbourhood;
use std::fmt;

/// A 1D, 2-state, radius-1 transition table encoded as an 8-bit rule number.
///
/// The next value for neighbourhood `(l, c, r)` is bit `l*4 + c*2 + r` of
/// the rule number.
///
/// ```
/// use isca_core::{Bit, RuleTable};
///
/// let rule30 = RuleTable::new(30);
/// // 30 = 0b0001_1110: neighbourhoods 001..100 map to 1.
/// assert_eq!(rule30.evaluate(Bit::One, Bit::Zero, Bit::Zero), Bit::One);
/// assert_eq!(rule30.evaluate(Bit::One, Bit::One, Bit::One), Bit::Zero);
///
/// assert!(RuleTable::try_from_number(256).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleTable {
    number: u8,
}

impl RuleTable {
    /// Build from an in-range rule number.
    pub const fn new(number: u8) -> Self {
        Self { number }
    }

    /// Build from a wider integer, rejecting values outside `[0, 255]`.
    pub fn try_from_number(value: i64) -> Result<Self, RuleError> {
        u8::try_from(value)
            .map(Self::new)
            .map_err(|_| RuleError::OutOfRange { value })
    }

    /// The rule number.
    pub const fn number(self) -> u8 {
        self.number
    }

    /// Next value of a cell with the given neighbourhood.
    #[inline]
    pub const fn evaluate(self, left: Bit, center: Bit, right: Bit) -> Bit {
        self.apply(Neighbourhood::new(left, center, right))
    }

    /// Next value for a packed neighbourhood.
    #[inline]
    pub const fn apply(self, n: Neighbourhood) -> Bit {
        Bit::from_bool((self.number >> n.index()) & 1 == 1)
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {}", self.number)
    }
}
