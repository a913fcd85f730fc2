//! The two-state cell value.

use crate::error::RowError;
use std::fmt;

/// A single cell value in a two-state automaton.
///
/// Using an enum rather than a bare `u8` makes out-of-domain cell values
/// unrepresentable once past the conversion boundary: [`TryFrom<u8>`] and
/// [`TryFrom<char>`] reject anything other than 0/1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Bit {
    /// Dead / off / blank.
    #[default]
    Zero = 0,
    /// Live / on / solid.
    One = 1,
}

impl Bit {
    /// Numeric value, 0 or 1.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether this is [`Bit::One`].
    #[inline]
    pub const fn is_one(self) -> bool {
        matches!(self, Self::One)
    }

    /// Convert from a boolean (`true` is [`Bit::One`]).
    #[inline]
    pub const fn from_bool(b: bool) -> Self {
        if b {
            Self::One
        } else {
            Self::Zero
        }
    }

    /// The glyph used by [`Row`](crate::Row)'s text form.
    pub const fn as_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }
}

impl From<bool> for Bit {
    fn from(b: bool) -> Self {
        Self::from_bool(b)
    }
}

impl From<Bit> for u8 {
    fn from(b: Bit) -> Self {
        b.as_u8()
    }
}

impl TryFrom<u8> for Bit {
    type Error = RowError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            other => Err(RowError::InvalidBit { value: other }),
        }
    }
}

impl TryFrom<char> for Bit {
    type Error = RowError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '0' => Ok(Self::Zero),
            '1' => Ok(Self::One),
            other => Err(RowError::InvalidGlyph { ch: other }),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_u8_accepts_only_binary() {
        assert_eq!(Bit::try_from(0u8).unwrap(), Bit::Zero);
        assert_eq!(Bit::try_from(1u8).unwrap(), Bit::One);
        assert_eq!(
            Bit::try_from(2u8).unwrap_err(),
            RowError::InvalidBit { value: 2 }
        );
    }

    #[test]
    fn try_from_char_rejects_other_glyphs() {
        assert_eq!(Bit::try_from('1').unwrap(), Bit::One);
        assert!(matches!(
            Bit::try_from('x'),
            Err(RowError::InvalidGlyph { ch: 'x' })
        ));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Bit::default(), Bit::Zero);
        assert!(!Bit::default().is_one());
    }
}
