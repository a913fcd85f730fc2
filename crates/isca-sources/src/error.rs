//! Builder validation errors for the source variants.

use isca_core::{RowError, RuleError};
use std::error::Error;
use std::fmt;

/// Errors detected when building a source from its configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceConfigError {
    /// Rule number outside `[0, 255]`.
    Rule(RuleError),
    /// A pattern string that is not three '0'/'1' glyphs.
    InvalidPattern {
        /// The pattern as given.
        pattern: String,
        /// Why it was rejected.
        reason: RowError,
    },
    /// `hold` must be at least 1.
    ZeroHold,
    /// Probability is NaN or outside `[0, 1]`.
    ProbabilityOutOfRange {
        /// The rejected probability.
        value: f64,
    },
}

impl fmt::Display for SourceConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(e) => write!(f, "{e}"),
            Self::InvalidPattern { pattern, reason } => {
                write!(f, "invalid pattern {pattern:?}: {reason}")
            }
            Self::ZeroHold => write!(f, "hold threshold must be at least 1"),
            Self::ProbabilityOutOfRange { value } => {
                write!(f, "probability must be within [0, 1], got {value}")
            }
        }
    }
}

impl Error for SourceConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rule(e) => Some(e),
            Self::InvalidPattern { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl From<RuleError> for SourceConfigError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}
