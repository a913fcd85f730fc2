//! Error types for the core value types and the step pipeline.
//!
//! Organized by subsystem: row/value construction ([`RowError`]), rule
//! numbers ([`RuleError`]), individual source observation
//! ([`SourceError`]), and whole-step execution ([`StepError`]).

use crate::id::StepIndex;
use std::error::Error;
use std::fmt;

/// Errors from constructing bits, rows, or neighbourhood patterns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowError {
    /// A numeric cell value outside {0, 1}.
    InvalidBit {
        /// The rejected value.
        value: u8,
    },
    /// A text glyph other than '0' or '1'.
    InvalidGlyph {
        /// The rejected character.
        ch: char,
    },
    /// Attempted to construct a row with zero cells.
    EmptyRow,
    /// A neighbourhood pattern string that is not exactly three glyphs.
    PatternLength {
        /// The offending pattern.
        pattern: String,
    },
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBit { value } => write!(f, "cell value {value} is not 0 or 1"),
            Self::InvalidGlyph { ch } => write!(f, "glyph {ch:?} is not '0' or '1'"),
            Self::EmptyRow => write!(f, "row must have at least one cell"),
            Self::PatternLength { pattern } => {
                write!(f, "pattern {pattern:?} must be exactly 3 glyphs")
            }
        }
    }
}

impl Error for RowError {}

/// Errors from constructing a [`RuleTable`](crate::RuleTable).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The rule number does not fit the 8-bit elementary rule space.
    OutOfRange {
        /// The rejected rule number.
        value: i64,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { value } => {
                write!(f, "rule number {value} is outside [0, 255]")
            }
        }
    }
}

impl Error for RuleError {}

/// The name of a category that is not one of the four known kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCategory {
    /// The unrecognised name.
    pub name: String,
}

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown category {:?} (expected baseline, pattern-trigger, reflection or novelty)",
            self.name
        )
    }
}

impl Error for UnknownCategory {}

/// Errors from a single source's `observe()`.
///
/// Wrapped in [`StepError::SourceFailed`] by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceError {
    /// The source could not produce proposals.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The observed row does not match the width the source was sized for.
    DimensionMismatch {
        /// Width the source's private state was built for.
        expected: usize,
        /// Width of the row it was handed.
        actual: usize,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "row width {actual} does not match expected {expected}")
            }
        }
    }
}

impl Error for SourceError {}

/// Errors from executing one engine step.
///
/// Every variant aborts the run in progress; the field keeps its last
/// successfully committed row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// A proposal source returned an error during `observe()`.
    SourceFailed {
        /// Name of the failing source.
        name: String,
        /// The underlying source error.
        reason: SourceError,
    },
    /// No proposal of any category targeted this cell. Happens only when
    /// no baseline source runs, which is a configuration error.
    Unresolved {
        /// The step being resolved.
        step: StepIndex,
        /// The uncovered cell.
        cell: usize,
    },
    /// A row's width disagrees with the field's width.
    DimensionMismatch {
        /// The field's width.
        expected: usize,
        /// The offending row's width.
        actual: usize,
    },
    /// A proposal or read targets a cell outside `[0, size)`.
    InvalidCellIndex {
        /// The offending index.
        cell: usize,
        /// The field's width.
        size: usize,
    },
    /// A proposal handed to resolution targets a different step.
    StepMismatch {
        /// The step being resolved.
        expected: StepIndex,
        /// The step the proposal targets.
        actual: StepIndex,
    },
    /// The run already produced every requested row.
    RunCompleted,
    /// A previous step failed; the run cannot continue.
    RunAborted,
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceFailed { name, reason } => {
                write!(f, "source '{name}' failed: {reason}")
            }
            Self::Unresolved { step, cell } => {
                write!(
                    f,
                    "no proposal targets cell {cell} at step {step} (is a baseline source configured?)"
                )
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "row width {actual} does not match field width {expected}")
            }
            Self::InvalidCellIndex { cell, size } => {
                write!(f, "cell index {cell} out of range for width {size}")
            }
            Self::StepMismatch { expected, actual } => {
                write!(
                    f,
                    "proposal targets step {actual} but step {expected} is being resolved"
                )
            }
            Self::RunCompleted => write!(f, "run already completed"),
            Self::RunAborted => write!(f, "run aborted by an earlier failure"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SourceFailed { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_failed_chains_to_reason() {
        let err = StepError::SourceFailed {
            name: "novelty".into(),
            reason: SourceError::ExecutionFailed {
                reason: "boom".into(),
            },
        };
        assert_eq!(
            err.to_string(),
            "source 'novelty' failed: execution failed: boom"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn unresolved_mentions_cell_and_step() {
        let err = StepError::Unresolved {
            step: StepIndex(3),
            cell: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("cell 7"));
        assert!(msg.contains("step 3"));
    }
}
