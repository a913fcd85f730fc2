//! Proposals: candidate next values for a single cell, with provenance.

use crate::bit::Bit;
use crate::error::UnknownCategory;
use crate::id::{SourceId, StepIndex};
use crate::neighbourhood::Neighbourhood;
use std::fmt;
use std::str::FromStr;

/// The kind of mechanism that produced a proposal.
///
/// Resolution ranks proposals by category, never by source identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Deterministic rule-table output. Every cell gets one per step.
    Baseline,
    /// A configured neighbourhood pattern matched.
    PatternTrigger,
    /// A cell stayed on long enough to push into a neighbour.
    Reflection,
    /// Independent random injection.
    Novelty,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 4] = [
        Category::Baseline,
        Category::PatternTrigger,
        Category::Reflection,
        Category::Novelty,
    ];

    /// Dense index in `0..4`, matching [`ALL`](Self::ALL).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical kebab-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::PatternTrigger => "pattern-trigger",
            Self::Reflection => "reflection",
            Self::Novelty => "novelty",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts the canonical names plus the short aliases `cpi`
    /// (pattern-trigger) and `reflect`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "baseline" => Ok(Self::Baseline),
            "pattern-trigger" | "pattern" | "cpi" => Ok(Self::PatternTrigger),
            "reflection" | "reflect" => Ok(Self::Reflection),
            "novelty" => Ok(Self::Novelty),
            _ => Err(UnknownCategory {
                name: s.to_string(),
            }),
        }
    }
}

/// Typed diagnostic payload explaining why a proposal was emitted.
#[derive(Clone, Debug, PartialEq)]
pub enum Details {
    /// Rule-table evaluation of the cell's neighbourhood.
    Rule {
        /// The rule number applied.
        rule: u8,
        /// The neighbourhood it was applied to.
        neighbourhood: Neighbourhood,
    },
    /// A configured pattern matched the cell's neighbourhood.
    Pattern {
        /// The matched pattern.
        neighbourhood: Neighbourhood,
    },
    /// A persistent cell reflected into this one.
    Persistence {
        /// The cell whose run length crossed the threshold.
        origin: usize,
        /// Its consecutive-ones count at observation time.
        run_length: u32,
    },
    /// A random draw fell below the injection probability.
    Draw {
        /// The uniform draw in `[0, 1)`.
        value: f64,
        /// The configured probability.
        threshold: f64,
    },
    /// No payload.
    None,
}

/// An immutable candidate value for one cell at one future step.
///
/// Created once by a proposal source, appended to the ledger, never
/// modified afterwards. There are no setters; all fields are read through
/// accessors.
#[derive(Clone, Debug, PartialEq)]
pub struct Proposal {
    step: StepIndex,
    cell: usize,
    value: Bit,
    category: Category,
    source: SourceId,
    details: Details,
}

impl Proposal {
    /// Construct a proposal.
    pub fn new(
        step: StepIndex,
        cell: usize,
        value: Bit,
        category: Category,
        source: SourceId,
        details: Details,
    ) -> Self {
        Self {
            step,
            cell,
            value,
            category,
            source,
            details,
        }
    }

    /// The step this proposal is meant to influence.
    #[inline]
    pub fn step(&self) -> StepIndex {
        self.step
    }

    /// The target cell.
    #[inline]
    pub fn cell(&self) -> usize {
        self.cell
    }

    /// The proposed value.
    #[inline]
    pub fn value(&self) -> Bit {
        self.value
    }

    /// The proposing mechanism's category.
    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    /// The emitting source.
    #[inline]
    pub fn source(&self) -> SourceId {
        self.source
    }

    /// Diagnostic payload.
    pub fn details(&self) -> &Details {
        &self.details
    }
}
