//! Reusable proposal source fixtures.
//!
//! - [`ConstSource`]: proposes a fixed value for fixed cells every step.
//! - [`FailingSource`]: fails deterministically after N calls.

use isca_core::{Bit, Category, Details, Proposal, SourceError};
use isca_source::context::ObserveContext;
use isca_source::source::ProposalSource;

/// Proposes `value` for each of `cells` every step under `category`.
///
/// Cells are not range-checked, so this can also feed out-of-range
/// proposals to the resolver.
pub struct ConstSource {
    pub name: String,
    pub category: Category,
    pub cells: Vec<usize>,
    pub value: Bit,
}

impl ConstSource {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        cells: Vec<usize>,
        value: Bit,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            cells,
            value,
        }
    }

    /// A baseline-category source proposing `value` for every cell.
    pub fn uniform_baseline(name: impl Into<String>, size: usize, value: Bit) -> Self {
        Self::new(name, Category::Baseline, (0..size).collect(), value)
    }
}

impl ProposalSource for ConstSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        self.category
    }

    fn observe(&mut self, ctx: &ObserveContext<'_>) -> Result<Vec<Proposal>, SourceError> {
        Ok(self
            .cells
            .iter()
            .map(|&cell| ctx.propose(cell, self.value, self.category, Details::None))
            .collect())
    }
}

/// Succeeds (emitting nothing) for `succeed_count` calls, then fails.
pub struct FailingSource {
    pub name: String,
    pub category: Category,
    pub succeed_count: usize,
    calls: usize,
}

impl FailingSource {
    pub fn new(name: impl Into<String>, category: Category, succeed_count: usize) -> Self {
        Self {
            name: name.into(),
            category,
            succeed_count,
            calls: 0,
        }
    }

    /// How many times `observe()` has been called.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl ProposalSource for FailingSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        self.category
    }

    fn observe(&mut self, _ctx: &ObserveContext<'_>) -> Result<Vec<Proposal>, SourceError> {
        self.calls += 1;
        if self.calls > self.succeed_count {
            return Err(SourceError::ExecutionFailed {
                reason: format!("{} failed on call {}", self.name, self.calls),
            });
        }
        Ok(Vec::new())
    }

    fn reset(&mut self) {
        self.calls = 0;
    }
}
