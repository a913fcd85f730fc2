//! Observation context passed to sources during a transition.
//!
//! [`ObserveContext`] carries the frozen row for the current step, the step
//! indices, and the identity the engine assigned to the source. Proposals
//! are built through [`ObserveContext::propose`], which stamps the target
//! step and source id so a source cannot mislabel its own output.

use isca_core::{Bit, Category, Details, Proposal, Row, SourceId, StepIndex};

/// Read-only view handed to each source's `observe()`.
///
/// The row is an immutable snapshot; sources may clone it cheaply but
/// cannot reach the engine's field.
pub struct ObserveContext<'a> {
    row: &'a Row,
    step: StepIndex,
    source: SourceId,
}

impl<'a> ObserveContext<'a> {
    /// Construct a new observation context.
    ///
    /// Typically called by the engine, not by sources directly.
    pub fn new(row: &'a Row, step: StepIndex, source: SourceId) -> Self {
        Self { row, step, source }
    }

    /// The row at the current step.
    pub fn row(&self) -> &'a Row {
        self.row
    }

    /// Width of the current row.
    pub fn size(&self) -> usize {
        self.row.len()
    }

    /// The step being observed.
    pub fn step(&self) -> StepIndex {
        self.step
    }

    /// The step every proposal from this observation targets.
    pub fn target_step(&self) -> StepIndex {
        self.step.next()
    }

    /// Identity of the source being observed.
    pub fn source_id(&self) -> SourceId {
        self.source
    }

    /// Build a proposal for `cell` at the target step.
    pub fn propose(&self, cell: usize, value: Bit, category: Category, details: Details) -> Proposal {
        Proposal::new(self.target_step(), cell, value, category, self.source, details)
    }
}
