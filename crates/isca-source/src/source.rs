//! The [`ProposalSource`] trait.
//!
//! Sources are the modular operators run in sequence each transition. Each
//! one observes the current row and emits proposals for the next step; none
//! of them writes the row directly.

use crate::context::ObserveContext;
use isca_core::{Category, Proposal, SourceError};

/// A mechanism that proposes next-step values for cells.
///
/// # Contract
///
/// - `observe()` is called exactly once per transition, in configured
///   order, and MUST be deterministic given its configuration, its private
///   state, and (for random sources) its draw sequence.
/// - Every returned proposal targets `ctx.target_step()` and carries the
///   source's own [`category()`](Self::category). Build them with
///   [`ObserveContext::propose`].
/// - `&mut self`: a source may keep private state across steps (e.g.
///   persistence counters). No other component reads or writes it.
///
/// # Object safety
///
/// This trait is object-safe; the engine stores sources as
/// `Vec<Box<dyn ProposalSource>>`.
///
/// # Examples
///
/// A source that proposes 1 for every cell that is currently 0:
///
/// ```
/// use isca_core::{Bit, Category, Details, Proposal, Row, SourceError, SourceId, StepIndex};
/// use isca_source::{ObserveContext, ProposalSource};
///
/// struct Invert;
///
/// impl ProposalSource for Invert {
///     fn name(&self) -> &str { "invert" }
///     fn category(&self) -> Category { Category::Novelty }
///     fn observe(&mut self, ctx: &ObserveContext<'_>) -> Result<Vec<Proposal>, SourceError> {
///         Ok(ctx.row().iter().enumerate()
///             .filter(|(_, b)| !b.is_one())
///             .map(|(i, _)| ctx.propose(i, Bit::One, self.category(), Details::None))
///             .collect())
///     }
/// }
///
/// let row: Row = "0100".parse().unwrap();
/// let ctx = ObserveContext::new(&row, StepIndex(0), SourceId(0));
/// assert_eq!(Invert.observe(&ctx).unwrap().len(), 3);
/// ```
pub trait ProposalSource: Send + 'static {
    /// Human-readable name for error reporting, audit output and metrics.
    fn name(&self) -> &str;

    /// The category of every proposal this source emits.
    fn category(&self) -> Category;

    /// Observe the current row and emit proposals for the next step.
    fn observe(&mut self, ctx: &ObserveContext<'_>) -> Result<Vec<Proposal>, SourceError>;

    /// Clear private state at the start of a run.
    ///
    /// Default: no-op (stateless sources).
    fn reset(&mut self) {}
}
