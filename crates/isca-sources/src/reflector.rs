//! Persistence-triggered reflection.
//!
//! Tracks, per cell, how many consecutive observed steps the cell has been
//! 1. Once a cell's run length reaches `hold`, it proposes a 1 into one
//! neighbour each step until it turns off: even cells push right
//! (`i + 1`), odd cells push left (`i - 1`), both wrapping.
//!
//! Counters are updated before emission, so with `hold = 2` a cell that is
//! on in rows `t-1` and `t` reflects into row `t+1`. A threshold at or above
//! the run's step count can never be reached and disables the source.

use isca_core::{Bit, Category, Details, Proposal, SourceError};
use isca_source::context::ObserveContext;
use isca_source::source::ProposalSource;

use crate::error::SourceConfigError;

/// Persistence reflection source.
///
/// Owns its counters exclusively; the engine never sees them.
#[derive(Debug, Clone)]
pub struct PersistenceReflector {
    name: String,
    hold: u32,
    /// Consecutive-ones count per cell. Empty until the first observation.
    counters: Vec<u32>,
}

/// Builder for [`PersistenceReflector`].
pub struct PersistenceReflectorBuilder {
    name: String,
    hold: u32,
}

impl PersistenceReflector {
    /// Create a new builder. Default name `"reflection"`, hold 3.
    pub fn builder() -> PersistenceReflectorBuilder {
        PersistenceReflectorBuilder {
            name: "reflection".to_string(),
            hold: 3,
        }
    }

    /// The run-length threshold.
    pub fn hold(&self) -> u32 {
        self.hold
    }

    /// Current counters, one per cell (empty before the first observation).
    pub fn counters(&self) -> &[u32] {
        &self.counters
    }

    /// Neighbour a persistent cell reflects into.
    #[inline]
    pub fn reflection_target(index: usize, size: usize) -> usize {
        if index % 2 == 0 {
            (index + 1) % size
        } else {
            (index + size - 1) % size
        }
    }
}

impl PersistenceReflectorBuilder {
    /// Set the source name (default: `"reflection"`).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the run-length threshold (default: 3). Must be >= 1.
    pub fn hold(mut self, hold: u32) -> Self {
        self.hold = hold;
        self
    }

    /// Build the source.
    ///
    /// # Errors
    ///
    /// [`SourceConfigError::ZeroHold`] if `hold == 0`.
    pub fn build(self) -> Result<PersistenceReflector, SourceConfigError> {
        if self.hold == 0 {
            return Err(SourceConfigError::ZeroHold);
        }
        Ok(PersistenceReflector {
            name: self.name,
            hold: self.hold,
            counters: Vec::new(),
        })
    }
}

impl ProposalSource for PersistenceReflector {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        Category::Reflection
    }

    fn observe(&mut self, ctx: &ObserveContext<'_>) -> Result<Vec<Proposal>, SourceError> {
        let row = ctx.row();
        let size = row.len();

        if self.counters.is_empty() {
            self.counters = vec![0; size];
        } else if self.counters.len() != size {
            return Err(SourceError::DimensionMismatch {
                expected: self.counters.len(),
                actual: size,
            });
        }

        for (count, bit) in self.counters.iter_mut().zip(row.iter()) {
            *count = if bit.is_one() {
                count.saturating_add(1)
            } else {
                0
            };
        }

        let out = self
            .counters
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count >= self.hold)
            .map(|(i, &count)| {
                ctx.propose(
                    Self::reflection_target(i, size),
                    Bit::One,
                    Category::Reflection,
                    Details::Persistence {
                        origin: i,
                        run_length: count,
                    },
                )
            })
            .collect();
        Ok(out)
    }

    fn reset(&mut self) {
        self.counters.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isca_core::{Row, SourceId, StepIndex};

    fn observe_at(src: &mut PersistenceReflector, step: u64, row: &str) -> Vec<Proposal> {
        let row: Row = row.parse().unwrap();
        let ctx = ObserveContext::new(&row, StepIndex(step), SourceId(2));
        src.observe(&ctx).unwrap()
    }

    #[test]
    fn builder_rejects_zero_hold() {
        assert_eq!(
            PersistenceReflector::builder().hold(0).build().unwrap_err(),
            SourceConfigError::ZeroHold
        );
    }

    #[test]
    fn counters_increment_and_reset() {
        let mut src = PersistenceReflector::builder().hold(10).build().unwrap();
        observe_at(&mut src, 0, "110");
        observe_at(&mut src, 1, "011");
        assert_eq!(src.counters(), &[0, 2, 1]);
    }

    #[test]
    fn reflects_after_hold_steps() {
        let mut src = PersistenceReflector::builder().hold(2).build().unwrap();
        assert!(observe_at(&mut src, 0, "00100").is_empty());

        let out = observe_at(&mut src, 1, "00100");
        assert_eq!(out.len(), 1);
        // Cell 2 is even: pushes right into cell 3.
        assert_eq!(out[0].cell(), 3);
        assert_eq!(out[0].step(), StepIndex(2));
        assert_eq!(out[0].category(), Category::Reflection);
        assert_eq!(
            out[0].details(),
            &Details::Persistence {
                origin: 2,
                run_length: 2
            }
        );
    }

    #[test]
    fn odd_cells_push_left_and_wrap() {
        assert_eq!(PersistenceReflector::reflection_target(3, 5), 2);
        assert_eq!(PersistenceReflector::reflection_target(4, 5), 0);
        assert_eq!(PersistenceReflector::reflection_target(1, 4), 0);
        assert_eq!(PersistenceReflector::reflection_target(0, 4), 1);
        assert_eq!(PersistenceReflector::reflection_target(0, 1), 0);
    }

    #[test]
    fn keeps_reflecting_while_on() {
        let mut src = PersistenceReflector::builder().hold(1).build().unwrap();
        for step in 0..4 {
            let out = observe_at(&mut src, step, "01");
            assert_eq!(out.len(), 1);
            assert_eq!(out[0].cell(), 0);
        }
    }

    #[test]
    fn width_change_is_rejected() {
        let mut src = PersistenceReflector::builder().build().unwrap();
        observe_at(&mut src, 0, "0000");
        let row: Row = "00000".parse().unwrap();
        let ctx = ObserveContext::new(&row, StepIndex(1), SourceId(0));
        assert_eq!(
            src.observe(&ctx).unwrap_err(),
            SourceError::DimensionMismatch {
                expected: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn reset_clears_counters() {
        let mut src = PersistenceReflector::builder().hold(2).build().unwrap();
        observe_at(&mut src, 0, "1");
        src.reset();
        assert!(src.counters().is_empty());
        assert!(observe_at(&mut src, 0, "1").is_empty());
    }
}
