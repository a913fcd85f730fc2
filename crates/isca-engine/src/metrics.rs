//! Per-step and per-run metrics.
//!
//! [`StepMetrics`] captures timing and proposal counts for one transition;
//! [`RunSummary`] folds them into run totals for reporting.

use isca_core::{Category, StepIndex};

/// Proposal count and timing for one source in one step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceMetrics {
    /// The source's configured name.
    pub name: String,
    /// The source's category.
    pub category: Category,
    /// Proposals emitted this step.
    pub proposals: usize,
    /// Time spent in `observe()`, in microseconds.
    pub us: u64,
}

/// Metrics collected during a single transition.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// The step this transition produced.
    pub step: StepIndex,
    /// Wall-clock time for the whole transition.
    pub total_us: u64,
    /// Per-source counts in observation order.
    pub sources: Vec<SourceMetrics>,
    /// Cells won by a non-baseline category.
    pub overrides: usize,
    /// Winning-cell count per category, indexed by [`Category::index`].
    pub wins: [usize; 4],
}

impl StepMetrics {
    /// Proposals emitted this step under `category`, across all sources.
    pub fn proposals(&self, category: Category) -> usize {
        self.sources
            .iter()
            .filter(|s| s.category == category)
            .map(|s| s.proposals)
            .sum()
    }

    /// Total proposals emitted this step.
    pub fn total_proposals(&self) -> usize {
        self.sources.iter().map(|s| s.proposals).sum()
    }
}

/// Totals accumulated over every committed transition of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Committed transitions.
    pub transitions: u64,
    /// Proposals per category, indexed by [`Category::index`].
    pub proposals: [u64; 4],
    /// Winning cells per category, indexed by [`Category::index`].
    pub wins: [u64; 4],
    /// Cells won by a non-baseline category.
    pub overrides: u64,
    /// Summed transition wall-clock time, in microseconds.
    pub total_us: u64,
}

impl RunSummary {
    /// Fold one committed transition in.
    pub fn record(&mut self, step: &StepMetrics) {
        self.transitions += 1;
        for c in Category::ALL {
            self.proposals[c.index()] += step.proposals(c) as u64;
            self.wins[c.index()] += step.wins[c.index()] as u64;
        }
        self.overrides += step.overrides as u64;
        self.total_us += step.total_us;
    }

    /// Total proposals emitted under `category`.
    pub fn proposals_for(&self, category: Category) -> u64 {
        self.proposals[category.index()]
    }

    /// Total cells won by `category`.
    pub fn wins_for(&self, category: Category) -> u64 {
        self.wins[category.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StepMetrics {
        let mut wins = [0; 4];
        wins[Category::Baseline.index()] = 3;
        wins[Category::Novelty.index()] = 1;
        StepMetrics {
            step: StepIndex(1),
            total_us: 10,
            sources: vec![
                SourceMetrics {
                    name: "baseline".into(),
                    category: Category::Baseline,
                    proposals: 4,
                    us: 4,
                },
                SourceMetrics {
                    name: "novelty".into(),
                    category: Category::Novelty,
                    proposals: 2,
                    us: 3,
                },
            ],
            overrides: 1,
            wins,
        }
    }

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert!(m.sources.is_empty());
        assert_eq!(m.overrides, 0);
        assert_eq!(m.total_proposals(), 0);
    }

    #[test]
    fn per_category_counts() {
        let m = sample();
        assert_eq!(m.proposals(Category::Baseline), 4);
        assert_eq!(m.proposals(Category::Novelty), 2);
        assert_eq!(m.proposals(Category::Reflection), 0);
        assert_eq!(m.total_proposals(), 6);
    }

    #[test]
    fn summary_accumulates() {
        let mut s = RunSummary::default();
        s.record(&sample());
        s.record(&sample());
        assert_eq!(s.transitions, 2);
        assert_eq!(s.proposals_for(Category::Baseline), 8);
        assert_eq!(s.wins_for(Category::Novelty), 2);
        assert_eq!(s.overrides, 2);
        assert_eq!(s.total_us, 20);
    }
}
