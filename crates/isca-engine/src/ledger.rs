//! Append-only proposal ledger.
//!
//! Every proposal any source emits is appended here, tagged with the step
//! it targets. Entries are never edited. Append order is the tie-break the
//! resolution policy uses within a category, so the engine appends in the
//! configured source order.

use std::collections::BTreeMap;

use isca_core::{Proposal, StepIndex};

/// Append-only record of proposals.
#[derive(Debug, Default, Clone)]
pub struct ProposalLedger {
    entries: Vec<Proposal>,
    /// Positions in `entries` per target step, ascending.
    by_step: BTreeMap<StepIndex, Vec<usize>>,
    /// Total ever appended, including pruned entries.
    appended: u64,
}

impl ProposalLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one proposal. Never rejects, never rewrites.
    pub fn append(&mut self, proposal: Proposal) {
        self.by_step
            .entry(proposal.step())
            .or_default()
            .push(self.entries.len());
        self.entries.push(proposal);
        self.appended += 1;
    }

    /// Append a batch, preserving its order.
    pub fn extend<I: IntoIterator<Item = Proposal>>(&mut self, proposals: I) {
        for p in proposals {
            self.append(p);
        }
    }

    /// Entries targeting `step`, in append order.
    ///
    /// Cost is linear in the entries for `step`, not in the ledger.
    pub fn select_for_step(&self, step: StepIndex) -> impl Iterator<Item = &Proposal> {
        self.by_step
            .get(&step)
            .into_iter()
            .flatten()
            .map(move |&i| &self.entries[i])
    }

    /// Discard entries targeting steps `<= step`.
    ///
    /// Entries for later steps keep their relative order.
    pub fn prune_through(&mut self, step: StepIndex) {
        if self.by_step.range(..=step).next().is_none() {
            return;
        }
        self.entries.retain(|p| p.step() > step);
        self.by_step.clear();
        for (i, p) in self.entries.iter().enumerate() {
            self.by_step.entry(p.step()).or_default().push(i);
        }
    }

    /// Entries currently retained, in append order.
    pub fn entries(&self) -> &[Proposal] {
        &self.entries
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are retained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total entries ever appended, including pruned ones.
    pub fn total_appended(&self) -> u64 {
        self.appended
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isca_core::{Bit, Category, Details, SourceId};

    fn p(step: u64, cell: usize, category: Category) -> Proposal {
        Proposal::new(
            StepIndex(step),
            cell,
            Bit::One,
            category,
            SourceId(0),
            Details::None,
        )
    }

    #[test]
    fn select_preserves_append_order() {
        let mut l = ProposalLedger::new();
        l.append(p(1, 0, Category::Novelty));
        l.append(p(2, 0, Category::Baseline));
        l.append(p(1, 0, Category::Baseline));
        l.append(p(1, 3, Category::Reflection));

        let sel: Vec<_> = l
            .select_for_step(StepIndex(1))
            .map(|p| (p.cell(), p.category()))
            .collect();
        assert_eq!(
            sel,
            vec![
                (0, Category::Novelty),
                (0, Category::Baseline),
                (3, Category::Reflection)
            ]
        );
    }

    #[test]
    fn prune_keeps_future_steps() {
        let mut l = ProposalLedger::new();
        l.extend([p(1, 0, Category::Baseline), p(3, 1, Category::Novelty)]);
        l.append(p(2, 0, Category::Baseline));

        l.prune_through(StepIndex(2));
        assert_eq!(l.len(), 1);
        assert_eq!(l.select_for_step(StepIndex(3)).count(), 1);
        assert_eq!(l.select_for_step(StepIndex(1)).count(), 0);
        assert_eq!(l.total_appended(), 3);
    }

    #[test]
    fn select_sees_only_its_step_after_long_history() {
        let mut l = ProposalLedger::new();
        for step in 1..=200u64 {
            l.extend((0..8).map(|cell| p(step, cell, Category::Baseline)));
        }
        l.append(p(150, 99, Category::Novelty));

        let cells: Vec<_> = l.select_for_step(StepIndex(150)).map(|p| p.cell()).collect();
        assert_eq!(cells, vec![0, 1, 2, 3, 4, 5, 6, 7, 99]);
        assert_eq!(l.select_for_step(StepIndex(201)).count(), 0);
    }

    #[test]
    fn prune_reindexes_remaining_entries() {
        let mut l = ProposalLedger::new();
        l.extend([
            p(1, 0, Category::Baseline),
            p(2, 1, Category::Baseline),
            p(1, 2, Category::Novelty),
            p(2, 3, Category::Reflection),
        ]);
        l.prune_through(StepIndex(1));
        l.append(p(2, 4, Category::Novelty));

        let sel: Vec<_> = l
            .select_for_step(StepIndex(2))
            .map(|p| (p.cell(), p.category()))
            .collect();
        assert_eq!(
            sel,
            vec![
                (1, Category::Baseline),
                (3, Category::Reflection),
                (4, Category::Novelty)
            ]
        );
        assert_eq!(l.select_for_step(StepIndex(1)).count(), 0);
    }

    #[test]
    fn empty_ledger_selects_nothing() {
        let l = ProposalLedger::new();
        assert!(l.is_empty());
        assert_eq!(l.select_for_step(StepIndex(0)).count(), 0);
    }
}
