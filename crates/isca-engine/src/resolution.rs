//! Category-precedence resolution.
//!
//! A [`ResolutionPolicy`] is a total order over the four proposal
//! categories. Resolving a step picks, for every cell, the proposal whose
//! category ranks highest; within one category the earliest-appended
//! proposal wins. The order is the single knob between classical behaviour
//! (baseline first, overrides never win) and perception-driven behaviour
//! (baseline last, any override wins).

use isca_core::{Bit, Category, Proposal, Row, StepError, StepIndex, UnknownCategory};
use smallvec::SmallVec;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

// ── Errors ─────────────────────────────────────────────────────────

/// Errors from building a [`ResolutionPolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// The ordering does not name exactly four categories.
    WrongLength {
        /// Number of categories given.
        len: usize,
    },
    /// A category appears more than once.
    Duplicate {
        /// The repeated category.
        category: Category,
    },
    /// A category is missing. Omitting `baseline` lands here.
    Missing {
        /// The absent category.
        category: Category,
    },
    /// A name in a textual ordering is not a known category.
    Unknown(UnknownCategory),
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { len } => {
                write!(f, "precedence order must list 4 categories, got {len}")
            }
            Self::Duplicate { category } => {
                write!(f, "category '{category}' appears more than once")
            }
            Self::Missing { category } => {
                write!(f, "precedence order omits category '{category}'")
            }
            Self::Unknown(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ResolutionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unknown(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UnknownCategory> for ResolutionError {
    fn from(e: UnknownCategory) -> Self {
        Self::Unknown(e)
    }
}

// ── Resolution output ──────────────────────────────────────────────

/// A resolved row plus which category won each cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The merged next row.
    pub row: Row,
    /// `winners[i]` is the category of the proposal chosen for cell `i`.
    pub winners: Vec<Category>,
}

impl Resolution {
    /// Cells won by a non-baseline proposal.
    pub fn overrides(&self) -> usize {
        self.winners
            .iter()
            .filter(|&&c| c != Category::Baseline)
            .count()
    }

    /// Winning-cell count per category, indexed by [`Category::index`].
    pub fn wins_by_category(&self) -> [usize; 4] {
        let mut wins = [0usize; 4];
        for c in &self.winners {
            wins[c.index()] += 1;
        }
        wins
    }
}

// ── Policy ─────────────────────────────────────────────────────────

/// A total precedence order over proposal categories.
///
/// ```
/// use isca_core::Category;
/// use isca_engine::ResolutionPolicy;
///
/// let policy: ResolutionPolicy = "pattern-trigger,novelty,reflection,baseline".parse().unwrap();
/// assert_eq!(policy, ResolutionPolicy::intention());
/// assert!(policy.outranks(Category::Novelty, Category::Baseline));
///
/// // Omitting baseline is a configuration error.
/// assert!("pattern-trigger,novelty,reflection".parse::<ResolutionPolicy>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionPolicy {
    /// Highest precedence first.
    order: SmallVec<[Category; 4]>,
    /// `rank[c.index()]` is `c`'s position in `order` (0 = highest).
    rank: [u8; 4],
}

impl ResolutionPolicy {
    /// Build from an explicit ordering, highest precedence first.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError`] unless `order` is a permutation of all
    /// four categories.
    pub fn new(order: &[Category]) -> Result<Self, ResolutionError> {
        let mut seen = [false; 4];
        for &c in order {
            if std::mem::replace(&mut seen[c.index()], true) {
                return Err(ResolutionError::Duplicate { category: c });
            }
        }
        if let Some(&missing) = Category::ALL.iter().find(|c| !seen[c.index()]) {
            return Err(ResolutionError::Missing { category: missing });
        }
        if order.len() != Category::ALL.len() {
            return Err(ResolutionError::WrongLength { len: order.len() });
        }

        let mut rank = [0u8; 4];
        for (pos, c) in order.iter().enumerate() {
            rank[c.index()] = pos as u8;
        }
        Ok(Self {
            order: SmallVec::from_slice(order),
            rank,
        })
    }

    fn from_permutation(order: [Category; 4]) -> Self {
        let mut rank = [0u8; 4];
        for (pos, c) in order.iter().enumerate() {
            rank[c.index()] = pos as u8;
        }
        Self {
            order: SmallVec::from_buf(order),
            rank,
        }
    }

    /// Perception-driven order: pattern-trigger > novelty > reflection > baseline.
    pub fn intention() -> Self {
        Self::from_permutation([
            Category::PatternTrigger,
            Category::Novelty,
            Category::Reflection,
            Category::Baseline,
        ])
    }

    /// Classical order: baseline first, so overrides never change a cell.
    pub fn classical() -> Self {
        Self::from_permutation([
            Category::Baseline,
            Category::PatternTrigger,
            Category::Reflection,
            Category::Novelty,
        ])
    }

    /// The ordering, highest precedence first.
    pub fn order(&self) -> &[Category] {
        &self.order
    }

    /// Position of `category` in the order (0 = highest).
    pub fn rank(&self, category: Category) -> usize {
        self.rank[category.index()] as usize
    }

    /// Whether `a` takes precedence over `b`.
    pub fn outranks(&self, a: Category, b: Category) -> bool {
        self.rank(a) < self.rank(b)
    }

    /// Merge the proposals for `step` into one row of width `size`.
    ///
    /// See [`resolve_detailed`](Self::resolve_detailed) for the error cases.
    pub fn resolve<'a, I>(&self, step: StepIndex, size: usize, proposals: I) -> Result<Row, StepError>
    where
        I: IntoIterator<Item = &'a Proposal>,
    {
        self.resolve_detailed(step, size, proposals).map(|r| r.row)
    }

    /// Merge the proposals for `step`, also reporting each cell's winner.
    ///
    /// # Errors
    ///
    /// - [`StepError::StepMismatch`] if a proposal targets another step.
    /// - [`StepError::InvalidCellIndex`] if a proposal targets `cell >= size`.
    /// - [`StepError::Unresolved`] if some cell has no proposal at all.
    pub fn resolve_detailed<'a, I>(
        &self,
        step: StepIndex,
        size: usize,
        proposals: I,
    ) -> Result<Resolution, StepError>
    where
        I: IntoIterator<Item = &'a Proposal>,
    {
        let mut best: Vec<Option<(u8, Bit, Category)>> = vec![None; size];

        for p in proposals {
            if p.step() != step {
                return Err(StepError::StepMismatch {
                    expected: step,
                    actual: p.step(),
                });
            }
            let slot = best
                .get_mut(p.cell())
                .ok_or(StepError::InvalidCellIndex {
                    cell: p.cell(),
                    size,
                })?;
            let rank = self.rank[p.category().index()];
            // Strict comparison: an equal-rank later proposal never displaces
            // an earlier one.
            match slot {
                Some((current, _, _)) if *current <= rank => {}
                _ => *slot = Some((rank, p.value(), p.category())),
            }
        }

        let mut cells = Vec::with_capacity(size);
        let mut winners = Vec::with_capacity(size);
        for (cell, slot) in best.into_iter().enumerate() {
            let (_, value, category) = slot.ok_or(StepError::Unresolved { step, cell })?;
            cells.push(value);
            winners.push(category);
        }
        let row = Row::new(cells).map_err(|_| StepError::DimensionMismatch {
            expected: size,
            actual: 0,
        })?;
        Ok(Resolution { row, winners })
    }
}

impl Default for ResolutionPolicy {
    fn default() -> Self {
        Self::intention()
    }
}

impl FromStr for ResolutionPolicy {
    type Err = ResolutionError;

    /// Parse a comma- or `>`-separated list of category names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let order = s
            .split([',', '>'])
            .filter(|part| !part.trim().is_empty())
            .map(str::parse::<Category>)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&order)
    }
}

impl fmt::Display for ResolutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.order.iter().enumerate() {
            if i > 0 {
                write!(f, " > ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isca_core::{Details, SourceId};
    use proptest::prelude::*;

    fn p(step: u64, cell: usize, value: u8, category: Category) -> Proposal {
        Proposal::new(
            StepIndex(step),
            cell,
            Bit::try_from(value).unwrap(),
            category,
            SourceId(0),
            Details::None,
        )
    }

    fn baseline(step: u64, values: &[u8]) -> Vec<Proposal> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| p(step, i, v, Category::Baseline))
            .collect()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_rejects_missing_baseline() {
        let err = ResolutionPolicy::new(&[
            Category::PatternTrigger,
            Category::Novelty,
            Category::Reflection,
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ResolutionError::Missing {
                category: Category::Baseline
            }
        );
    }

    #[test]
    fn new_rejects_duplicates() {
        let err = ResolutionPolicy::new(&[
            Category::Baseline,
            Category::Baseline,
            Category::Reflection,
            Category::Novelty,
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ResolutionError::Duplicate {
                category: Category::Baseline
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_name() {
        let err = "baseline,gravity,novelty,reflection"
            .parse::<ResolutionPolicy>()
            .unwrap_err();
        assert!(matches!(err, ResolutionError::Unknown(_)));
    }

    #[test]
    fn display_parse_identity() {
        let policy = ResolutionPolicy::classical();
        let text = policy.to_string();
        assert_eq!(text, "baseline > pattern-trigger > reflection > novelty");
        assert_eq!(text.parse::<ResolutionPolicy>().unwrap(), policy);
    }

    // ── Resolution ──────────────────────────────────────────────

    #[test]
    fn baseline_only_passes_through() {
        let props = baseline(1, &[0, 1, 1, 0]);
        let row = ResolutionPolicy::intention()
            .resolve(StepIndex(1), 4, &props)
            .unwrap();
        assert_eq!(row.to_u8s(), vec![0, 1, 1, 0]);
    }

    #[test]
    fn higher_category_wins_regardless_of_append_order() {
        let policy = ResolutionPolicy::intention();
        let mut props = vec![p(1, 2, 1, Category::PatternTrigger)];
        props.extend(baseline(1, &[0, 0, 0]));
        let r = policy.resolve_detailed(StepIndex(1), 3, &props).unwrap();
        assert_eq!(r.row.to_u8s(), vec![0, 0, 1]);
        assert_eq!(r.overrides(), 1);
        assert_eq!(r.wins_by_category()[Category::PatternTrigger.index()], 1);
    }

    #[test]
    fn classical_order_ignores_overrides() {
        let mut props = baseline(1, &[0, 0, 0]);
        props.push(p(1, 1, 1, Category::Novelty));
        let row = ResolutionPolicy::classical()
            .resolve(StepIndex(1), 3, &props)
            .unwrap();
        assert_eq!(row.to_u8s(), vec![0, 0, 0]);
    }

    #[test]
    fn same_category_tie_goes_to_first_appended() {
        let mut props = baseline(1, &[0, 0]);
        props.push(p(1, 0, 1, Category::Reflection));
        props.push(p(1, 0, 0, Category::Reflection));
        let row = ResolutionPolicy::intention()
            .resolve(StepIndex(1), 2, &props)
            .unwrap();
        assert_eq!(row.to_u8s(), vec![1, 0]);
    }

    #[test]
    fn uncovered_cell_is_unresolved() {
        let props = vec![p(1, 0, 1, Category::Baseline)];
        assert_eq!(
            ResolutionPolicy::intention()
                .resolve(StepIndex(1), 2, &props)
                .unwrap_err(),
            StepError::Unresolved {
                step: StepIndex(1),
                cell: 1
            }
        );
    }

    #[test]
    fn out_of_range_cell_rejected() {
        let mut props = baseline(1, &[0, 0]);
        props.push(p(1, 5, 1, Category::Novelty));
        assert_eq!(
            ResolutionPolicy::intention()
                .resolve(StepIndex(1), 2, &props)
                .unwrap_err(),
            StepError::InvalidCellIndex { cell: 5, size: 2 }
        );
    }

    #[test]
    fn wrong_step_rejected() {
        let props = baseline(2, &[0, 0]);
        assert_eq!(
            ResolutionPolicy::intention()
                .resolve(StepIndex(1), 2, &props)
                .unwrap_err(),
            StepError::StepMismatch {
                expected: StepIndex(1),
                actual: StepIndex(2)
            }
        );
    }

    fn arb_order() -> impl Strategy<Value = Vec<Category>> {
        Just(Category::ALL.to_vec()).prop_shuffle()
    }

    proptest! {
        #[test]
        fn precedence_law(
            order in arb_order(),
            base in prop::collection::vec(0u8..2, 1..16),
            cat_idx in 1usize..4,
            cell_seed in any::<usize>(),
            override_first in any::<bool>(),
        ) {
            let policy = ResolutionPolicy::new(&order).unwrap();
            let category = Category::ALL[cat_idx];
            let cell = cell_seed % base.len();
            let over_value = 1 - base[cell];
            let over = p(1, cell, over_value, category);

            let mut props = baseline(1, &base);
            if override_first {
                props.insert(0, over);
            } else {
                props.push(over);
            }

            let row = policy.resolve(StepIndex(1), base.len(), &props).unwrap();
            let expected = if policy.outranks(category, Category::Baseline) {
                over_value
            } else {
                base[cell]
            };
            prop_assert_eq!(row.get(cell).unwrap().as_u8(), expected);
        }
    }
}
