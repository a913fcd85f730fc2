//! Classical rule-table source.
//!
//! Emits exactly one `baseline` proposal per cell per step: the rule
//! table applied to the cell's wrapping neighbourhood. Its presence in the
//! source list is what guarantees every cell is always resolvable.

use isca_core::{Category, Details, Proposal, RuleTable, SourceError};
use isca_source::context::ObserveContext;
use isca_source::source::ProposalSource;

use crate::error::SourceConfigError;

/// Elementary-automaton baseline proposals.
#[derive(Debug, Clone)]
pub struct BaselineRule {
    name: String,
    rule: RuleTable,
}

impl BaselineRule {
    /// Baseline source named `"baseline"` for the given rule.
    pub fn new(rule: RuleTable) -> Self {
        Self::named("baseline", rule)
    }

    /// Baseline source with a custom name.
    pub fn named(name: impl Into<String>, rule: RuleTable) -> Self {
        Self {
            name: name.into(),
            rule,
        }
    }

    /// Build from a raw rule number, rejecting values outside `[0, 255]`.
    pub fn from_number(number: i64) -> Result<Self, SourceConfigError> {
        Ok(Self::new(RuleTable::try_from_number(number)?))
    }

    /// The rule table in use.
    pub fn rule(&self) -> RuleTable {
        self.rule
    }
}

impl ProposalSource for BaselineRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        Category::Baseline
    }

    fn observe(&mut self, ctx: &ObserveContext<'_>) -> Result<Vec<Proposal>, SourceError> {
        let row = ctx.row();
        let rule = self.rule.number();
        Ok((0..row.len())
            .map(|i| {
                let n = row.neighbourhood(i);
                ctx.propose(
                    i,
                    self.rule.apply(n),
                    Category::Baseline,
                    Details::Rule {
                        rule,
                        neighbourhood: n,
                    },
                )
            })
            .collect())
    }
}
