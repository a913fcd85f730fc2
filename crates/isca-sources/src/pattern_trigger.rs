//! Pattern-triggered injection.
//!
//! Proposes a 1 for every cell whose current neighbourhood is in a
//! configured pattern set. Never proposes a 0. An empty set is valid and
//! turns the source into a no-op.
//!
//! Constructed via the builder pattern: [`PatternTrigger::builder`].

use indexmap::IndexSet;
use isca_core::{Bit, Category, Details, Neighbourhood, Proposal, SourceError};
use isca_source::context::ObserveContext;
use isca_source::source::ProposalSource;

use crate::error::SourceConfigError;

/// Neighbourhood-pattern injection source.
#[derive(Debug, Clone)]
pub struct PatternTrigger {
    name: String,
    patterns: IndexSet<Neighbourhood>,
    /// `table[n.index()]` is true when `n` is in `patterns`.
    table: [bool; 8],
}

/// Builder for [`PatternTrigger`].
pub struct PatternTriggerBuilder {
    name: String,
    patterns: Vec<String>,
}

impl PatternTrigger {
    /// Create a new builder. Default name `"pattern-trigger"`, no patterns.
    pub fn builder() -> PatternTriggerBuilder {
        PatternTriggerBuilder {
            name: "pattern-trigger".to_string(),
            patterns: Vec::new(),
        }
    }

    /// The configured patterns, in configuration order.
    pub fn patterns(&self) -> impl Iterator<Item = Neighbourhood> + '_ {
        self.patterns.iter().copied()
    }

    /// Whether the pattern set is empty (source is a no-op).
    pub fn is_disabled(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl PatternTriggerBuilder {
    /// Set the source name (default: `"pattern-trigger"`).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add one 3-glyph pattern such as `"101"`.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Add several patterns.
    pub fn patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Build the source, parsing every pattern.
    ///
    /// Duplicate patterns collapse to one.
    ///
    /// # Errors
    ///
    /// [`SourceConfigError::InvalidPattern`] if any pattern is not exactly
    /// three '0'/'1' glyphs.
    pub fn build(self) -> Result<PatternTrigger, SourceConfigError> {
        let mut patterns = IndexSet::with_capacity(self.patterns.len());
        let mut table = [false; 8];
        for raw in self.patterns {
            let n: Neighbourhood =
                raw.parse()
                    .map_err(|reason| SourceConfigError::InvalidPattern {
                        pattern: raw.clone(),
                        reason,
                    })?;
            table[n.index() as usize] = true;
            patterns.insert(n);
        }
        Ok(PatternTrigger {
            name: self.name,
            patterns,
            table,
        })
    }
}

impl ProposalSource for PatternTrigger {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        Category::PatternTrigger
    }

    fn observe(&mut self, ctx: &ObserveContext<'_>) -> Result<Vec<Proposal>, SourceError> {
        if self.is_disabled() {
            return Ok(Vec::new());
        }
        let row = ctx.row();
        let mut out = Vec::new();
        for i in 0..row.len() {
            let n = row.neighbourhood(i);
            if self.table[n.index() as usize] {
                out.push(ctx.propose(
                    i,
                    Bit::One,
                    Category::PatternTrigger,
                    Details::Pattern { neighbourhood: n },
                ));
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isca_core::{Row, RowError, SourceId, StepIndex};

    fn observe(src: &mut PatternTrigger, row: &str) -> Vec<Proposal> {
        let row: Row = row.parse().unwrap();
        let ctx = ObserveContext::new(&row, StepIndex(0), SourceId(1));
        src.observe(&ctx).unwrap()
    }

    // ---------------------------------------------------------------
    // Builder tests
    // ---------------------------------------------------------------

    #[test]
    fn builder_minimal_is_disabled() {
        let src = PatternTrigger::builder().build().unwrap();
        assert_eq!(src.name(), "pattern-trigger");
        assert!(src.is_disabled());
    }

    #[test]
    fn builder_rejects_malformed_pattern() {
        let err = PatternTrigger::builder()
            .pattern("101")
            .pattern("12")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SourceConfigError::InvalidPattern {
                pattern: "12".into(),
                reason: RowError::PatternLength {
                    pattern: "12".into()
                },
            }
        );
    }

    #[test]
    fn builder_dedupes_patterns() {
        let src = PatternTrigger::builder()
            .patterns(["101", "010", "101"])
            .build()
            .unwrap();
        let pats: Vec<String> = src.patterns().map(|n| n.to_string()).collect();
        assert_eq!(pats, vec!["101", "010"]);
    }

    // ---------------------------------------------------------------
    // Observation tests
    // ---------------------------------------------------------------

    #[test]
    fn matches_only_configured_neighbourhoods() {
        let mut src = PatternTrigger::builder().pattern("101").build().unwrap();
        let out = observe(&mut src, "10100");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].cell(), 1);
        assert_eq!(out[0].value(), Bit::One);
        assert_eq!(out[0].category(), Category::PatternTrigger);
        assert_eq!(out[0].source(), SourceId(1));
    }

    #[test]
    fn match_respects_wrap() {
        // Cell 0 sees left=cell4=1, center=0, right=cell1=1.
        let mut src = PatternTrigger::builder().pattern("101").build().unwrap();
        let out = observe(&mut src, "01001");
        let cells: Vec<usize> = out.iter().map(|p| p.cell()).collect();
        assert_eq!(cells, vec![0]);
    }

    #[test]
    fn empty_set_emits_nothing() {
        let mut src = PatternTrigger::builder().build().unwrap();
        assert!(observe(&mut src, "10101").is_empty());
        assert!(observe(&mut src, "11111").is_empty());
    }

    #[test]
    fn all_zero_pattern_fires_everywhere_on_blank_row() {
        let mut src = PatternTrigger::builder().pattern("000").build().unwrap();
        assert_eq!(observe(&mut src, "00000").len(), 5);
    }
}
