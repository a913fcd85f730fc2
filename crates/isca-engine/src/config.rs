//! Run configuration, validation, and error types.
//!
//! [`RunConfig`] is the builder-input for a [`StepEngine`](crate::StepEngine).
//! [`validate()`](RunConfig::validate) checks every structural invariant up
//! front so a constructed engine can only fail on per-step errors.

use std::error::Error;
use std::fmt;

use isca_core::RowError;
use isca_source::{validate_sources, ProposalSource, SourceListError};

use crate::resolution::{ResolutionError, ResolutionPolicy};
use crate::seed::SeedPolicy;

// ── LedgerRetention ────────────────────────────────────────────────

/// How long ledger entries are kept after their step resolves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LedgerRetention {
    /// Keep every entry for the whole run, for audit rendering.
    #[default]
    Full,
    /// Discard entries for a step once it has been resolved.
    PruneResolved,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`RunConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The source list is empty, lacks a baseline, or repeats a name.
    Sources(SourceListError),
    /// The category ordering is not a permutation of all four categories.
    Resolution(ResolutionError),
    /// The seed row could not be built.
    Row(RowError),
    /// Width is zero.
    ZeroWidth,
    /// Step count is zero. A run always includes the seed row.
    ZeroSteps,
    /// Sparse seeding density outside `[0, 1]` or NaN.
    InvalidDensity {
        /// The rejected density.
        value: f64,
    },
    /// An explicit seed row has the wrong width.
    SeedWidth {
        /// The configured width.
        expected: usize,
        /// The seed row's width.
        actual: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sources(e) => write!(f, "sources: {e}"),
            Self::Resolution(e) => write!(f, "resolution: {e}"),
            Self::Row(e) => write!(f, "seed row: {e}"),
            Self::ZeroWidth => write!(f, "width must be at least 1"),
            Self::ZeroSteps => write!(f, "steps must be at least 1"),
            Self::InvalidDensity { value } => {
                write!(f, "seed density must be in [0, 1], got {value}")
            }
            Self::SeedWidth { expected, actual } => {
                write!(f, "seed row has {actual} cells, run width is {expected}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sources(e) => Some(e),
            Self::Resolution(e) => Some(e),
            Self::Row(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SourceListError> for ConfigError {
    fn from(e: SourceListError) -> Self {
        Self::Sources(e)
    }
}

impl From<ResolutionError> for ConfigError {
    fn from(e: ResolutionError) -> Self {
        Self::Resolution(e)
    }
}

impl From<RowError> for ConfigError {
    fn from(e: RowError) -> Self {
        Self::Row(e)
    }
}

// ── RunConfig ──────────────────────────────────────────────────────

/// Complete configuration for one run.
pub struct RunConfig {
    /// Cells per row.
    pub size: usize,
    /// Rows in the output grid, including the seed row.
    pub steps: usize,
    /// How the step-0 row is produced.
    pub seed_policy: SeedPolicy,
    /// Seed for random seeding. Sources that draw carry their own streams.
    pub seed: u64,
    /// Sources observed in this order every step.
    pub sources: Vec<Box<dyn ProposalSource>>,
    /// Category precedence used to resolve each step.
    pub policy: ResolutionPolicy,
    /// Ledger retention after resolution.
    pub retention: LedgerRetention,
}

impl RunConfig {
    /// A config with single-center seeding, the intention order and full
    /// ledger retention.
    pub fn new(size: usize, steps: usize, sources: Vec<Box<dyn ProposalSource>>) -> Self {
        Self {
            size,
            steps,
            seed_policy: SeedPolicy::default(),
            seed: 0,
            sources,
            policy: ResolutionPolicy::default(),
            retention: LedgerRetention::default(),
        }
    }

    /// Replace the seeding policy.
    pub fn with_seed_policy(mut self, seed_policy: SeedPolicy) -> Self {
        self.seed_policy = seed_policy;
        self
    }

    /// Replace the run seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the category precedence.
    pub fn with_policy(mut self, policy: ResolutionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the ledger retention.
    pub fn with_retention(mut self, retention: LedgerRetention) -> Self {
        self.retention = retention;
        self
    }

    /// Validate all structural invariants.
    ///
    /// The policy is already a valid permutation by construction, so only
    /// width, steps, seeding and the source list are checked here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        self.seed_policy.validate()?;
        if let SeedPolicy::Explicit(row) = &self.seed_policy {
            if row.len() != self.size {
                return Err(ConfigError::SeedWidth {
                    expected: self.size,
                    actual: row.len(),
                });
            }
        }
        validate_sources(&self.sources)?;
        Ok(())
    }
}

impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.name()).collect();
        f.debug_struct("RunConfig")
            .field("size", &self.size)
            .field("steps", &self.steps)
            .field("seed_policy", &self.seed_policy)
            .field("seed", &self.seed)
            .field("sources", &names)
            .field("policy", &self.policy)
            .field("retention", &self.retention)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isca_core::{Bit, Category};
    use isca_sources::BaselineRule;
    use isca_test_utils::{row, ConstSource};

    fn valid_config() -> RunConfig {
        RunConfig::new(8, 4, vec![Box::new(BaselineRule::from_number(30).unwrap())])
    }

    #[test]
    fn validate_valid_config_succeeds() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validate_zero_width_fails() {
        let mut cfg = valid_config();
        cfg.size = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroWidth));
    }

    #[test]
    fn validate_zero_steps_fails() {
        let mut cfg = valid_config();
        cfg.steps = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroSteps));
    }

    #[test]
    fn validate_empty_sources_fails() {
        let mut cfg = valid_config();
        cfg.sources.clear();
        match cfg.validate() {
            Err(ConfigError::Sources(SourceListError::EmptySourceList)) => {}
            other => panic!("expected Sources(EmptySourceList), got {other:?}"),
        }
    }

    #[test]
    fn validate_missing_baseline_fails() {
        let cfg = RunConfig::new(
            4,
            2,
            vec![Box::new(ConstSource::new(
                "only-novelty",
                Category::Novelty,
                vec![0],
                Bit::One,
            ))],
        );
        match cfg.validate() {
            Err(ConfigError::Sources(SourceListError::MissingBaseline)) => {}
            other => panic!("expected Sources(MissingBaseline), got {other:?}"),
        }
    }

    #[test]
    fn validate_seed_width_mismatch_fails() {
        let cfg = valid_config().with_seed_policy(SeedPolicy::Explicit(row("101")));
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::SeedWidth {
                expected: 8,
                actual: 3
            })
        );
    }

    #[test]
    fn validate_bad_density_fails() {
        let cfg = valid_config().with_seed_policy(SeedPolicy::SparseRandom { density: 2.0 });
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidDensity { .. })
        ));
    }

    #[test]
    fn debug_lists_source_names() {
        let text = format!("{:?}", valid_config());
        assert!(text.contains("\"baseline\""));
    }

    #[test]
    fn resolution_error_converts() {
        let err: ConfigError = "baseline".parse::<ResolutionPolicy>().unwrap_err().into();
        assert!(matches!(err, ConfigError::Resolution(_)));
        assert!(err.source().is_some());
    }
}
