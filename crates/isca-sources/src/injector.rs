//! Random novelty injection.
//!
//! For every cell, draws once from the configured [`DrawSource`] and
//! proposes a 1 when the draw falls below `probability`. The draw source
//! is explicit configuration, not a global generator, so seeded runs are
//! replayable and tests can script the draws.
//!
//! `probability == 0` short-circuits before any draw is taken, leaving the
//! draw stream untouched.
//!
//! Constructed via the builder pattern: [`RandomInjector::builder`].

use isca_core::{Bit, Category, Details, DrawSource, Proposal, SourceError};
use isca_source::context::ObserveContext;
use isca_source::source::ProposalSource;

use crate::draws::ChaChaDraws;
use crate::error::SourceConfigError;

/// Novelty injection source.
pub struct RandomInjector {
    name: String,
    probability: f64,
    draws: Box<dyn DrawSource>,
    /// Seed to restart the default stream from on `reset()`. `None` for
    /// caller-supplied draw sources, which are never rewound.
    reseed: Option<u64>,
}

/// Builder for [`RandomInjector`].
pub struct RandomInjectorBuilder {
    name: String,
    probability: f64,
    draws: Option<Box<dyn DrawSource>>,
    seed: u64,
}

impl RandomInjector {
    /// Create a new builder. Default name `"novelty"`, probability 0.0,
    /// ChaCha8 draws seeded with 0.
    pub fn builder() -> RandomInjectorBuilder {
        RandomInjectorBuilder {
            name: "novelty".to_string(),
            probability: 0.0,
            draws: None,
            seed: 0,
        }
    }

    /// The injection probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Whether the source can never emit (`probability == 0`).
    pub fn is_disabled(&self) -> bool {
        self.probability == 0.0
    }
}

impl std::fmt::Debug for RandomInjector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomInjector")
            .field("name", &self.name)
            .field("probability", &self.probability)
            .finish_non_exhaustive()
    }
}

impl RandomInjectorBuilder {
    /// Set the source name (default: `"novelty"`).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the per-cell injection probability (default: 0.0). Must be in `[0, 1]`.
    pub fn probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Seed the default ChaCha8 draw source (default: 0).
    ///
    /// Ignored when an explicit source is set with [`draws`](Self::draws).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use an explicit draw source.
    pub fn draws(mut self, draws: impl DrawSource + 'static) -> Self {
        self.draws = Some(Box::new(draws));
        self
    }

    /// Build the source, validating the probability.
    ///
    /// # Errors
    ///
    /// [`SourceConfigError::ProbabilityOutOfRange`] if `probability` is NaN
    /// or outside `[0, 1]`.
    pub fn build(self) -> Result<RandomInjector, SourceConfigError> {
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(SourceConfigError::ProbabilityOutOfRange {
                value: self.probability,
            });
        }
        let (draws, reseed): (Box<dyn DrawSource>, _) = match self.draws {
            Some(d) => (d, None),
            None => (Box::new(ChaChaDraws::seeded(self.seed)), Some(self.seed)),
        };
        Ok(RandomInjector {
            name: self.name,
            probability: self.probability,
            draws,
            reseed,
        })
    }
}

impl ProposalSource for RandomInjector {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        Category::Novelty
    }

    fn observe(&mut self, ctx: &ObserveContext<'_>) -> Result<Vec<Proposal>, SourceError> {
        if self.is_disabled() {
            return Ok(Vec::new());
        }
        let mut out = Vec::new();
        for i in 0..ctx.size() {
            let value = self.draws.next_unit();
            if value < self.probability {
                out.push(ctx.propose(
                    i,
                    Bit::One,
                    Category::Novelty,
                    Details::Draw {
                        value,
                        threshold: self.probability,
                    },
                ));
            }
        }
        Ok(out)
    }

    fn reset(&mut self) {
        if let Some(seed) = self.reseed {
            self.draws = Box::new(ChaChaDraws::seeded(seed));
        }
    }
}
