//! Named run configurations.
//!
//! Classical presets run a single [`BaselineRule`]. Intention-Space
//! presets add the three override sources with the standard parameters:
//! patterns `{"101", "010"}`, hold 3 and novelty probability 0.01, resolved
//! in the order pattern-trigger > novelty > reflection > baseline.

use std::error::Error;
use std::fmt;

use indexmap::IndexMap;
use isca_core::RuleTable;
use isca_engine::{ResolutionPolicy, RunConfig, SeedPolicy};
use isca_source::ProposalSource;
use isca_sources::{
    BaselineRule, PatternTrigger, PersistenceReflector, RandomInjector, SourceConfigError,
};

/// Patterns watched by Intention-Space presets.
pub const INTENTION_PATTERNS: [&str; 2] = ["101", "010"];
/// Reflection hold used by Intention-Space presets.
pub const INTENTION_HOLD: u32 = 3;
/// Novelty probability used by Intention-Space presets.
pub const INTENTION_NOVELTY: f64 = 0.01;

// ── PresetError ────────────────────────────────────────────────────

/// Errors from looking up or instantiating a preset.
#[derive(Debug, Clone, PartialEq)]
pub enum PresetError {
    /// No preset has this name.
    Unknown {
        /// The requested name.
        name: String,
    },
    /// A source rejected its parameters.
    Source(SourceConfigError),
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { name } => write!(f, "unknown preset '{name}'"),
            Self::Source(e) => write!(f, "source: {e}"),
        }
    }
}

impl Error for PresetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Source(e) => Some(e),
            Self::Unknown { .. } => None,
        }
    }
}

impl From<SourceConfigError> for PresetError {
    fn from(e: SourceConfigError) -> Self {
        Self::Source(e)
    }
}

// ── Parameters ─────────────────────────────────────────────────────

/// Run parameters a preset is instantiated with.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetParams {
    /// Cells per row.
    pub size: usize,
    /// Rows including the seed row.
    pub steps: usize,
    /// Seeds the novelty stream and sparse-random seeding.
    pub seed: u64,
    /// Step-0 row policy.
    pub seed_policy: SeedPolicy,
}

impl Default for PresetParams {
    fn default() -> Self {
        Self {
            size: 201,
            steps: 100,
            seed: 0,
            seed_policy: SeedPolicy::SingleCenter,
        }
    }
}

// ── Preset ─────────────────────────────────────────────────────────

/// Which family a preset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Baseline rule only.
    Classical,
    /// Baseline plus all three override sources.
    Intention,
}

/// A named, parameterisable run configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Lookup name, e.g. `"is-rule30"`.
    pub name: &'static str,
    /// Elementary rule number.
    pub rule: u8,
    /// Source family.
    pub mode: Mode,
}

impl Preset {
    /// Build a complete [`RunConfig`].
    pub fn config(&self, params: &PresetParams) -> Result<RunConfig, PresetError> {
        match self.mode {
            Mode::Classical => Ok(classical_config(self.rule, params)),
            Mode::Intention => intention_config(self.rule, params),
        }
    }

    /// The preset with the same rule in the other family, if registered.
    pub fn counterpart(&self) -> Option<Preset> {
        registry()
            .into_values()
            .find(|p| p.rule == self.rule && p.mode != self.mode)
    }
}

/// Every preset, in display order.
pub fn registry() -> IndexMap<&'static str, Preset> {
    const ENTRIES: [(&str, u8, Mode); 6] = [
        ("rule30", 30, Mode::Classical),
        ("rule90", 90, Mode::Classical),
        ("rule110", 110, Mode::Classical),
        ("rule184", 184, Mode::Classical),
        ("is-rule30", 30, Mode::Intention),
        ("is-rule110", 110, Mode::Intention),
    ];
    ENTRIES
        .into_iter()
        .map(|(name, rule, mode)| (name, Preset { name, rule, mode }))
        .collect()
}

/// Look up a preset by name.
pub fn find(name: &str) -> Result<Preset, PresetError> {
    registry()
        .get(name)
        .copied()
        .ok_or_else(|| PresetError::Unknown {
            name: name.to_string(),
        })
}

fn base(params: &PresetParams, sources: Vec<Box<dyn ProposalSource>>) -> RunConfig {
    RunConfig::new(params.size, params.steps, sources)
        .with_seed_policy(params.seed_policy.clone())
        .with_seed(params.seed)
}

/// A baseline-only run of `rule`.
pub fn classical_config(rule: u8, params: &PresetParams) -> RunConfig {
    let sources: Vec<Box<dyn ProposalSource>> =
        vec![Box::new(BaselineRule::new(RuleTable::new(rule)))];
    base(params, sources).with_policy(ResolutionPolicy::classical())
}

/// `rule` with the standard Intention-Space override sources.
pub fn intention_config(rule: u8, params: &PresetParams) -> Result<RunConfig, PresetError> {
    let sources: Vec<Box<dyn ProposalSource>> = vec![
        Box::new(BaselineRule::new(RuleTable::new(rule))),
        Box::new(
            PatternTrigger::builder()
                .patterns(INTENTION_PATTERNS)
                .build()?,
        ),
        Box::new(
            PersistenceReflector::builder()
                .hold(INTENTION_HOLD)
                .build()?,
        ),
        Box::new(
            RandomInjector::builder()
                .probability(INTENTION_NOVELTY)
                .seed(params.seed)
                .build()?,
        ),
    ];
    Ok(base(params, sources).with_policy(ResolutionPolicy::intention()))
}
