//! Step engine: the single-threaded run loop.
//!
//! [`StepEngine`] owns the field, the sources, the ledger and the grid, and
//! executes transitions with all-or-nothing commits: a transition either
//! replaces the field, appends to the ledger and records a grid row, or
//! leaves all three exactly as they were.

use std::time::Instant;

use isca_core::{Category, Proposal, SourceId, StepError, StepIndex};
use isca_source::{validate_sources, ObserveContext, ProposalSource, SourcePlan};
use tracing::{debug, info, warn};

use crate::config::{ConfigError, LedgerRetention, RunConfig};
use crate::field::Field;
use crate::grid::Grid;
use crate::ledger::ProposalLedger;
use crate::metrics::{RunSummary, SourceMetrics, StepMetrics};
use crate::resolution::ResolutionPolicy;

/// Upper bound on grid rows reserved up front.
const MAX_PREALLOCATED_ROWS: usize = 4096;

// ── EngineState ──────────────────────────────────────────────────

/// Lifecycle of a [`StepEngine`].
///
/// There is no uninitialized state: construction yields a seeded engine
/// or an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Seeded, no transition executed yet.
    Ready,
    /// At least one transition committed, more remain.
    Running,
    /// The requested number of rows has been produced.
    Completed,
    /// A transition failed. The field holds the last committed row.
    Failed,
}

// ── StepEngine ───────────────────────────────────────────────────

/// Drives one run from seed row to completed grid.
pub struct StepEngine {
    field: Field,
    sources: Vec<Box<dyn ProposalSource>>,
    plan: SourcePlan,
    policy: ResolutionPolicy,
    ledger: ProposalLedger,
    retention: LedgerRetention,
    grid: Grid,
    current: StepIndex,
    steps: usize,
    state: EngineState,
    last_metrics: StepMetrics,
    summary: RunSummary,
}

impl StepEngine {
    /// Build an engine from a [`RunConfig`].
    ///
    /// Validates the config, seeds the field, records the seed as grid
    /// row 0 and resets every source so no state leaks in from a previous
    /// run.
    pub fn new(config: RunConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let plan = validate_sources(&config.sources)?;
        let seed_row = config.seed_policy.materialize(config.size, config.seed)?;

        let mut sources = config.sources;
        for source in &mut sources {
            source.reset();
        }

        let mut grid = Grid::with_capacity(config.size, config.steps.min(MAX_PREALLOCATED_ROWS));
        grid.push(seed_row.clone())
            .map_err(|_| ConfigError::SeedWidth {
                expected: config.size,
                actual: seed_row.len(),
            })?;

        debug!(
            size = config.size,
            steps = config.steps,
            sources = sources.len(),
            policy = %config.policy,
            "engine seeded"
        );

        Ok(Self {
            field: Field::new(seed_row),
            sources,
            plan,
            policy: config.policy,
            ledger: ProposalLedger::new(),
            retention: config.retention,
            grid,
            current: StepIndex(0),
            steps: config.steps,
            state: EngineState::Ready,
            last_metrics: StepMetrics::default(),
            summary: RunSummary::default(),
        })
    }

    /// Advance one transition.
    ///
    /// # Errors
    ///
    /// [`StepError::RunCompleted`] once the configured row count is
    /// reached, [`StepError::RunAborted`] after an earlier failure, or the
    /// error that aborted this transition. A failure moves the engine to
    /// [`EngineState::Failed`] without committing anything.
    pub fn step(&mut self) -> Result<&StepMetrics, StepError> {
        match self.state {
            EngineState::Completed => return Err(StepError::RunCompleted),
            EngineState::Failed => return Err(StepError::RunAborted),
            EngineState::Ready | EngineState::Running => {}
        }
        if self.grid.len() >= self.steps {
            self.complete();
            return Err(StepError::RunCompleted);
        }

        match self.execute() {
            Ok(metrics) => {
                self.summary.record(&metrics);
                self.last_metrics = metrics;
                self.state = EngineState::Running;
                if self.grid.len() >= self.steps {
                    self.complete();
                }
                Ok(&self.last_metrics)
            }
            Err(e) => {
                warn!(step = %self.current.next(), error = %e, "transition failed, run aborted");
                self.state = EngineState::Failed;
                Err(e)
            }
        }
    }

    /// Run until the grid holds `n` rows (`n - 1` transitions from the
    /// seed), then mark the run completed.
    pub fn run_steps(&mut self, n: usize) -> Result<&Grid, StepError> {
        match self.state {
            EngineState::Completed => return Err(StepError::RunCompleted),
            EngineState::Failed => return Err(StepError::RunAborted),
            EngineState::Ready | EngineState::Running => {}
        }
        self.steps = n;
        while self.grid.len() < n {
            self.step()?;
        }
        self.complete();
        Ok(&self.grid)
    }

    /// Run to the configured step count.
    pub fn run(&mut self) -> Result<&Grid, StepError> {
        self.run_steps(self.steps)
    }

    fn complete(&mut self) {
        if self.state == EngineState::Completed {
            return;
        }
        self.state = EngineState::Completed;
        info!(
            rows = self.grid.len(),
            width = self.grid.width(),
            overrides = self.summary.overrides,
            hash = format_args!("{:016x}", self.grid.hash()),
            "run completed"
        );
    }

    /// One transition. Mutates nothing on the error path.
    fn execute(&mut self) -> Result<StepMetrics, StepError> {
        let start = Instant::now();
        let observed = self.current;
        let target = observed.next();
        let snapshot = self.field.snapshot_row();

        let mut staged: Vec<Proposal> = Vec::new();
        let mut source_metrics = Vec::with_capacity(self.sources.len());
        for (i, source) in self.sources.iter_mut().enumerate() {
            let ctx = ObserveContext::new(&snapshot, observed, SourceId(i as u32));
            let t = Instant::now();
            let out = source.observe(&ctx).map_err(|reason| StepError::SourceFailed {
                name: source.name().to_string(),
                reason,
            })?;
            if let Some(stale) = out.iter().find(|p| p.step() <= observed) {
                return Err(StepError::StepMismatch {
                    expected: target,
                    actual: stale.step(),
                });
            }
            source_metrics.push(SourceMetrics {
                name: source.name().to_string(),
                category: source.category(),
                proposals: out.len(),
                us: t.elapsed().as_micros() as u64,
            });
            staged.extend(out);
        }

        // Earlier steps may have queued proposals for this target.
        let pending = self
            .ledger
            .select_for_step(target)
            .chain(staged.iter().filter(|p| p.step() == target));
        let resolution = self
            .policy
            .resolve_detailed(target, self.field.size(), pending)?;

        // Commit.
        self.field.replace(resolution.row.clone())?;
        self.grid.push(resolution.row.clone())?;
        self.ledger.extend(staged);
        if self.retention == LedgerRetention::PruneResolved {
            self.ledger.prune_through(target);
        }
        self.current = target;

        let metrics = StepMetrics {
            step: target,
            total_us: start.elapsed().as_micros() as u64,
            sources: source_metrics,
            overrides: resolution.overrides(),
            wins: resolution.wins_by_category(),
        };
        debug!(
            step = %target,
            baseline = metrics.proposals(Category::Baseline),
            pattern_trigger = metrics.proposals(Category::PatternTrigger),
            reflection = metrics.proposals(Category::Reflection),
            novelty = metrics.proposals(Category::Novelty),
            overrides = metrics.overrides,
            "step resolved"
        );
        Ok(metrics)
    }

    // ── Accessors ────────────────────────────────────────────────

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Index of the row currently held by the field.
    pub fn current_step(&self) -> StepIndex {
        self.current
    }

    /// Rows the run will produce, including the seed.
    pub fn target_rows(&self) -> usize {
        self.steps
    }

    /// The authoritative current row.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The proposal ledger, read-only.
    pub fn ledger(&self) -> &ProposalLedger {
        &self.ledger
    }

    /// Rows recorded so far.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the engine, keeping the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Source names, ids and categories in observation order.
    pub fn plan(&self) -> &SourcePlan {
        &self.plan
    }

    /// The category precedence in use.
    pub fn policy(&self) -> &ResolutionPolicy {
        &self.policy
    }

    /// Metrics from the most recent committed transition.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Totals over every committed transition.
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }
}
