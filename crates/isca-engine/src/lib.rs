//! Step engine orchestrating Intention-Space runs.
//!
//! Each transition flows one way: the [`Field`]'s current row is
//! snapshotted, every configured proposal source observes it in order, the
//! proposals land in the append-only [`ProposalLedger`], the
//! [`ResolutionPolicy`] merges everything targeting the next step into one
//! row, and the field is replaced with it. [`StepEngine`] drives this loop
//! and records every row into a [`Grid`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod field;
pub mod grid;
pub mod ledger;
pub mod metrics;
pub mod resolution;
pub mod seed;

pub use config::{ConfigError, LedgerRetention, RunConfig};
pub use engine::{EngineState, StepEngine};
pub use field::Field;
pub use grid::Grid;
pub use ledger::ProposalLedger;
pub use metrics::{RunSummary, SourceMetrics, StepMetrics};
pub use resolution::{Resolution, ResolutionError, ResolutionPolicy};
pub use seed::SeedPolicy;
