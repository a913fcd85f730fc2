//! Proposal source trait and observation context.
//!
//! The [`ProposalSource`] trait defines the `observe()` step every source
//! runs once per transition, [`ObserveContext`] gives it a read-only view
//! of the current row, and [`validate_sources`] checks a configured source
//! list before the engine is built.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod pipeline;
pub mod source;

pub use context::ObserveContext;
pub use pipeline::{validate_sources, SourceListError, SourcePlan};
pub use source::ProposalSource;
