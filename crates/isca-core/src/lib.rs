//! Core types for Intention-Space cellular automata.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types shared by every other crate in the workspace: [`Bit`] and
//! [`Row`], the radius-1 [`Neighbourhood`], the 8-bit [`RuleTable`],
//! the immutable [`Proposal`] record, strongly-typed identifiers, error
//! types, and the [`DrawSource`] randomness seam.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bit;
pub mod error;
pub mod id;
pub mod neighbourhood;
pub mod proposal;
pub mod row;
pub mod rule;
pub mod traits;

pub use bit::Bit;
pub use error::{RowError, RuleError, SourceError, StepError, UnknownCategory};
pub use id::{SourceId, StepIndex};
pub use neighbourhood::Neighbourhood;
pub use proposal::{Category, Details, Proposal};
pub use row::Row;
pub use rule::RuleTable;
pub use traits::DrawSource;
