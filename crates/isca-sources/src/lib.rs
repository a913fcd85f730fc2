//! The four Intention-Space proposal sources.
//!
//! # Observation order (typical configuration)
//!
//! 1. [`BaselineRule`]: rule table over every cell → `baseline`
//! 2. [`PatternTrigger`]: matching neighbourhoods → `pattern-trigger`
//! 3. [`PersistenceReflector`]: long-lived cells push into a neighbour → `reflection`
//! 4. [`RandomInjector`]: per-cell random draws → `novelty`
//!
//! Each of the three override sources has a disabled form (empty pattern
//! set, `hold >= steps`, `probability == 0`) that emits nothing, so an
//! Intention-Space run with all three disabled reproduces the classical
//! automaton exactly.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod baseline;
pub mod draws;
pub mod error;
pub mod injector;
pub mod pattern_trigger;
pub mod reflector;

pub use baseline::BaselineRule;
pub use draws::ChaChaDraws;
pub use error::SourceConfigError;
pub use injector::RandomInjector;
pub use pattern_trigger::PatternTrigger;
pub use reflector::PersistenceReflector;
