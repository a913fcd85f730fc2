//! Intention-Space cellular automata.
//!
//! Elementary one-dimensional cellular automata where the classical rule is
//! only one of several proposal sources. Pattern triggers, persistence
//! reflection and random novelty propose overrides for the next row, and a
//! configurable category precedence decides which proposal each cell takes.
//!
//! This is the facade crate re-exporting the public API of every sub-crate.
//!
//! # Quick start
//!
//! ```rust
//! use isca::prelude::*;
//!
//! let params = PresetParams { size: 31, steps: 16, ..Default::default() };
//! let config = isca::presets::find("is-rule30").unwrap().config(&params).unwrap();
//! let mut engine = StepEngine::new(config).unwrap();
//! let grid = engine.run().unwrap();
//! assert_eq!(grid.len(), 16);
//!
//! let text = AsciiRenderer::new().render_string(grid);
//! assert_eq!(text.lines().count(), 16);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `isca-core` | bits, rows, rule tables, proposals, errors |
//! | [`source`] | `isca-source` | `ProposalSource` trait and source-list validation |
//! | [`sources`] | `isca-sources` | baseline, pattern-trigger, reflection and novelty sources |
//! | [`engine`] | `isca-engine` | field, ledger, resolution policy, step engine |
//! | [`render`] | `isca-render` | ASCII, PGM and audit output |
//! | [`presets`] | this crate | named run configurations |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod presets;

/// Core value types and errors (`isca-core`).
pub use isca_core as types;

/// The [`source::ProposalSource`] extension point (`isca-source`).
pub use isca_source as source;

/// The four standard proposal sources (`isca-sources`).
pub use isca_sources as sources;

/// Field, ledger, resolution and the step engine (`isca-engine`).
pub use isca_engine as engine;

/// Grid and ledger renderers (`isca-render`).
pub use isca_render as render;

/// Common imports for typical usage.
///
/// ```rust
/// use isca::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use isca_core::{Bit, Category, Details, Neighbourhood, Proposal, Row, RuleTable, StepIndex};

    // Errors
    pub use isca_core::{RowError, SourceError, StepError};

    // Sources
    pub use isca_source::{ObserveContext, ProposalSource};
    pub use isca_sources::{
        BaselineRule, PatternTrigger, PersistenceReflector, RandomInjector, SourceConfigError,
    };

    // Engine
    pub use isca_engine::{
        ConfigError, EngineState, Grid, LedgerRetention, ResolutionPolicy, RunConfig, SeedPolicy,
        StepEngine,
    };

    // Rendering
    pub use isca_render::{AsciiRenderer, GridRenderer, PgmFormat, PgmRenderer, RenderError};

    // Presets
    pub use crate::presets::{PresetError, PresetParams};
}
