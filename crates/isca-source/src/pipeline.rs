//! Source-list validation and identity planning.
//!
//! [`validate_sources`] runs once at engine construction to check the
//! configured source list for structural errors and build the
//! [`SourcePlan`]: the name → [`SourceId`] table the engine uses to stamp
//! proposals and label metrics.

use indexmap::IndexMap;
use isca_core::{Category, SourceId};

use crate::source::ProposalSource;

use std::error::Error;
use std::fmt;

// ── Plan ───────────────────────────────────────────────────────────

/// Identity table for a validated source list.
///
/// Iteration order is the configured observation order, which is also the
/// order proposals are appended to the ledger.
#[derive(Debug, Clone)]
#[must_use]
pub struct SourcePlan {
    /// `name → (id, category)`, in observation order.
    entries: IndexMap<String, (SourceId, Category)>,
}

impl SourcePlan {
    /// Number of sources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the plan covers zero sources.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a source id by name.
    pub fn id_of(&self, name: &str) -> Option<SourceId> {
        self.entries.get(name).map(|&(id, _)| id)
    }

    /// Name of the source with the given id.
    pub fn name_of(&self, id: SourceId) -> Option<&str> {
        self.entries
            .get_index(id.0 as usize)
            .map(|(name, _)| name.as_str())
    }

    /// Category of the source with the given id.
    pub fn category_of(&self, id: SourceId) -> Option<Category> {
        self.entries.get_index(id.0 as usize).map(|(_, &(_, c))| c)
    }

    /// All `(name, id, category)` triples in observation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SourceId, Category)> {
        self.entries
            .iter()
            .map(|(name, &(id, category))| (name.as_str(), id, category))
    }
}

// ── Errors ─────────────────────────────────────────────────────────

/// Errors from source-list validation (startup-time, not per-step).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceListError {
    /// No sources configured.
    EmptySourceList,
    /// No source emits [`Category::Baseline`], so some cell could go
    /// unresolved.
    MissingBaseline,
    /// Two sources share a name, making audit output ambiguous.
    DuplicateName {
        /// The repeated name.
        name: String,
    },
}

impl fmt::Display for SourceListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySourceList => write!(f, "source list is empty"),
            Self::MissingBaseline => {
                write!(f, "no source emits baseline proposals")
            }
            Self::DuplicateName { name } => {
                write!(f, "source name '{name}' is used more than once")
            }
        }
    }
}

impl Error for SourceListError {}

// ── Validation ─────────────────────────────────────────────────────

/// Validate a source list and assign ids in observation order.
///
/// Checks, in order:
/// 1. the list is non-empty,
/// 2. names are unique,
/// 3. at least one source emits baseline proposals.
pub fn validate_sources(sources: &[Box<dyn ProposalSource>]) -> Result<SourcePlan, SourceListError> {
    if sources.is_empty() {
        return Err(SourceListError::EmptySourceList);
    }

    let mut entries = IndexMap::with_capacity(sources.len());
    for (i, source) in sources.iter().enumerate() {
        let name = source.name().to_string();
        if entries.contains_key(&name) {
            return Err(SourceListError::DuplicateName { name });
        }
        entries.insert(name, (SourceId(i as u32), source.category()));
    }

    if !entries.values().any(|&(_, c)| c == Category::Baseline) {
        return Err(SourceListError::MissingBaseline);
    }

    Ok(SourcePlan { entries })
}
