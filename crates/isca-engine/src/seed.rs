//! Initial-row seeding policies.

use isca_core::{Bit, Row};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::ConfigError;

/// Default density for [`SeedPolicy::SparseRandom`].
pub const DEFAULT_SPARSE_DENSITY: f64 = 0.1;

/// ChaCha stream used for sparse seeding. Seeded draw sources read stream 0,
/// so a run seed shared with a novelty injector yields independent draws.
pub const SEED_STREAM: u64 = 1;

/// How the step-0 row is produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SeedPolicy {
    /// Every cell 0.
    AllZero,
    /// A single 1 at `size / 2`.
    #[default]
    SingleCenter,
    /// Each cell independently 1 with probability `density`, drawn from
    /// [`SEED_STREAM`] of a ChaCha8 generator seeded with the run seed.
    SparseRandom {
        /// Probability of a live cell, in `[0, 1]`.
        density: f64,
    },
    /// A caller-supplied row. Its width must equal the run's width.
    Explicit(Row),
}

impl SeedPolicy {
    /// Sparse-random seeding at [`DEFAULT_SPARSE_DENSITY`].
    pub fn sparse() -> Self {
        Self::SparseRandom {
            density: DEFAULT_SPARSE_DENSITY,
        }
    }

    /// Check parameters that do not depend on the run width.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::SparseRandom { density } if !(0.0..=1.0).contains(density) => {
                Err(ConfigError::InvalidDensity { value: *density })
            }
            _ => Ok(()),
        }
    }

    /// Produce the step-0 row for a run of width `size`.
    ///
    /// `seed` only matters for [`SparseRandom`](SeedPolicy::SparseRandom).
    pub fn materialize(&self, size: usize, seed: u64) -> Result<Row, ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        self.validate()?;
        let row = match self {
            Self::AllZero => Row::zeros(size),
            Self::SingleCenter => Row::single_center(size),
            Self::SparseRandom { density } => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                rng.set_stream(SEED_STREAM);
                let cells = (0..size)
                    .map(|_| Bit::from_bool(rng.random::<f64>() < *density))
                    .collect();
                Row::new(cells)
            }
            Self::Explicit(row) => {
                if row.len() != size {
                    return Err(ConfigError::SeedWidth {
                        expected: size,
                        actual: row.len(),
                    });
                }
                Ok(row.clone())
            }
        };
        row.map_err(ConfigError::Row)
    }
}
