//! Test utilities and mock types for Intention-Space development.
//!
//! Provides a scripted [`DrawSource`], reusable source fixtures
//! ([`ConstSource`], [`FailingSource`]) and small row helpers.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{ConstSource, FailingSource};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use isca_core::{DrawSource, Row};

/// Parse a row literal such as `"00100"`, panicking on bad input.
pub fn row(s: &str) -> Row {
    s.parse()
        .unwrap_or_else(|e| panic!("bad row literal {s:?}: {e}"))
}

/// Shared handle counting how many draws a [`ScriptedDraws`] has served.
#[derive(Clone, Debug, Default)]
pub struct DrawCounter(Arc<AtomicUsize>);

impl DrawCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }
}

/// A [`DrawSource`] that replays a fixed script, cycling when exhausted.
///
/// Keep a [`DrawCounter`] from [`counter`](ScriptedDraws::counter) before
/// moving the source into a builder to assert how many draws were taken.
#[derive(Debug)]
pub struct ScriptedDraws {
    script: Vec<f64>,
    pos: usize,
    served: DrawCounter,
}

impl ScriptedDraws {
    /// # Panics
    ///
    /// Panics if `script` is empty.
    pub fn new(script: Vec<f64>) -> Self {
        assert!(!script.is_empty(), "draw script must not be empty");
        Self {
            script,
            pos: 0,
            served: DrawCounter::default(),
        }
    }

    pub fn counter(&self) -> DrawCounter {
        self.served.clone()
    }
}

impl DrawSource for ScriptedDraws {
    fn next_unit(&mut self) -> f64 {
        let v = self.script[self.pos % self.script.len()];
        self.pos += 1;
        self.served.0.fetch_add(1, Ordering::Relaxed);
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_draws_cycle_and_count() {
        let mut d = ScriptedDraws::new(vec![0.1, 0.2]);
        let counter = d.counter();
        let got: Vec<f64> = (0..5).map(|_| d.next_unit()).collect();
        assert_eq!(got, vec![0.1, 0.2, 0.1, 0.2, 0.1]);
        assert_eq!(counter.get(), 5);
    }

    #[test]
    fn row_helper_parses() {
        assert_eq!(row("0110").to_u8s(), vec![0, 1, 1, 0]);
    }
}
