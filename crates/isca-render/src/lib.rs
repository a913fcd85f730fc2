//! Renderers mapping a run's [`Grid`](isca_engine::Grid) to text or images.
//!
//! Every renderer writes to any `std::io::Write` sink so tests can render
//! into a `Vec<u8>` and the CLI can stream straight to a file.
//!
//! - [`AsciiRenderer`]: one text line per row.
//! - [`PgmRenderer`]: greyscale PGM, binary `P5` or plain `P2`.
//! - [`write_audit`]: one line per ledger proposal.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ascii;
pub mod audit;
pub mod error;
pub mod pgm;

pub use ascii::AsciiRenderer;
pub use audit::write_audit;
pub use error::RenderError;
pub use pgm::{PgmFormat, PgmRenderer};

use std::io::Write;

use isca_engine::Grid;

/// A grid-to-bytes renderer.
///
/// Object-safe so front ends can pick a renderer at runtime.
pub trait GridRenderer {
    /// Conventional file extension, without the dot.
    fn extension(&self) -> &'static str;

    /// Write `grid` to `out`.
    fn render(&self, grid: &Grid, out: &mut dyn Write) -> Result<(), RenderError>;

    /// Render into a fresh buffer.
    fn render_to_vec(&self, grid: &Grid) -> Result<Vec<u8>, RenderError> {
        let mut buf = Vec::new();
        self.render(grid, &mut buf)?;
        Ok(buf)
    }
}
