//! Error types for rendering.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors that can occur while rendering a grid or ledger.
#[derive(Debug)]
pub enum RenderError {
    /// Writing to the sink failed.
    Io(io::Error),
    /// The grid has no rows.
    EmptyGrid,
    /// The PGM scale factor must be at least 1.
    ZeroScale,
    /// Scaled image dimensions overflow `usize`.
    TooLarge {
        /// Grid width in cells.
        width: usize,
        /// Grid height in rows.
        height: usize,
        /// The requested scale factor.
        scale: usize,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::EmptyGrid => write!(f, "grid has no rows to render"),
            Self::ZeroScale => write!(f, "scale factor must be at least 1"),
            Self::TooLarge {
                width,
                height,
                scale,
            } => write!(f, "{width}x{height} grid at scale {scale} is too large"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
