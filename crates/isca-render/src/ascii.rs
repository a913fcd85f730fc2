//! Plain-text rendering.

use std::io::Write;

use isca_core::Bit;
use isca_engine::Grid;

use crate::error::RenderError;
use crate::GridRenderer;

/// Renders one line per row, one glyph per cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AsciiRenderer {
    on: char,
    off: char,
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self { on: '#', off: ' ' }
    }
}

impl AsciiRenderer {
    /// `'#'` for live cells, `' '` for dead ones.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom glyphs.
    pub fn with_glyphs(on: char, off: char) -> Self {
        Self { on, off }
    }

    fn glyph(&self, bit: Bit) -> char {
        if bit.is_one() {
            self.on
        } else {
            self.off
        }
    }

    /// Render into a `String`.
    pub fn render_string(&self, grid: &Grid) -> String {
        let mut s = String::with_capacity(grid.len() * (grid.width() + 1));
        for row in grid.rows() {
            s.extend(row.iter().map(|b| self.glyph(b)));
            s.push('\n');
        }
        s
    }
}

impl GridRenderer for AsciiRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, grid: &Grid, out: &mut dyn Write) -> Result<(), RenderError> {
        if grid.is_empty() {
            return Err(RenderError::EmptyGrid);
        }
        out.write_all(self.render_string(grid).as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isca_test_utils::row;

    fn grid() -> Grid {
        let mut g = Grid::new(3);
        g.push(row("010")).unwrap();
        g.push(row("111")).unwrap();
        g
    }

    #[test]
    fn default_glyphs() {
        assert_eq!(AsciiRenderer::new().render_string(&grid()), " # \n###\n");
    }

    #[test]
    fn custom_glyphs() {
        let r = AsciiRenderer::with_glyphs('1', '0');
        assert_eq!(r.render_to_vec(&grid()).unwrap(), b"010\n111\n");
    }

    #[test]
    fn empty_grid_rejected() {
        let err = AsciiRenderer::new().render_to_vec(&Grid::new(3)).unwrap_err();
        assert!(matches!(err, RenderError::EmptyGrid));
    }
}
