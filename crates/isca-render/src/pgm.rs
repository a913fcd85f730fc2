//! Greyscale PGM rendering.
//!
//! Live cells are black (`0`), dead cells white (`255`). Each cell becomes
//! a `scale x scale` block of pixels.

use std::io::Write;

use isca_engine::Grid;

use crate::error::RenderError;
use crate::GridRenderer;

const MAXVAL: u8 = 255;
/// Plain-format samples per line, keeping lines under 70 characters.
const PLAIN_PER_LINE: usize = 17;

/// PGM encoding variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PgmFormat {
    /// Binary `P5`: one byte per pixel.
    #[default]
    Binary,
    /// Plain `P2`: decimal samples separated by whitespace.
    Plain,
}

impl PgmFormat {
    fn magic(self) -> &'static str {
        match self {
            Self::Binary => "P5",
            Self::Plain => "P2",
        }
    }
}

/// Renders a grid as a PGM image, one pixel row per grid row at scale 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PgmRenderer {
    format: PgmFormat,
    scale: usize,
}

impl Default for PgmRenderer {
    fn default() -> Self {
        Self {
            format: PgmFormat::Binary,
            scale: 1,
        }
    }
}

impl PgmRenderer {
    /// Binary format at scale 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the encoding.
    pub fn with_format(mut self, format: PgmFormat) -> Self {
        self.format = format;
        self
    }

    /// Replicate each cell into a `scale x scale` block.
    ///
    /// # Errors
    ///
    /// [`RenderError::ZeroScale`] if `scale == 0`.
    pub fn with_scale(mut self, scale: usize) -> Result<Self, RenderError> {
        if scale == 0 {
            return Err(RenderError::ZeroScale);
        }
        self.scale = scale;
        Ok(self)
    }

    /// The configured encoding.
    pub fn format(&self) -> PgmFormat {
        self.format
    }

    /// The configured scale factor.
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Pixel dimensions `(width, height)` for `grid`.
    pub fn dimensions(&self, grid: &Grid) -> Result<(usize, usize), RenderError> {
        let too_large = || RenderError::TooLarge {
            width: grid.width(),
            height: grid.len(),
            scale: self.scale,
        };
        let w = grid.width().checked_mul(self.scale).ok_or_else(too_large)?;
        let h = grid.len().checked_mul(self.scale).ok_or_else(too_large)?;
        Ok((w, h))
    }

    fn scaled_line(&self, cells: impl Iterator<Item = u8>, line: &mut Vec<u8>) {
        line.clear();
        for shade in cells {
            line.extend(std::iter::repeat_n(shade, self.scale));
        }
    }
}

fn shade(live: bool) -> u8 {
    if live {
        0
    } else {
        MAXVAL
    }
}

impl GridRenderer for PgmRenderer {
    fn extension(&self) -> &'static str {
        "pgm"
    }

    fn render(&self, grid: &Grid, out: &mut dyn Write) -> Result<(), RenderError> {
        if grid.is_empty() {
            return Err(RenderError::EmptyGrid);
        }
        let (w, h) = self.dimensions(grid)?;
        write!(out, "{}\n{w} {h}\n{MAXVAL}\n", self.format.magic())?;

        let mut line = Vec::with_capacity(w);
        for row in grid.rows() {
            self.scaled_line(row.iter().map(|b| shade(b.is_one())), &mut line);
            for _ in 0..self.scale {
                match self.format {
                    PgmFormat::Binary => out.write_all(&line)?,
                    PgmFormat::Plain => {
                        for chunk in line.chunks(PLAIN_PER_LINE) {
                            let text: Vec<String> = chunk.iter().map(u8::to_string).collect();
                            writeln!(out, "{}", text.join(" "))?;
                        }
                    }
                }
            }
        }
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
        g.push(row("101")).unwrap();
        g
    }

    #[test]
    fn binary_header_and_pixels() {
        let buf = PgmRenderer::new().render_to_vec(&grid()).unwrap();
        let header = b"P5\n3 2\n255\n";
        assert_eq!(&buf[..header.len()], header);
        assert_eq!(&buf[header.len()..], &[255, 0, 255, 0, 255, 0]);
    }

    #[test]
    fn plain_format_is_text() {
        let r = PgmRenderer::new().with_format(PgmFormat::Plain);
        let text = String::from_utf8(r.render_to_vec(&grid()).unwrap()).unwrap();
        assert_eq!(text, "P2\n3 2\n255\n255 0 255\n0 255 0\n");
    }

    #[test]
    fn scale_replicates_blocks() {
        let r = PgmRenderer::new().with_scale(2).unwrap();
        let buf = r.render_to_vec(&grid()).unwrap();
        let header = b"P5\n6 4\n255\n";
        assert_eq!(&buf[..header.len()], header);
        let px = &buf[header.len()..];
        assert_eq!(px.len(), 24);
        assert_eq!(&px[0..6], &[255, 255, 0, 0, 255, 255]);
        assert_eq!(&px[0..6], &px[6..12]);
        assert_eq!(&px[12..18], &[0, 0, 255, 255, 0, 0]);
    }

    #[test]
    fn plain_lines_stay_short() {
        let mut g = Grid::new(40);
        g.push(row(&"1".repeat(40))).unwrap();
        let r = PgmRenderer::new().with_format(PgmFormat::Plain);
        let text = String::from_utf8(r.render_to_vec(&g).unwrap()).unwrap();
        assert!(text.lines().all(|l| l.len() <= 70));
        assert_eq!(text.lines().skip(3).count(), 3);
    }

    #[test]
    fn zero_scale_rejected() {
        assert!(matches!(
            PgmRenderer::new().with_scale(0),
            Err(RenderError::ZeroScale)
        ));
    }

    mod proptests {
        use super::*;
        use isca_core::Row;
        use proptest::prelude::*;

        fn arb_grid() -> impl Strategy<Value = Grid> {
            (1usize..16, 1usize..8).prop_flat_map(|(w, h)| {
                prop::collection::vec(prop::collection::vec(0u8..2, w), h).prop_map(move |rows| {
                    let mut g = Grid::new(w);
                    for r in rows {
                        g.push(Row::from_u8s(&r).unwrap()).unwrap();
                    }
                    g
                })
            })
        }

        proptest! {
            #[test]
            fn binary_payload_matches_live_cells(grid in arb_grid(), scale in 1usize..4) {
                let r = PgmRenderer::new().with_scale(scale).unwrap();
                let buf = r.render_to_vec(&grid).unwrap();
                let (w, h) = r.dimensions(&grid).unwrap();
                let header = format!("P5\n{w} {h}\n255\n");
                prop_assert!(buf.starts_with(header.as_bytes()));

                let px = &buf[header.len()..];
                prop_assert_eq!(px.len(), w * h);
                let dark = px.iter().filter(|&&p| p == 0).count();
                prop_assert_eq!(dark, grid.count_ones() * scale * scale);
            }
        }
    }
}
