//! Frame: co-indexed glyph and depth grids for one rendered image.

use std::io::{self, Write};

use crate::types::BLANK_GLYPH;

/// Row-major glyph grid with a parallel depth grid.
///
/// Each cell holds one ASCII byte plus the camera-space z of the sample that
/// produced it. The camera looks down -Z, so larger z means closer to the
/// viewer; [`Frame::plot`] only lets closer samples through.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: usize,
    height: usize,
    glyphs: Vec<u8>,
    depth: Vec<f64>,
}

impl Frame {
    /// Create a blank frame with the depth floor at negative infinity, so
    /// any plotted sample wins until [`Frame::clear`] sets a real floor.
    pub fn new(width: usize, height: usize) -> Self {
        let len = width * height;
        Self {
            width,
            height,
            glyphs: vec![BLANK_GLYPH; len],
            depth: vec![f64::NEG_INFINITY; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Resize both grids.
    ///
    /// This preserves the underlying allocations when possible. Cell
    /// contents are unspecified afterwards; callers clear before rendering.
    pub fn resize(&mut self, width: usize, height: usize) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = width * height;
        self.glyphs.resize(len, BLANK_GLYPH);
        self.depth.resize(len, f64::NEG_INFINITY);
    }

    /// Reset every cell to blank and every depth to `depth_floor`.
    pub fn clear(&mut self, depth_floor: f64) {
        self.glyphs.fill(BLANK_GLYPH);
        self.depth.fill(depth_floor);
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Depth-tested write: store `glyph` at (x, y) if the cell is in bounds
    /// and `z` is strictly closer than what the cell already holds.
    ///
    /// Out-of-bounds coordinates are silently ignored. Returns whether the
    /// cell was written.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, z: f64, glyph: u8) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        if let Some(i) = self.idx(x as usize, y as usize) {
            if z > self.depth[i] {
                self.depth[i] = z;
                self.glyphs[i] = glyph;
                return true;
            }
        }
        false
    }

    pub fn glyph(&self, x: usize, y: usize) -> Option<u8> {
        self.idx(x, y).map(|i| self.glyphs[i])
    }

    pub fn depth(&self, x: usize, y: usize) -> Option<f64> {
        self.idx(x, y).map(|i| self.depth[i])
    }

    /// Iterate glyph rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let width = self.width;
        (0..self.height).map(move |y| &self.glyphs[y * width..(y + 1) * width])
    }

    /// Write the frame as text: each row, newline-terminated, no separators
    /// within a row.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in self.rows() {
            out.write_all(row)?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    /// The frame as a `String`, one line per row. Glyphs are always ASCII.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.height * (self.width + 1));
        for row in self.rows() {
            for &b in row {
                text.push(b as char);
            }
            text.push('\n');
        }
        text
    }
}
