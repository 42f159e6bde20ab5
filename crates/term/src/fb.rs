//! Framebuffer and style types for terminal rendering.
//!
//! Each cell carries its glyph together with the depth and overlay flag that
//! decide whether later writes may replace it. Rows are contiguous slices of
//! whole cells, so anything that moves a glyph moves its metadata with it.

use crate::types::{BLANK_GLYPH, DEPTH_FAR, WIRE_GLYPH};

/// How a cell is colored on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    /// Overlay text.
    Highlight,
    /// Wireframe edges.
    Wire,
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub depth: f32,
    pub is_text: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: BLANK_GLYPH,
            depth: DEPTH_FAR,
            is_text: false,
        }
    }
}

impl Cell {
    pub fn style(&self) -> CellStyle {
        if self.is_text {
            CellStyle::Highlight
        } else if self.ch == WIRE_GLYPH {
            CellStyle::Wire
        } else {
            CellStyle::Plain
        }
    }
}

/// Fixed-size 2D grid of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    #[inline(always)]
    fn idx_signed(&self, x: i32, y: i32) -> Option<usize> {
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        self.idx(x, y)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Mutable access by signed coordinates; `None` when off the grid.
    pub fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        let i = self.idx_signed(x, y)?;
        Some(&mut self.cells[i])
    }

    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = (y as usize) * w;
        Some(&self.cells[start..start + w])
    }

    pub fn row_mut(&mut self, y: u16) -> Option<&mut [Cell]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = (y as usize) * w;
        Some(&mut self.cells[start..start + w])
    }

    /// Reset every cell to blank glyph, far depth, no overlay.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Glyphs of one row as a string (test and debug helper).
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .map(|row| row.iter().map(|c| c.ch).collect())
            .unwrap_or_default()
    }
}
