//! Overlay text insertion.
//!
//! Text is inserted into a row rather than painted over it: existing cells
//! from the insertion column onward slide right by the text length (whole
//! cells, so depth and overlay flag travel with their glyph) and whatever
//! falls off the right edge is lost.

use crate::fb::{Cell, FrameBuffer};
use crate::types::DEPTH_TEXT;

/// Insert `text` at column `x` of row `y`, shifting the rest of the row right.
///
/// The length is counted in `char`s, one column each. Inserted cells are
/// flagged as overlay with [`DEPTH_TEXT`]. Characters past the right edge are
/// dropped and negative columns are skipped. Rows outside the grid and
/// `x >= width` are ignored.
pub fn insert_text(fb: &mut FrameBuffer, x: i32, y: i32, text: &str) {
    let width = fb.width() as i32;
    let Ok(y) = u16::try_from(y) else {
        return;
    };
    if x >= width {
        return;
    }
    let Some(row) = fb.row_mut(y) else {
        return;
    };

    let len = text.chars().count() as i32;
    if len == 0 {
        return;
    }

    // Destination columns [lo, width) take the cell `len` columns to their left.
    let lo = x.saturating_add(len).max(len);
    if lo < width {
        let src = (lo - len) as usize..(width - len) as usize;
        row.copy_within(src, lo as usize);
    }

    for (col, ch) in (x..).zip(text.chars()) {
        if col >= width {
            break;
        }
        if col < 0 {
            continue;
        }
        row[col as usize] = Cell {
            ch,
            depth: DEPTH_TEXT,
            is_text: true,
        };
    }
}
