//! Depth-tested line rasterizer.
//!
//! Integer Bresenham stepping with depth linearly interpolated per step. The
//! depth test keeps the write with the *larger* rotated z, and never touches
//! overlay cells.

use crate::core::ScreenPoint;
use crate::fb::FrameBuffer;

/// Draw a line from `from` to `to` (both inclusive) with `glyph`.
///
/// Steps outside the grid are skipped. In-grid steps write glyph and depth
/// only if the cell is not overlay text and the interpolated depth is
/// strictly greater than the stored one.
pub fn draw_line(fb: &mut FrameBuffer, from: ScreenPoint, to: ScreenPoint, glyph: char) {
    let (mut x, mut y) = (from.x, from.y);
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut z = from.depth;
    let dz = (to.depth - from.depth) / (dx + dy + 1) as f32;

    loop {
        if let Some(cell) = fb.cell_mut(x, y) {
            if !cell.is_text && z > cell.depth {
                cell.ch = glyph;
                cell.depth = z;
            }
        }

        if x == to.x && y == to.y {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
        z += dz;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;
    use crate::types::DEPTH_TEXT;

    fn pt(x: i32, y: i32, depth: f32) -> ScreenPoint {
        ScreenPoint::new(x, y, depth)
    }

    fn drawn(fb: &FrameBuffer) -> Vec<(u16, u16)> {
        let mut out = Vec::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get(x, y).unwrap().ch == '#' {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_horizontal_line_inclusive() {
        let mut fb = FrameBuffer::new(8, 3);
        draw_line(&mut fb, pt(1, 1, 0.0), pt(5, 1, 0.0), '#');
        assert_eq!(drawn(&fb), vec![(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)]);
    }

    #[test]
    fn test_reverse_direction_covers_same_cells_for_diagonal() {
        let mut a = FrameBuffer::new(6, 6);
        let mut b = FrameBuffer::new(6, 6);
        draw_line(&mut a, pt(0, 0, 0.0), pt(4, 4, 0.0), '#');
        draw_line(&mut b, pt(4, 4, 0.0), pt(0, 0, 0.0), '#');
        assert_eq!(drawn(&a), drawn(&b));
        assert_eq!(drawn(&a).len(), 5);
    }

    #[test]
    fn test_steep_line_steps_every_row() {
        let mut fb = FrameBuffer::new(4, 8);
        draw_line(&mut fb, pt(1, 0, 0.0), pt(2, 7, 0.0), '#');
        let cells = drawn(&fb);
        assert_eq!(cells.len(), 8);
        for y in 0..8u16 {
            assert!(cells.iter().any(|&(_, cy)| cy == y));
        }
    }

    #[test]
    fn test_single_point_line() {
        let mut fb = FrameBuffer::new(3, 3);
        draw_line(&mut fb, pt(1, 1, 0.5), pt(1, 1, 0.5), '#');
        assert_eq!(drawn(&fb), vec![(1, 1)]);
        assert_eq!(fb.get(1, 1).unwrap().depth, 0.5);
    }

    #[test]
    fn test_out_of_bounds_steps_are_skipped() {
        let mut fb = FrameBuffer::new(4, 1);
        draw_line(&mut fb, pt(-3, 0, 0.0), pt(6, 0, 0.0), '#');
        assert_eq!(drawn(&fb), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn test_depth_is_interpolated() {
        let mut fb = FrameBuffer::new(4, 1);
        // dx = 3, dy = 0, dz = 3 / 4 per step
        draw_line(&mut fb, pt(0, 0, 0.0), pt(3, 0, 3.0), '#');
        let depths: Vec<f32> = (0..4).map(|x| fb.get(x, 0).unwrap().depth).collect();
        assert_eq!(depths, vec![0.0, 0.75, 1.5, 2.25]);
    }

    #[test]
    fn test_larger_depth_wins_in_either_order() {
        let near = pt(1, 0, 2.0);
        let far = pt(1, 0, -1.0);

        let mut a = FrameBuffer::new(3, 1);
        draw_line(&mut a, far, far, 'f');
        draw_line(&mut a, near, near, 'n');

        let mut b = FrameBuffer::new(3, 1);
        draw_line(&mut b, near, near, 'n');
        draw_line(&mut b, far, far, 'f');

        assert_eq!(a.get(1, 0).unwrap().ch, 'n');
        assert_eq!(b.get(1, 0).unwrap().ch, 'n');
        assert_eq!(a.get(1, 0).unwrap().depth, 2.0);
        assert_eq!(b.get(1, 0).unwrap().depth, 2.0);
    }

    #[test]
    fn test_equal_depth_keeps_first_write() {
        let p = pt(0, 0, 1.0);
        let mut fb = FrameBuffer::new(1, 1);
        draw_line(&mut fb, p, p, 'a');
        draw_line(&mut fb, p, p, 'b');
        assert_eq!(fb.get(0, 0).unwrap().ch, 'a');
    }

    #[test]
    fn test_text_cells_are_never_overwritten() {
        let mut fb = FrameBuffer::new(3, 1);
        let text = Cell {
            ch: 'T',
            depth: -5.0,
            is_text: true,
        };
        fb.set(1, 0, text);
        draw_line(&mut fb, pt(0, 0, 100.0), pt(2, 0, 100.0), '#');
        assert_eq!(fb.get(1, 0), Some(text));
        assert_eq!(fb.get(0, 0).unwrap().ch, '#');
        assert_eq!(fb.get(2, 0).unwrap().ch, '#');
        assert!(DEPTH_TEXT > 100.0);
    }
}
