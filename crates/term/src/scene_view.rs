//! SceneView: maps a mesh and the message log into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::compose::insert_text;
use crate::core::{Camera, LogSlot, Mesh, MessageLog};
use crate::fb::FrameBuffer;
use crate::raster::draw_line;
use crate::types::{LOG_ROW_ORIGIN, LOG_ROW_SPACING, WIRE_GLYPH};

/// Cells in the cycle progress bar (between the brackets).
pub const CYCLE_BAR_CELLS: usize = 10;

/// Where each log row and its fields land in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayout {
    pub row_origin: u16,
    pub row_spacing: u16,
    pub slot_col: i32,
    pub label_col: i32,
    pub count_col: i32,
    pub cycle_col: i32,
    pub gain_col: i32,
}

impl Default for OverlayLayout {
    fn default() -> Self {
        Self {
            row_origin: LOG_ROW_ORIGIN,
            row_spacing: LOG_ROW_SPACING,
            slot_col: 5,
            label_col: 10,
            count_col: 25,
            cycle_col: 33,
            gain_col: 46,
        }
    }
}

impl OverlayLayout {
    pub fn row_for(&self, slot: usize) -> i32 {
        self.row_origin as i32 + (slot as i32) * self.row_spacing as i32
    }
}

/// `[###-------]` for a fraction of a cycle; the fill is truncated, negatives fill nothing.
pub fn cycle_bar(fraction: f32) -> ArrayString<16> {
    let filled = (fraction * CYCLE_BAR_CELLS as f32) as i32;
    let mut bar = ArrayString::new();
    bar.push('[');
    for i in 0..CYCLE_BAR_CELLS as i32 {
        bar.push(if i < filled { '#' } else { '-' });
    }
    bar.push(']');
    bar
}

/// Renders the rotating wireframe and the log overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneView {
    camera: Camera,
    wire_glyph: char,
    layout: OverlayLayout,
}

impl Default for SceneView {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            wire_glyph: WIRE_GLYPH,
            layout: OverlayLayout::default(),
        }
    }
}

impl SceneView {
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Clear `fb`, draw the mesh at `angle`, then overlay the active log rows.
    ///
    /// This is the allocation-free hot path; callers keep one framebuffer for
    /// the whole run.
    pub fn render_into(&self, mesh: &Mesh, log: &MessageLog, angle: f32, fb: &mut FrameBuffer) {
        fb.clear();
        self.render_mesh_into(mesh, angle, fb);
        self.render_log_into(log, fb);
    }

    /// Convenience wrapper that allocates a fresh framebuffer.
    pub fn render(&self, mesh: &Mesh, log: &MessageLog, angle: f32) -> FrameBuffer {
        let mut fb = FrameBuffer::new(self.camera.width, self.camera.height);
        self.render_into(mesh, log, angle, &mut fb);
        fb
    }

    /// Transform every edge endpoint and rasterize the edge.
    ///
    /// Edges with an endpoint that fails to project (camera plane crossing)
    /// are skipped for this frame.
    pub fn render_mesh_into(&self, mesh: &Mesh, angle: f32, fb: &mut FrameBuffer) {
        for (a, b) in mesh.edges() {
            let (Some(p0), Some(p1)) = (
                self.camera.transform(a, angle),
                self.camera.transform(b, angle),
            ) else {
                continue;
            };
            draw_line(fb, p0, p1, self.wire_glyph);
        }
    }

    /// Composite one row per active slot, in slot order.
    pub fn render_log_into(&self, log: &MessageLog, fb: &mut FrameBuffer) {
        for slot in log.active_slots() {
            self.render_slot_into(slot, fb);
        }
    }

    fn render_slot_into(&self, slot: &LogSlot, fb: &mut FrameBuffer) {
        let y = self.layout.row_for(slot.index);

        let mut buf = ArrayString::<48>::new();
        let _ = write!(buf, "[{}]", slot.index);
        insert_text(fb, self.layout.slot_col, y, &buf);

        insert_text(fb, self.layout.label_col, y, &slot.label);

        buf.clear();
        let _ = write!(buf, "n:{}", slot.count);
        insert_text(fb, self.layout.count_col, y, &buf);

        insert_text(fb, self.layout.cycle_col, y, &cycle_bar(slot.cycle_fraction()));

        // 48 bytes fit "g:" plus any f32 at two decimals.
        buf.clear();
        let _ = write!(buf, "g:{:.2}", slot.gain);
        insert_text(fb, self.layout.gain_col, y, &buf);
    }
}
