//! Per-run frame state.
//!
//! Owns everything the loop mutates between frames: the framebuffer, the
//! message log and the rotation angle. One frame is
//! `compose` -> present (outside this module) -> `advance`.

use crate::core::{Mesh, MessageLog, Rotation};
use crate::fb::FrameBuffer;
use crate::scene_view::SceneView;
use crate::types::Record;

#[derive(Debug, Clone)]
pub struct FrameState {
    pub fb: FrameBuffer,
    pub log: MessageLog,
    pub rotation: Rotation,
}

impl FrameState {
    /// Fresh state sized for `view`'s camera.
    pub fn new(view: &SceneView) -> Self {
        let camera = view.camera();
        Self {
            fb: FrameBuffer::new(camera.width, camera.height),
            log: MessageLog::new(),
            rotation: Rotation::default(),
        }
    }

    /// Apply at most one pending record, then redraw the frame.
    pub fn compose(&mut self, view: &SceneView, mesh: &Mesh, record: Option<&Record>) {
        if let Some(record) = record {
            self.log.ingest(record);
        }
        view.render_into(mesh, &self.log, self.rotation.angle(), &mut self.fb);
    }

    pub fn advance(&mut self) {
        self.rotation.advance();
    }

    pub fn total_messages(&self) -> u32 {
        self.log.total_messages()
    }
}
