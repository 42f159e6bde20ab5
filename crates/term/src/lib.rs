//! Terminal rendering module.
//!
//! This is a small, purpose-built rendering layer for the wireframe view. It
//! avoids widget/layout libraries and instead renders into a simple depth
//! buffered framebuffer that is flushed to the terminal once per frame.
//!
//! Pipeline per frame:
//! - [`FrameBuffer::clear`] resets glyphs, depths and overlay flags
//! - [`raster::draw_line`] draws each mesh edge with a depth test
//! - [`compose::insert_text`] splices log rows into the grid
//! - [`TerminalRenderer::present`] writes the colored frame and footer

pub mod compose;
pub mod fb;
pub mod frame;
pub mod pacer;
pub mod raster;
pub mod renderer;
pub mod scene_view;

pub use osc_wireframe_core as core;
pub use osc_wireframe_types as types;

pub use compose::insert_text;
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use frame::FrameState;
pub use pacer::FramePacer;
pub use raster::draw_line;
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use scene_view::{cycle_bar, OverlayLayout, SceneView};
