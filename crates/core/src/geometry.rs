//! Geometry module - rotation and perspective projection
//!
//! Every vertex is rotated about the vertical axis by the frame angle, then
//! about the horizontal axis by `angle * TILT_RATIO`, then projected. Nothing
//! is cached between frames.

use glam::Vec3;

use crate::types::{ANGLE_STEP, CAMERA_DISTANCE, PROJECTION_SCALE, SCREEN_HEIGHT, SCREEN_WIDTH, TILT_RATIO};

/// Screen coordinates farther than this from the grid origin are rejected.
pub const GUARD_BAND: f32 = 16_384.0;

/// Rotate about the vertical (y) axis.
pub fn rotate_vertical(p: Vec3, theta: f32) -> Vec3 {
    let (sin_a, cos_a) = theta.sin_cos();
    Vec3::new(p.x * cos_a + p.z * sin_a, p.y, -p.x * sin_a + p.z * cos_a)
}

/// Rotate about the horizontal (x) axis.
pub fn rotate_horizontal(p: Vec3, phi: f32) -> Vec3 {
    let (sin_a, cos_a) = phi.sin_cos();
    Vec3::new(p.x, p.y * cos_a - p.z * sin_a, p.y * sin_a + p.z * cos_a)
}

/// Apply the full tumble for a frame angle: vertical first, then horizontal.
pub fn tumble(p: Vec3, angle: f32) -> Vec3 {
    rotate_horizontal(rotate_vertical(p, angle), angle * TILT_RATIO)
}

/// A projected point: integer cell coordinates plus the rotated z used for depth tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
    pub depth: f32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32, depth: f32) -> Self {
        Self { x, y, depth }
    }
}

/// Perspective camera looking down +z at a fixed grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub scale: f32,
    pub distance: f32,
    pub width: u16,
    pub height: u16,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            scale: PROJECTION_SCALE,
            distance: CAMERA_DISTANCE,
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl Camera {
    /// Project an already-rotated point.
    ///
    /// Depth is the rotated z itself, not the perspective factor. There is no
    /// near plane: a point at `z == -distance` blows up, and any result that is
    /// non-finite or outside [`GUARD_BAND`] comes back as `None`.
    pub fn project(&self, p: Vec3) -> Option<ScreenPoint> {
        let factor = self.scale / (p.z + self.distance);
        let fx = (p.x * factor).round();
        let fy = (p.y * factor).round();
        if !fx.is_finite() || !fy.is_finite() || fx.abs() > GUARD_BAND || fy.abs() > GUARD_BAND {
            return None;
        }
        Some(ScreenPoint {
            x: fx as i32 + (self.width / 2) as i32,
            y: fy as i32 + (self.height / 2) as i32,
            depth: p.z,
        })
    }

    /// Rotate by the frame angle and project.
    pub fn transform(&self, p: Vec3, angle: f32) -> Option<ScreenPoint> {
        self.project(tumble(p, angle))
    }
}

/// Process-wide rotation angle, advanced once per frame and never wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    angle: f32,
}

impl Rotation {
    pub fn new(angle: f32) -> Self {
        Self { angle }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn advance(&mut self) {
        self.angle += ANGLE_STEP;
    }
}
