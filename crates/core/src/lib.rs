//! Core scene logic module - pure, deterministic, and testable
//!
//! This module contains the geometry, mesh and message-log logic that the
//! renderer consumes. It has **no dependencies** on the terminal or on sockets:
//!
//! - **Deterministic**: Same mesh, angle and records always give the same state
//! - **Testable**: Every transform and routing rule has unit tests
//! - **Allocation-free per frame**: Log slots are fixed-capacity inline text
//!
//! # Module Structure
//!
//! - [`geometry`]: two-axis tumble rotation, perspective projection, rotation state
//! - [`mesh`]: validated flat vertex/face arrays and edge enumeration
//! - [`obj`]: OBJ file loading via `tobj`
//! - [`message_log`]: fixed table of the latest record per routing key
//!
//! # Example
//!
//! ```
//! use osc_wireframe_core::{Camera, Mesh, MessageLog};
//! use osc_wireframe_types::{Arg, Record};
//!
//! let mesh = Mesh::from_flat(
//!     &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
//!     3,
//!     &[1, 2, 3],
//!     3,
//! )
//! .unwrap();
//! let camera = Camera::default();
//! let projected: Vec<_> = mesh
//!     .positions()
//!     .iter()
//!     .filter_map(|&p| camera.transform(p, 0.0))
//!     .collect();
//! assert_eq!(projected.len(), 3);
//!
//! let mut log = MessageLog::new();
//! let slot = log.ingest(&Record::from_pairs("/dirt/play", [("orbit", Arg::Int(2))]));
//! assert_eq!(slot, 2);
//! ```

pub mod geometry;
pub mod message_log;
pub mod mesh;
pub mod obj;

pub use osc_wireframe_types as types;

// Re-export commonly used types for convenience
pub use geometry::{rotate_horizontal, rotate_vertical, tumble, Camera, Rotation, ScreenPoint};
pub use glam::Vec3;
pub use message_log::{LogSlot, MessageLog};
pub use mesh::{Mesh, MeshError};
pub use obj::{load_obj_mesh, parse_obj_mesh};
