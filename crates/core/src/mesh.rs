//! Mesh module - validated vertex/face arrays and edge enumeration
//!
//! A mesh arrives as flat, row-major arrays: `position_width` floats per
//! vertex and `face_width` 1-based indices per face. Validation happens once
//! at construction so the render loop can index without checks.

use glam::Vec3;
use thiserror::Error;

/// Fatal mesh input errors. Any of these stops the program before rendering.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("could not read mesh file '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse mesh file '{path}'")]
    Parse {
        path: String,
        #[source]
        source: tobj::LoadError,
    },
    #[error("mesh has no vertices or faces")]
    Empty,
    #[error("position width is {0}, expected 3")]
    UnsupportedPositionWidth(usize),
    #[error("face width is {0}, expected 3 or 4")]
    UnsupportedFaceWidth(usize),
    #[error("mesh mixes face widths {first} and {other}")]
    MixedFaceWidth { first: usize, other: usize },
    #[error("{what} buffer length {len} is not a multiple of {width}")]
    MalformedBuffer {
        what: &'static str,
        len: usize,
        width: usize,
    },
    #[error("face index {index} is outside 1..={vertex_count}")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}

/// Immutable mesh: positions plus fixed-width faces with 0-based indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    faces: Vec<u32>,
    face_width: usize,
}

impl Mesh {
    /// Build a mesh from flat arrays as produced by an OBJ parser.
    ///
    /// `faces` uses 1-based indices; they are shifted to 0-based here.
    pub fn from_flat(
        positions: &[f32],
        position_width: usize,
        faces: &[u32],
        face_width: usize,
    ) -> Result<Self, MeshError> {
        if position_width != 3 {
            return Err(MeshError::UnsupportedPositionWidth(position_width));
        }
        if face_width != 3 && face_width != 4 {
            return Err(MeshError::UnsupportedFaceWidth(face_width));
        }
        if positions.len() % position_width != 0 {
            return Err(MeshError::MalformedBuffer {
                what: "position",
                len: positions.len(),
                width: position_width,
            });
        }
        if faces.len() % face_width != 0 {
            return Err(MeshError::MalformedBuffer {
                what: "face",
                len: faces.len(),
                width: face_width,
            });
        }
        if positions.is_empty() || faces.is_empty() {
            return Err(MeshError::Empty);
        }

        let positions: Vec<Vec3> = positions
            .chunks_exact(position_width)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect();

        let vertex_count = positions.len();
        let faces = faces
            .iter()
            .map(|&index| {
                if index == 0 || index as usize > vertex_count {
                    Err(MeshError::IndexOutOfRange {
                        index,
                        vertex_count,
                    })
                } else {
                    Ok(index - 1)
                }
            })
            .collect::<Result<Vec<u32>, MeshError>>()?;

        Ok(Self {
            positions,
            faces,
            face_width,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len() / self.face_width
    }

    pub fn face_width(&self) -> usize {
        self.face_width
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Every face edge as a pair of vertex positions.
    ///
    /// Edges connect consecutive face indices and wrap last to first, so an
    /// edge shared by two faces is yielded twice.
    pub fn edges(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        let width = self.face_width;
        self.faces.chunks_exact(width).flat_map(move |face| {
            (0..width).map(move |edge| {
                let a = face[edge] as usize;
                let b = face[(edge + 1) % width] as usize;
                (self.positions[a], self.positions[b])
            })
        })
    }

    /// Largest absolute coordinate, useful for sanity output.
    pub fn extent(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| p.abs().max_element())
            .fold(0.0, f32::max)
    }
}
