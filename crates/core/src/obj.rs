//! OBJ mesh loader (positions and faces only), no materials or normals.
//!
//! Faces are kept at their authored arity so quads render as quads.
//! All models in the file are concatenated into one [`Mesh`].

use std::path::Path;

use crate::mesh::{Mesh, MeshError};

/// Load an OBJ file from disk.
pub fn load_obj_mesh(path: &Path) -> Result<Mesh, MeshError> {
    let input = std::fs::read_to_string(path).map_err(|source| MeshError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_obj_mesh(&input).map_err(|err| match err {
        MeshError::Parse { source, .. } => MeshError::Parse {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })
}

/// Parse OBJ text into a mesh.
pub fn parse_obj_mesh(input: &str) -> Result<Mesh, MeshError> {
    let load_opts = tobj::LoadOptions {
        triangulate: false,
        single_index: false,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    };
    let (models, _materials) = tobj::load_obj_buf(&mut input.as_bytes(), &load_opts, |_| {
        Ok((Vec::new(), Default::default()))
    })
    .map_err(|source| MeshError::Parse {
        path: "<buffer>".to_string(),
        source,
    })?;

    let mut positions: Vec<f32> = Vec::new();
    let mut faces: Vec<u32> = Vec::new();
    let mut face_width: Option<usize> = None;

    for model in models {
        let mesh = model.mesh;
        if mesh.indices.is_empty() {
            continue;
        }
        let base = (positions.len() / 3) as u32;

        // tobj leaves `face_arities` empty when every face is a triangle.
        let width = if mesh.face_arities.is_empty() {
            3
        } else {
            let first = mesh.face_arities[0] as usize;
            if let Some(&other) = mesh.face_arities.iter().find(|&&a| a as usize != first) {
                return Err(MeshError::MixedFaceWidth {
                    first,
                    other: other as usize,
                });
            }
            first
        };
        match face_width {
            None => face_width = Some(width),
            Some(first) if first != width => {
                return Err(MeshError::MixedFaceWidth { first, other: width });
            }
            Some(_) => {}
        }

        positions.extend_from_slice(&mesh.positions);
        // OBJ indices are 1-based on the wire; tobj hands us 0-based ones.
        faces.extend(mesh.indices.iter().map(|&i| base + i + 1));
    }

    let face_width = face_width.ok_or(MeshError::Empty)?;
    Mesh::from_flat(&positions, 3, &faces, face_width)
}
