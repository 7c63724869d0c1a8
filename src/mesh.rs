//! Mesh data: vertices, faces, validation, and import/export.
//!
//! A [`Mesh`] can only be built through validating constructors, so the
//! render pipeline may assume every face index is in range and every face has
//! at least two vertices. Validation happens once at load time, never per
//! frame.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::vec3::Vec3;

#[derive(Error, Debug)]
pub enum MeshError {
    #[error("face {face} has {len} vertices, need at least 2")]
    FaceTooShort { face: usize, len: usize },
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("OBJ error: {0}")]
    Obj(#[from] tobj::LoadError),
}

/// An ordered list of vertex indices into the owning mesh.
///
/// Two indices form an edge, drawn only in wireframe mode; three or more form
/// a polygon eligible for solid shading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Face(pub Vec<usize>);

impl Face {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True for 2-vertex faces, which only wireframe mode draws.
    pub fn is_edge(&self) -> bool {
        self.0.len() == 2
    }
}

/// On-disk shape of a mesh: `{"vs": [{"x":..,"y":..,"z":..}], "fs": [[..]]}`.
#[derive(Serialize, Deserialize)]
struct MeshFile {
    vs: Vec<Vec3>,
    fs: Vec<Face>,
}

/// A polygon mesh: vertex positions plus faces indexing into them.
///
/// Long-lived and swapped wholesale on preset changes; the pipeline borrows
/// it read-only for the duration of a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Builds a mesh, checking face arity and index ranges.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Result<Self, MeshError> {
        for (face_index, face) in faces.iter().enumerate() {
            if face.len() < 2 {
                return Err(MeshError::FaceTooShort {
                    face: face_index,
                    len: face.len(),
                });
            }
            for &index in &face.0 {
                if index >= vertices.len() {
                    return Err(MeshError::IndexOutOfRange {
                        face: face_index,
                        index,
                        vertex_count: vertices.len(),
                    });
                }
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Parses and validates the `{vs, fs}` JSON schema.
    pub fn from_json(json: &str) -> Result<Self, MeshError> {
        let file: MeshFile = serde_json::from_str(json)?;
        Self::new(file.vs, file.fs)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, MeshError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes back to the `{vs, fs}` schema.
    pub fn to_json(&self) -> Result<String, MeshError> {
        let file = MeshFile {
            vs: self.vertices.clone(),
            fs: self.faces.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Loads an OBJ file, triangulated, all objects merged into one mesh.
    pub fn from_obj(path: impl AsRef<Path>) -> Result<Self, MeshError> {
        let (models, _materials) = tobj::load_obj(
            path.as_ref(),
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )?;

        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        for model in models {
            let base = vertices.len();
            for position in model.mesh.positions.chunks_exact(3) {
                vertices.push(Vec3::new(position[0], position[1], position[2]));
            }
            for triangle in model.mesh.indices.chunks_exact(3) {
                faces.push(Face(vec![
                    base + triangle[0] as usize,
                    base + triangle[1] as usize,
                    base + triangle[2] as usize,
                ]));
            }
        }
        Self::new(vertices, faces)
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }
}
