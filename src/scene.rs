//! Scene model: vertices, faces, edges and their material bindings.
//!
//! The scene is pure data, built once by the loader and then consumed by
//! the rendering pipeline. Vertex indices are **1-based** throughout, as
//! in the OBJ format they come from.

use std::collections::HashMap;

use crate::material::Material;
use crate::math::vec3::Vec3;

/// An ordered polygon given as 1-based vertex indices.
///
/// A face is keyed by its exact index sequence: two faces over the same
/// vertex set in a different order or rotation are distinct keys. The
/// face→material map relies on this, so the sequence is never normalized.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Face {
    indices: Vec<usize>,
}

impl Face {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// The 1-based vertex indices, in declaration order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolve the face's vertices against a point list.
    ///
    /// Callers guarantee every index resolves; the loader validates this
    /// when the scene is built.
    pub fn points<'a>(&'a self, points: &'a [Vec3]) -> impl Iterator<Item = Vec3> + 'a {
        self.indices.iter().map(|&i| points[i - 1])
    }
}

/// An undirected edge, canonicalized with the smaller index first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    lo: usize,
    hi: usize,
}

impl Edge {
    /// Build a canonical edge from two 1-based vertex indices.
    pub fn new(a: usize, b: usize) -> Self {
        if a < b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn lo(&self) -> usize {
        self.lo
    }

    pub fn hi(&self) -> usize {
        self.hi
    }
}

/// Which rendering path the scene was declared for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SceneKind {
    /// Filled, shaded polygons ordered back-to-front.
    #[default]
    Face,
    /// Wireframe line segments only.
    Edge,
}

/// A loaded mesh with its material tables.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<Edge>,
    pub faces: Vec<Face>,
    /// Material name per face, keyed by the exact index sequence.
    pub face_materials: HashMap<Face, String>,
    pub materials: HashMap<String, Material>,
    pub kind: SceneKind,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a face's material, falling back to [`Material::default`]
    /// when the face is unbound or names an unknown material.
    pub fn material_for(&self, face: &Face) -> Material {
        self.face_materials
            .get(face)
            .and_then(|name| self.materials.get(name))
            .cloned()
            .unwrap_or_default()
    }
}
