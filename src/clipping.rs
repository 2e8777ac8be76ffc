//! Constant-Z plane clipping of faces before projection.
//!
//! The clipping plane sits a fixed setback in front of the observer.
//! Geometry behind the plane (smaller Z) is kept; geometry in front of it
//! is cut away, with interpolated vertices inserted where edges cross.
//!
//! This pass is intentionally sequential: interpolated vertices are
//! appended to one shared, growing vertex list, and the 1-based index of
//! each new vertex is the list length right after its push. Faces are
//! processed in declaration order so those indices are reproducible.

use std::collections::HashMap;

use crate::math::vec3::Vec3;
use crate::scene::Face;

/// Distance from the observer to the clipping plane.
pub const CLIP_PLANE_SETBACK: f64 = 400.0;

/// Linear interpolation of an edge against the plane `z = plane_z`.
fn plane_intersection(v1: Vec3, v2: Vec3, plane_z: f64) -> Vec3 {
    let factor = (plane_z - v1.z) / (v2.z - v1.z);
    Vec3::new(
        v1.x + factor * (v2.x - v1.x),
        v1.y + factor * (v2.y - v1.y),
        plane_z,
    )
}

/// Clip every face against the plane `observer_distance - CLIP_PLANE_SETBACK`.
///
/// Walks each face's edges (with wrap-around) and classifies both
/// endpoints against the plane:
///
/// - front→back: only the interpolated crossing point is emitted;
/// - back→front: the original vertex is kept, then the crossing point;
/// - both behind: the original vertex is kept unchanged;
/// - both in front: the edge contributes nothing.
///
/// Fully clipped faces are dropped. Each surviving fragment is registered
/// in the returned material map under its own new index sequence, bound to
/// the original face's material name; the map extends (a copy of) the
/// input map, so unclipped bindings remain resolvable.
pub fn clip_faces(
    faces: &[Face],
    vertices: &mut Vec<Vec3>,
    observer_distance: f64,
    face_materials: &HashMap<Face, String>,
) -> (Vec<Face>, HashMap<Face, String>) {
    let plane_z = observer_distance - CLIP_PLANE_SETBACK;
    let mut clipped_faces = Vec::new();
    let mut clipped_materials = face_materials.clone();

    for face in faces {
        let material_name = face_materials.get(face).cloned().unwrap_or_default();
        let indices = face.indices();
        let mut clipped: Vec<usize> = Vec::new();

        for i in 0..indices.len() {
            let v1 = vertices[indices[i] - 1];
            let v2 = vertices[indices[(i + 1) % indices.len()] - 1];

            if v1.z > plane_z && v2.z <= plane_z {
                vertices.push(plane_intersection(v1, v2, plane_z));
                clipped.push(vertices.len());
            } else if v1.z <= plane_z && v2.z > plane_z {
                vertices.push(plane_intersection(v1, v2, plane_z));
                clipped.push(indices[i]);
                clipped.push(vertices.len());
            } else if v1.z <= plane_z && v2.z <= plane_z {
                clipped.push(indices[i]);
            }
        }

        if !clipped.is_empty() {
            let fragment = Face::new(clipped);
            clipped_materials.insert(fragment.clone(), material_name);
            clipped_faces.push(fragment);
        }
    }

    (clipped_faces, clipped_materials)
}
