//! Per-face geometric analysis: degenerate-vertex detection, normal
//! computation and the facing test.

use crate::math::vec3::Vec3;
use crate::scene::Face;

/// Scan a face for three geometrically distinct vertices.
///
/// Coincidence is exact coordinate equality, with no epsilon: only true
/// duplicate vertices count as coincident, never near-misses introduced
/// by rotation rounding. Returns `None` when fewer than three distinct
/// vertices exist.
pub fn three_distinct_vertices(face: &Face, points: &[Vec3]) -> Option<[Vec3; 3]> {
    let indices = face.indices();
    if indices.is_empty() {
        return None;
    }

    let v1 = points[indices[0] - 1];

    let mut index = 0;
    let mut v2 = v1;
    while index < indices.len() {
        v2 = points[indices[index] - 1];
        if v1 == v2 {
            index += 1;
        } else {
            break;
        }
    }
    if v1 == v2 {
        return None;
    }

    index += 1;
    let mut v3 = v1;
    while index < indices.len() {
        v3 = points[indices[index] - 1];
        if v1 == v3 || v2 == v3 {
            index += 1;
        } else {
            break;
        }
    }
    if v1 == v3 || v2 == v3 {
        return None;
    }

    Some([v1, v2, v3])
}

/// Compute a face normal from its first three distinct vertices.
///
/// The result is **not** normalized; callers normalize only once the face
/// is confirmed visible. The zero vector signals a degenerate face that
/// must not be rendered.
pub fn face_normal(face: &Face, points: &[Vec3]) -> Vec3 {
    match three_distinct_vertices(face, points) {
        Some([v1, v2, v3]) => {
            let a = v2 - v1;
            let b = v3 - v1;
            a.cross(b)
        }
        None => Vec3::ZERO,
    }
}

/// A face is front-facing when its normal points toward the observer,
/// i.e. has a positive component along the viewing axis.
pub fn front_facing(normal: Vec3) -> bool {
    normal.z > 0.0
}
