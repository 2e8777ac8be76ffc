//! Painter's-algorithm visibility ordering.
//!
//! Faces are ranked by the mean Z of their transformed vertices and drawn
//! back-to-front, so nearer faces overdraw farther ones. This is an
//! approximation, not a true visibility solver: interpenetrating or
//! mutually overlapping concave faces can still render incorrectly.

use crate::math::vec3::Vec3;
use crate::scene::Face;

/// Mean depth (Z) of a face's vertices, or `None` for an empty face.
pub fn mean_depth(face: &Face, points: &[Vec3]) -> Option<f64> {
    if face.is_empty() {
        return None;
    }
    let sum: f64 = face.points(points).map(|p| p.z).sum();
    Some(sum / face.len() as f64)
}

/// Produce `(mean_depth, face_index)` pairs sorted back-to-front.
///
/// Ascending mean Z is back-to-front for the fixed observer on +Z. Ties
/// fall back to the face's declaration order. Empty faces carry no depth
/// and are left out entirely rather than poisoning the sort with NaN.
pub fn depth_order(faces: &[Face], points: &[Vec3]) -> Vec<(f64, usize)> {
    let mut z_list: Vec<(f64, usize)> = Vec::with_capacity(faces.len());
    for (index, face) in faces.iter().enumerate() {
        if let Some(depth) = mean_depth(face, points) {
            z_list.push((depth, index));
        }
    }
    z_list.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    z_list
}
