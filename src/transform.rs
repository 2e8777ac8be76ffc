//! Vertex transformation: composite rotation + uniform scale, then
//! centroid recentering.
//!
//! Rotations are given as an ordered list of (axis, angle-in-degrees)
//! pairs. Each pair left-multiplies the running matrix, so the first
//! rotation in the list is applied to the geometry first:
//! `M = R_k * ... * R_1 * I`. The uniform scale is fused into the final
//! matrix rather than applied as a separate pass.

use crate::math::{mat3::Mat3, vec3::Vec3};

/// A rotation axis for a single rotation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// One rotation step: an axis and an angle in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub axis: Axis,
    pub degrees: f64,
}

impl Rotation {
    pub fn new(axis: Axis, degrees: f64) -> Self {
        Self { axis, degrees }
    }
}

/// Build the composite rotation+scale matrix for an ordered rotation list.
pub fn transformation_matrix(rotations: &[Rotation], scale: f64) -> Mat3 {
    let mut matrix = Mat3::identity();
    for rotation in rotations {
        let angle = rotation.degrees.to_radians();
        let step = match rotation.axis {
            Axis::X => Mat3::rotation_x(angle),
            Axis::Y => Mat3::rotation_y(angle),
            Axis::Z => Mat3::rotation_z(angle),
        };
        matrix = step * matrix;
    }
    matrix * scale
}

/// The arithmetic mean of a point set; the zero vector when empty.
pub fn centroid(points: &[Vec3]) -> Vec3 {
    let mut center = Vec3::ZERO;
    for point in points {
        center = center + *point;
    }
    if !points.is_empty() {
        center = center / points.len() as f64;
    }
    center
}

/// Apply rotations and scale to every vertex, then recenter the result on
/// its centroid. The input list is not mutated; an empty input yields an
/// empty output.
pub fn transform(vertices: &[Vec3], rotations: &[Rotation], scale: f64) -> Vec<Vec3> {
    let matrix = transformation_matrix(rotations, scale);
    let mut transformed: Vec<Vec3> = vertices.iter().map(|&v| matrix * v).collect();

    let center = centroid(&transformed);
    for vertex in transformed.iter_mut() {
        *vertex = *vertex - center;
    }

    transformed
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spread() -> Vec<Vec3> {
        vec![
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(-1.0, -1.0, -1.0),
        ]
    }

    #[test]
    fn test_empty_input() {
        let out = transform(&[], &[Rotation::new(Axis::X, 45.0)], 100.0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let rotations = [
            Rotation::new(Axis::X, 30.0),
            Rotation::new(Axis::Y, 45.0),
            Rotation::new(Axis::Z, 60.0),
        ];
        let a = transform(&spread(), &rotations, 100.0);
        let b = transform(&spread(), &rotations, 100.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_recentered_centroid_is_origin() {
        let rotations = [Rotation::new(Axis::Y, 17.5), Rotation::new(Axis::Z, 121.0)];
        let out = transform(&spread(), &rotations, 100.0);
        let center = centroid(&out);
        assert_relative_eq!(center.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(center.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(center.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rotation_only_scales_and_recenters() {
        let vertices = vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0)];
        let rotations = [
            Rotation::new(Axis::X, 0.0),
            Rotation::new(Axis::Y, 0.0),
            Rotation::new(Axis::Z, 0.0),
        ];
        let out = transform(&vertices, &rotations, 1.0);
        // Centroid was at (1, 0, 0), so both points shift by -1 on X.
        assert_relative_eq!(out[0].x, -1.0);
        assert_relative_eq!(out[1].x, 1.0);
    }

    #[test]
    fn test_rotation_order_matters() {
        let vertices = vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(-2.0, 0.5, 1.0)];
        let xy = [Rotation::new(Axis::X, 90.0), Rotation::new(Axis::Y, 90.0)];
        let yx = [Rotation::new(Axis::Y, 90.0), Rotation::new(Axis::X, 90.0)];
        assert_ne!(transform(&vertices, &xy, 1.0), transform(&vertices, &yx, 1.0));
    }

    #[test]
    fn test_scale_is_fused() {
        let vertices = vec![Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)];
        let out = transform(&vertices, &[], 100.0);
        assert_relative_eq!(out[1].x - out[0].x, 200.0);
    }
}
