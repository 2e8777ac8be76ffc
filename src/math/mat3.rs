//! 3x3 transformation matrix for rotation and uniform scaling.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat3 * Vec3`
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//! - Rotations are standard right-handed about each axis

use std::ops::Mul;

use super::vec3::Vec3;

/// 3x3 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    data: [[f64; 3]; 3],
}

impl Mat3 {
    pub fn new(data: [[f64; 3]; 3]) -> Self {
        Mat3 { data }
    }

    pub fn identity() -> Self {
        Mat3::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Creates a rotation matrix around the X axis (angle in radians).
    pub fn rotation_x(angle: f64) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat3::new([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    /// Creates a rotation matrix around the Y axis (angle in radians).
    pub fn rotation_y(angle: f64) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat3::new([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    /// Creates a rotation matrix around the Z axis (angle in radians).
    pub fn rotation_z(angle: f64) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat3::new([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }
}

/// Matrix-matrix multiplication.
impl Mul<Mat3> for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Self::Output {
        let mut data = [[0.0; 3]; 3];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.data[i][k] * rhs.data[k][j]).sum();
            }
        }
        Mat3::new(data)
    }
}

/// Matrix-vector multiplication (column vector on the right).
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Self::Output {
        let m = &self.data;
        Vec3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }
}

/// Uniform scaling of every matrix element.
impl Mul<f64> for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: f64) -> Self::Output {
        let mut data = self.data;
        for row in data.iter_mut() {
            for cell in row.iter_mut() {
                *cell *= rhs;
            }
        }
        Mat3::new(data)
    }
}
