//! Lighting types for the renderer.

use crate::math::vec3::Vec3;

/// A single point light with per-term intensities.
///
/// One light illuminates the whole render. Its position doubles as the
/// light direction for the flat-shaded illumination models, so it is
/// stored normalized.
#[derive(Clone, Copy, Debug)]
pub struct Light {
    position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::FORWARD,
            ambient: Vec3::ONE,
            diffuse: Vec3::splat(0.8),
            specular: Vec3::splat(0.5),
        }
    }
}

impl Light {
    /// Create a light at the given position with default intensities.
    /// The position is normalized automatically.
    pub fn at(position: Vec3) -> Self {
        Self {
            position: position.normalize(),
            ..Self::default()
        }
    }

    /// The normalized light position/direction.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position.normalize();
    }
}
