//! Surface materials in the MTL reflectance model.

use crate::math::vec3::Vec3;

/// Per-face surface reflectance properties.
///
/// Reflectance triples are conceptually in `[0, 1]` but are kept exactly as
/// parsed, unclamped; the shader clamps only the final color. The `illum`
/// field selects the illumination model (see [`crate::shading::shade`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub name: String,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f64,
    pub opacity: f64,
    pub illum: i32,
}

impl Default for Material {
    /// The fallback used when a face references no material or an
    /// unknown one: matte red, diffuse-only.
    fn default() -> Self {
        Self {
            name: String::new(),
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::new(1.0, 0.0, 0.0),
            specular: Vec3::splat(0.3),
            shininess: 0.0,
            opacity: 1.0,
            illum: 0,
        }
    }
}

impl Material {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
