//! Flat-shading illumination models.
//!
//! Each visible face gets a single fill color from one of three models
//! selected by its material's `illum` number: diffuse only (0), ambient +
//! diffuse (1), or ambient + diffuse + specular with a half-vector
//! highlight (2). Any other selector leaves the color pure white.
//!
//! The two composite models clamp differently on purpose: illum 1 sums
//! the raw reflectance terms before clamping, while illum 2 sums the
//! already-clamped per-term colors. That asymmetry is inherited behavior
//! and is kept as-is.

use crate::light::Light;
use crate::material::Material;
use crate::math::vec3::Vec3;

const WHITE: Vec3 = Vec3::splat(255.0);

/// An 8-bit RGB fill color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Clamp each channel into `[0, 255]`.
fn clamp_channels(color: Vec3) -> Vec3 {
    Vec3::new(
        color.x.clamp(0.0, 255.0),
        color.y.clamp(0.0, 255.0),
        color.z.clamp(0.0, 255.0),
    )
}

/// Truncate clamped channels toward zero to byte values.
fn floor_to_rgb(color: Vec3) -> Rgb {
    Rgb::new(
        color.x.trunc() as u8,
        color.y.trunc() as u8,
        color.z.trunc() as u8,
    )
}

/// The half vector between the light direction and the surface normal.
fn half_vector(a: Vec3, b: Vec3) -> Vec3 {
    (a + b).normalize()
}

/// Evaluate a face's fill color.
///
/// `normal` must already be normalized; the caller normalizes it only
/// after the face passed the facing test.
pub fn shade(light: &Light, material: &Material, normal: Vec3) -> Rgb {
    let light_dir = light.position();
    let color = match material.illum {
        0 => {
            let diffuse =
                light.diffuse.hadamard(material.diffuse) * normal.dot(light_dir);
            clamp_channels(WHITE.hadamard(diffuse))
        }
        1 => {
            let ambient = light.ambient.hadamard(material.ambient);
            let diffuse =
                light.diffuse.hadamard(material.diffuse) * normal.dot(light_dir);
            // Raw reflectance sum, no white scaling before the clamp.
            clamp_channels(ambient + diffuse)
        }
        2 => {
            let ambient = light.ambient.hadamard(material.ambient);
            let ambient_color = clamp_channels(WHITE.hadamard(ambient));

            let diffuse =
                light.diffuse.hadamard(material.diffuse) * normal.dot(light_dir);
            let diffuse_color = clamp_channels(WHITE.hadamard(diffuse));

            let half = half_vector(light_dir, normal);
            let specular = light.specular.hadamard(material.specular)
                * normal.dot(half).powf(material.shininess);
            let specular_color = clamp_channels(WHITE.hadamard(specular));

            clamp_channels(ambient_color + diffuse_color + specular_color)
        }
        _ => WHITE,
    };
    floor_to_rgb(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facing_light() -> (Light, Vec3) {
        // Light and normal both along +Z: n.L == 1.
        (Light::default(), Vec3::FORWARD)
    }

    #[test]
    fn test_illum0_diffuse_only() {
        let (light, normal) = facing_light();
        let material = Material::default();
        // 255 * 0.8 * 1.0 on red, zero diffuse reflectance on green/blue.
        assert_eq!(shade(&light, &material, normal), Rgb::new(204, 0, 0));
    }

    #[test]
    fn test_illum0_clamps_negative_to_black() {
        let light = Light::default();
        let material = Material::default();
        let normal = -Vec3::FORWARD;
        assert_eq!(shade(&light, &material, normal), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_illum1_sums_raw_terms() {
        let (light, normal) = facing_light();
        let mut material = Material::default();
        material.illum = 1;
        // ambient = 1*0.2, diffuse = 0.8*(1,0,0); the raw sum (1.0, 0.2,
        // 0.2) is truncated without white scaling.
        assert_eq!(shade(&light, &material, normal), Rgb::new(1, 0, 0));
    }

    #[test]
    fn test_illum2_sums_clamped_terms() {
        let (light, normal) = facing_light();
        let mut material = Material::default();
        material.illum = 2;
        // ambient 51 + diffuse 204 + specular 38.25 per red channel,
        // clamped to 255; green/blue get ambient + specular only.
        assert_eq!(shade(&light, &material, normal), Rgb::new(255, 89, 89));
    }

    #[test]
    fn test_unknown_illum_is_white() {
        let (light, normal) = facing_light();
        let mut material = Material::default();
        material.illum = 7;
        assert_eq!(shade(&light, &material, normal), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_out_of_range_reflectance_is_clamped() {
        let (light, normal) = facing_light();
        let mut material = Material::default();
        material.diffuse = Vec3::new(4.0, -3.0, 1.0);
        // 4.0*0.8 overshoots to 255, -3.0*0.8 undershoots to 0.
        assert_eq!(shade(&light, &material, normal), Rgb::new(255, 0, 204));
    }
}
