//! A CPU-based renderer that turns polyhedral OBJ meshes into flat-shaded
//! SVG images.
//!
//! The pipeline is a classic painter's algorithm under parallel
//! projection: vertices are rotated, scaled and recentered, faces are
//! depth-sorted back-to-front, back faces are dropped, an optional
//! near-plane clip splits straddling faces, and each visible face gets a
//! single fill color from one of three illumination models.
//!
//! # Quick Start
//!
//! ```ignore
//! use polysvg::prelude::*;
//!
//! let scene = polysvg::obj::load_scene("cube.obj")?;
//! let options = RenderOptions {
//!     rotations: vec![Rotation::new(Axis::Y, 30.0)],
//!     ..Default::default()
//! };
//! let rendering = render(&scene, &Light::default(), &options)?;
//! let mut file = std::fs::File::create("cube.svg")?;
//! polysvg::svg::write_svg(&mut file, "cube", &rendering)?;
//! ```

// Public API - exposed to library consumers
pub mod clipping;
pub mod edges;
pub mod geometry;
pub mod light;
pub mod material;
pub mod math;
pub mod obj;
pub mod renderer;
pub mod scene;
pub mod shading;
pub mod sorting;
pub mod svg;
pub mod transform;

// Re-export commonly needed types at crate root for convenience
pub use light::Light;
pub use material::Material;
pub use obj::LoadError;
pub use renderer::{render, RenderError, RenderOptions, Rendering};
pub use scene::{Edge, Face, Scene, SceneKind};
pub use shading::Rgb;
pub use transform::{Axis, Rotation};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use polysvg::prelude::*;
/// ```
pub mod prelude {
    // Scene data
    pub use crate::light::Light;
    pub use crate::material::Material;
    pub use crate::scene::{Edge, Face, Scene, SceneKind};

    // Pipeline
    pub use crate::renderer::{
        render, CanvasExtent, Primitives, RenderError, RenderOptions, Rendering, ShadedFace,
    };
    pub use crate::transform::{Axis, Rotation};

    // Math
    pub use crate::math::mat3::Mat3;
    pub use crate::math::vec3::Vec3;
}
