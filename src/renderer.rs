//! Pipeline orchestration.
//!
//! [`render`] runs the full chain: transform → (optional clip) → depth
//! order → facing test → shade, and hands back everything the markup
//! writer needs: the transformed vertices, the back-to-front primitive
//! list and the computed canvas extent. Failures local to a single face
//! (degenerate geometry, unresolved materials) are skipped and logged;
//! only scene-level structural problems abort the render.

use std::collections::HashMap;

use custom_error::custom_error;
use log::{debug, info, warn};

use crate::clipping::clip_faces;
use crate::edges::dedup_edges;
use crate::geometry::{face_normal, front_facing};
use crate::light::Light;
use crate::material::Material;
use crate::math::vec3::Vec3;
use crate::scene::{Face, Scene, SceneKind};
use crate::shading::{shade, Rgb};
use crate::sorting::depth_order;
use crate::transform::{transform, Rotation};

custom_error! {pub RenderError
    NoFaces = "face rendering requested but the scene contains no faces",
    NoEdges = "edge rendering requested but the scene contains no edges",
}

/// Knobs for one render pass.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Ordered rotation steps applied before scaling.
    pub rotations: Vec<Rotation>,
    /// Uniform scale fused into the rotation matrix.
    pub scale: f64,
    /// Render back-facing polygons too.
    pub back_faces: bool,
    /// Stroke opacity carried through to every emitted primitive.
    pub stroke_opacity: f64,
    /// Observer distance; when set, faces are clipped against the plane
    /// a fixed setback in front of the observer.
    pub observer_distance: Option<f64>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            rotations: Vec::new(),
            scale: 100.0,
            back_faces: false,
            stroke_opacity: 1.0,
            observer_distance: None,
        }
    }
}

/// Output image dimensions, derived from the transformed geometry.
///
/// Always an explicit value threaded to the writer, never process-wide
/// state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasExtent {
    pub width: u32,
    pub height: u32,
}

impl CanvasExtent {
    /// Fallback when there is no geometry to measure.
    pub const DEFAULT: Self = Self {
        width: 10_000,
        height: 10_000,
    };

    /// Side length for a maximum absolute excursion `m`: twice the
    /// excursion plus a margin that levels off at 100 units.
    fn side(excursion: f64) -> u32 {
        (2.0 * excursion + 100.0 * (1.0 - 2f64.powf(excursion / -100.0))) as u32
    }

    /// Fit the canvas to the maximum |X| and |Y| excursions of the
    /// vertex set.
    pub fn from_vertices(vertices: &[Vec3]) -> Self {
        if vertices.is_empty() {
            return Self::DEFAULT;
        }
        let max_x = vertices.iter().map(|v| v.x.abs()).fold(0.0, f64::max);
        let max_y = vertices.iter().map(|v| v.y.abs()).fold(0.0, f64::max);
        Self {
            width: Self::side(max_x),
            height: Self::side(max_y),
        }
    }
}

/// A face ready to be stringified as a filled 2D path.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadedFace {
    pub face: Face,
    pub fill: Rgb,
    pub fill_opacity: f64,
    pub stroke_opacity: f64,
}

/// A wireframe line segment with resolved endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSegment {
    pub a: Vec3,
    pub b: Vec3,
    pub stroke_opacity: f64,
}

/// The primitives of one render, matching the scene's declared kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitives {
    /// Filled faces in back-to-front draw order.
    Faces(Vec<ShadedFace>),
    Edges(Vec<EdgeSegment>),
}

/// Everything the markup writer consumes.
#[derive(Clone, Debug)]
pub struct Rendering {
    pub extent: CanvasExtent,
    /// Transformed vertices; face indices resolve into this list.
    pub vertices: Vec<Vec3>,
    pub primitives: Primitives,
}

/// Resolve a face's material, falling back to the default on any miss.
fn resolve_material(
    face: &Face,
    face_materials: &HashMap<Face, String>,
    materials: &HashMap<String, Material>,
) -> Material {
    match face_materials.get(face) {
        Some(name) => match materials.get(name) {
            Some(material) => material.clone(),
            None => {
                if !name.is_empty() {
                    warn!("material {name:?} not found, using the default material");
                }
                Material::default()
            }
        },
        None => {
            debug!("face has no material binding, using the default material");
            Material::default()
        }
    }
}

/// Run the pipeline over a scene.
pub fn render(
    scene: &Scene,
    light: &Light,
    options: &RenderOptions,
) -> Result<Rendering, RenderError> {
    match scene.kind {
        SceneKind::Face => {
            if scene.faces.is_empty() {
                return Err(RenderError::NoFaces);
            }
            render_faces(scene, light, options)
        }
        SceneKind::Edge => {
            if scene.edges.is_empty() {
                return Err(RenderError::NoEdges);
            }
            render_edges(scene, options)
        }
    }
}

fn render_faces(
    scene: &Scene,
    light: &Light,
    options: &RenderOptions,
) -> Result<Rendering, RenderError> {
    info!("transforming {} vertices", scene.vertices.len());
    let mut vertices = transform(&scene.vertices, &options.rotations, options.scale);

    let mut faces = scene.faces.clone();
    let mut face_materials = scene.face_materials.clone();
    if let Some(observer) = options.observer_distance {
        let before = vertices.len();
        let (clipped, materials) = clip_faces(&faces, &mut vertices, observer, &face_materials);
        info!(
            "clipping kept {} of {} faces, appended {} vertices",
            clipped.len(),
            faces.len(),
            vertices.len() - before
        );
        faces = clipped;
        face_materials = materials;
    }

    let order = depth_order(&faces, &vertices);
    info!(
        "sorted {} faces over {} vertices back-to-front",
        order.len(),
        vertices.len()
    );

    let mut shaded = Vec::with_capacity(order.len());
    for &(_, face_index) in &order {
        let face = &faces[face_index];
        let material = resolve_material(face, &face_materials, &scene.materials);

        let normal = face_normal(face, &vertices);
        if normal == Vec3::ZERO {
            debug!("skipping degenerate face {face_index}");
            continue;
        }
        if options.back_faces || front_facing(normal) {
            let fill = shade(light, &material, normal.normalize());
            shaded.push(ShadedFace {
                face: face.clone(),
                fill,
                fill_opacity: material.opacity,
                stroke_opacity: options.stroke_opacity,
            });
        }
    }

    Ok(Rendering {
        extent: CanvasExtent::from_vertices(&vertices),
        vertices,
        primitives: Primitives::Faces(shaded),
    })
}

fn render_edges(scene: &Scene, options: &RenderOptions) -> Result<Rendering, RenderError> {
    info!("transforming {} vertices", scene.vertices.len());
    let vertices = transform(&scene.vertices, &options.rotations, options.scale);

    let edges = dedup_edges(&scene.edges);
    info!("deduplicated {} edges down to {}", scene.edges.len(), edges.len());

    let segments = edges
        .iter()
        .map(|edge| EdgeSegment {
            a: vertices[edge.lo() - 1],
            b: vertices[edge.hi() - 1],
            stroke_opacity: options.stroke_opacity,
        })
        .collect();

    Ok(Rendering {
        extent: CanvasExtent::from_vertices(&vertices),
        vertices,
        primitives: Primitives::Edges(segments),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Edge;
    use approx::assert_relative_eq;

    fn single_triangle_scene() -> Scene {
        let mut scene = Scene::new();
        scene.vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        scene.faces = vec![Face::new(vec![1, 2, 3])];
        scene
    }

    /// Axis-centered unit cube as 6 quads, all wound front-facing
    /// outward.
    fn cube_scene() -> Scene {
        let mut scene = Scene::new();
        scene.vertices = vec![
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(-1.0, 1.0, 1.0),
            Vec3::new(-1.0, -1.0, 1.0),
        ];
        scene.faces = vec![
            Face::new(vec![1, 2, 3, 4]), // z = -1
            Face::new(vec![4, 3, 5, 6]), // x = +1
            Face::new(vec![6, 5, 7, 8]), // z = +1
            Face::new(vec![8, 7, 2, 1]), // x = -1
            Face::new(vec![2, 7, 5, 3]), // y = +1
            Face::new(vec![6, 8, 1, 4]), // y = -1
        ];
        scene
    }

    #[test]
    fn test_single_triangle_scenario() {
        let scene = single_triangle_scene();
        let options = RenderOptions::default();
        let rendering = render(&scene, &Light::default(), &options).unwrap();

        let faces = match rendering.primitives {
            Primitives::Faces(f) => f,
            Primitives::Edges(_) => panic!("expected face primitives"),
        };
        assert_eq!(faces.len(), 1);
        // Default material, illum 0, light head-on: 255 * 0.8 red.
        assert_eq!(faces[0].fill, Rgb::new(204, 0, 0));
        assert_relative_eq!(faces[0].fill_opacity, 1.0);

        let normal = face_normal(&faces[0].face, &rendering.vertices);
        assert!(normal.z > 0.0);
    }

    #[test]
    fn test_cube_unrotated() {
        let scene = cube_scene();
        let options = RenderOptions {
            scale: 1.0,
            back_faces: true,
            ..Default::default()
        };
        let rendering = render(&scene, &Light::default(), &options).unwrap();

        // Already axis-centered: recentering leaves the vertex set alone.
        for (got, want) in rendering.vertices.iter().zip(&scene.vertices) {
            assert_relative_eq!(got.x, want.x, epsilon = 1e-12);
            assert_relative_eq!(got.y, want.y, epsilon = 1e-12);
            assert_relative_eq!(got.z, want.z, epsilon = 1e-12);
        }

        let faces = match rendering.primitives {
            Primitives::Faces(f) => f,
            Primitives::Edges(_) => panic!("expected face primitives"),
        };
        // All 6 faces retained, front face (mean z = -1) first, back
        // face (mean z = +1) last, equal-depth sides in declaration
        // order between them.
        assert_eq!(faces.len(), 6);
        assert_eq!(faces[0].face, scene.faces[0]);
        assert_eq!(faces[5].face, scene.faces[2]);
        assert_eq!(faces[1].face, scene.faces[1]);
        assert_eq!(faces[4].face, scene.faces[5]);
    }

    #[test]
    fn test_backface_culling_default() {
        let scene = cube_scene();
        let options = RenderOptions {
            scale: 1.0,
            ..Default::default()
        };
        let rendering = render(&scene, &Light::default(), &options).unwrap();
        let faces = match rendering.primitives {
            Primitives::Faces(f) => f,
            Primitives::Edges(_) => panic!("expected face primitives"),
        };
        // Only the back quad (z = +1) has a normal along +Z; the four
        // side faces have zero Z component and the front quad faces away.
        assert_eq!(faces.len(), 1);
        assert_eq!(faces[0].face, scene.faces[2]);
    }

    #[test]
    fn test_missing_faces_is_fatal() {
        let scene = Scene::new();
        let result = render(&scene, &Light::default(), &RenderOptions::default());
        assert!(matches!(result, Err(RenderError::NoFaces)));
    }

    #[test]
    fn test_missing_edges_is_fatal() {
        let mut scene = Scene::new();
        scene.kind = SceneKind::Edge;
        let result = render(&scene, &Light::default(), &RenderOptions::default());
        assert!(matches!(result, Err(RenderError::NoEdges)));
    }

    #[test]
    fn test_unresolved_material_falls_back_to_default() {
        let mut scene = single_triangle_scene();
        scene
            .face_materials
            .insert(scene.faces[0].clone(), "nonexistent".to_string());
        let rendering =
            render(&scene, &Light::default(), &RenderOptions::default()).unwrap();
        let faces = match rendering.primitives {
            Primitives::Faces(f) => f,
            Primitives::Edges(_) => panic!("expected face primitives"),
        };
        // Default material shading, not a crash.
        assert_eq!(faces[0].fill, Rgb::new(204, 0, 0));
    }

    #[test]
    fn test_clipping_inherits_material() {
        let mut scene = single_triangle_scene();
        let mut red = Material::named("red");
        red.diffuse = Vec3::new(0.0, 1.0, 0.0);
        scene.materials.insert("red".to_string(), red);
        scene
            .face_materials
            .insert(scene.faces[0].clone(), "red".to_string());

        // Tilt the triangle so one corner pokes past the clipping plane
        // at z = 20 (observer 420, setback 400).
        let options = RenderOptions {
            rotations: vec![Rotation::new(crate::transform::Axis::X, 45.0)],
            observer_distance: Some(420.0),
            ..Default::default()
        };
        let rendering = render(&scene, &Light::default(), &options).unwrap();
        let faces = match rendering.primitives {
            Primitives::Faces(f) => f,
            Primitives::Edges(_) => panic!("expected face primitives"),
        };
        // The fragment still shades with the bound material (green
        // diffuse, so a zero red channel), proving the binding survived
        // the key change through clipping.
        assert_eq!(faces.len(), 1);
        assert_eq!(faces[0].fill.r, 0);
        assert!(faces[0].face.len() > 3);
    }

    #[test]
    fn test_edge_path_resolves_segments() {
        let mut scene = Scene::new();
        scene.kind = SceneKind::Edge;
        scene.vertices = vec![
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        scene.edges = vec![Edge::new(1, 2), Edge::new(2, 1), Edge::new(2, 3)];
        let options = RenderOptions {
            scale: 1.0,
            ..Default::default()
        };
        let rendering = render(&scene, &Light::default(), &options).unwrap();
        let segments = match rendering.primitives {
            Primitives::Edges(s) => s,
            Primitives::Faces(_) => panic!("expected edge primitives"),
        };
        assert_eq!(segments.len(), 2);
        assert_relative_eq!(segments[0].b.x - segments[0].a.x, 2.0);
    }

    #[test]
    fn test_extent_default_without_vertices() {
        assert_eq!(CanvasExtent::from_vertices(&[]), CanvasExtent::DEFAULT);
    }

    #[test]
    fn test_extent_tracks_excursion() {
        let vertices = vec![Vec3::new(-200.0, 50.0, 0.0), Vec3::new(100.0, -50.0, 0.0)];
        let extent = CanvasExtent::from_vertices(&vertices);
        // width = 2*200 + 100*(1 - 2^-2) = 475
        assert_eq!(extent.width, 475);
        // height = 2*50 + 100*(1 - 2^-0.5) ~ 129.28
        assert_eq!(extent.height, 129);
    }
}
