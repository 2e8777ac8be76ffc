//! Text loader for the OBJ/MTL mesh dialect the renderer consumes.
//!
//! Supported OBJ statements: `v`, `l`, `f`, `mtllib`, `usemtl` and `#`
//! comments. Supported MTL statements: `newmtl`, `Ka`, `Kd`, `Ks`, `Ns`,
//! `d`, `illum`. Vertex indices are 1-based and validated against the
//! vertex list once the whole file is read, since faces may legally
//! reference vertices declared later.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use custom_error::custom_error;
use log::warn;

use crate::material::Material;
use crate::math::vec3::Vec3;
use crate::scene::{Edge, Face, Scene};

custom_error! {pub LoadError
    Io {path: String, description: String} = "unable to open {path}: {description}",
    MalformedNumber {path: String, line: usize} = "{path}:{line}: malformed numeric field",
    MissingField {path: String, line: usize} = "{path}:{line}: statement is missing a field",
    BadIndex {path: String, line: usize} = "{path}:{line}: vertex index out of range",
}

/// Load a scene from an OBJ file; any `mtllib` references are resolved
/// relative to the OBJ's directory.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        description: e.to_string(),
    })?;

    let mut scene = Scene::new();
    let mut current_material = String::new();
    let display = path.display().to_string();

    for (line_no, line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&keyword) = tokens.first() else {
            continue;
        };
        if keyword.starts_with('#') {
            continue;
        }

        match keyword {
            "v" => {
                let [x, y, z] = parse_floats(&tokens[1..], &display, line_no)?;
                scene.vertices.push(Vec3::new(x, y, z));
            }
            "l" => {
                let indices = parse_indices(&tokens[1..], &display, line_no)?;
                // A polyline contributes each consecutive segment.
                for pair in indices.windows(2) {
                    scene.edges.push(Edge::new(pair[0], pair[1]));
                }
            }
            "f" => {
                let indices = parse_indices(&tokens[1..], &display, line_no)?;
                let face = Face::new(indices);
                scene
                    .face_materials
                    .insert(face.clone(), current_material.clone());
                scene.faces.push(face);
            }
            "mtllib" => {
                let name = field(&tokens, 1, &display, line_no)?;
                let mtl_path = match path.parent() {
                    Some(dir) => dir.join(name),
                    None => Path::new(name).to_path_buf(),
                };
                match load_materials(&mtl_path) {
                    Ok(materials) => scene.materials.extend(materials),
                    Err(LoadError::Io { path, .. }) => {
                        // A missing material library is not fatal; the
                        // faces shade with the default material.
                        warn!("material library {path} not readable, skipping");
                    }
                    Err(other) => return Err(other),
                }
            }
            "usemtl" => {
                current_material = field(&tokens, 1, &display, line_no)?.to_string();
            }
            _ => {}
        }
    }

    validate_indices(&scene, &display)?;
    Ok(scene)
}

/// Load a material library.
pub fn load_materials(path: impl AsRef<Path>) -> Result<HashMap<String, Material>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        description: e.to_string(),
    })?;
    let display = path.display().to_string();

    let mut materials = HashMap::new();
    let mut material: Option<Material> = None;

    for (line_no, line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&keyword) = tokens.first() else {
            continue;
        };
        if keyword.starts_with('#') {
            continue;
        }

        match keyword {
            "newmtl" => {
                if let Some(done) = material.take() {
                    materials.insert(done.name.clone(), done);
                }
                material = Some(Material::named(field(&tokens, 1, &display, line_no)?));
            }
            "Ka" | "Kd" | "Ks" => {
                let [r, g, b] = parse_floats(&tokens[1..], &display, line_no)?;
                if let Some(material) = material.as_mut() {
                    let slot = match keyword {
                        "Ka" => &mut material.ambient,
                        "Kd" => &mut material.diffuse,
                        _ => &mut material.specular,
                    };
                    *slot = Vec3::new(r, g, b);
                }
            }
            "Ns" => {
                if let Some(material) = material.as_mut() {
                    material.shininess = parse_float(field(&tokens, 1, &display, line_no)?)
                        .ok_or_else(|| malformed(&display, line_no))?;
                }
            }
            "d" => {
                if let Some(material) = material.as_mut() {
                    material.opacity = parse_float(field(&tokens, 1, &display, line_no)?)
                        .ok_or_else(|| malformed(&display, line_no))?;
                }
            }
            "illum" => {
                if let Some(material) = material.as_mut() {
                    material.illum = field(&tokens, 1, &display, line_no)?
                        .parse()
                        .map_err(|_| malformed(&display, line_no))?;
                }
            }
            _ => {}
        }
    }

    if let Some(done) = material.take() {
        materials.insert(done.name.clone(), done);
    }
    Ok(materials)
}

fn malformed(path: &str, line: usize) -> LoadError {
    LoadError::MalformedNumber {
        path: path.to_string(),
        line,
    }
}

fn field<'a>(tokens: &[&'a str], index: usize, path: &str, line: usize) -> Result<&'a str, LoadError> {
    tokens.get(index).copied().ok_or(LoadError::MissingField {
        path: path.to_string(),
        line,
    })
}

fn parse_float(token: &str) -> Option<f64> {
    token.parse().ok()
}

fn parse_floats(tokens: &[&str], path: &str, line: usize) -> Result<[f64; 3], LoadError> {
    if tokens.len() < 3 {
        return Err(LoadError::MissingField {
            path: path.to_string(),
            line,
        });
    }
    let mut out = [0.0; 3];
    for (slot, token) in out.iter_mut().zip(tokens.iter().copied()) {
        *slot = parse_float(token).ok_or_else(|| malformed(path, line))?;
    }
    Ok(out)
}

fn parse_indices(tokens: &[&str], path: &str, line: usize) -> Result<Vec<usize>, LoadError> {
    let mut indices = Vec::with_capacity(tokens.len());
    for &token in tokens {
        // Tolerate `f v/vt/vn` forms by reading the position index.
        let position = token.split('/').next().unwrap_or(token);
        let index: usize = position.parse().map_err(|_| malformed(path, line))?;
        if index == 0 {
            return Err(LoadError::BadIndex {
                path: path.to_string(),
                line,
            });
        }
        indices.push(index);
    }
    Ok(indices)
}

/// Every face and edge index must resolve into the vertex list.
fn validate_indices(scene: &Scene, path: &str) -> Result<(), LoadError> {
    let count = scene.vertices.len();
    let face_indices = scene.faces.iter().flat_map(|f| f.indices().iter().copied());
    let edge_indices = scene.edges.iter().flat_map(|e| [e.lo(), e.hi()]);
    for index in face_indices.chain(edge_indices) {
        if index > count {
            return Err(LoadError::BadIndex {
                path: path.to_string(),
                line: 0,
            });
        }
    }
    Ok(())
}
