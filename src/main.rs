use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::process::ExitCode;

use log::{error, info};

use polysvg::math::vec3::Vec3;
use polysvg::prelude::*;

/// Parsed command line: mesh path and one rotation angle per axis.
struct Args {
    mesh_path: String,
    rotations: Vec<Rotation>,
}

fn parse_args(mut argv: std::env::Args) -> Option<Args> {
    let _program = argv.next();
    let mesh_path = argv.next()?;
    let mut rotations = Vec::with_capacity(3);
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let degrees: f64 = argv.next()?.parse().ok()?;
        rotations.push(Rotation::new(axis, degrees));
    }
    if argv.next().is_some() {
        return None;
    }
    Some(Args {
        mesh_path,
        rotations,
    })
}

fn run(args: Args) -> Result<(), String> {
    let scene = polysvg::obj::load_scene(&args.mesh_path).map_err(|e| e.to_string())?;

    let light = Light::at(Vec3::new(0.0, 0.0, 2.0));
    let options = RenderOptions {
        rotations: args.rotations,
        ..Default::default()
    };
    let rendering = render(&scene, &light, &options).map_err(|e| e.to_string())?;

    let stem = Path::new(&args.mesh_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("out");
    let output_path = format!("{stem}.svg");

    let file = File::create(&output_path).map_err(|e| e.to_string())?;
    polysvg::svg::write_svg(&mut BufWriter::new(file), stem, &rendering)
        .map_err(|e| e.to_string())?;

    info!("wrote {output_path}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(args) = parse_args(std::env::args()) else {
        eprintln!("usage: polysvg <mesh.obj> <xdeg> <ydeg> <zdeg>");
        return ExitCode::FAILURE;
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            eprintln!("polysvg: {message}");
            ExitCode::FAILURE
        }
    }
}
