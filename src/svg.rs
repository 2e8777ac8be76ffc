//! SVG markup emission.
//!
//! Turns a [`Rendering`] into SVG 1.0 markup: one `<path>` per shaded
//! face (already in back-to-front order, so document order is draw
//! order) or one `<line>` per wireframe segment. Coordinates are shifted
//! so the object centroid lands at the canvas center. Face Y coordinates
//! are flipped to SVG's downward axis; line Y coordinates are not, which
//! mirrors the reference output exactly.

use std::io::{self, Write};

use crate::math::vec3::Vec3;
use crate::renderer::{CanvasExtent, EdgeSegment, Primitives, Rendering, ShadedFace};
use crate::shading::Rgb;

fn fill_string(fill: Rgb) -> String {
    format!("rgb({},{},{})", fill.r, fill.g, fill.b)
}

fn write_header<W: Write>(out: &mut W, extent: CanvasExtent, title: &str) -> io::Result<()> {
    writeln!(out, "<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>")?;
    writeln!(out, "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.0//EN\"")?;
    writeln!(
        out,
        " \"http://www.w3.org/TR/2001/REC-SVG-20010904/DTD/svg10.dtd\">"
    )?;
    writeln!(
        out,
        "<svg width=\"{}\" height=\"{}\"",
        extent.width, extent.height
    )?;
    writeln!(
        out,
        "xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink= \"http://www.w3.org/1999/xlink\">"
    )?;
    writeln!(out, "<title>{title}</title>")
}

fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "</svg>")
}

fn write_face<W: Write>(
    out: &mut W,
    extent: CanvasExtent,
    shaded: &ShadedFace,
    points: &[Vec3],
) -> io::Result<()> {
    let delta_x = f64::from(extent.width / 2);
    let delta_y = f64::from(extent.height / 2);

    let mut d = String::new();
    for (i, point) in shaded.face.points(points).enumerate() {
        let command = if i == 0 { "M" } else { "L" };
        let x = delta_x + point.x;
        let y = delta_y - point.y;
        d.push_str(&format!("{command} {x:.6} {y:.6} "));
    }

    writeln!(
        out,
        "<path d=\"{d}Z\" style=\"stroke:rgb(0,0,0);stroke-width:1;\
         stroke-linejoin:round;stroke-opacity:{:.6};fill:{};fill-opacity:{:.6}\" />",
        shaded.stroke_opacity,
        fill_string(shaded.fill),
        shaded.fill_opacity,
    )
}

fn write_line<W: Write>(out: &mut W, extent: CanvasExtent, segment: &EdgeSegment) -> io::Result<()> {
    let delta_x = f64::from(extent.width / 2);
    let delta_y = f64::from(extent.height / 2);

    writeln!(
        out,
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" \
         style=\"stroke:rgb(0,0,0);stroke-width:2;stroke-opacity:{:.6};stroke-linecap:round;\" />",
        delta_x + segment.a.x,
        delta_y + segment.a.y,
        delta_x + segment.b.x,
        delta_y + segment.b.y,
        segment.stroke_opacity,
    )
}

/// Write a complete SVG document for one rendering.
pub fn write_svg<W: Write>(out: &mut W, title: &str, rendering: &Rendering) -> io::Result<()> {
    write_header(out, rendering.extent, title)?;
    match &rendering.primitives {
        Primitives::Faces(faces) => {
            for shaded in faces {
                write_face(out, rendering.extent, shaded, &rendering.vertices)?;
            }
        }
        Primitives::Edges(segments) => {
            for segment in segments {
                write_line(out, rendering.extent, segment)?;
            }
        }
    }
    write_footer(out)
}
