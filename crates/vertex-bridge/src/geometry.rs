//! Ready-made vertex lists for the two bundled shaders.
//!
//! Positions are pixels with the origin at the viewport centre and +Y up.
//! Both lists are non-indexed triangle lists wound clockwise; see [`FRONT_FACE`].

use crate::coords::{ColorRgba, Vec2};
use crate::vertex::{SimpleVertex, TexVertex};

/// Winding of every list produced here.
pub const FRONT_FACE: wgpu::FrontFace = wgpu::FrontFace::Cw;

/// Default half-size of the canonical shapes, in pixels.
pub const DEFAULT_HALF_EXTENT: f32 = 250.0;

/// One triangle with a red, green, and blue corner.
pub fn triangle() -> [SimpleVertex; 3] {
    triangle_with_extent(DEFAULT_HALF_EXTENT)
}

/// Same as [`triangle`], scaled so its bounding box is `[-h, h]²`.
pub fn triangle_with_extent(h: f32) -> [SimpleVertex; 3] {
    [
        SimpleVertex::new(Vec2::new(h, -h), ColorRgba::RED),
        SimpleVertex::new(Vec2::new(-h, -h), ColorRgba::GREEN),
        SimpleVertex::new(Vec2::new(0.0, h), ColorRgba::BLUE),
    ]
}

/// Quad covering `[-h, h]²` as two triangles, the image upright on screen.
///
/// Texture `v` grows downward while position `y` grows upward, so the top
/// edge of the quad samples `v = 0`.
pub fn textured_quad(h: f32) -> [TexVertex; 6] {
    let (l, r, b, t) = (-h, h, -h, h);
    [
        TexVertex::new(Vec2::new(r, b), Vec2::new(1.0, 1.0)),
        TexVertex::new(Vec2::new(l, b), Vec2::new(0.0, 1.0)),
        TexVertex::new(Vec2::new(l, t), Vec2::new(0.0, 0.0)),
        TexVertex::new(Vec2::new(r, b), Vec2::new(1.0, 1.0)),
        TexVertex::new(Vec2::new(l, t), Vec2::new(0.0, 0.0)),
        TexVertex::new(Vec2::new(r, t), Vec2::new(1.0, 0.0)),
    ]
}

/// Signed doubled area of a triangle; negative means clockwise with +Y up.
fn doubled_area(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> f32 {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

/// True if every triangle in a position list winds as [`FRONT_FACE`].
///
/// Degenerate (zero-area) triangles count as not front-facing. A list that is
/// empty or not a whole number of triangles returns `false`.
pub fn is_front_facing(positions: &[[f32; 2]]) -> bool {
    if positions.is_empty() || positions.len() % 3 != 0 {
        return false;
    }
    positions
        .chunks_exact(3)
        .all(|t| doubled_area(t[0], t[1], t[2]) < 0.0)
}
