use std::mem::offset_of;

use bytemuck::{Pod, Zeroable};

use super::ShaderVertex;
use crate::coords::Vec2;

/// Position plus texture coordinate.
///
/// `tex_coords` are normalized: `(0, 0)` is the image's top-left texel
/// corner, `(1, 1)` its bottom-right.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct TexVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
}

impl TexVertex {
    #[inline]
    pub const fn new(position: Vec2, tex_coords: Vec2) -> Self {
        Self {
            position: position.to_array(),
            tex_coords: tex_coords.to_array(),
        }
    }
}

impl ShaderVertex for TexVertex {
    const NAME: &'static str = "TexVertex";

    const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x2  // tex_coords
    ];
}

const _: () = {
    assert!(size_of::<TexVertex>() == 16);
    assert!(align_of::<TexVertex>() == 4);
    assert!(offset_of!(TexVertex, position) == 0);
    assert!(offset_of!(TexVertex, tex_coords) == 8);
};
