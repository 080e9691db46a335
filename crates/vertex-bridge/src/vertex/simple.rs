use std::mem::offset_of;

use bytemuck::{Pod, Zeroable};

use super::ShaderVertex;
use crate::coords::{ColorRgba, Vec2};

/// Position plus per-vertex colour; the rasterizer interpolates the colour.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct SimpleVertex {
    pub position: [f32; 2],
    pub colour: [f32; 4],
}

impl SimpleVertex {
    #[inline]
    pub const fn new(position: Vec2, colour: ColorRgba) -> Self {
        Self {
            position: position.to_array(),
            colour: colour.to_array(),
        }
    }
}

impl ShaderVertex for SimpleVertex {
    const NAME: &'static str = "SimpleVertex";

    const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x4  // colour
    ];
}

// Compile-time layout guard; a change here breaks every shader using this record.
const _: () = {
    assert!(size_of::<SimpleVertex>() == 24);
    assert!(align_of::<SimpleVertex>() == 4);
    assert!(offset_of!(SimpleVertex, position) == 0);
    assert!(offset_of!(SimpleVertex, colour) == 8);
};
