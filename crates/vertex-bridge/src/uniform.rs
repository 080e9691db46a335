//! Contents of the viewport-size buffer ([`BufferSlot::ViewportSize`]).
//!
//! [`BufferSlot::ViewportSize`]: crate::binding::BufferSlot::ViewportSize

use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};

/// Viewport size in pixels, as read by the vertex stage.
///
/// Padded to 16 bytes; uniform buffers need 16-byte sized bindings on WebGL.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ViewportUniform {
    pub size: [f32; 2],
    pub _pad: [f32; 2],
}

impl ViewportUniform {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            size: [width, height],
            _pad: [0.0; 2],
        }
    }

    /// `min_binding_size` for the bind group layout entry.
    pub fn min_binding_size() -> NonZeroU64 {
        const SIZE: NonZeroU64 = match NonZeroU64::new(size_of::<ViewportUniform>() as u64) {
            Some(size) => size,
            None => panic!("ViewportUniform is zero-sized"),
        };
        SIZE
    }

    /// Bind group layout entry for the viewport uniform.
    pub fn layout_entry() -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding: crate::binding::BufferSlot::ViewportSize.index(),
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: Some(Self::min_binding_size()),
            },
            count: None,
        }
    }
}
