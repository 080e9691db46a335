//! Fixed-layout vertex records read from [`BufferSlot::Vertices`].
//!
//! Every record is `#[repr(C)]` and `Pod`, built only from `f32` arrays, so
//! its Rust layout has no padding and matches the WGSL vertex inputs byte for
//! byte. A draw binds exactly one record type, chosen by the active shader.
//!
//! [`BufferSlot::Vertices`]: crate::binding::BufferSlot::Vertices

mod simple;
mod textured;

pub use simple::SimpleVertex;
pub use textured::TexVertex;

use bytemuck::Pod;

/// A vertex record with a known GPU-side layout.
pub trait ShaderVertex: Pod {
    /// Human-readable record name used in diagnostics.
    const NAME: &'static str;

    /// Attributes in shader-location order. Offsets equal the Rust field offsets.
    const ATTRIBUTES: &'static [wgpu::VertexAttribute];

    /// Bytes between consecutive records.
    #[inline]
    fn stride() -> wgpu::BufferAddress {
        size_of::<Self>() as wgpu::BufferAddress
    }

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::stride(),
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: Self::ATTRIBUTES,
        }
    }
}
