//! WGSL shaders written against this crate's layouts.
//!
//! Both use `vs_main` / `fs_main` and read the viewport uniform from
//! `@group(0) @binding(1)`. The layout contract is checked in this crate's
//! tests through [`crate::reflect`].

use crate::reflect::ShaderKind;

/// Vertex colour shader; vertex buffer holds [`crate::SimpleVertex`].
pub const SIMPLE_WGSL: &str = include_str!("simple.wgsl");

/// Textured shader; vertex buffer holds [`crate::TexVertex`], base colour
/// texture and sampler in [`crate::binding::TEXTURE_GROUP`].
pub const TEXTURED_WGSL: &str = include_str!("textured.wgsl");

pub const VERTEX_ENTRY_POINT: &str = "vs_main";
pub const FRAGMENT_ENTRY_POINT: &str = "fs_main";

/// Bundled source for a shader kind.
pub const fn source(kind: ShaderKind) -> &'static str {
    match kind {
        ShaderKind::Simple => SIMPLE_WGSL,
        ShaderKind::Textured => TEXTURED_WGSL,
    }
}

/// `ShaderModuleDescriptor` for a bundled shader, ready for `create_shader_module`.
pub fn module_descriptor(kind: ShaderKind) -> wgpu::ShaderModuleDescriptor<'static> {
    wgpu::ShaderModuleDescriptor {
        label: Some(kind.label()),
        source: wgpu::ShaderSource::Wgsl(source(kind).into()),
    }
}
