//! Error type for layout and shader contract failures.

use thiserror::Error;

/// Any way the CPU-side layout and a byte buffer or shader can disagree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractError {
    #[error("unknown buffer slot index {0}")]
    UnknownSlot(u32),

    #[error("unknown texture slot index {0}")]
    UnknownTextureSlot(u32),

    #[error("{len} bytes is not a whole number of {vertex} records ({stride} bytes each)")]
    ByteLength {
        vertex: &'static str,
        len: usize,
        stride: usize,
    },

    #[error("byte buffer is not aligned for {vertex} (needs {align}-byte alignment)")]
    Misaligned { vertex: &'static str, align: usize },

    #[error("WGSL parse error: {0}")]
    ShaderParse(String),

    #[error("WGSL validation error: {0}")]
    ShaderValidation(String),

    #[error("vertex entry point '{0}' not found")]
    MissingEntryPoint(String),

    #[error("{vertex} location {location}: shader declares {found}, layout has {expected:?}")]
    AttributeMismatch {
        vertex: &'static str,
        location: u32,
        expected: wgpu::VertexFormat,
        found: String,
    },

    #[error("{vertex} location {location} ({expected:?}) is not read by the shader")]
    MissingAttribute {
        vertex: &'static str,
        location: u32,
        expected: wgpu::VertexFormat,
    },

    #[error("shader reads location {location}, which {vertex} does not provide")]
    UnexpectedAttribute { vertex: &'static str, location: u32 },

    #[error("no {what} bound at @group({group}) @binding({binding})")]
    MissingBinding {
        what: &'static str,
        group: u32,
        binding: u32,
    },

    #[error("viewport uniform is {found} bytes in the shader, {expected} bytes on the CPU side")]
    UniformSize { expected: u32, found: u32 },

    #[error("viewport uniform layout: {0}")]
    UniformLayout(String),
}
