//! Vertex bridge crate.
//!
//! This crate owns the memory-layout contract shared between application code
//! and shader programs: buffer binding indices, fixed-layout vertex records,
//! and the viewport uniform. It also ships WGSL shaders written against that
//! contract and a checker that parses any WGSL source and verifies it agrees
//! with the Rust-side layouts.

pub mod binding;
pub mod bytes;
pub mod coords;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod reflect;
pub mod shaders;
pub mod uniform;
pub mod vertex;

pub use binding::{BufferSlot, TextureSlot};
pub use error::ContractError;
pub use uniform::ViewportUniform;
pub use vertex::{ShaderVertex, SimpleVertex, TexVertex};
