//! Binding indices shared between shader code and the calls that bind buffers.
//!
//! These numbers are a contract across two compilation units: the WGSL
//! `@binding`/vertex-buffer declarations and the Rust code that issues
//! `set_vertex_buffer` / bind group entries. Nothing but [`crate::reflect`]
//! checks them, so never renumber a variant.
//!
//! wgpu mapping:
//! - [`BufferSlot::Vertices`] is the vertex-buffer slot passed to `set_vertex_buffer`.
//! - [`BufferSlot::ViewportSize`] is the `@binding` of the viewport uniform in
//!   [`VIEWPORT_GROUP`].
//! - [`TextureSlot`] variants are `@binding`s in [`TEXTURE_GROUP`].

use std::fmt;

use crate::error::ContractError;

/// Bind group holding the viewport uniform.
pub const VIEWPORT_GROUP: u32 = 0;

/// Bind group holding the textured shader's image and sampler.
pub const TEXTURE_GROUP: u32 = 1;

/// Buffer input slots of the vertex stage.
#[repr(u32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BufferSlot {
    Vertices = 0,
    ViewportSize = 1,
}

impl BufferSlot {
    pub const ALL: [BufferSlot; 2] = [BufferSlot::Vertices, BufferSlot::ViewportSize];

    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }

    pub const fn label(self) -> &'static str {
        match self {
            BufferSlot::Vertices => "vertices",
            BufferSlot::ViewportSize => "viewport size",
        }
    }
}

impl TryFrom<u32> for BufferSlot {
    type Error = ContractError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.index() == index)
            .ok_or(ContractError::UnknownSlot(index))
    }
}

impl From<BufferSlot> for u32 {
    #[inline]
    fn from(slot: BufferSlot) -> u32 {
        slot.index()
    }
}

impl fmt::Display for BufferSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (slot {})", self.label(), self.index())
    }
}

/// Bindings of the textured fragment stage.
#[repr(u32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TextureSlot {
    BaseColor = 0,
    Sampler = 1,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 2] = [TextureSlot::BaseColor, TextureSlot::Sampler];

    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }

    pub const fn label(self) -> &'static str {
        match self {
            TextureSlot::BaseColor => "base color texture",
            TextureSlot::Sampler => "sampler",
        }
    }
}

impl TryFrom<u32> for TextureSlot {
    type Error = ContractError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.index() == index)
            .ok_or(ContractError::UnknownTextureSlot(index))
    }
}

impl fmt::Display for TextureSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (binding {})", self.label(), self.index())
    }
}
