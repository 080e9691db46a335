//! Value types used to build vertex records.
//!
//! Canonical CPU space for the bundled shaders:
//! - Pixels, origin at the viewport centre
//! - +X right, +Y up
//!
//! The vertex stage divides by half the viewport size to reach clip space.

mod color;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use vec2::Vec2;
pub use viewport::Viewport;
