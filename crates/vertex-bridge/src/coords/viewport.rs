use super::Vec2;
use crate::uniform::ViewportUniform;

/// Drawable size in pixels.
///
/// The value written to the viewport-size buffer; the bundled shaders map
/// `±size / 2` to the clip-space edges.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Half the viewport, i.e. the pixel position of the top-right clip corner.
    #[inline]
    pub fn half_extent(self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Uniform record for this viewport. Non-positive sizes are clamped to 1
    /// so the shader never divides by zero.
    #[inline]
    pub fn uniform(self) -> ViewportUniform {
        ViewportUniform::new(self.width.max(1.0), self.height.max(1.0))
    }
}
