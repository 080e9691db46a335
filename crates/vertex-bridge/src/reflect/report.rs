use std::fmt;

use super::ShaderKind;

/// What a successful check verified.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractReport {
    pub kind: ShaderKind,
    pub entry_point: String,
    /// `(shader location, format)` in location order.
    pub attributes: Vec<(u32, wgpu::VertexFormat)>,
    /// `(group, binding)` of the viewport uniform.
    pub viewport_binding: (u32, u32),
    /// `(group, binding)` of the texture and sampler; empty for untextured shaders.
    pub texture_bindings: Vec<(u32, u32)>,
}

impl fmt::Display for ContractReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} via {}(", self.kind.vertex_name(), self.entry_point)?;
        for (i, (location, format)) in self.attributes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "@{location} {format:?}")?;
        }
        let (group, binding) = self.viewport_binding;
        write!(f, "), viewport @{group}/{binding}")?;
        if !self.texture_bindings.is_empty() {
            write!(f, ", {} texture bindings", self.texture_bindings.len())?;
        }
        Ok(())
    }
}
