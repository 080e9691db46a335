//! WGSL contract checker.
//!
//! Parses a shader with naga and compares what its vertex stage declares
//! against the Rust-side layouts:
//! - located vertex inputs vs. [`ShaderVertex::ATTRIBUTES`]
//! - the viewport uniform at [`BufferSlot::ViewportSize`] vs. [`ViewportUniform`]
//! - for textured shaders, the texture and sampler at [`TextureSlot`]
//!
//! Nothing is compiled for a device; the shader is only parsed and validated.

mod report;

pub use report::ContractReport;

use naga::{AddressSpace, Binding, GlobalVariable, Module, Scalar, TypeInner, VectorSize};

use crate::binding::{BufferSlot, TextureSlot, TEXTURE_GROUP, VIEWPORT_GROUP};
use crate::error::ContractError;
use crate::uniform::ViewportUniform;
use crate::vertex::{ShaderVertex, SimpleVertex, TexVertex};

/// Which vertex record a shader is expected to consume.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderKind {
    Simple,
    Textured,
}

impl ShaderKind {
    pub const ALL: [ShaderKind; 2] = [ShaderKind::Simple, ShaderKind::Textured];

    pub const fn vertex_name(self) -> &'static str {
        match self {
            ShaderKind::Simple => SimpleVertex::NAME,
            ShaderKind::Textured => TexVertex::NAME,
        }
    }

    pub const fn attributes(self) -> &'static [wgpu::VertexAttribute] {
        match self {
            ShaderKind::Simple => SimpleVertex::ATTRIBUTES,
            ShaderKind::Textured => TexVertex::ATTRIBUTES,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ShaderKind::Simple => "simple shader",
            ShaderKind::Textured => "textured shader",
        }
    }

    const fn needs_texture(self) -> bool {
        matches!(self, ShaderKind::Textured)
    }
}

/// Checker configuration.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Name of the `@vertex` function to inspect.
    pub vertex_entry_point: String,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            vertex_entry_point: crate::shaders::VERTEX_ENTRY_POINT.to_string(),
        }
    }
}

/// Checks `source` against the layout of `kind` with default options.
pub fn check_wgsl(source: &str, kind: ShaderKind) -> Result<ContractReport, ContractError> {
    check_wgsl_with(source, kind, &CheckOptions::default())
}

pub fn check_wgsl_with(
    source: &str,
    kind: ShaderKind,
    options: &CheckOptions,
) -> Result<ContractReport, ContractError> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| ContractError::ShaderParse(e.emit_to_string(source)))?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .map_err(|e| ContractError::ShaderValidation(e.emit_to_string(source)))?;

    let entry = module
        .entry_points
        .iter()
        .find(|ep| ep.stage == naga::ShaderStage::Vertex && ep.name == options.vertex_entry_point)
        .ok_or_else(|| ContractError::MissingEntryPoint(options.vertex_entry_point.clone()))?;

    let inputs = located_inputs(&module, &entry.function);
    let attributes = check_attributes(&module, &inputs, kind)?;

    check_viewport_uniform(&module)?;

    let mut texture_bindings = Vec::new();
    if kind.needs_texture() {
        texture_bindings = check_texture_bindings(&module)?;
    }

    let report = ContractReport {
        kind,
        entry_point: entry.name.clone(),
        attributes,
        viewport_binding: (VIEWPORT_GROUP, BufferSlot::ViewportSize.index()),
        texture_bindings,
    };
    log::debug!("{} passed: {report}", kind.label());
    Ok(report)
}

/// `(location, type)` of every `@location` input, sorted by location.
///
/// Inputs may be plain arguments or members of a struct argument; built-ins
/// such as `@builtin(vertex_index)` are skipped.
fn located_inputs(module: &Module, function: &naga::Function) -> Vec<(u32, naga::Handle<naga::Type>)> {
    let mut inputs = Vec::new();

    for arg in &function.arguments {
        match &arg.binding {
            Some(Binding::Location { location, .. }) => inputs.push((*location, arg.ty)),
            Some(Binding::BuiltIn(_)) => {}
            None => {
                if let TypeInner::Struct { members, .. } = &module.types[arg.ty].inner {
                    for member in members {
                        if let Some(Binding::Location { location, .. }) = &member.binding {
                            inputs.push((*location, member.ty));
                        }
                    }
                }
            }
        }
    }

    inputs.sort_by_key(|(location, _)| *location);
    inputs
}

/// Vertex format a shader input type reads, if it is a 32-bit float scalar/vector.
fn vertex_format(inner: &TypeInner) -> Option<wgpu::VertexFormat> {
    match *inner {
        TypeInner::Scalar(scalar) if scalar == Scalar::F32 => Some(wgpu::VertexFormat::Float32),
        TypeInner::Vector { size, scalar } if scalar == Scalar::F32 => Some(match size {
            VectorSize::Bi => wgpu::VertexFormat::Float32x2,
            VectorSize::Tri => wgpu::VertexFormat::Float32x3,
            VectorSize::Quad => wgpu::VertexFormat::Float32x4,
        }),
        _ => None,
    }
}

fn describe(inner: &TypeInner) -> String {
    match vertex_format(inner) {
        Some(format) => format!("{format:?}"),
        None => "a non-f32 type".to_string(),
    }
}

fn check_attributes(
    module: &Module,
    inputs: &[(u32, naga::Handle<naga::Type>)],
    kind: ShaderKind,
) -> Result<Vec<(u32, wgpu::VertexFormat)>, ContractError> {
    let vertex = kind.vertex_name();
    let expected = kind.attributes();

    let mut checked = Vec::with_capacity(expected.len());
    for attr in expected {
        let location = attr.shader_location;
        let Some((_, ty)) = inputs.iter().find(|(loc, _)| *loc == location) else {
            return Err(ContractError::MissingAttribute {
                vertex,
                location,
                expected: attr.format,
            });
        };

        let inner = &module.types[*ty].inner;
        if vertex_format(inner) != Some(attr.format) {
            return Err(ContractError::AttributeMismatch {
                vertex,
                location,
                expected: attr.format,
                found: describe(inner),
            });
        }

        log::debug!("{vertex} location {location}: {:?} ok", attr.format);
        checked.push((location, attr.format));
    }

    if let Some((location, _)) = inputs
        .iter()
        .find(|(loc, _)| !expected.iter().any(|a| a.shader_location == *loc))
    {
        return Err(ContractError::UnexpectedAttribute {
            vertex,
            location: *location,
        });
    }

    Ok(checked)
}

fn global_at<'m>(module: &'m Module, group: u32, binding: u32) -> Option<&'m GlobalVariable> {
    module
        .global_variables
        .iter()
        .map(|(_, var)| var)
        .find(|var| {
            var.binding
                .as_ref()
                .is_some_and(|b| b.group == group && b.binding == binding)
        })
}

fn check_viewport_uniform(module: &Module) -> Result<(), ContractError> {
    let binding = BufferSlot::ViewportSize.index();
    let var = global_at(module, VIEWPORT_GROUP, binding)
        .filter(|var| var.space == AddressSpace::Uniform)
        .ok_or(ContractError::MissingBinding {
            what: "viewport uniform",
            group: VIEWPORT_GROUP,
            binding,
        })?;

    let found = module.types[var.ty].inner.size(module.to_ctx());
    let expected = size_of::<ViewportUniform>() as u32;
    if found != expected {
        return Err(ContractError::UniformSize { expected, found });
    }
    check_viewport_fields(module, &module.types[var.ty].inner)?;

    log::debug!("viewport uniform at @group({VIEWPORT_GROUP}) @binding({binding}): {found} bytes ok");
    Ok(())
}

/// `size` must be the `vec2<f32>` at offset 0, matching `ViewportUniform::size`.
fn check_viewport_fields(module: &Module, inner: &TypeInner) -> Result<(), ContractError> {
    let TypeInner::Struct { members, .. } = inner else {
        return Err(ContractError::UniformLayout("expected a struct".to_string()));
    };

    let Some(size) = members.iter().find(|m| m.name.as_deref() == Some("size")) else {
        return Err(ContractError::UniformLayout("no `size` member".to_string()));
    };
    if size.offset != 0 {
        return Err(ContractError::UniformLayout(format!(
            "`size` at offset {}, expected 0",
            size.offset
        )));
    }

    let size_inner = &module.types[size.ty].inner;
    if vertex_format(size_inner) != Some(wgpu::VertexFormat::Float32x2) {
        return Err(ContractError::UniformLayout(format!(
            "`size` is {}, expected vec2<f32>",
            describe(size_inner)
        )));
    }
    Ok(())
}

fn check_texture_bindings(module: &Module) -> Result<Vec<(u32, u32)>, ContractError> {
    let mut found = Vec::with_capacity(TextureSlot::ALL.len());

    for slot in TextureSlot::ALL {
        let binding = slot.index();
        let matches_kind = |var: &&GlobalVariable| {
            let inner = &module.types[var.ty].inner;
            match slot {
                TextureSlot::BaseColor => matches!(inner, TypeInner::Image { .. }),
                TextureSlot::Sampler => matches!(inner, TypeInner::Sampler { .. }),
            }
        };

        global_at(module, TEXTURE_GROUP, binding)
            .filter(matches_kind)
            .ok_or(ContractError::MissingBinding {
                what: slot.label(),
                group: TEXTURE_GROUP,
                binding,
            })?;

        log::debug!("{slot} at @group({TEXTURE_GROUP}) ok");
        found.push((TEXTURE_GROUP, binding));
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaders::{SIMPLE_WGSL, TEXTURED_WGSL};

    const UNIFORM: &str = "
        struct Viewport { size: vec2<f32>, _pad: vec2<f32> };
        @group(0) @binding(1) var<uniform> viewport: Viewport;
    ";

    fn simple_with_inputs(inputs: &str) -> String {
        format!(
            "{UNIFORM}
            @vertex
            fn vs_main({inputs}) -> @builtin(position) vec4<f32> {{
                return vec4<f32>(viewport.size, 0.0, 1.0);
            }}"
        )
    }

    #[test]
    fn bundled_simple_shader_passes() {
        let report = check_wgsl(SIMPLE_WGSL, ShaderKind::Simple).unwrap();
        assert_eq!(report.entry_point, "vs_main");
        assert_eq!(
            report.attributes,
            vec![
                (0, wgpu::VertexFormat::Float32x2),
                (1, wgpu::VertexFormat::Float32x4)
            ]
        );
        assert_eq!(report.viewport_binding, (0, 1));
        assert!(report.texture_bindings.is_empty());
    }

    #[test]
    fn bundled_textured_shader_passes() {
        let report = check_wgsl(TEXTURED_WGSL, ShaderKind::Textured).unwrap();
        assert_eq!(report.attributes[1], (1, wgpu::VertexFormat::Float32x2));
        assert_eq!(report.texture_bindings, vec![(1, 0), (1, 1)]);
    }

    #[test]
    fn plain_arguments_are_accepted() {
        let src = simple_with_inputs(
            "@builtin(vertex_index) idx: u32, @location(1) colour: vec4<f32>, @location(0) pos: vec2<f32>",
        );
        assert!(check_wgsl(&src, ShaderKind::Simple).is_ok());
    }

    #[test]
    fn simple_shader_is_not_a_textured_shader() {
        let err = check_wgsl(SIMPLE_WGSL, ShaderKind::Textured).unwrap_err();
        assert!(matches!(err, ContractError::AttributeMismatch { location: 1, .. }));
    }

    #[test]
    fn swapped_locations_are_rejected() {
        let src = simple_with_inputs("@location(0) colour: vec4<f32>, @location(1) pos: vec2<f32>");
        let err = check_wgsl(&src, ShaderKind::Simple).unwrap_err();
        assert_eq!(
            err,
            ContractError::AttributeMismatch {
                vertex: "SimpleVertex",
                location: 0,
                expected: wgpu::VertexFormat::Float32x2,
                found: "Float32x4".to_string(),
            }
        );
    }

    #[test]
    fn wrong_component_count_is_rejected() {
        let src = simple_with_inputs("@location(0) pos: vec2<f32>, @location(1) colour: vec3<f32>");
        let err = check_wgsl(&src, ShaderKind::Simple).unwrap_err();
        assert!(matches!(err, ContractError::AttributeMismatch { location: 1, .. }));
    }

    #[test]
    fn integer_input_is_rejected() {
        let src = simple_with_inputs("@location(0) pos: vec2<i32>, @location(1) colour: vec4<f32>");
        let err = check_wgsl(&src, ShaderKind::Simple).unwrap_err();
        assert!(matches!(
            err,
            ContractError::AttributeMismatch { location: 0, ref found, .. } if found == "a non-f32 type"
        ));
    }

    #[test]
    fn missing_attribute_is_rejected() {
        let src = simple_with_inputs("@location(0) pos: vec2<f32>");
        let err = check_wgsl(&src, ShaderKind::Simple).unwrap_err();
        assert!(matches!(err, ContractError::MissingAttribute { location: 1, .. }));
    }

    #[test]
    fn extra_attribute_is_rejected() {
        let src = simple_with_inputs(
            "@location(0) pos: vec2<f32>, @location(1) colour: vec4<f32>, @location(2) extra: f32",
        );
        let err = check_wgsl(&src, ShaderKind::Simple).unwrap_err();
        assert_eq!(
            err,
            ContractError::UnexpectedAttribute { vertex: "SimpleVertex", location: 2 }
        );
    }

    #[test]
    fn viewport_on_wrong_binding_is_rejected() {
        let src = SIMPLE_WGSL.replace("@group(0) @binding(1)", "@group(0) @binding(0)");
        let err = check_wgsl(&src, ShaderKind::Simple).unwrap_err();
        assert_eq!(
            err,
            ContractError::MissingBinding { what: "viewport uniform", group: 0, binding: 1 }
        );
    }

    #[test]
    fn unpadded_viewport_is_rejected() {
        let src = SIMPLE_WGSL.replace("    _pad: vec2<f32>,\n", "");
        let err = check_wgsl(&src, ShaderKind::Simple).unwrap_err();
        assert_eq!(err, ContractError::UniformSize { expected: 16, found: 8 });
    }

    #[test]
    fn swapped_viewport_fields_are_rejected() {
        let src = SIMPLE_WGSL.replace(
            "    size: vec2<f32>,\n    _pad: vec2<f32>,\n",
            "    _pad: vec2<f32>,\n    size: vec2<f32>,\n",
        );
        assert_ne!(src, SIMPLE_WGSL);
        let err = check_wgsl(&src, ShaderKind::Simple).unwrap_err();
        assert_eq!(
            err,
            ContractError::UniformLayout("`size` at offset 8, expected 0".to_string())
        );
    }

    #[test]
    fn non_struct_viewport_is_rejected() {
        let src = "
            @group(0) @binding(1) var<uniform> viewport: vec4<f32>;
            @vertex
            fn vs_main(@location(0) pos: vec2<f32>, @location(1) colour: vec4<f32>) -> @builtin(position) vec4<f32> {
                return viewport;
            }";
        let err = check_wgsl(src, ShaderKind::Simple).unwrap_err();
        assert_eq!(err, ContractError::UniformLayout("expected a struct".to_string()));
    }

    #[test]
    fn validation_error_carries_source_context() {
        // Parses, but a vertex stage without a position output fails validation.
        let src = "
            @vertex
            fn vs_main() -> @location(0) vec4<f32> {
                return vec4<f32>(0.0);
            }";
        let err = check_wgsl(src, ShaderKind::Simple).unwrap_err();
        let ContractError::ShaderValidation(message) = err else {
            panic!("expected a validation error, got {err:?}");
        };
        assert!(message.starts_with("error"), "{message}");
    }

    #[test]
    fn missing_sampler_is_rejected() {
        let src = TEXTURED_WGSL.replace("@group(1) @binding(1)", "@group(1) @binding(2)");
        let err = check_wgsl(&src, ShaderKind::Textured).unwrap_err();
        assert!(matches!(err, ContractError::MissingBinding { group: 1, binding: 1, .. }));
    }

    #[test]
    fn custom_entry_point() {
        let src = SIMPLE_WGSL.replace("fn vs_main", "fn vertex_main");
        assert_eq!(
            check_wgsl(&src, ShaderKind::Simple).unwrap_err(),
            ContractError::MissingEntryPoint("vs_main".to_string())
        );
        let options = CheckOptions { vertex_entry_point: "vertex_main".to_string() };
        assert!(check_wgsl_with(&src, ShaderKind::Simple, &options).is_ok());
    }

    #[test]
    fn syntax_error_is_a_parse_error() {
        let err = check_wgsl("fn vs_main( {", ShaderKind::Simple).unwrap_err();
        assert!(matches!(err, ContractError::ShaderParse(_)));
    }
}
