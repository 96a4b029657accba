//! WGSL front end shared by every backend.
//!
//! Shaders are parsed and validated with naga so compile and link failures
//! produce the same diagnostics regardless of which context is in use.

use std::borrow::Cow;

use naga::valid::{Capabilities, ValidationFlags, Validator};

use super::ShaderStage;

/// Built-in vertex stage: pixel-space positions, `resolution` uniform.
pub const VERTEX_SHADER: &str = include_str!("shaders/rect.vert.wgsl");

/// Built-in fragment stage: solid `color` uniform.
pub const FRAGMENT_SHADER: &str = include_str!("shaders/rect.frag.wgsl");

/// WGSL sources for the engine's single program.
#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub vertex: Cow<'static, str>,
    pub fragment: Cow<'static, str>,
}

impl ShaderSources {
    pub fn new(
        vertex: impl Into<Cow<'static, str>>,
        fragment: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }
}

impl Default for ShaderSources {
    fn default() -> Self {
        Self::new(VERTEX_SHADER, FRAGMENT_SHADER)
    }
}

/// A stage that parsed and validated.
#[derive(Debug)]
pub(crate) struct CompiledShader {
    pub stage: ShaderStage,
    pub module: naga::Module,
    pub entry_point: String,
}

/// Vertex/fragment interface of a linked program.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LinkedInterface {
    pub vertex_entry: String,
    pub fragment_entry: String,
    /// Named vertex inputs and their `@location`s.
    pub attributes: Vec<(String, u32)>,
}

impl LinkedInterface {
    pub fn attribute_location(&self, name: &str) -> Option<u32> {
        self.attributes
            .iter()
            .find_map(|(n, loc)| (n == name).then_some(*loc))
    }
}

pub(crate) fn compile(stage: ShaderStage, source: &str) -> Result<CompiledShader, String> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| e.emit_to_string(source))?;

    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .map_err(|e| e.emit_to_string(source))?;

    let entry_point = module
        .entry_points
        .iter()
        .find(|ep| ep.stage == stage.naga())
        .map(|ep| ep.name.clone())
        .ok_or_else(|| format!("no @{stage} entry point in shader"))?;

    Ok(CompiledShader {
        stage,
        module,
        entry_point,
    })
}

/// Checks that two stages form a program and extracts its interface.
///
/// Every `@location` the fragment stage reads must be written by the vertex stage.
pub(crate) fn link(
    vertex: &CompiledShader,
    fragment: &CompiledShader,
) -> Result<LinkedInterface, String> {
    if vertex.stage != ShaderStage::Vertex {
        return Err(format!(
            "expected a vertex shader, got a {} shader",
            vertex.stage
        ));
    }
    if fragment.stage != ShaderStage::Fragment {
        return Err(format!(
            "expected a fragment shader, got a {} shader",
            fragment.stage
        ));
    }

    let vs = entry(vertex)?;
    let fs = entry(fragment)?;

    let outputs = vertex_outputs(&vertex.module, vs);
    let inputs = stage_inputs(&fragment.module, &fs.function.arguments);

    if let Some((name, loc)) = inputs.iter().find(|(_, loc)| !outputs.contains(loc)) {
        return Err(format!(
            "fragment input `{name}` at @location({loc}) is not written by the vertex stage"
        ));
    }

    Ok(LinkedInterface {
        vertex_entry: vertex.entry_point.clone(),
        fragment_entry: fragment.entry_point.clone(),
        attributes: stage_inputs(&vertex.module, &vs.function.arguments),
    })
}

fn entry(shader: &CompiledShader) -> Result<&naga::EntryPoint, String> {
    let name = &shader.entry_point;
    shader
        .module
        .entry_points
        .iter()
        .find(|ep| ep.name == *name)
        .ok_or_else(|| format!("entry point `{name}` disappeared"))
}

fn location(binding: Option<&naga::Binding>) -> Option<u32> {
    match binding {
        Some(naga::Binding::Location { location, .. }) => Some(*location),
        _ => None,
    }
}

fn struct_locations(
    module: &naga::Module,
    ty: naga::Handle<naga::Type>,
    out: &mut Vec<(String, u32)>,
) {
    if let naga::TypeInner::Struct { members, .. } = &module.types[ty].inner {
        for member in members {
            if let Some(loc) = location(member.binding.as_ref()) {
                out.push((member.name.clone().unwrap_or_default(), loc));
            }
        }
    }
}

fn stage_inputs(module: &naga::Module, args: &[naga::FunctionArgument]) -> Vec<(String, u32)> {
    let mut out = Vec::new();
    for arg in args {
        match (&arg.binding, location(arg.binding.as_ref())) {
            (_, Some(loc)) => out.push((arg.name.clone().unwrap_or_default(), loc)),
            (None, None) => struct_locations(module, arg.ty, &mut out),
            _ => {}
        }
    }
    out
}

fn vertex_outputs(module: &naga::Module, ep: &naga::EntryPoint) -> Vec<u32> {
    let Some(result) = ep.function.result.as_ref() else {
        return Vec::new();
    };

    let mut out = Vec::new();
    match (&result.binding, location(result.binding.as_ref())) {
        (_, Some(loc)) => out.push((String::new(), loc)),
        (None, None) => struct_locations(module, result.ty, &mut out),
        _ => {}
    }
    out.into_iter().map(|(_, loc)| loc).collect()
}
