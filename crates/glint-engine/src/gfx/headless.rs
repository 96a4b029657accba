use crate::coords::SurfaceSize;

use super::shader::{self, CompiledShader, LinkedInterface};
use super::{
    BufferId, GraphicsContext, PresentStatus, ProgramId, ShaderId, ShaderStage, Surface,
    UniformValue,
};

/// One recorded context call.
#[derive(Debug, Clone, PartialEq)]
pub enum GfxCommand {
    CompileShader {
        stage: ShaderStage,
        shader: ShaderId,
    },
    LinkProgram { program: ProgramId },
    DeleteShader(ShaderId),
    DeleteProgram(ProgramId),
    CreateBuffer(BufferId),
    DeleteBuffer(BufferId),
    ResizeBacking(SurfaceSize),
    BeginFrame,
    Viewport {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    Clear([f32; 4]),
    UseProgram(ProgramId),
    Uniform { name: String, value: UniformValue },
    BindBuffer(BufferId),
    BufferData { buffer: BufferId, data: Vec<f32> },
    VertexAttribPointer { location: u32, components: u32 },
    DrawTriangles { first: u32, count: u32 },
    EndFrame(PresentStatus),
}

/// Off-screen surface with a host-controlled display size.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    display: SurfaceSize,
    backing: SurfaceSize,
    available: bool,
}

impl HeadlessSurface {
    /// A surface displayed at `width`×`height` whose backing store already matches.
    pub fn new(width: u32, height: u32) -> Self {
        let size = SurfaceSize::new(width, height);
        Self {
            display: size,
            backing: size,
            available: true,
        }
    }

    /// A surface that cannot produce a context.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new(0, 0)
        }
    }

    /// Overrides the initial backing size (the host's default canvas size).
    pub fn with_backing(mut self, size: SurfaceSize) -> Self {
        self.backing = size;
        self
    }
}

impl Surface for HeadlessSurface {
    type Context = HeadlessContext;

    fn create_context(self) -> anyhow::Result<HeadlessContext> {
        anyhow::ensure!(self.available, "headless surface has no graphics context");
        Ok(HeadlessContext::new(self.display, self.backing))
    }
}

/// Context that performs no rendering and records every call.
///
/// Shader compile/link go through the same WGSL front end as the wgpu
/// backend, so failures behave identically.
#[derive(Debug)]
pub struct HeadlessContext {
    display: SurfaceSize,
    backing: SurfaceSize,
    commands: Vec<GfxCommand>,

    shaders: Vec<Option<CompiledShader>>,
    programs: Vec<Option<LinkedInterface>>,
    buffers: Vec<bool>,
    bound_buffer: Option<BufferId>,

    next_present: PresentStatus,
}

impl HeadlessContext {
    fn new(display: SurfaceSize, backing: SurfaceSize) -> Self {
        Self {
            display,
            backing,
            commands: Vec::new(),
            shaders: Vec::new(),
            programs: Vec::new(),
            buffers: Vec::new(),
            bound_buffer: None,
            next_present: PresentStatus::Presented,
        }
    }

    /// Simulates the host changing the surface's display size.
    pub fn set_display_size(&mut self, size: SurfaceSize) {
        self.display = size;
    }

    /// The status reported by the next `end_frame` (reset to `Presented` afterwards).
    pub fn fail_next_present(&mut self, status: PresentStatus) {
        self.next_present = status;
    }

    pub fn commands(&self) -> &[GfxCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<GfxCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn live_shaders(&self) -> usize {
        self.shaders.iter().filter(|s| s.is_some()).count()
    }

    pub fn live_programs(&self) -> usize {
        self.programs.iter().filter(|p| p.is_some()).count()
    }

    pub fn live_buffers(&self) -> usize {
        self.buffers.iter().filter(|b| **b).count()
    }

    fn record(&mut self, cmd: GfxCommand) {
        log::trace!("headless: {cmd:?}");
        self.commands.push(cmd);
    }

    fn shader(&self, id: ShaderId) -> Result<&CompiledShader, String> {
        self.shaders
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or_else(|| format!("shader {} does not exist", id.0))
    }
}

impl GraphicsContext for HeadlessContext {
    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<ShaderId, String> {
        let compiled = shader::compile(stage, source)?;
        let id = ShaderId(self.shaders.len() as u32);
        self.shaders.push(Some(compiled));
        self.record(GfxCommand::CompileShader { stage, shader: id });
        Ok(id)
    }

    fn link_program(&mut self, vertex: ShaderId, fragment: ShaderId) -> Result<ProgramId, String> {
        let interface = shader::link(self.shader(vertex)?, self.shader(fragment)?)?;
        let id = ProgramId(self.programs.len() as u32);
        self.programs.push(Some(interface));
        self.record(GfxCommand::LinkProgram { program: id });
        Ok(id)
    }

    fn delete_shader(&mut self, shader: ShaderId) {
        if let Some(slot) = self.shaders.get_mut(shader.index()) {
            *slot = None;
        }
        self.record(GfxCommand::DeleteShader(shader));
    }

    fn delete_program(&mut self, program: ProgramId) {
        if let Some(slot) = self.programs.get_mut(program.index()) {
            *slot = None;
        }
        self.record(GfxCommand::DeleteProgram(program));
    }

    fn attribute_location(&self, program: ProgramId, name: &str) -> Option<u32> {
        self.programs
            .get(program.index())?
            .as_ref()?
            .attribute_location(name)
    }

    fn create_buffer(&mut self) -> BufferId {
        let id = BufferId(self.buffers.len() as u32);
        self.buffers.push(true);
        self.record(GfxCommand::CreateBuffer(id));
        id
    }

    fn delete_buffer(&mut self, buffer: BufferId) {
        if let Some(live) = self.buffers.get_mut(buffer.index()) {
            *live = false;
        }
        if self.bound_buffer == Some(buffer) {
            self.bound_buffer = None;
        }
        self.record(GfxCommand::DeleteBuffer(buffer));
    }

    fn backing_size(&self) -> SurfaceSize {
        self.backing
    }

    fn display_size(&self) -> SurfaceSize {
        self.display
    }

    fn resize_backing(&mut self, size: SurfaceSize) {
        self.backing = size;
        self.record(GfxCommand::ResizeBacking(size));
    }

    fn begin_frame(&mut self) {
        self.record(GfxCommand::BeginFrame);
    }

    fn set_viewport(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.record(GfxCommand::Viewport {
            x,
            y,
            width,
            height,
        });
    }

    fn clear(&mut self, rgba: [f32; 4]) {
        self.record(GfxCommand::Clear(rgba));
    }

    fn use_program(&mut self, program: ProgramId) {
        self.record(GfxCommand::UseProgram(program));
    }

    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        self.record(GfxCommand::Uniform {
            name: name.to_string(),
            value,
        });
    }

    fn bind_buffer(&mut self, buffer: BufferId) {
        self.bound_buffer = Some(buffer);
        self.record(GfxCommand::BindBuffer(buffer));
    }

    fn buffer_data(&mut self, data: &[f32]) {
        let Some(buffer) = self.bound_buffer else {
            log::warn!("headless: buffer_data with no buffer bound; ignored");
            return;
        };
        self.record(GfxCommand::BufferData {
            buffer,
            data: data.to_vec(),
        });
    }

    fn vertex_attrib_pointer(&mut self, location: u32, components: u32) {
        self.record(GfxCommand::VertexAttribPointer {
            location,
            components,
        });
    }

    fn draw_triangles(&mut self, first: u32, count: u32) {
        self.record(GfxCommand::DrawTriangles { first, count });
    }

    fn end_frame(&mut self) -> PresentStatus {
        let status = std::mem::replace(&mut self.next_present, PresentStatus::Presented);
        self.record(GfxCommand::EndFrame(status));
        status
    }
}
