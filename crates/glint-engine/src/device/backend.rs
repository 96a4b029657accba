use bytemuck::{Pod, Zeroable};
use winit::window::Window;

use crate::coords::SurfaceSize;
use crate::gfx::shader::{self, CompiledShader, LinkedInterface};
use crate::gfx::{
    BufferId, GraphicsContext, PresentStatus, ProgramId, ShaderId, ShaderStage, Surface,
    UniformValue,
};

use super::{Gpu, GpuInit};

/// Floats per vertex of the single position attribute.
const POSITION_COMPONENTS: u32 = 2;

// ── blend ─────────────────────────────────────────────────────────────────

fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

// ── globals uniform ───────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Pod, Zeroable)]
struct Globals {
    resolution: [f32; 2],
    _pad: [f32; 2], // 16-byte alignment
    color: [f32; 4],
}

fn globals_min_binding_size() -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(std::mem::size_of::<Globals>() as u64)
}

// ── slots ─────────────────────────────────────────────────────────────────

struct ShaderSlot {
    compiled: CompiledShader,
    source: String,
}

struct Program {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    interface: LinkedInterface,
}

/// CPU staging for one vertex buffer.
///
/// Every `buffer_data` in a frame appends here; draws remember where their
/// data starts, and the whole frame is uploaded with one write.
struct GeometryBuffer {
    staging: Vec<f32>,
    /// First vertex of the most recent `buffer_data`; `None` if it was dropped.
    base_vertex: Option<u32>,
    /// Float count the device can hold in one vertex buffer.
    max_floats: usize,
    overflowed: bool,
    gpu: Option<wgpu::Buffer>,
    capacity: usize,
}

impl GeometryBuffer {
    fn new(max_floats: usize) -> Self {
        Self {
            staging: Vec::new(),
            base_vertex: None,
            max_floats,
            overflowed: false,
            gpu: None,
            capacity: 0,
        }
    }

    /// Appends one upload. Data that would not fit in a device buffer is
    /// dropped, and draws against it are skipped until the next frame.
    fn stage(&mut self, data: &[f32]) {
        if self.staging.len() + data.len() > self.max_floats {
            if !self.overflowed {
                log::warn!(
                    "vertex data exceeds the device buffer limit ({} floats); \
                     remaining geometry this frame is dropped",
                    self.max_floats
                );
                self.overflowed = true;
            }
            self.base_vertex = None;
            return;
        }

        self.base_vertex = Some((self.staging.len() as u32) / POSITION_COMPONENTS);
        self.staging.extend_from_slice(data);
    }

    fn reset(&mut self) {
        self.staging.clear();
        self.base_vertex = None;
        self.overflowed = false;
    }

    fn ensure_capacity(&mut self, device: &wgpu::Device, label: &str) {
        let required = self.staging.len();
        if required <= self.capacity && self.gpu.is_some() {
            return;
        }

        let new_cap = required.next_power_of_two().max(64).min(self.max_floats);
        self.gpu = Some(device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (new_cap * std::mem::size_of::<f32>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.capacity = new_cap;
    }
}

#[derive(Debug, Clone)]
struct Draw {
    program: ProgramId,
    buffer: BufferId,
    vertices: std::ops::Range<u32>,
}

/// Commands collected between `begin_frame` and `end_frame`.
#[derive(Default)]
struct FrameRecording {
    clear: Option<[f32; 4]>,
    viewport: Option<(u32, u32, u32, u32)>,
    program: Option<ProgramId>,
    buffer: Option<BufferId>,
    attrib_ready: bool,
    draws: Vec<Draw>,
}

// ── surface ───────────────────────────────────────────────────────────────

/// A window that can produce a [`WgpuContext`].
pub struct WgpuSurface<'w> {
    window: &'w Window,
    init: GpuInit,
}

impl<'w> WgpuSurface<'w> {
    pub fn new(window: &'w Window, init: GpuInit) -> Self {
        Self { window, init }
    }
}

impl<'w> Surface for WgpuSurface<'w> {
    type Context = WgpuContext<'w>;

    fn create_context(self) -> anyhow::Result<WgpuContext<'w>> {
        let gpu = pollster::block_on(Gpu::new(self.window, self.init))?;
        Ok(WgpuContext::new(gpu, self.window))
    }
}

// ── context ───────────────────────────────────────────────────────────────

/// `GraphicsContext` backed by a wgpu surface.
///
/// Calls are recorded per frame and replayed into a single render pass at
/// `end_frame`. Uniform values are latched for the whole frame; the last value
/// set before `end_frame` wins.
pub struct WgpuContext<'w> {
    gpu: Gpu<'w>,
    window: &'w Window,

    shaders: Vec<Option<ShaderSlot>>,
    programs: Vec<Option<Program>>,
    buffers: Vec<Option<GeometryBuffer>>,

    bind_group_layout: wgpu::BindGroupLayout,
    globals: Globals,
    globals_ubo: wgpu::Buffer,
    max_buffer_floats: usize,

    frame: FrameRecording,
}

impl<'w> WgpuContext<'w> {
    pub fn new(gpu: Gpu<'w>, window: &'w Window) -> Self {
        let device = gpu.device();

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("glint globals bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: globals_min_binding_size(),
                },
                count: None,
            }],
        });

        let globals_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("glint globals ubo"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let max_buffer_floats = max_buffer_floats(&device.limits());

        Self {
            gpu,
            window,
            shaders: Vec::new(),
            programs: Vec::new(),
            buffers: Vec::new(),
            bind_group_layout,
            globals: Globals::default(),
            globals_ubo,
            max_buffer_floats,
            frame: FrameRecording::default(),
        }
    }

    fn shader(&self, id: ShaderId) -> Result<&ShaderSlot, String> {
        self.shaders
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or_else(|| format!("shader {} does not exist", id.0))
    }

    fn build_pipeline(
        &self,
        vs: &ShaderSlot,
        fs: &ShaderSlot,
        interface: &LinkedInterface,
    ) -> Result<wgpu::RenderPipeline, String> {
        let [(_, location)] = interface.attributes.as_slice() else {
            return Err(format!(
                "program must declare exactly one vertex input, found {}",
                interface.attributes.len()
            ));
        };

        let device = self.gpu.device();
        let vs_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("glint vertex shader"),
            source: wgpu::ShaderSource::Wgsl(vs.source.as_str().into()),
        });
        let fs_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("glint fragment shader"),
            source: wgpu::ShaderSource::Wgsl(fs.source.as_str().into()),
        });

        let attributes = [wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: 0,
            shader_location: *location,
        }];
        let layout = wgpu::VertexBufferLayout {
            array_stride: (POSITION_COMPONENTS as usize * std::mem::size_of::<f32>()) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &attributes,
        };

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("glint pipeline layout"),
            bind_group_layouts: &[&self.bind_group_layout],
            immediate_size: 0,
        });

        Ok(device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("glint pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vs_module,
                entry_point: Some(interface.vertex_entry.as_str()),
                compilation_options: Default::default(),
                buffers: &[layout],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs_module,
                entry_point: Some(interface.fragment_entry.as_str()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: self.gpu.surface_format(),
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        }))
    }

    /// Uploads staged geometry and the globals for this frame.
    fn flush_uploads(&mut self) {
        let device = self.gpu.device();
        let queue = self.gpu.queue();

        for buffer in self.buffers.iter_mut().flatten() {
            if buffer.staging.is_empty() {
                continue;
            }
            buffer.ensure_capacity(device, "glint geometry vbo");
            if let Some(gpu) = buffer.gpu.as_ref() {
                queue.write_buffer(gpu, 0, bytemuck::cast_slice(&buffer.staging));
            }
        }

        queue.write_buffer(&self.globals_ubo, 0, bytemuck::bytes_of(&self.globals));
    }

    fn reset_staging(&mut self) {
        for buffer in self.buffers.iter_mut().flatten() {
            buffer.reset();
        }
        self.frame = FrameRecording::default();
    }

    fn encode_pass(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let load = match self.frame.clear {
            Some([r, g, b, a]) => wgpu::LoadOp::Clear(wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            }),
            None => wgpu::LoadOp::Load,
        };

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("glint frame pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let size = self.gpu.size();
        if let Some((x, y, w, h)) = self.frame.viewport {
            let x = x.min(size.width);
            let y = y.min(size.height);
            let w = w.min(size.width - x);
            let h = h.min(size.height - y);
            if w > 0 && h > 0 {
                rpass.set_viewport(x as f32, y as f32, w as f32, h as f32, 0.0, 1.0);
            }
        }

        let mut bound: Option<(ProgramId, BufferId)> = None;
        for draw in &self.frame.draws {
            let Some(program) = self.programs.get(draw.program.index()).and_then(Option::as_ref)
            else {
                continue;
            };
            let Some(vbo) = self
                .buffers
                .get(draw.buffer.index())
                .and_then(Option::as_ref)
                .and_then(|b| b.gpu.as_ref())
            else {
                continue;
            };

            if bound != Some((draw.program, draw.buffer)) {
                rpass.set_pipeline(&program.pipeline);
                rpass.set_bind_group(0, &program.bind_group, &[]);
                rpass.set_vertex_buffer(0, vbo.slice(..));
                bound = Some((draw.program, draw.buffer));
            }
            rpass.draw(draw.vertices.clone(), 0..1);
        }
    }
}

impl<'w> GraphicsContext for WgpuContext<'w> {
    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<ShaderId, String> {
        let compiled = shader::compile(stage, source)?;
        let id = ShaderId(self.shaders.len() as u32);
        self.shaders.push(Some(ShaderSlot {
            compiled,
            source: source.to_string(),
        }));
        Ok(id)
    }

    fn link_program(&mut self, vertex: ShaderId, fragment: ShaderId) -> Result<ProgramId, String> {
        let vs = self.shader(vertex)?;
        let fs = self.shader(fragment)?;
        let interface = shader::link(&vs.compiled, &fs.compiled)?;
        let pipeline = self.build_pipeline(vs, fs, &interface)?;

        let bind_group = self.gpu.device().create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("glint globals bind group"),
            layout: &self.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: self.globals_ubo.as_entire_binding(),
            }],
        });

        let id = ProgramId(self.programs.len() as u32);
        self.programs.push(Some(Program {
            pipeline,
            bind_group,
            interface,
        }));
        Ok(id)
    }

    fn delete_shader(&mut self, shader: ShaderId) {
        if let Some(slot) = self.shaders.get_mut(shader.index()) {
            *slot = None;
        }
    }

    fn delete_program(&mut self, program: ProgramId) {
        if let Some(slot) = self.programs.get_mut(program.index()) {
            *slot = None;
        }
    }

    fn attribute_location(&self, program: ProgramId, name: &str) -> Option<u32> {
        self.programs
            .get(program.index())?
            .as_ref()?
            .interface
            .attribute_location(name)
    }

    fn create_buffer(&mut self) -> BufferId {
        let id = BufferId(self.buffers.len() as u32);
        self.buffers.push(Some(GeometryBuffer::new(self.max_buffer_floats)));
        id
    }

    fn delete_buffer(&mut self, buffer: BufferId) {
        if let Some(slot) = self.buffers.get_mut(buffer.index()) {
            *slot = None;
        }
        if self.frame.buffer == Some(buffer) {
            self.frame.buffer = None;
        }
    }

    fn backing_size(&self) -> SurfaceSize {
        self.gpu.size().into()
    }

    fn display_size(&self) -> SurfaceSize {
        self.window.inner_size().into()
    }

    fn resize_backing(&mut self, size: SurfaceSize) {
        log::debug!("resizing surface to {}x{}", size.width, size.height);
        self.gpu.resize(size.into());
    }

    fn begin_frame(&mut self) {
        self.reset_staging();
    }

    fn set_viewport(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.frame.viewport = Some((x, y, width, height));
    }

    fn clear(&mut self, rgba: [f32; 4]) {
        self.frame.clear = Some(rgba);
        self.frame.draws.clear();
    }

    fn use_program(&mut self, program: ProgramId) {
        self.frame.program = Some(program);
    }

    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        match (name, value) {
            ("resolution", UniformValue::Vec2(v)) => self.globals.resolution = v,
            ("color", UniformValue::Vec4(v)) => self.globals.color = v,
            _ => log::trace!("uniform `{name}` = {value:?} has no binding; ignored"),
        }
    }

    fn bind_buffer(&mut self, buffer: BufferId) {
        self.frame.buffer = Some(buffer);
    }

    fn buffer_data(&mut self, data: &[f32]) {
        let Some(buffer) = self
            .frame
            .buffer
            .and_then(|id| self.buffers.get_mut(id.index()))
            .and_then(Option::as_mut)
        else {
            log::warn!("buffer_data with no live buffer bound; ignored");
            return;
        };

        buffer.stage(data);
    }

    fn vertex_attrib_pointer(&mut self, location: u32, components: u32) {
        if components != POSITION_COMPONENTS {
            log::warn!(
                "attribute {location}: {components} components unsupported; \
                 expected {POSITION_COMPONENTS}"
            );
            self.frame.attrib_ready = false;
            return;
        }
        self.frame.attrib_ready = true;
    }

    fn draw_triangles(&mut self, first: u32, count: u32) {
        let (Some(program), Some(buffer)) = (self.frame.program, self.frame.buffer) else {
            log::warn!("draw without a program and buffer bound; ignored");
            return;
        };
        if !self.frame.attrib_ready || count == 0 {
            return;
        }
        let Some(base) = self
            .buffers
            .get(buffer.index())
            .and_then(Option::as_ref)
            .and_then(|b| b.base_vertex)
        else {
            return;
        };

        let start = base + first;
        self.frame.draws.push(Draw {
            program,
            buffer,
            vertices: start..start + count,
        });
    }

    fn end_frame(&mut self) -> PresentStatus {
        self.flush_uploads();

        let status = match self.gpu.begin_frame() {
            Ok(mut frame) => {
                self.encode_pass(&mut frame.encoder, &frame.view);
                self.window.pre_present_notify();
                self.gpu.submit(frame);
                PresentStatus::Presented
            }
            Err(err) => {
                log::debug!("surface error: {err:?}");
                let action = self.gpu.handle_surface_error(err);
                log::debug!("surface error handled: {action:?}");
                action.present_status()
            }
        };

        self.reset_staging();
        status
    }
}

/// Largest vertex buffer the device accepts, in floats.
fn max_buffer_floats(limits: &wgpu::Limits) -> usize {
    let bytes = usize::try_from(limits.max_buffer_size).unwrap_or(usize::MAX);
    bytes / std::mem::size_of::<f32>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_follows_max_buffer_size() {
        let limits = wgpu::Limits {
            max_buffer_size: 1024,
            ..wgpu::Limits::downlevel_webgl2_defaults()
        };
        assert_eq!(max_buffer_floats(&limits), 256);
    }

    #[test]
    fn staging_records_base_vertex() {
        let mut buffer = GeometryBuffer::new(64);
        buffer.stage(&[0.0; 12]);
        assert_eq!(buffer.base_vertex, Some(0));
        buffer.stage(&[0.0; 12]);
        assert_eq!(buffer.base_vertex, Some(6));
        assert_eq!(buffer.staging.len(), 24);
    }

    #[test]
    fn upload_past_limit_is_dropped() {
        let mut buffer = GeometryBuffer::new(24);
        buffer.stage(&[0.0; 12]);
        buffer.stage(&[0.0; 12]);
        buffer.stage(&[0.0; 12]);
        assert_eq!(buffer.base_vertex, None);
        assert_eq!(buffer.staging.len(), 24);
        assert!(buffer.overflowed);
    }

    #[test]
    fn reset_clears_overflow() {
        let mut buffer = GeometryBuffer::new(12);
        buffer.stage(&[0.0; 12]);
        buffer.stage(&[0.0; 12]);
        buffer.reset();
        assert!(!buffer.overflowed);
        assert!(buffer.staging.is_empty());
        buffer.stage(&[0.0; 12]);
        assert_eq!(buffer.base_vertex, Some(0));
    }
}
