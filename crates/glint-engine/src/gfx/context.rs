use std::fmt;

use crate::coords::SurfaceSize;

/// Compiled shader object owned by a context.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShaderId(pub(crate) u32);

/// Linked program owned by a context.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ProgramId(pub(crate) u32);

/// Vertex buffer owned by a context.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BufferId(pub(crate) u32);

macro_rules! slot_index {
    ($($ty:ty),*) => {$(
        impl $ty {
            #[inline]
            pub(crate) fn index(self) -> usize {
                self.0 as usize
            }
        }
    )*};
}

slot_index!(ShaderId, ProgramId, BufferId);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub(crate) fn naga(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformValue {
    Vec2([f32; 2]),
    Vec4([f32; 4]),
    Int(i32),
}

/// Outcome of presenting a frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PresentStatus {
    /// The frame reached the surface.
    Presented,
    /// Transient surface problem; the frame was dropped.
    Skipped,
    /// The context is gone; no further frame can be presented.
    Lost,
}

/// A drawable region that can produce a graphics context.
pub trait Surface {
    type Context: GraphicsContext;

    fn create_context(self) -> anyhow::Result<Self::Context>;
}

/// Immediate-mode graphics capability set used by the render engine.
///
/// Draw state (program, buffer, attribute layout, uniforms) is sticky between
/// calls. `buffer_data` overwrites the bound buffer's contents; the following
/// `draw_triangles` reads what was just written.
pub trait GraphicsContext {
    /// Compiles one stage. `Err` carries the compiler's diagnostic text.
    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<ShaderId, String>;

    /// Links a vertex and a fragment shader. `Err` carries the link log.
    fn link_program(&mut self, vertex: ShaderId, fragment: ShaderId) -> Result<ProgramId, String>;

    fn delete_shader(&mut self, shader: ShaderId);
    fn delete_program(&mut self, program: ProgramId);

    /// Location of a named vertex input of `program`.
    fn attribute_location(&self, program: ProgramId, name: &str) -> Option<u32>;

    fn create_buffer(&mut self) -> BufferId;
    fn delete_buffer(&mut self, buffer: BufferId);

    /// Size of the backing store draws land in.
    fn backing_size(&self) -> SurfaceSize;

    /// Size the host currently displays the surface at.
    fn display_size(&self) -> SurfaceSize;

    /// Reallocates the backing store. Previous contents are discarded.
    fn resize_backing(&mut self, size: SurfaceSize);

    /// Starts recording a frame.
    fn begin_frame(&mut self);

    fn set_viewport(&mut self, x: u32, y: u32, width: u32, height: u32);
    fn clear(&mut self, rgba: [f32; 4]);
    fn use_program(&mut self, program: ProgramId);

    /// Sets a uniform of the program in use. Unknown names are ignored.
    fn set_uniform(&mut self, name: &str, value: UniformValue);

    fn bind_buffer(&mut self, buffer: BufferId);

    /// Overwrites the bound buffer with `data`.
    fn buffer_data(&mut self, data: &[f32]);

    /// Feeds attribute `location` from the bound buffer, `components` floats per vertex.
    fn vertex_attrib_pointer(&mut self, location: u32, components: u32);

    /// Draws `count` vertices starting at `first` as a triangle list.
    fn draw_triangles(&mut self, first: u32, count: u32);

    /// Finishes the frame and presents it.
    fn end_frame(&mut self) -> PresentStatus;
}
