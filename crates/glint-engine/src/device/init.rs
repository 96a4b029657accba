/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// Off by default: configured colors are written as-is, the way a 2D
    /// canvas treats them.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO paces frames to the display refresh.
    pub present_mode: wgpu::PresentMode,

    /// Alpha compositing preference. Falls back to a supported mode.
    ///
    /// Premultiplied lets the transparent clear show what is behind the window
    /// on platforms that support it.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,

    /// Hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: Some(wgpu::CompositeAlphaMode::PreMultiplied),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}
