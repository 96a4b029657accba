/// Integer pixel dimensions of a drawable surface.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn as_f32(self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for SurfaceSize {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

impl From<SurfaceSize> for winit::dpi::PhysicalSize<u32> {
    fn from(size: SurfaceSize) -> Self {
        winit::dpi::PhysicalSize::new(size.width, size.height)
    }
}
