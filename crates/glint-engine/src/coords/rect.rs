use super::Vec2;

/// Vertex count of one rectangle drawn as two triangles.
pub const VERTICES_PER_RECT: u32 = 6;

/// Axis-aligned rectangle in surface pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    /// Flattened `(x, y)` pairs of the two triangles covering the rectangle.
    ///
    /// Order: (x0,y0) (x1,y0) (x0,y1), then (x0,y1) (x1,y0) (x1,y1).
    pub fn triangle_vertices(self) -> [f32; 2 * VERTICES_PER_RECT as usize] {
        let (x0, y0) = (self.origin.x, self.origin.y);
        let Vec2 { x: x1, y: y1 } = self.max();
        [
            x0, y0, x1, y0, x0, y1, //
            x0, y1, x1, y0, x1, y1,
        ]
    }
}
