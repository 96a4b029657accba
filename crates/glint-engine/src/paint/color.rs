/// Normalized RGBA color as consumed by shader uniforms.
///
/// Channels are straight (not premultiplied) and expected in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black; the per-frame clear color.
    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Creates a color from 8-bit channels, dividing each by 255.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_extremes() {
        assert_eq!(Color::from_u8(0, 0, 0, 255), Color::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(
            Color::from_u8(255, 255, 255, 255),
            Color::new(1.0, 1.0, 1.0, 1.0)
        );
    }

    #[test]
    fn transparent_is_all_zero() {
        assert_eq!(Color::transparent().to_array(), [0.0; 4]);
    }
}
